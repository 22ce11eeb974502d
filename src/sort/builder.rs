//! Display list derivation and the commit rule.
//!
//! The display list is always rebuilt from scratch from the selected order and
//! the encounter flag. Nothing patches it in place, so the chosen/available
//! partition cannot drift.

use super::item::DisplayItem;
use super::key::{base_catalog, SortKey};
use crate::i18n::Translator;

/// Template for the header separating chosen keys from available ones.
pub const AVAILABLE_HEADER: &str = "Other";

/// Keys the user may pick from, given the current selection.
///
/// Precondition: `selected` has no duplicates. This is not checked.
pub fn candidate_pool(selected: &[SortKey], has_encounter_cards: bool) -> Vec<SortKey> {
    let mut pool = base_catalog().to_vec();
    let wants_encounter = has_encounter_cards || selected.contains(&SortKey::EncounterSet);
    if wants_encounter && !pool.contains(&SortKey::EncounterSet) {
        pool.push(SortKey::EncounterSet);
    }
    pool
}

/// Build the ordered dialog list: `chosen ++ [header]? ++ available`.
///
/// Selected keys are emitted in the caller's order even when they are no
/// longer part of the candidate pool. The header is present only when at
/// least one key is still available.
pub fn build_display_list(
    selected: &[SortKey],
    has_encounter_cards: bool,
    translator: &dyn Translator,
) -> Vec<DisplayItem> {
    let available: Vec<SortKey> = candidate_pool(selected, has_encounter_cards)
        .into_iter()
        .filter(|key| !selected.contains(key))
        .collect();

    let mut items: Vec<DisplayItem> = Vec::with_capacity(selected.len() + available.len() + 1);
    items.extend(selected.iter().copied().map(DisplayItem::Sort));
    if !available.is_empty() {
        items.push(DisplayItem::Header(translator.translate(AVAILABLE_HEADER)));
    }
    items.extend(available.into_iter().map(DisplayItem::Sort));
    items
}

/// Index of the header in a display list, if any.
pub fn header_index(items: &[DisplayItem]) -> Option<usize> {
    items.iter().position(DisplayItem::is_header)
}

/// Derive the new selected order from a reordered list.
///
/// Everything before the first header is chosen. A list without a header is
/// treated as entirely chosen.
pub fn commit_order(items: &[DisplayItem]) -> Vec<SortKey> {
    items
        .iter()
        .take_while(|item| !item.is_header())
        .filter_map(DisplayItem::sort_key)
        .collect()
}

/// Whether the row at `index` closes its section (no divider below it).
pub fn is_last_in_section(items: &[DisplayItem], index: usize) -> bool {
    index + 1 >= items.len() || items[index + 1].is_header()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{IdentityTranslator, MessageCatalog};

    fn sorts(keys: &[SortKey]) -> Vec<DisplayItem> {
        keys.iter().copied().map(DisplayItem::Sort).collect()
    }

    fn header() -> DisplayItem {
        DisplayItem::Header("Other".to_string())
    }

    #[test]
    fn test_pool_without_encounter() {
        assert_eq!(candidate_pool(&[], false), base_catalog().to_vec());
    }

    #[test]
    fn test_pool_appends_encounter_when_flagged() {
        let pool = candidate_pool(&[], true);
        assert_eq!(pool.last(), Some(&SortKey::EncounterSet));
        assert_eq!(pool.len(), base_catalog().len() + 1);
    }

    #[test]
    fn test_pool_appends_encounter_when_already_selected() {
        let pool = candidate_pool(&[SortKey::EncounterSet], false);
        assert_eq!(pool.iter().filter(|k| **k == SortKey::EncounterSet).count(), 1);
    }

    #[test]
    fn test_empty_selection_puts_header_first() {
        let items = build_display_list(&[], false, &IdentityTranslator);
        assert_eq!(items[0], header());
        assert_eq!(items.len(), base_catalog().len() + 1);
    }

    #[test]
    fn test_selected_key_outside_pool_is_kept() {
        let items = build_display_list(&[SortKey::CardId], false, &IdentityTranslator);
        assert_eq!(items[0], DisplayItem::Sort(SortKey::CardId));
        assert_eq!(items[1], header());
    }

    #[test]
    fn test_selected_encounter_set_stays_chosen_without_flag() {
        let items = build_display_list(&[SortKey::EncounterSet], false, &IdentityTranslator);
        let expected_tail = sorts(base_catalog());
        assert_eq!(items[0], DisplayItem::Sort(SortKey::EncounterSet));
        assert_eq!(items[1], header());
        assert_eq!(&items[2..], expected_tail.as_slice());
    }

    #[test]
    fn test_header_label_is_translated() {
        let catalog = MessageCatalog::new().with_message("Other", "Andere");
        let items = build_display_list(&[SortKey::Type], false, &catalog);
        assert_eq!(items[1], DisplayItem::Header("Andere".to_string()));
    }

    #[test]
    fn test_commit_order_takes_prefix() {
        let mut items = sorts(&[SortKey::Title, SortKey::Cost]);
        items.push(header());
        items.extend(sorts(&[SortKey::Pack]));

        assert_eq!(commit_order(&items), vec![SortKey::Title, SortKey::Cost]);
    }

    #[test]
    fn test_commit_order_header_first_is_empty() {
        let mut items = vec![header()];
        items.extend(sorts(&[SortKey::Pack, SortKey::Cycle]));
        assert!(commit_order(&items).is_empty());
    }

    #[test]
    fn test_commit_order_without_header_takes_everything() {
        let items = sorts(&[SortKey::Pack, SortKey::Cycle]);
        assert_eq!(commit_order(&items), vec![SortKey::Pack, SortKey::Cycle]);
    }

    #[test]
    fn test_header_index() {
        let items = build_display_list(&[SortKey::Cost, SortKey::Type], false, &IdentityTranslator);
        assert_eq!(header_index(&items), Some(2));
        assert_eq!(header_index(&sorts(base_catalog())), None);
    }

    #[test]
    fn test_is_last_in_section() {
        let items = build_display_list(&[SortKey::Cost, SortKey::Type], false, &IdentityTranslator);
        assert!(!is_last_in_section(&items, 0));
        assert!(is_last_in_section(&items, 1));
        assert!(!is_last_in_section(&items, 3));
        assert!(is_last_in_section(&items, items.len() - 1));
    }
}
