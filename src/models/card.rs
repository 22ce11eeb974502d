//! Card records and ordering by a selected sort order.

use std::cmp::Ordering;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardsortError, Result};
use crate::sort::SortKey;

/// A single card in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub code: String,
    pub name: String,
    pub type_code: String,
    pub faction_code: String,
    pub pack_code: String,
    /// Position of the pack inside its cycle
    #[serde(default)]
    pub pack_position: u32,
    #[serde(default)]
    pub cycle_position: u32,
    /// Resource cost; None for cards without a cost
    #[serde(default)]
    pub cost: Option<i32>,
    /// Experience level; None for level 0 cards
    #[serde(default)]
    pub xp: Option<u32>,
    /// Encounter set code for scenario cards
    #[serde(default)]
    pub encounter_code: Option<String>,
    /// Card number within its pack
    #[serde(default)]
    pub position: u32,
}

impl Card {
    pub fn is_encounter_card(&self) -> bool {
        self.encounter_code.is_some()
    }

    fn level(&self) -> u32 {
        self.xp.unwrap_or(0)
    }
}

/// Whether encounter-set sorting makes sense for this collection.
pub fn has_encounter_cards(cards: &[Card]) -> bool {
    cards.iter().any(Card::is_encounter_card)
}

/// `None` sorts after every `Some`.
fn none_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_pack(a: &Card, b: &Card) -> Ordering {
    (a.cycle_position, a.pack_position, &a.pack_code).cmp(&(b.cycle_position, b.pack_position, &b.pack_code))
}

/// Compare two cards on a single key. Compound keys expand to their parts.
pub fn compare_by_key(a: &Card, b: &Card, key: SortKey) -> Ordering {
    match key {
        SortKey::Type => a.type_code.cmp(&b.type_code),
        SortKey::Faction => a.faction_code.cmp(&b.faction_code),
        SortKey::FactionPack => a
            .faction_code
            .cmp(&b.faction_code)
            .then_with(|| compare_pack(a, b)),
        SortKey::FactionXp => a
            .faction_code
            .cmp(&b.faction_code)
            .then_with(|| a.level().cmp(&b.level()))
            .then_with(|| a.type_code.cmp(&b.type_code)),
        SortKey::FactionXpTypeCost => a
            .faction_code
            .cmp(&b.faction_code)
            .then_with(|| a.level().cmp(&b.level()))
            .then_with(|| a.type_code.cmp(&b.type_code))
            .then_with(|| none_last(&a.cost, &b.cost)),
        SortKey::Cost => none_last(&a.cost, &b.cost),
        SortKey::Pack => compare_pack(a, b),
        SortKey::Cycle => a.cycle_position.cmp(&b.cycle_position),
        SortKey::Title => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::EncounterSet => none_last(&a.encounter_code, &b.encounter_code),
        SortKey::Xp => a.level().cmp(&b.level()),
        SortKey::CardId => a.code.cmp(&b.code),
    }
}

/// Compare two cards by an ordered list of keys, highest priority first.
///
/// Cards equal on every key fall back to card code so the order is total.
pub fn compare_cards(a: &Card, b: &Card, order: &[SortKey]) -> Ordering {
    order
        .iter()
        .map(|key| compare_by_key(a, b, *key))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.code.cmp(&b.code))
}

/// Sort a collection in place by the given order.
pub fn sort_cards(cards: &mut [Card], order: &[SortKey]) {
    cards.sort_by(|a, b| compare_cards(a, b, order));
}

/// Load cards from a JSON array file.
pub fn load_cards(path: &Path) -> Result<Vec<Card>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CardsortError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cards: Vec<Card> = serde_json::from_str(&contents)?;
    tracing::info!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

#[allow(clippy::too_many_arguments)]
fn card(
    code: &str,
    name: &str,
    type_code: &str,
    faction_code: &str,
    pack_code: &str,
    cycle_position: u32,
    cost: Option<i32>,
    xp: Option<u32>,
    encounter_code: Option<&str>,
    position: u32,
) -> Card {
    Card {
        code: code.to_string(),
        name: name.to_string(),
        type_code: type_code.to_string(),
        faction_code: faction_code.to_string(),
        pack_code: pack_code.to_string(),
        pack_position: 1,
        cycle_position,
        cost,
        xp,
        encounter_code: encounter_code.map(str::to_string),
        position,
    }
}

/// Built-in collection used when no card file is given.
pub fn sample_cards() -> Vec<Card> {
    vec![
        card("01016", ".45 Automatic", "asset", "guardian", "core", 1, Some(4), None, None, 16),
        card("01017", "Physical Training", "asset", "guardian", "core", 1, Some(2), None, None, 17),
        card("01020", "Machete", "asset", "guardian", "core", 1, Some(3), None, None, 20),
        card("01021", "Guard Dog", "asset", "guardian", "core", 1, Some(3), None, None, 21),
        card("01024", "Dodge", "event", "guardian", "core", 1, Some(1), None, None, 24),
        card("01030", "Magnifying Glass", "asset", "seeker", "core", 1, Some(1), None, None, 30),
        card("01039", "Deduction", "skill", "seeker", "core", 1, None, None, None, 39),
        card("01060", "Shrivelling", "asset", "mystic", "core", 1, Some(3), None, None, 60),
        card("01065", "Wither", "asset", "mystic", "core", 1, Some(2), Some(1), None, 65),
        card("01080", "Lucky!", "event", "survivor", "core", 1, Some(1), None, None, 80),
        card("01087", "Flashlight", "asset", "neutral", "core", 1, Some(2), None, None, 87),
        card("01088", "Emergency Cache", "event", "neutral", "core", 1, Some(0), None, None, 88),
        card("02185", "Rabbit's Foot", "asset", "survivor", "dwl", 2, Some(1), Some(3), None, 185),
        card("01160", "Ghoul Minion", "enemy", "mythos", "core", 1, None, None, Some("ghouls"), 160),
        card("01161", "Ravenous Ghoul", "enemy", "mythos", "core", 1, None, None, Some("ghouls"), 161),
        card("01163", "Rotting Remains", "treachery", "mythos", "core", 1, None, None, Some("striking_fear"), 163),
    ]
}
