//! The closed set of sort keys and their display labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SortError;
use crate::i18n::Translator;

/// An attribute a card list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Type,
    Faction,
    FactionPack,
    FactionXp,
    FactionXpTypeCost,
    Cost,
    Pack,
    Cycle,
    Title,
    EncounterSet,
    Xp,
    CardId,
}

/// Keys offered in the sort dialog by default, in display order.
///
/// [`SortKey::EncounterSet`] is not part of the base catalog; the list builder
/// appends it when the collection has encounter cards or the user already
/// chose it.
const BASE_CATALOG: [SortKey; 7] = [
    SortKey::Type,
    SortKey::Faction,
    SortKey::Cost,
    SortKey::Cycle,
    SortKey::Pack,
    SortKey::Title,
    SortKey::Xp,
];

/// The base catalog of selectable keys.
pub fn base_catalog() -> &'static [SortKey] {
    &BASE_CATALOG
}

impl SortKey {
    /// Every variant, in declaration order.
    pub const ALL: [SortKey; 12] = [
        SortKey::Type,
        SortKey::Faction,
        SortKey::FactionPack,
        SortKey::FactionXp,
        SortKey::FactionXpTypeCost,
        SortKey::Cost,
        SortKey::Pack,
        SortKey::Cycle,
        SortKey::Title,
        SortKey::EncounterSet,
        SortKey::Xp,
        SortKey::CardId,
    ];

    /// Stable identifier, used as list identity and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            SortKey::Type => "type",
            SortKey::Faction => "faction",
            SortKey::FactionPack => "faction_pack",
            SortKey::FactionXp => "faction_xp",
            SortKey::FactionXpTypeCost => "faction_xp_type_cost",
            SortKey::Cost => "cost",
            SortKey::Pack => "pack",
            SortKey::Cycle => "cycle",
            SortKey::Title => "title",
            SortKey::EncounterSet => "encounter_set",
            SortKey::Xp => "xp",
            SortKey::CardId => "card_id",
        }
    }

    /// Inverse of [`SortKey::id`].
    pub fn from_id(id: &str) -> Option<SortKey> {
        SortKey::ALL.into_iter().find(|key| key.id() == id)
    }

    /// English label template, before translation.
    pub fn label_template(self) -> &'static str {
        match self {
            SortKey::Type => "Type",
            SortKey::Faction => "Class",
            SortKey::FactionPack => "Faction, Pack",
            SortKey::FactionXp => "Faction, Level, Type",
            SortKey::FactionXpTypeCost => "Faction, Level, Type, Cost",
            SortKey::Cost => "Cost",
            SortKey::Pack => "Pack",
            SortKey::Cycle => "Cycle",
            SortKey::Title => "Title",
            SortKey::EncounterSet => "Encounter Set",
            SortKey::Xp => "Level",
            SortKey::CardId => "Card number",
        }
    }
}

/// Translated display label for a key.
pub fn label(key: SortKey, translator: &dyn Translator) -> String {
    translator.translate(key.label_template())
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        SortKey::from_id(&normalized).ok_or_else(|| SortError::UnknownKey(s.to_string()))
    }
}
