pub mod card;

pub use card::{
    compare_by_key, compare_cards, has_encounter_cards, load_cards, sample_cards, sort_cards, Card,
};
