//! cardsort - browse a card collection and choose its sort order
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod models;
pub mod sort;
pub mod terminal;
pub mod ui;
