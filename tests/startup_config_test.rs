//! Startup path: CLI flags and environment into a running App.

use std::io::Write;

use cardsort::app::App;
use cardsort::cli::{parse_args, CliCommand};
use cardsort::config::{AppConfig, ENV_CARDS, ENV_CATALOG, ENV_LOG_FILE};
use cardsort::error::CardsortError;
use cardsort::i18n::Translator;
use cardsort::sort::SortKey;
use serial_test::serial;
use tempfile::NamedTempFile;

const CARDS_JSON: &str = r#"[
    {"code": "01001", "name": "Zoey's Cross", "type_code": "asset", "faction_code": "guardian", "pack_code": "core", "cost": 1},
    {"code": "01002", "name": "Ancient Evils", "type_code": "treachery", "faction_code": "mythos", "pack_code": "core", "encounter_code": "agents"}
]"#;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_config(args: &[&str]) -> AppConfig {
    let argv = std::iter::once("cardsort".to_string()).chain(args.iter().map(|s| s.to_string()));
    match parse_args(argv).unwrap() {
        CliCommand::Run(options) => options.apply(AppConfig::default()),
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
fn test_cards_file_and_sort_flag() {
    let cards = temp_file(CARDS_JSON);
    let config = run_config(&[
        "--cards",
        cards.path().to_str().unwrap(),
        "--sort",
        "title",
        "--no-log",
    ]);
    assert_eq!(config.log_file, None);

    let app = App::from_config(&config).unwrap();
    assert_eq!(app.sort_order, vec![SortKey::Title]);
    assert_eq!(app.cards.len(), 2);
    assert_eq!(app.cards[0].name, "Ancient Evils");
    assert!(app.has_encounter_cards());
}

#[test]
fn test_no_encounter_flag_overrides_cards() {
    let cards = temp_file(CARDS_JSON);
    let config = run_config(&["--cards", cards.path().to_str().unwrap(), "--no-encounter"]);
    let app = App::from_config(&config).unwrap();

    assert!(!app.has_encounter_cards());
    assert!(!app.sort_dialog.has_encounter_cards());
}

#[test]
fn test_catalog_file_translates_labels() {
    let catalog = temp_file(r#"{"locale": "de", "messages": {"Cost": "Kosten"}}"#);
    let config = run_config(&["--catalog", catalog.path().to_str().unwrap()]);
    let app = App::from_config(&config).unwrap();

    assert_eq!(app.translator.translate("Cost"), "Kosten");
    assert_eq!(app.translator.translate("Type"), "Type");
}

#[test]
fn test_missing_cards_file_is_io_error() {
    let config = AppConfig::default().with_cards_path("/nonexistent/cards.json");
    let err = App::from_config(&config).err().unwrap();
    assert!(matches!(err, CardsortError::Io { .. }));
    assert!(err.user_message().contains("/nonexistent/cards.json"));
}

#[test]
fn test_malformed_cards_file_is_json_error() {
    let cards = temp_file("{ not json");
    let config = AppConfig::default().with_cards_path(cards.path());
    let err = App::from_config(&config).err().unwrap();
    assert!(matches!(err, CardsortError::Json(_)));
}

#[test]
fn test_unknown_sort_key_lists_valid_keys() {
    let argv = ["cardsort", "--sort", "rarity"].iter().map(|s| s.to_string());
    let err = parse_args(argv).unwrap_err();
    let message = err.user_message();
    assert!(message.contains("rarity"));
    assert!(message.contains("encounter_set"));
}

#[test]
#[serial]
fn test_env_then_flags() {
    let cards = temp_file(CARDS_JSON);
    std::env::set_var(ENV_CARDS, cards.path());
    std::env::set_var(ENV_LOG_FILE, "off");
    std::env::remove_var(ENV_CATALOG);

    let config = match parse_args(
        ["cardsort", "--sort=cost"].iter().map(|s| s.to_string()),
    )
    .unwrap()
    {
        CliCommand::Run(options) => options.apply(AppConfig::from_env()),
        other => panic!("expected Run, got {:?}", other),
    };

    std::env::remove_var(ENV_CARDS);
    std::env::remove_var(ENV_LOG_FILE);

    assert_eq!(config.cards_path.as_deref(), Some(cards.path()));
    assert_eq!(config.log_file, None);
    assert_eq!(config.sort_order, vec![SortKey::Cost]);
}
