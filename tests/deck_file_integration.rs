use pitchdeck::config::{deck_file::DeckFile, DeckConfig};
use pitchdeck::deck::{self, NavCommand, Presentation, SystemClock};
use pitchdeck::models::{ContentBlock, Section};
use pitchdeck::DeckError;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

const DECK: &str = r#"
version = 1
title = "Q3 Newsletter Review"

[[sections]]
id = "intro"
title = "Introduction"
summary = "Where we stand"

[[sections.blocks]]
kind = "metric"
label = "Open rate"
value = "24%"

[[sections]]
id = "next"
title = "Next Steps"
"#;

#[test]
fn test_configured_deck_file_is_presented() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deck.toml");
    fs::write(&path, DECK).unwrap();

    let config = DeckConfig::default().with_deck_path(path);
    let store = deck::load_store(&config).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.title(), "Q3 Newsletter Review");

    let mut presentation = Presentation::new(store, Rc::new(SystemClock), false);
    assert_eq!(
        presentation.current_section().unwrap().blocks,
        vec![ContentBlock::metric("Open rate", "24%", "")]
    );

    presentation.apply(NavCommand::Next);
    assert_eq!(presentation.current_section().unwrap().title, "Next Steps");
    assert_eq!(presentation.percentage(), 100.0);
}

#[test]
fn test_builtin_deck_without_deck_path() {
    let store = deck::load_store(&DeckConfig::default()).unwrap();
    assert_eq!(store.len(), 13);
    assert_eq!(store.title(), pitchdeck::DEFAULT_DECK_TITLE);
}

#[test]
fn test_saved_deck_reloads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.toml");

    let deck = DeckFile::new(
        "Saved",
        vec![Section::new("only", "Only section")
            .with_block(ContentBlock::chart("Sends", &[("Mon", 10), ("Tue", 12)]))],
    );
    fs::write(&path, toml::to_string_pretty(&deck).unwrap()).unwrap();

    let loaded = DeckFile::load(&path).unwrap();
    assert_eq!(loaded.title, "Saved");
    assert_eq!(loaded.sections, deck.sections);
}

#[test]
fn test_empty_and_duplicate_decks_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");

    fs::write(&path, "version = 1\nsections = []\n").unwrap();
    let config = DeckConfig::default().with_deck_path(path.clone());
    assert!(matches!(deck::load_store(&config), Err(DeckError::ContentError(_))));

    let duplicate = r#"
version = 1

[[sections]]
id = "a"
title = "A"

[[sections]]
id = "a"
title = "Again"
"#;
    fs::write(&path, duplicate).unwrap();
    assert!(matches!(deck::load_store(&config), Err(DeckError::ContentError(_))));
}
