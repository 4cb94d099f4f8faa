use pitchdeck::config::DeckConfig;
use pitchdeck::error::user_friendly_message;
use pitchdeck::DeckError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_user_friendly_messages() {
    let msg = user_friendly_message(&DeckError::IoError(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "x",
    )));
    assert!(msg.contains("Permission denied"));

    let msg = user_friendly_message(&DeckError::ContentError("Duplicate section id: a".into()));
    assert!(msg.contains("Duplicate section id: a"));
    assert!(msg.contains("deck file"));

    let msg = user_friendly_message(&DeckError::TuiError("no tty".into()));
    assert!(msg.contains("interactive terminal"));

    // other I/O errors fall back to the Display text
    let msg = user_friendly_message(&DeckError::IoError(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "gone",
    )));
    assert_eq!(msg, "I/O error: gone");
}

#[test]
fn test_invalid_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pitchdeck.toml");

    fs::write(&path, "swipe_threshold_px = -5.0\n").unwrap();
    let err = DeckConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, DeckError::ConfigError(_)));
    assert!(err.to_string().contains("Swipe threshold"));

    fs::write(&path, "log_level = \"loud\"\n").unwrap();
    let err = DeckConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Unknown log level"));

    fs::write(&path, "tick_rate_ms = \"fast\"\n").unwrap();
    assert!(matches!(
        DeckConfig::load_from(&path),
        Err(DeckError::ConfigError(_))
    ));
}

#[test]
fn test_missing_deck_file_fails_validation() {
    let config = DeckConfig::default().with_deck_path("/nonexistent/deck.toml".into());
    assert!(matches!(config.validate(), Err(DeckError::ConfigError(_))));
}
