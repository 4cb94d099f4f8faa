use pitchdeck::config::DeckConfig;
use pitchdeck::logging;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_log_lines_go_to_configured_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("logs").join("pitchdeck.log");
    let mut config = DeckConfig::default().with_log_file(log_file.clone());
    config.log_level = "debug".to_string();

    let path = logging::init(&config).unwrap();
    assert_eq!(path, log_file);

    tracing::info!(section = 3, "section changed");
    tracing::trace!("too detailed");

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("section changed"));
    assert!(content.contains("section=3"));
    assert!(!content.contains("too detailed"));

    // a second subscriber cannot be installed
    assert!(logging::init(&config).is_err());
}
