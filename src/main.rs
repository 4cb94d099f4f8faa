use pitchdeck::app::App;
use pitchdeck::config::DeckConfig;
use pitchdeck::error::user_friendly_message;
use pitchdeck::{deck, logging, Result};
use std::path::PathBuf;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "pitchdeck exited with an error");
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut config = DeckConfig::load()?;
    // Optional deck file argument overrides the configured one
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_deck_path(PathBuf::from(path));
        config.validate()?;
    }

    let log_path = logging::init(&config)?;
    info!(log = %log_path.display(), deck = ?config.deck_path, "starting pitchdeck");

    let store = deck::load_store(&config)?;
    let mut app = App::new(config.clone(), store)?;
    app.init()?;
    let outcome = app.run().await;
    app.restore()?;
    let summary = outcome?;

    if config.print_summary_on_exit {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
