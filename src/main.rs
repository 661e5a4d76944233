#![allow(non_snake_case)]

mod app;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use cardflip_core::logging::LoggingBuilder;
use cardflip_core::{ControllerConfig, Deck, Glossary};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Board settings resolved from the command line
#[derive(Debug, Clone)]
pub struct BoardSettings {
    pub deck: Deck,
    pub glossary: Glossary,
    pub controller: ControllerConfig,
    /// Reshuffle the deck at the start of every round
    pub shuffle: bool,
}

static SETTINGS: OnceLock<BoardSettings> = OnceLock::new();

/// Get the board settings (set from command line or default)
pub fn board_settings() -> BoardSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| BoardSettings {
        deck: Deck::sample(),
        glossary: Glossary::sample(),
        controller: ControllerConfig::default(),
        shuffle: false,
    })
}

/// Card Flip - quiz board
#[derive(Parser, Debug)]
#[command(name = "cardflip-desktop")]
#[command(about = "Card Flip - turn over a card, answer its question")]
struct Args {
    /// Maximum number of cards that may be turned over (unlimited if omitted)
    #[arg(short, long)]
    max_flips: Option<usize>,

    /// JSON deck to play instead of the built-in one
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// JSON glossary to study before a round instead of the built-in one
    #[arg(short, long)]
    glossary: Option<PathBuf>,

    /// Shuffle the deck at the start of every round
    #[arg(short, long)]
    shuffle: bool,

    /// Tracing filter directive (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

fn load_deck(path: Option<&PathBuf>) -> anyhow::Result<Deck> {
    let Some(path) = path else {
        return Ok(Deck::sample());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading deck {}", path.display()))?;
    Deck::from_json(&json).with_context(|| format!("parsing deck {}", path.display()))
}

fn load_glossary(path: Option<&PathBuf>) -> anyhow::Result<Glossary> {
    let Some(path) = path else {
        return Ok(Glossary::sample());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading glossary {}", path.display()))?;
    Glossary::from_json(&json).with_context(|| format!("parsing glossary {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = &args.log_filter {
        logging = logging.with_filter(filter);
    }
    logging
        .init()
        .map_err(|e| anyhow::anyhow!("installing logger: {}", e))?;

    let deck = load_deck(args.deck.as_ref())?;
    let glossary = load_glossary(args.glossary.as_ref())?;

    let controller = ControllerConfig {
        max_flips: args.max_flips,
    };
    tracing::info!(cards = deck.len(), max_flips = ?controller.max_flips, "starting board");
    let _ = SETTINGS.set(BoardSettings {
        deck,
        glossary,
        controller,
        shuffle: args.shuffle,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Card Flip")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
