use anyhow::Context;
use clap::Parser;
use draughts_engine::search::Algorithm;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xfdraughts::core::{load_settings, load_settings_from, save_settings, GameSettings};
use xfdraughts::game::ai::{AIDifficulty, PlayerKind};
use xfdraughts::game::{Session, SessionOutcome};

/// International draughts in the terminal
#[derive(Parser, Debug)]
#[command(name = "xfdraughts", version, about)]
struct Cli {
    /// AI strength
    #[arg(long, value_enum)]
    difficulty: Option<AIDifficulty>,

    /// Search depth in plies, overrides --difficulty
    #[arg(long)]
    depth: Option<u32>,

    /// Search variant: minimax, alphabeta or negamax
    #[arg(long)]
    algorithm: Option<Algorithm>,

    /// Who plays White
    #[arg(long, value_enum)]
    white: Option<PlayerKind>,

    /// Who plays Black
    #[arg(long, value_enum)]
    black: Option<PlayerKind>,

    /// Adjourn the game after this many plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Seed for the AI's random fallback
    #[arg(long)]
    seed: Option<u64>,

    /// Read settings from this file instead of the config directory
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Store the resulting settings as the new defaults
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    /// Command-line flags on top of the stored settings
    fn apply(&self, mut settings: GameSettings) -> GameSettings {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if self.depth.is_some() {
            settings.depth = self.depth;
        }
        if let Some(algorithm) = self.algorithm {
            settings.algorithm = algorithm;
        }
        if let Some(white) = self.white {
            settings.white = white;
        }
        if let Some(black) = self.black {
            settings.black = black;
        }
        if let Some(max_plies) = self.max_plies {
            settings.max_plies = max_plies;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stored = match &cli.settings {
        Some(path) => load_settings_from(path),
        None => load_settings(),
    };
    let settings = cli.apply(stored);
    settings.validate().context("invalid settings")?;

    if cli.save_settings {
        save_settings(&settings).context("could not save settings")?;
    }

    info!(
        "[GAME] White: {} | Black: {} | AI depth {} ({})",
        settings.white,
        settings.black,
        settings.search_depth(),
        settings.algorithm
    );

    let mut session = Session::new(&settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match session.run(stdin.lock(), &mut stdout)? {
        SessionOutcome::Quit => info!("[GAME] Session ended by player"),
        outcome => info!("[GAME] Session finished: {:?}", outcome),
    }
    Ok(())
}
