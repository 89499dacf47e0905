use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::{GameState, Player};
use connect_four::ui::{run_game, LineSource, TextView};

/// Play Connect Four in the terminal, two players taking turns at one keyboard.
#[derive(Parser)]
#[command(name = "connect-four", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the first player's marker
    #[arg(long)]
    first_marker: Option<char>,

    /// Override the second player's marker
    #[arg(long)]
    second_marker: Option<char>,

    /// Keep previous output instead of clearing the screen
    #[arg(long)]
    no_clear: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .with_context(|| format!("invalid log level '{}'", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(marker) = cli.first_marker {
        config.players.first_marker = marker;
    }
    if let Some(marker) = cli.second_marker {
        config.players.second_marker = marker;
    }
    if cli.no_clear {
        config.display.clear_screen = false;
    }
    config.validate().context("invalid settings")?;

    let first = Player::new(config.players.first_marker);
    let second = Player::new(config.players.second_marker);
    let mut state = GameState::new(&first, &second)?;

    let mut source = LineSource::new(io::stdin().lock());
    let mut view = TextView::new(io::stdout().lock())
        .clear_screen(config.display.clear_screen)
        .show_column_numbers(config.display.show_column_numbers);

    run_game(&mut state, &mut source, &mut view).context("game aborted")?;
    Ok(())
}
