//! Tic-tac-toe - two players, one terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe::{App, AppConfig, Cli, init_tracing, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(file) = cli.log_file {
        config = config.with_log_file(file);
    }
    init_tracing(config.logging())?;
    info!(config = %cli.config.display(), "Configuration loaded");

    let app = App::new(
        cli.player_x,
        cli.player_o,
        config.players().x(),
        config.players().o(),
    );
    run_tui(app)
}
