//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name of the first player (X); skips the name prompt
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name of the second player (O); skips the name prompt
    #[arg(long)]
    pub player_o: Option<String>,

    /// Log file, overriding the config
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
