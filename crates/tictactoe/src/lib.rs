//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine**: all game rules live in [`tictactoe_engine`]
//! - **TUI**: ratatui front end that collects names and renders snapshots
//! - **Config**: TOML defaults for player names and logging
//! - **CLI**: clap flags that override the config

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, LoggingConfig, PlayerDefaults};

// Crate-level exports - Tracing
pub use logging::init_tracing;

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, Direction, Match, NamePrompt, Screen, action_for, draw, move_cursor,
    resolve_name, run_tui,
};
