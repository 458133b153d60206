//! CLI module for the users API
//!
//! Provides subcommands:
//! - `serve`: HTTP server (default)
//! - `ping`: check that the configured database answers

pub mod ping;
pub mod serve;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Users API - CRUD over a single `users` table
#[derive(Parser)]
#[command(name = "users-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default mode)
    Serve,

    /// Connect to the database, run `SELECT 1` and exit
    Ping,
}

/// Read `.env`, load configuration and install the log subscriber
fn bootstrap() -> anyhow::Result<AppConfig> {
    let dotenv = dotenvy::dotenv();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to read .env file");
        }
    }

    Ok(config)
}
