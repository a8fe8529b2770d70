//! # Planner
//!
//! Headless host for the content planner. Reads one JSON intent per stdin
//! line and answers each with the resulting view snapshot on stdout.

use std::io;

use planner_core::Planner;

mod config;
mod handlers;
mod session;
mod state;
mod telemetry;

use config::AppConfig;
use telemetry::TelemetryConfig;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env()?;
    tracing::info!(store = ?config.store, "Starting planner");

    let storage = state::build_storage(&config)?;
    let mut planner = Planner::load(storage);

    session::serve(&mut planner, io::stdin().lock(), io::stdout().lock())?;

    tracing::info!("Input closed, shutting down");
    Ok(())
}
