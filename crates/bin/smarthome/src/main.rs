//! # smarthome — inventory showcase
//!
//! Composition root that wires configuration, logging and the application
//! layer together, then prints the showcase.
//!
//! ## Responsibilities
//! - Load configuration (`smarthome.toml`, env vars)
//! - Install the `tracing` subscriber on stderr, keeping stdout for output
//! - Build the inventory context with the configured validation policy
//! - Run the showcase and print it as text or JSON
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod config;

use std::io::Write;

use anyhow::Context;
use smarthome_app::inventory::Inventory;
use smarthome_app::showcase;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let inventory = Inventory::new(config.validation_policy());
    tracing::info!(
        policy = ?inventory.policy(),
        format = ?config.output.format,
        "running showcase"
    );
    let report = showcase::run(&inventory).context("showcase failed")?;

    let mut out = std::io::stdout().lock();
    match config.output.format {
        OutputFormat::Text => {
            for line in &report.lines {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
