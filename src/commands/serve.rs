//! # Serve Command
//!
//! Runs the page view HTTP API.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{config::Config, server, views};

/// Arguments for the serve command
#[derive(Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen address; defaults to `views.bind` in .folio
    pub bind: Option<String>,
}

/// Executes the serve command. Blocks until the process is stopped.
pub fn execute(args: &ServeArgs) -> Result<()> {
    let config = Config::load()?;
    let store = views::open_store(&config)?;
    let bind = args
        .bind
        .clone()
        .unwrap_or_else(|| config.site.views.bind.clone());

    eprintln!(
        "{} Serving /api/views on http://{bind}",
        "✓".green()
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server::run_server(&bind, store))
}
