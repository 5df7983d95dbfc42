//! # Init Command
//!
//! Initializes a folio site in the current directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::{
    config::{Config, GlobalConfig, SiteConfig},
    storage,
};

/// Executes the init command.
pub fn execute() -> Result<()> {
    let config = Config::for_init()?;

    let config_path = SiteConfig::path(&config.site_root);
    if config_path.exists() {
        bail!("Site already initialized (found {})", config_path.display());
    }

    config.site.save_with_comments(&config.site_root)?;

    let dirs = [
        config.blog_path(),
        config.works_path(),
        config.reading_path(),
    ];
    for dir in &dirs {
        storage::ensure_dir(dir)?;
    }

    println!("{} Initialized folio site", "✓".green());
    println!("  {} {}", "Config:".dimmed(), config_path.display());
    for dir in &dirs {
        println!(
            "  {} {}",
            "Content:".dimmed(),
            config.relative_path(dir).display()
        );
    }

    if let Some(global_path) = GlobalConfig::create_default_if_missing()? {
        println!("  {} {}", "Global:".dimmed(), global_path.display());
    }

    Ok(())
}
