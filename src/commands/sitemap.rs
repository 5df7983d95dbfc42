//! # Sitemap Command
//!
//! Renders sitemap XML for the site pages and every blog post.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::{config::Config, sitemap, storage, ui};

/// Arguments for the sitemap command
#[derive(Debug, Clone, Default)]
pub struct SitemapArgs {
    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,
}

/// Executes the sitemap command.
pub fn execute(args: &SitemapArgs) -> Result<()> {
    let config = Config::load()?;
    let posts = storage::all_posts(&config)?;

    let entries = sitemap::build_entries(&config.site_url(), &posts, Utc::now());
    let xml = sitemap::render(&entries)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                storage::ensure_dir(parent)?;
            }
            fs::write(path, &xml)
                .with_context(|| format!("Failed to write sitemap: {}", path.display()))?;
            ui::print_success(
                &format!("Wrote {} URLs", entries.len()),
                &config,
                path,
            );
        }
        None => print!("{xml}"),
    }

    Ok(())
}
