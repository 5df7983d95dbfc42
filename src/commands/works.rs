//! # Works Command
//!
//! Lists portfolio works, newest first.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::Config, constants::UI_TITLE_TRUNCATE_LEN, storage, ui};

/// Executes the works command.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let works = storage::all_works(&config)?;

    if works.is_empty() {
        println!("{}", "No works found.".dimmed());
        return Ok(());
    }

    for work in &works {
        let meta = &work.meta;
        println!(
            "{}  {:<48}  {}",
            meta.date.format("%Y-%m-%d").dimmed(),
            ui::truncate(&meta.title, UI_TITLE_TRUNCATE_LEN),
            meta.tags.join(", ").dimmed()
        );
        for url in [&meta.link, &meta.github] {
            if !url.is_empty() {
                println!("            {}", url.cyan());
            }
        }
    }

    Ok(())
}
