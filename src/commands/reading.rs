//! # Reading Command
//!
//! Lists the reading list with filters, optionally grouped by year, or opens
//! the interactive browser.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    editor,
    reading::{filter_readings, group_by_year, FilterState, ReadingItem, ReadingStatus, ReadingType},
    storage,
    ui::{self, InteractiveArgs},
};

/// Arguments for the reading command
#[derive(Debug, Clone, Default)]
pub struct ReadingArgs {
    pub query: Option<String>,
    pub tags: Vec<String>,
    pub statuses: Vec<ReadingStatus>,
    pub types: Vec<ReadingType>,
    pub sources: Vec<String>,
    pub year: Option<i32>,
    pub group: bool,
    pub interactive: InteractiveArgs,
}

impl ReadingArgs {
    /// Filter selection described by the flags.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.query.clone().unwrap_or_default(),
            tags: self.tags.clone(),
            statuses: self.statuses.clone(),
            types: self.types.clone(),
            sources: self.sources.clone(),
            year: self.year,
        }
    }
}

/// Executes the reading command.
pub fn execute(args: &ReadingArgs) -> Result<()> {
    let config = Config::load()?;
    let items = storage::all_readings(&config)?;
    let state = args.filter_state();

    if args.interactive.should_run(&config) && !items.is_empty() {
        let Some(item) = ui::browse_readings(&items, state)? else {
            return Ok(());
        };
        return open_item(item, &config);
    }

    let filtered = filter_readings(&items, &state.filters());
    if filtered.is_empty() {
        println!("{}", "No reading items found.".dimmed());
        return Ok(());
    }

    if args.group {
        for (year, group) in group_by_year(filtered.iter().copied()) {
            println!("{}", year.to_string().bold());
            for item in group {
                println!("  {}", ui::format_reading_row(item));
            }
        }
    } else {
        for item in &filtered {
            println!("{}", ui::format_reading_row(item));
        }
    }

    println!(
        "{}",
        FilterState::summary(filtered.len(), items.len()).dimmed()
    );
    Ok(())
}

fn open_item(item: &ReadingItem, config: &Config) -> Result<()> {
    if !item.meta.link.is_empty() {
        println!("{}", item.meta.link);
    }
    let path = item.path.as_ref().context("Item has no path")?;
    println!("{}", config.relative_path(path).display());
    editor::open(path, config).context("Failed to open editor")
}
