//! # UI Utilities
//!
//! Shared user interface utilities for interactive dialogs, list formatting,
//! and common UI patterns used across commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashMap, hash::Hash, io::IsTerminal, path::Path};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    constants::{UI_TAGS_TRUNCATE_LEN, UI_TITLE_TRUNCATE_LEN},
    content::Post,
    reading::{FilterState, ReadingItem},
    tui::{
        self,
        screens::{self, select_from_list_with_header, ReadingBrowser},
    },
};

// =============================================================================
// Aggregation Utilities
// =============================================================================

/// Counts occurrences by a single key extracted from each item.
///
/// For items that map to exactly one key (e.g., category).
pub fn count_by<T, K, F>(items: &[T], key_fn: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key_fn(item)).or_insert(0) += 1;
    }
    counts
}

/// Counts occurrences by multiple keys extracted from each item.
///
/// For items that map to multiple keys (e.g., tags).
pub fn count_by_many<T, K, I, F>(items: &[T], keys_fn: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
    F: Fn(&T) -> I,
{
    let mut counts = HashMap::new();
    for item in items {
        for key in keys_fn(item) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

// =============================================================================
// Interactive Mode Resolution
// =============================================================================

/// Common interactive mode flags used across commands.
///
/// Consolidates the `--interactive` / `--no-interactive` flag pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveArgs {
    /// Force interactive mode
    pub interactive: bool,
    /// Force non-interactive mode
    pub no_interactive: bool,
}

impl InteractiveArgs {
    /// Resolves interactive mode from flags and config.
    ///
    /// Priority: explicit `--interactive` > explicit `--no-interactive` > config default
    pub const fn resolve(&self, config_default: bool) -> bool {
        if self.interactive {
            true
        } else if self.no_interactive {
            false
        } else {
            config_default
        }
    }

    /// Checks if we should run interactive mode (combines flag resolution with terminal check).
    pub fn should_run(&self, config: &Config) -> bool {
        self.resolve(config.interactive()) && std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Interactive Selection
// =============================================================================

/// Opens the reading browser starting from `filters`.
///
/// Returns the picked item, or `None` if the user quit.
pub fn browse_readings<'a>(
    items: &'a [ReadingItem],
    filters: FilterState,
) -> Result<Option<&'a ReadingItem>> {
    tui::run(ReadingBrowser::new(items, filters))
}

/// Generic interactive selection dialog.
///
/// Returns the index of the selected option, or `None` if cancelled.
pub fn select_from_list<T: ToString>(prompt: &str, options: &[T]) -> Result<Option<usize>> {
    screens::select_from_list(prompt, options)
}

/// Interactive selection for posts. Returns the picked index.
pub fn select_post(prompt: &str, posts: &[Post]) -> Result<Option<usize>> {
    let header = format!("{:<10}  {:<48}  {:<16}  {}", "DATE", "TITLE", "CATEGORY", "TAGS");
    let options: Vec<String> = posts.iter().map(format_post_row).collect();
    select_from_list_with_header(prompt, &header, &options)
}

/// One-line post summary: date, title, category, tags.
pub fn format_post_row(post: &Post) -> String {
    let meta = &post.meta;
    let category = if meta.category.is_empty() {
        "-"
    } else {
        meta.category.as_str()
    };
    format!(
        "{:<10}  {:<48}  {:<16}  {}",
        meta.date.format("%Y-%m-%d"),
        truncate(&meta.title, UI_TITLE_TRUNCATE_LEN),
        category,
        truncate(&meta.tags.join(", "), UI_TAGS_TRUNCATE_LEN),
    )
}

/// One-line reading summary: date, status, type, title, source, tags.
pub fn format_reading_row(item: &ReadingItem) -> String {
    let meta = &item.meta;
    format!(
        "{:<10}  {:<8}  {:<7}  {:<48}  {:<16}  {}",
        meta.date.format("%Y-%m-%d"),
        meta.status.as_str(),
        meta.kind.as_str(),
        truncate(&meta.title, UI_TITLE_TRUNCATE_LEN),
        meta.source.as_deref().unwrap_or("-"),
        truncate(&meta.tags.join(", "), UI_TAGS_TRUNCATE_LEN),
    )
}

// =============================================================================
// Messages
// =============================================================================

/// Prints a success message with a content path.
///
/// Format: `✓ {verb}: {relative_path}`
pub fn print_success(verb: &str, config: &Config, path: &Path) {
    println!(
        "{} {}: {}",
        "✓".green(),
        verb,
        config.relative_path(path).display()
    );
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates to `max` characters, ending with an ellipsis when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}
