//! # Views Command
//!
//! Reads or increments a page view counter from the command line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{
    config::Config,
    views::{self, current_views, record_view},
};

/// What to do with the counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewsAction {
    /// Print the current count
    Get { slug: String },
    /// Record one view and print the new count
    Hit { slug: String },
}

/// Executes the views command.
pub fn execute(action: &ViewsAction) -> Result<()> {
    let config = Config::load()?;
    let store = views::open_store(&config)?;

    let count = match action {
        ViewsAction::Get { slug } => current_views(store.as_ref(), Some(slug.as_str()))?,
        ViewsAction::Hit { slug } => record_view(store.as_ref(), Some(slug.as_str()))?,
    };

    println!("{count}");
    Ok(())
}
