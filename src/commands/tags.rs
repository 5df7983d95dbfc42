//! # Tags and Categories Commands
//!
//! Lists the tags and categories used across blog posts.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    content::Post,
    storage,
    ui::{self, InteractiveArgs},
};

use super::posts::{self, PostsArgs};

/// Arguments for the tags and categories commands
#[derive(Debug, Clone, Copy, Default)]
pub struct TagsArgs {
    /// Print the number of posts next to each value
    pub counts: bool,
    pub interactive: InteractiveArgs,
}

/// Executes the tags command.
pub fn execute_tags(args: &TagsArgs) -> Result<()> {
    let config = Config::load()?;
    let tags = storage::all_tags(&config)?;

    if tags.is_empty() {
        println!("{}", "No tags found.".dimmed());
        return Ok(());
    }

    let posts = storage::all_posts(&config)?;
    let counts = ui::count_by_many(&posts, |post: &Post| post.meta.tags.clone());
    let options = labelled(&tags, |tag| counts.get(tag).copied().unwrap_or(0));

    if !args.interactive.should_run(&config) {
        print_values(&tags, &options, args.counts);
        return Ok(());
    }

    let Some(selection) = ui::select_from_list("Select a tag to list its posts", &options)? else {
        return Ok(());
    };
    posts::execute(&PostsArgs {
        tag: Some(tags[selection].clone()),
        category: None,
        interactive: args.interactive,
    })
}

/// Executes the categories command.
pub fn execute_categories(args: &TagsArgs) -> Result<()> {
    let config = Config::load()?;
    let categories = storage::all_categories(&config)?;

    if categories.is_empty() {
        println!("{}", "No categories found.".dimmed());
        return Ok(());
    }

    let posts = storage::all_posts(&config)?;
    let counts = ui::count_by(&posts, |post: &Post| post.meta.category.clone());
    let options = labelled(&categories, |c| counts.get(c).copied().unwrap_or(0));

    if !args.interactive.should_run(&config) {
        print_values(&categories, &options, args.counts);
        return Ok(());
    }

    let Some(selection) =
        ui::select_from_list("Select a category to list its posts", &options)?
    else {
        return Ok(());
    };
    posts::execute(&PostsArgs {
        tag: None,
        category: Some(categories[selection].clone()),
        interactive: args.interactive,
    })
}

/// `value (count)` labels, in the order of `values`.
fn labelled(values: &[String], count: impl Fn(&String) -> usize) -> Vec<String> {
    values
        .iter()
        .map(|value| format!("{value} ({})", count(value)))
        .collect()
}

fn print_values(values: &[String], labelled: &[String], with_counts: bool) {
    let lines = if with_counts { labelled } else { values };
    for line in lines {
        println!("{line}");
    }
}
