//! # Posts Commands
//!
//! Lists blog posts and shows a single post by slug.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    content::Post,
    editor, storage,
    ui::{self, InteractiveArgs},
};

/// Arguments for the posts command
#[derive(Debug, Clone, Default)]
pub struct PostsArgs {
    /// Only posts carrying this tag
    pub tag: Option<String>,
    /// Only posts in this category
    pub category: Option<String>,
    pub interactive: InteractiveArgs,
}

fn matches(post: &Post, args: &PostsArgs) -> bool {
    if let Some(tag) = &args.tag {
        if !post.meta.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    if let Some(category) = &args.category {
        if post.meta.category != *category {
            return false;
        }
    }
    true
}

/// Executes the posts command.
pub fn execute(args: &PostsArgs) -> Result<()> {
    let config = Config::load()?;
    let posts: Vec<Post> = storage::all_posts(&config)?
        .into_iter()
        .filter(|post| matches(post, args))
        .collect();

    if posts.is_empty() {
        println!("{}", "No posts found.".dimmed());
        return Ok(());
    }

    if !args.interactive.should_run(&config) {
        for post in &posts {
            println!("{}  {}", post.meta.slug, ui::format_post_row(post).dimmed());
        }
        return Ok(());
    }

    let Some(selection) = ui::select_post("Select a post to open", &posts)? else {
        return Ok(());
    };
    let path = posts[selection]
        .path
        .as_ref()
        .context("Post has no path")?;
    println!("{}", config.relative_path(path).display());
    editor::open(path, &config).context("Failed to open editor")
}

/// Prints a post's metadata and body.
pub fn show_post(slug: &str) -> Result<()> {
    let config = Config::load()?;
    let Some(post) = storage::post_by_slug(&config, slug)? else {
        bail!("Post not found: {slug}");
    };
    let meta = &post.meta;

    println!("{}", meta.title.bold());
    let mut details = vec![
        meta.date.format("%Y-%m-%d").to_string(),
        meta.reading_time.clone(),
    ];
    if !meta.category.is_empty() {
        details.push(meta.category.clone());
    }
    println!("{}", details.join(" · ").dimmed());
    if !meta.tags.is_empty() {
        let tags: Vec<String> = meta.tags.iter().map(|t| format!("#{t}")).collect();
        println!("{}", tags.join(" ").green());
    }
    if !meta.description.is_empty() {
        println!();
        println!("{}", meta.description.italic());
    }
    println!();
    print!("{}", post.content);
    if !post.content.ends_with('\n') {
        println!();
    }
    Ok(())
}
