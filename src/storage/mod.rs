//! # Storage
//!
//! File system operations for site content: listing posts, works and reading
//! items, looking posts up by slug, and writing new reading items.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::{
    config::Config,
    constants::CONTENT_EXTENSIONS,
    content::{Post, Work},
    intake::{generate_filename, generate_frontmatter, ReadingInput},
    reading::ReadingItem,
};

/// Creates `dir` (and parents) if it does not exist.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Walks the content files directly inside `dir`, sorted by file name.
pub fn walk_content(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
        })
        .map(walkdir::DirEntry::into_path)
}

/// Loads every content file in `dir`, newest first.
///
/// Files that fail to load are skipped with a warning.
fn load_all<T, L, D>(dir: &Path, load: L, date: D) -> Result<Vec<T>>
where
    L: Fn(&Path) -> Result<T>,
    D: Fn(&T) -> DateTime<Utc>,
{
    ensure_dir(dir)?;

    let mut docs: Vec<T> = walk_content(dir)
        .filter_map(|path| match load(&path) {
            Ok(doc) => Some(doc),
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping unreadable file: {e:#}");
                None
            }
        })
        .collect();

    docs.sort_by_key(|doc| std::cmp::Reverse(date(doc)));
    tracing::debug!(dir = %dir.display(), count = docs.len(), "loaded content");
    Ok(docs)
}

/// All blog posts, newest first.
pub fn all_posts(config: &Config) -> Result<Vec<Post>> {
    load_all(&config.blog_path(), Post::load, |p| p.meta.date)
}

/// All works, newest first.
pub fn all_works(config: &Config) -> Result<Vec<Work>> {
    load_all(&config.works_path(), Work::load, |w| w.meta.date)
}

/// All reading items, newest first.
pub fn all_readings(config: &Config) -> Result<Vec<ReadingItem>> {
    load_all(&config.reading_path(), ReadingItem::load, |r| r.meta.date)
}

/// Looks a post up by slug, preferring `.mdx` over `.md`.
pub fn post_by_slug(config: &Config, slug: &str) -> Result<Option<Post>> {
    let dir = config.blog_path();

    for ext in CONTENT_EXTENSIONS {
        let path = dir.join(format!("{slug}.{ext}"));
        if path.is_file() {
            return Post::load(&path).map(Some);
        }
    }

    Ok(None)
}

/// Distinct post tags in first-seen order (newest post first).
pub fn all_tags(config: &Config) -> Result<Vec<String>> {
    let mut tags: Vec<String> = Vec::new();
    for post in all_posts(config)? {
        for tag in post.meta.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    Ok(tags)
}

/// Distinct non-empty post categories in first-seen order.
pub fn all_categories(config: &Config) -> Result<Vec<String>> {
    let mut categories: Vec<String> = Vec::new();
    for post in all_posts(config)? {
        let category = post.meta.category;
        if !category.is_empty() && !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(categories)
}

/// Writes a new reading item and returns its path.
pub fn create_reading(config: &Config, input: &ReadingInput) -> Result<PathBuf> {
    let dir = config.reading_path();
    ensure_dir(&dir)?;

    let now = Utc::now();
    let path = dir.join(generate_filename(&input.title, now.timestamp_millis()));
    let content = generate_frontmatter(input, now.date_naive());

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write reading item: {}", path.display()))?;

    tracing::info!(path = %path.display(), "created reading item");
    Ok(path)
}
