//! # Content
//!
//! Blog posts and works: Markdown/MDX files with YAML frontmatter, loaded
//! with defaults for every missing field.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod parser;
pub mod reading_time;
pub mod slug;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

pub use self::{
    reading_time::{reading_time, ReadingTime},
    slug::{slug_from_filename, slugify},
};
use self::parser::{scalar_list, scalar_string};
use crate::constants::DEFAULT_TITLE;

// =============================================================================
// Dates
// =============================================================================

/// Parses a frontmatter date.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.and_utc());
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: '{value}'"))?;

    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Resolves an optional frontmatter date, defaulting to now.
pub(crate) fn resolve_date(value: Option<&str>) -> Result<DateTime<Utc>> {
    value.map_or_else(|| Ok(Utc::now()), parse_date)
}

/// Returns the slug for a content file path.
pub(crate) fn path_slug(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(slug_from_filename)
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("Not a content file: {}", path.display()))
}

/// Reads a content file and parses its frontmatter.
pub(crate) fn read_document<T>(path: &Path) -> Result<(T, String)>
where
    T: serde::de::DeserializeOwned + Default + 'static,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {}", path.display()))?;

    parser::parse(&content).with_context(|| format!("Failed to parse: {}", path.display()))
}

pub(crate) fn title_or_default(title: Option<String>) -> String {
    title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

// =============================================================================
// Posts
// =============================================================================

/// Frontmatter of a blog post as written on disk.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostFrontmatter {
    #[serde(deserialize_with = "scalar_string")]
    title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    description: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    date: Option<String>,
    #[serde(deserialize_with = "scalar_list")]
    tags: Option<Vec<String>>,
    #[serde(deserialize_with = "scalar_string")]
    category: Option<String>,
}

/// Blog post metadata with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    /// Empty when the post has no category
    pub category: String,
    pub slug: String,
    /// Display text, e.g. "4 min read"
    pub reading_time: String,
}

/// A blog post
#[derive(Debug, Clone)]
pub struct Post {
    pub meta: PostMeta,
    pub content: String,
    pub path: Option<PathBuf>,
}

impl Post {
    /// Loads a post from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let slug = path_slug(path)?;
        let (fm, content): (PostFrontmatter, String) = read_document(path)?;
        let date = resolve_date(fm.date.as_deref())
            .with_context(|| format!("Invalid post date in {}", path.display()))?;

        Ok(Self {
            meta: PostMeta {
                title: title_or_default(fm.title),
                description: fm.description.unwrap_or_default(),
                date,
                tags: fm.tags.unwrap_or_default(),
                category: fm.category.unwrap_or_default(),
                slug,
                reading_time: reading_time(&content).text,
            },
            content,
            path: Some(path.to_path_buf()),
        })
    }
}

// =============================================================================
// Works
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorkFrontmatter {
    #[serde(deserialize_with = "scalar_string")]
    title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    description: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    date: Option<String>,
    #[serde(deserialize_with = "scalar_list")]
    tags: Option<Vec<String>>,
    #[serde(deserialize_with = "scalar_string")]
    link: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    github: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    image: Option<String>,
}

/// Portfolio entry metadata with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct WorkMeta {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub link: String,
    pub github: String,
    pub image: String,
    pub slug: String,
}

/// A portfolio entry
#[derive(Debug, Clone)]
pub struct Work {
    pub meta: WorkMeta,
    pub content: String,
}

impl Work {
    /// Loads a work from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let slug = path_slug(path)?;
        let (fm, content): (WorkFrontmatter, String) = read_document(path)?;
        let date = resolve_date(fm.date.as_deref())
            .with_context(|| format!("Invalid work date in {}", path.display()))?;

        Ok(Self {
            meta: WorkMeta {
                title: title_or_default(fm.title),
                description: fm.description.unwrap_or_default(),
                date,
                tags: fm.tags.unwrap_or_default(),
                link: fm.link.unwrap_or_default(),
                github: fm.github.unwrap_or_default(),
                image: fm.image.unwrap_or_default(),
                slug,
            },
            content,
        })
    }
}
