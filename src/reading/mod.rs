//! # Reading List
//!
//! Reading items: links that are queued, being read, or finished. Each item is
//! one Markdown/MDX file with YAML frontmatter in the reading directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod facets;
pub mod search;
pub mod state;

use std::{
    fmt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

pub use self::{
    facets::{group_by_year, source_options, tag_options, type_options, year_options},
    search::{filter_readings, matches_query, ReadingFilters},
    state::FilterState,
};
use crate::content::{
    parser::{scalar_list, scalar_string},
    path_slug, read_document, resolve_date, title_or_default,
};

// =============================================================================
// Type & Status
// =============================================================================

/// Kind of reading item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReadingType {
    Article,
    Video,
    Repo,
    Thread,
    Book,
    Podcast,
    Tool,
    #[default]
    #[serde(other)]
    Other,
}

impl ReadingType {
    /// All types in display order
    pub const ALL: [Self; 8] = [
        Self::Article,
        Self::Video,
        Self::Repo,
        Self::Thread,
        Self::Book,
        Self::Podcast,
        Self::Tool,
        Self::Other,
    ];

    /// Frontmatter value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Repo => "repo",
            Self::Thread => "thread",
            Self::Book => "book",
            Self::Podcast => "podcast",
            Self::Tool => "tool",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Video => "Video",
            Self::Repo => "Repository",
            Self::Thread => "Thread",
            Self::Book => "Book",
            Self::Podcast => "Podcast",
            Self::Tool => "Tool",
            Self::Other => "Other",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Article => "📄",
            Self::Video => "🎬",
            Self::Repo => "📦",
            Self::Thread => "🧵",
            Self::Book => "📚",
            Self::Podcast => "🎙",
            Self::Tool => "🔧",
            Self::Other => "📎",
        }
    }
}

impl fmt::Display for ReadingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reading progress
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    #[default]
    Inbox,
    Reading,
    Finished,
}

impl ReadingStatus {
    /// All statuses in display order
    pub const ALL: [Self; 3] = [Self::Inbox, Self::Reading, Self::Finished];

    /// Frontmatter value
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Reading => "reading",
            Self::Finished => "finished",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbox => "To read",
            Self::Reading => "Reading",
            Self::Finished => "Finished",
        }
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Reading Item
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReadingFrontmatter {
    #[serde(deserialize_with = "scalar_string")]
    title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    description: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    date: Option<String>,
    #[serde(deserialize_with = "scalar_list")]
    tags: Option<Vec<String>>,
    #[serde(rename = "type")]
    kind: Option<ReadingType>,
    #[serde(deserialize_with = "scalar_string")]
    link: Option<String>,
    status: Option<ReadingStatus>,
    #[serde(deserialize_with = "scalar_string")]
    author: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    source: Option<String>,
    #[serde(rename = "publishedAt", alias = "published_at")]
    #[serde(deserialize_with = "scalar_string")]
    published_at: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    category: Option<String>,
}

/// Reading item metadata with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingMeta {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub kind: ReadingType,
    pub link: String,
    pub slug: String,
    pub status: ReadingStatus,
    pub author: Option<String>,
    pub source: Option<String>,
    /// Publication date of the linked resource, as written
    pub published_at: Option<String>,
    pub category: Option<String>,
}

impl ReadingMeta {
    /// Creates metadata with the given title and defaults elsewhere
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date,
            tags: Vec::new(),
            kind: ReadingType::default(),
            link: String::new(),
            slug: String::new(),
            status: ReadingStatus::default(),
            author: None,
            source: None,
            published_at: None,
            category: None,
        }
    }

    /// Calendar year of the item date (UTC)
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// A reading list entry
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingItem {
    pub meta: ReadingMeta,
    pub content: String,
    pub path: Option<PathBuf>,
}

impl ReadingItem {
    /// An item with no body that is not backed by a file
    pub const fn new(meta: ReadingMeta) -> Self {
        Self {
            meta,
            content: String::new(),
            path: None,
        }
    }

    /// Loads a reading item from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let slug = path_slug(path)?;
        let (fm, content): (ReadingFrontmatter, String) = read_document(path)?;
        let date = resolve_date(fm.date.as_deref())
            .with_context(|| format!("Invalid reading date in {}", path.display()))?;

        Ok(Self {
            meta: ReadingMeta {
                title: title_or_default(fm.title),
                description: fm.description.unwrap_or_default(),
                date,
                tags: fm.tags.unwrap_or_default(),
                kind: fm.kind.unwrap_or_default(),
                link: fm.link.unwrap_or_default(),
                slug,
                status: fm.status.unwrap_or_default(),
                author: fm.author.filter(|a| !a.is_empty()),
                source: fm.source.filter(|s| !s.is_empty()),
                published_at: fm.published_at,
                category: fm.category.filter(|c| !c.is_empty()),
            },
            content,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    pub fn tags(&self) -> &[String] {
        &self.meta.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_item() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "1700000000000-tokio-internals.mdx",
            "---\ntitle: \"Tokio internals\"\ndescription: \"How the scheduler works\"\ndate: \"2024-03-09\"\ntype: \"article\"\nstatus: \"reading\"\nlink: \"https://tokio.rs/blog\"\nsource: \"Tokio Blog\"\nauthor: \"Carl\"\ntags: [\"rust\", \"async\"]\n---\n\n",
        );

        let item = ReadingItem::load(&path).unwrap();
        assert_eq!(item.meta.slug, "1700000000000-tokio-internals");
        assert_eq!(item.meta.kind, ReadingType::Article);
        assert_eq!(item.meta.status, ReadingStatus::Reading);
        assert_eq!(item.meta.source.as_deref(), Some("Tokio Blog"));
        assert_eq!(item.meta.author.as_deref(), Some("Carl"));
        assert_eq!(item.meta.tags, vec!["rust", "async"]);
        assert_eq!(item.meta.year(), 2024);
    }

    #[test]
    fn test_load_bare_numeric_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "1984.md",
            "---\ntitle: 1984\ndate: 2024-03-09\nauthor: 42\ntags: [rust, 2024]\n---\n",
        );

        let item = ReadingItem::load(&path).unwrap();
        assert_eq!(item.meta.title, "1984");
        assert_eq!(item.meta.author.as_deref(), Some("42"));
        assert_eq!(item.meta.tags, vec!["rust", "2024"]);
        assert_eq!(item.meta.year(), 2024);
    }

    #[test]
    fn test_unknown_type_loads_as_other() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "x.md", "---\ntitle: X\ntype: newsletter\n---\n");

        let item = ReadingItem::load(&path).unwrap();
        assert_eq!(item.meta.kind, ReadingType::Other);
        assert_eq!(item.meta.status, ReadingStatus::Inbox);
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "x.md", "---\ntitle: X\nstatus: someday\n---\n");

        assert!(ReadingItem::load(&path).is_err());
    }

    #[test]
    fn test_published_at_accepts_both_spellings() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.md", "---\npublishedAt: \"2020-01-01\"\n---\n");
        let b = write(dir.path(), "b.md", "---\npublished_at: \"2021-01-01\"\n---\n");

        assert_eq!(
            ReadingItem::load(&a).unwrap().meta.published_at.as_deref(),
            Some("2020-01-01")
        );
        assert_eq!(
            ReadingItem::load(&b).unwrap().meta.published_at.as_deref(),
            Some("2021-01-01")
        );
    }

    #[test]
    fn test_type_display_matches_frontmatter() {
        for kind in ReadingType::ALL {
            let yaml = serde_yml::to_string(&kind).unwrap();
            assert_eq!(yaml.trim(), kind.to_string());
        }
    }
}
