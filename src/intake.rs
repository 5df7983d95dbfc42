//! # Reading Intake
//!
//! Validates a new reading list entry and renders the file that stores it:
//! `{unix_millis}-{slug}.mdx` with a fixed-order YAML frontmatter block and an
//! empty body.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use url::Url;

use crate::{
    constants::READING_FILE_EXTENSION,
    content::slugify,
    reading::{ReadingStatus, ReadingType},
};

/// A new reading item, normalized and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingInput {
    pub title: String,
    pub description: String,
    pub link: String,
    pub kind: ReadingType,
    pub status: ReadingStatus,
    pub source: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReadingInput {
    pub title: String,
    pub link: String,
    pub description: String,
    pub kind: ReadingType,
    pub status: ReadingStatus,
    pub source: String,
    pub author: String,
    /// Comma-separated
    pub tags: String,
}

impl RawReadingInput {
    /// Trims every field, validates title and link, and splits tags.
    pub fn normalize(&self) -> Result<ReadingInput> {
        let title = validate_title(&self.title)?;
        let link = validate_link(&self.link)?;

        Ok(ReadingInput {
            title,
            description: self.description.trim().to_string(),
            link,
            kind: self.kind,
            status: self.status,
            source: non_empty(&self.source),
            author: non_empty(&self.author),
            tags: parse_tags(&self.tags),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Returns the trimmed title, or an error if it is blank.
pub fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        bail!("Title is required");
    }
    Ok(title.to_string())
}

/// Returns the trimmed link, or an error if it is blank or not an absolute URL.
pub fn validate_link(link: &str) -> Result<String> {
    let link = link.trim();
    if link.is_empty() {
        bail!("Link is required");
    }
    if Url::parse(link).is_err() {
        bail!("Please enter a valid URL");
    }
    Ok(link.to_string())
}

/// Splits comma-separated tags, trimming each and dropping empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Returns the file name for a new item: `{millis}-{slug}.mdx`.
///
/// Titles that slugify to nothing (only CJK or punctuation) produce `{millis}.mdx`.
pub fn generate_filename(title: &str, timestamp_millis: i64) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{timestamp_millis}.{READING_FILE_EXTENSION}")
    } else {
        format!("{timestamp_millis}-{slug}.{READING_FILE_EXTENSION}")
    }
}

/// Escapes a value for a double-quoted YAML scalar.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Renders the file content for a new item dated `date`.
pub fn generate_frontmatter(input: &ReadingInput, date: NaiveDate) -> String {
    let mut lines = vec![
        "---".to_string(),
        format!("title: {}", quote(&input.title)),
        format!("description: {}", quote(&input.description)),
        format!("date: \"{}\"", date.format("%Y-%m-%d")),
        format!("type: \"{}\"", input.kind),
        format!("status: \"{}\"", input.status),
        format!("link: {}", quote(&input.link)),
    ];

    if let Some(source) = &input.source {
        lines.push(format!("source: {}", quote(source)));
    }
    if let Some(author) = &input.author {
        lines.push(format!("author: {}", quote(author)));
    }
    if !input.tags.is_empty() {
        let tags: Vec<String> = input.tags.iter().map(|t| quote(t)).collect();
        lines.push(format!("tags: [{}]", tags.join(", ")));
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(String::new());
    lines.join("\n")
}
