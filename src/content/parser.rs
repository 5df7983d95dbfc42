//! # YAML Frontmatter Parser
//!
//! Splits Markdown/MDX files into YAML frontmatter and body.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use serde::{
    de::{DeserializeOwned, Error as _},
    Deserialize, Deserializer,
};
use serde_yml::Value;

use crate::constants::FRONTMATTER_DELIMITER;

/// Splits a file into its raw YAML frontmatter and body.
///
/// Files that do not open with `---` have no frontmatter: the YAML part is
/// empty and the whole text is the body.
///
/// # Returns
/// A tuple of (YAML text, body markdown)
pub fn split(content: &str) -> Result<(&str, String)> {
    let trimmed = content.trim_start();

    if !trimmed.starts_with(FRONTMATTER_DELIMITER) {
        return Ok(("", content.to_string()));
    }

    let after_start = &trimmed[FRONTMATTER_DELIMITER.len()..];
    let end_pos = after_start
        .find(&format!("\n{FRONTMATTER_DELIMITER}"))
        .ok_or_else(|| anyhow::anyhow!("No closing frontmatter delimiter found"))?;

    let yaml = &after_start[..end_pos];

    // Skip the rest of the closing delimiter line
    let closing_line = &after_start[end_pos + 1..];
    let body = closing_line
        .find('\n')
        .map_or("", |newline| &closing_line[newline + 1..])
        .trim_start_matches(['\n', '\r'])
        .to_string();

    Ok((yaml, body))
}

/// Parses a file's frontmatter into `T`, returning it with the body.
///
/// Missing or empty frontmatter yields `T::default()`.
pub fn parse<T>(content: &str) -> Result<(T, String)>
where
    T: DeserializeOwned + Default + 'static,
{
    let (yaml, body) = split(content)?;

    if yaml.trim().is_empty() {
        return Ok((T::default(), body));
    }

    let frontmatter: T = serde_yml::from_str(yaml).context("Failed to parse YAML frontmatter")?;

    Ok((frontmatter, body))
}

// =============================================================================
// Scalar Fields
// =============================================================================

/// Text of a YAML scalar. Numbers and booleans keep their written form.
fn scalar_text(value: Value) -> Option<std::result::Result<String, String>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Ok(s)),
        Value::Number(n) => Some(Ok(n.to_string())),
        Value::Bool(b) => Some(Ok(b.to_string())),
        _ => Some(Err("expected a scalar value".to_string())),
    }
}

/// `deserialize_with` helper: any scalar as an optional string.
///
/// `title: 1984` reads as `"1984"`.
pub fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)?
        .and_then(scalar_text)
        .transpose()
        .map_err(D::Error::custom)
}

/// `deserialize_with` helper: a list of scalars as strings.
///
/// `tags: [rust, 2024]` reads as `["rust", "2024"]`. Null entries are dropped.
pub fn scalar_list<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(values) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    values
        .into_iter()
        .filter_map(scalar_text)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(Some)
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "scalar_string")]
        title: Option<String>,
        #[serde(deserialize_with = "scalar_list")]
        tags: Option<Vec<String>>,
    }

    #[test]
    fn test_parse_frontmatter_and_body() {
        let content = "---\ntitle: Hello\ntags: [rust, web]\n---\n\nBody text.\n";
        let (fm, body): (Sample, String) = parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.tags, Some(vec!["rust".to_string(), "web".to_string()]));
        assert_eq!(body, "Body text.\n");
    }

    #[test]
    fn test_no_frontmatter_is_all_body() {
        let (fm, body): (Sample, String) = parse("Just text").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(body, "Just text");
    }

    #[test]
    fn test_empty_frontmatter_defaults() {
        let (fm, body): (Sample, String) = parse("---\n---\nBody").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_empty_body() {
        let (fm, body): (Sample, String) = parse("---\ntitle: x\n---\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("x"));
        assert!(body.is_empty());
    }

    #[test]
    fn test_unclosed_frontmatter() {
        let result: Result<(Sample, String)> = parse("---\ntitle: test\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let result: Result<(Sample, String)> = parse("---\ntitle: [unclosed\n---\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_numeric_scalars_read_as_text() {
        let (fm, _): (Sample, String) = parse("---\ntitle: 1984\ntags: [rust, 2024, true]\n---\n").unwrap();
        assert_eq!(fm.title.as_deref(), Some("1984"));
        assert_eq!(fm.tags, Some(vec!["rust".into(), "2024".into(), "true".into()]));
    }

    #[test]
    fn test_null_scalars_are_absent() {
        let (fm, _): (Sample, String) = parse("---\ntitle: ~\ntags: [rust, ~]\n---\n").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(fm.tags, Some(vec!["rust".into()]));
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let result: Result<(Sample, String)> = parse("---\ntitle:\n  nested: yes\n---\n");
        assert!(result.is_err());
    }
}
