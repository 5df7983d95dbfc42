//! # Slugs
//!
//! Converts titles into URL-safe, filesystem-friendly slugs and derives
//! document slugs from file names.
//!
//! ## Rules
//! 1. Transliterate Latin, Greek and Cyrillic letters to ASCII (`é` -> `e`)
//! 2. Spell out a few symbols (`&` -> `and`)
//! 3. Whitespace and hyphens separate words, other characters are removed
//! 4. Lowercase, join words with one hyphen, truncate to 50 characters
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use deunicode::deunicode_char;

use crate::constants::{CONTENT_EXTENSIONS, MAX_SLUG_LENGTH};

/// Symbols that are spelled out instead of removed.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', "and"),
    ('$', "dollar"),
    ('%', "percent"),
    ('<', "less"),
    ('>', "greater"),
    ('|', "or"),
    ('€', "euro"),
    ('£', "pound"),
];

/// Scripts with an established Latin transliteration. Other scripts are dropped.
const fn is_transliterated(c: char) -> bool {
    matches!(c, '\u{00C0}'..='\u{058F}' | '\u{1E00}'..='\u{1EFF}')
}

/// Appends the ASCII alphanumerics of `text`, opening a new word if one is pending.
fn push_word_chars(result: &mut String, text: &str, pending_hyphen: &mut bool) {
    for c in text.chars().filter(char::is_ascii_alphanumeric) {
        if *pending_hyphen && !result.is_empty() {
            result.push('-');
        }
        *pending_hyphen = false;
        result.push(c.to_ascii_lowercase());
    }
}

/// Converts a title string into a URL-safe slug.
///
/// # Example
/// ```
/// use folio::content::slug::slugify;
/// assert_eq!(slugify("Why Rust? A Retrospective"), "why-rust-a-retrospective");
/// assert_eq!(slugify("Don't Panic"), "dont-panic");
/// ```
pub fn slugify(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_alphanumeric() {
            push_word_chars(&mut result, c.encode_utf8(&mut [0; 4]), &mut pending_hyphen);
        } else if let Some((_, word)) = SYMBOL_WORDS.iter().find(|(symbol, _)| *symbol == c) {
            push_word_chars(&mut result, word, &mut pending_hyphen);
        } else if is_transliterated(c) {
            if let Some(ascii) = deunicode_char(c) {
                push_word_chars(&mut result, ascii, &mut pending_hyphen);
            }
        }
    }

    // Slug is pure ASCII, so byte truncation is safe
    result.truncate(MAX_SLUG_LENGTH);

    while result.ends_with('-') {
        result.pop();
    }

    result
}

/// Derives a document slug from its file name by stripping `.md` / `.mdx`.
///
/// Returns `None` for files that are not content files.
pub fn slug_from_filename(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    CONTENT_EXTENSIONS.contains(&ext).then_some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(slugify("Fix Login Bug"), "fix-login-bug");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(slugify("Async Rust, explained!!!"), "async-rust-explained");
        assert_eq!(slugify("src/main.rs"), "srcmainrs");
    }

    #[test]
    fn test_punctuation_inside_words_is_removed() {
        assert_eq!(slugify("Don't Panic"), "dont-panic");
        assert_eq!(slugify("\"Quoted\" title"), "quoted-title");
        assert_eq!(slugify("Rust 2024 - What's New"), "rust-2024-whats-new");
    }

    #[test]
    fn test_accented_letters_are_transliterated() {
        assert_eq!(slugify("Café Society"), "cafe-society");
        assert_eq!(slugify("Straße über Ångström"), "strasse-uber-angstrom");
    }

    #[test]
    fn test_symbols_are_spelled_out() {
        assert_eq!(slugify("Rock & Roll"), "rock-and-roll");
        assert_eq!(slugify("100% Rust"), "100percent-rust");
    }

    #[test]
    fn test_leading_trailing() {
        assert_eq!(slugify("  --Title--  "), "title");
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(slugify("如何阅读 Rust 源码"), "rust");
        assert_eq!(slugify("阅读清单"), "");
    }

    #[test]
    fn test_truncation() {
        let long_title = "This is a very long title that should be truncated to fifty characters";
        let slug = slugify(long_title);
        assert!(slug.len() <= MAX_SLUG_LENGTH);
        assert!(!slug.ends_with('-'));
        assert!(slug.starts_with("this-is-a-very-long-title"));
    }

    #[test]
    fn test_slug_from_filename() {
        assert_eq!(slug_from_filename("hello-world.md"), Some("hello-world"));
        assert_eq!(slug_from_filename("1700000000000-rust.mdx"), Some("1700000000000-rust"));
        assert_eq!(slug_from_filename("notes.txt"), None);
        assert_eq!(slug_from_filename("README"), None);
    }
}
