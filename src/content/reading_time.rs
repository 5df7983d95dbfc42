//! # Reading Time
//!
//! Estimates how long a body takes to read at a fixed words-per-minute rate.
//! CJK ideographs count as one word each; everything else is split on
//! whitespace.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::WORDS_PER_MINUTE;

/// Reading time estimate for a body of text.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: f64,
    /// Display text, e.g. "3 min read"
    pub text: String,
}

/// Estimates the reading time of `text`.
pub fn reading_time(text: &str) -> ReadingTime {
    let words = count_words(text);
    #[allow(clippy::cast_precision_loss)]
    let minutes = words as f64 / WORDS_PER_MINUTE;

    // Round to hundredths first so 2.0000001 does not display as 3
    let displayed = ((minutes * 100.0).round() / 100.0).ceil();

    ReadingTime {
        words,
        minutes,
        text: format!("{displayed} min read"),
    }
}

fn count_words(text: &str) -> usize {
    let mut words = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            words += 1;
            in_word = false;
        } else if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            words += 1;
            in_word = true;
        }
    }

    words
}

const fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30ff}'   // Hiragana, Katakana
        | '\u{3400}'..='\u{4dbf}' // CJK Extension A
        | '\u{4e00}'..='\u{9fff}' // CJK Unified Ideographs
        | '\u{ac00}'..='\u{d7af}' // Hangul syllables
        | '\u{f900}'..='\u{faff}' // CJK Compatibility Ideographs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let rt = reading_time("");
        assert_eq!(rt.words, 0);
        assert_eq!(rt.text, "0 min read");
    }

    #[test]
    fn test_short_text_rounds_up() {
        let rt = reading_time("one two three");
        assert_eq!(rt.words, 3);
        assert_eq!(rt.text, "1 min read");
    }

    #[test]
    fn test_exact_minutes() {
        let text = "word ".repeat(400);
        let rt = reading_time(&text);
        assert_eq!(rt.words, 400);
        assert_eq!(rt.text, "2 min read");

        let rt = reading_time(&"word ".repeat(410));
        assert_eq!(rt.text, "3 min read");
    }

    #[test]
    fn test_cjk_counts_each_character() {
        let rt = reading_time("阅读清单 reading list");
        assert_eq!(rt.words, 6);
    }

    #[test]
    fn test_markdown_punctuation_is_part_of_words() {
        assert_eq!(count_words("# Title\n\n- item, *emphasis*"), 5);
    }
}
