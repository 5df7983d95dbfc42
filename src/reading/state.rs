//! # Filter State
//!
//! Interactive filter selection for the reading list. Multi-value filters
//! toggle membership and keep the order values were picked in; the year is a
//! single selection that clears when picked again.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{ReadingFilters, ReadingStatus, ReadingType};

/// Removes `value` if present, otherwise appends it.
pub fn toggle<T: PartialEq>(current: &mut Vec<T>, value: T) {
    if let Some(pos) = current.iter().position(|v| *v == value) {
        current.remove(pos);
    } else {
        current.push(value);
    }
}

/// Current filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub tags: Vec<String>,
    pub statuses: Vec<ReadingStatus>,
    pub types: Vec<ReadingType>,
    pub sources: Vec<String>,
    pub year: Option<i32>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        toggle(&mut self.tags, tag.to_string());
    }

    pub fn toggle_status(&mut self, status: ReadingStatus) {
        toggle(&mut self.statuses, status);
    }

    pub fn toggle_type(&mut self, kind: ReadingType) {
        toggle(&mut self.types, kind);
    }

    pub fn toggle_source(&mut self, source: &str) {
        toggle(&mut self.sources, source.to_string());
    }

    /// Selects `year`, or clears the year if it is already selected.
    pub fn toggle_year(&mut self, year: i32) {
        self.year = if self.year == Some(year) {
            None
        } else {
            Some(year)
        };
    }

    /// Resets every filter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no query, no set filter and no year is active.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.tags.is_empty()
            && self.statuses.is_empty()
            && self.types.is_empty()
            && self.sources.is_empty()
            && self.year.is_none()
    }

    /// Builds filter criteria; empty sets become absent.
    pub fn filters(&self) -> ReadingFilters {
        fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
            (!values.is_empty()).then(|| values.to_vec())
        }

        ReadingFilters {
            query: (!self.query.is_empty()).then(|| self.query.clone()),
            tags: non_empty(&self.tags),
            status: non_empty(&self.statuses),
            kind: non_empty(&self.types),
            source: non_empty(&self.sources),
            year: self.year,
        }
    }

    /// Result count line, e.g. "Showing 3 / 12".
    pub fn summary(filtered: usize, total: usize) -> String {
        format!("Showing {filtered} / {total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut values = vec!["a".to_string()];
        toggle(&mut values, "b".to_string());
        assert_eq!(values, vec!["a", "b"]);
        toggle(&mut values, "a".to_string());
        assert_eq!(values, vec!["b"]);
    }

    #[test]
    fn test_toggle_preserves_selection_order() {
        let mut state = FilterState::new();
        state.toggle_tag("zig");
        state.toggle_tag("ada");
        state.toggle_tag("rust");
        state.toggle_tag("ada");
        assert_eq!(state.tags, vec!["zig", "rust"]);
    }

    #[test]
    fn test_toggle_year_clears_on_same_year() {
        let mut state = FilterState::new();
        state.toggle_year(2024);
        assert_eq!(state.year, Some(2024));
        state.toggle_year(2023);
        assert_eq!(state.year, Some(2023));
        state.toggle_year(2023);
        assert_eq!(state.year, None);
    }

    #[test]
    fn test_is_empty_and_clear() {
        let mut state = FilterState::new();
        assert!(state.is_empty());

        state.toggle_status(ReadingStatus::Finished);
        state.query = "rust".into();
        assert!(!state.is_empty());

        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_filters_drop_empty_sets() {
        let mut state = FilterState::new();
        assert_eq!(state.filters(), ReadingFilters::default());

        state.toggle_type(ReadingType::Book);
        state.toggle_source("Blog");
        state.toggle_year(2022);
        let filters = state.filters();
        assert_eq!(filters.kind, Some(vec![ReadingType::Book]));
        assert_eq!(filters.source, Some(vec!["Blog".to_string()]));
        assert_eq!(filters.year, Some(2022));
        assert!(filters.tags.is_none());
        assert!(filters.status.is_none());
        assert!(filters.query.is_none());
    }

    #[test]
    fn test_summary() {
        assert_eq!(FilterState::summary(3, 12), "Showing 3 / 12");
    }
}
