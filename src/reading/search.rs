//! # Search and Filter
//!
//! Reading list filtering. This module is the single source of truth for
//! narrowing reading items, used by both CLI commands and the TUI filter panel.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{ReadingItem, ReadingStatus, ReadingType};

// =============================================================================
// Filter Criteria
// =============================================================================

/// Filter criteria for reading items.
///
/// `None` and empty vectors both mean "match all" for that criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingFilters {
    /// Free-text query (title, description, author, source, type, tags).
    pub query: Option<String>,
    /// Tags the item must ALL carry (exact match).
    pub tags: Option<Vec<String>>,
    /// Accepted statuses (ANY).
    pub status: Option<Vec<ReadingStatus>>,
    /// Accepted types (ANY).
    pub kind: Option<Vec<ReadingType>>,
    /// Accepted sources (ANY); items without a source never match.
    pub source: Option<Vec<String>>,
    /// Calendar year of the item date.
    pub year: Option<i32>,
}

impl ReadingFilters {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, |q| q.trim().is_empty())
            && active(self.tags.as_deref()).is_none()
            && active(self.status.as_deref()).is_none()
            && active(self.kind.as_deref()).is_none()
            && active(self.source.as_deref()).is_none()
            && self.year.is_none()
    }
}

/// Treats empty sets like absent ones.
fn active<T>(set: Option<&[T]>) -> Option<&[T]> {
    set.filter(|s| !s.is_empty())
}

// =============================================================================
// Filter Matching
// =============================================================================

/// Checks the free-text query against an item (case-insensitive substring).
///
/// The needle is trimmed; an empty needle matches everything.
pub fn matches_query(item: &ReadingItem, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let meta = &item.meta;
    let mut haystack = vec![
        meta.title.as_str(),
        meta.description.as_str(),
        meta.author.as_deref().unwrap_or(""),
        meta.source.as_deref().unwrap_or(""),
        meta.kind.as_str(),
    ];
    haystack.extend(meta.tags.iter().map(String::as_str));

    haystack.join(" ").to_lowercase().contains(&needle)
}

/// Checks whether an item passes every active criterion.
pub fn matches_filters(item: &ReadingItem, filters: &ReadingFilters) -> bool {
    let meta = &item.meta;

    if let Some(query) = filters.query.as_deref() {
        if !matches_query(item, query) {
            return false;
        }
    }

    // AND: every requested tag must be present
    if let Some(tags) = active(filters.tags.as_deref()) {
        if !tags.iter().all(|tag| meta.tags.contains(tag)) {
            return false;
        }
    }

    if let Some(statuses) = active(filters.status.as_deref()) {
        if !statuses.contains(&meta.status) {
            return false;
        }
    }

    if let Some(kinds) = active(filters.kind.as_deref()) {
        if !kinds.contains(&meta.kind) {
            return false;
        }
    }

    if let Some(sources) = active(filters.source.as_deref()) {
        match meta.source.as_ref() {
            Some(source) if sources.contains(source) => {}
            _ => return false,
        }
    }

    if let Some(year) = filters.year {
        if meta.year() != year {
            return false;
        }
    }

    true
}

/// Narrows `items` to those matching `filters`, keeping their order.
pub fn filter_readings<'a>(items: &'a [ReadingItem], filters: &ReadingFilters) -> Vec<&'a ReadingItem> {
    items
        .iter()
        .filter(|item| matches_filters(item, filters))
        .collect()
}
