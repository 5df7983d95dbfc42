//! # Facets
//!
//! Filter options derived from the loaded reading list, and year grouping
//! for timeline display.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::BTreeSet;

use super::{ReadingItem, ReadingType};

/// Distinct item years, newest first.
pub fn year_options<'a, I>(items: I) -> Vec<i32>
where
    I: IntoIterator<Item = &'a ReadingItem>,
{
    let years: BTreeSet<i32> = items.into_iter().map(|item| item.meta.year()).collect();
    years.into_iter().rev().collect()
}

/// Distinct tags, sorted.
pub fn tag_options<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ReadingItem>,
{
    let tags: BTreeSet<&str> = items
        .into_iter()
        .flat_map(|item| item.meta.tags.iter().map(String::as_str))
        .collect();
    tags.into_iter().map(String::from).collect()
}

/// Distinct sources, sorted. Items without a source contribute nothing.
pub fn source_options<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ReadingItem>,
{
    let sources: BTreeSet<&str> = items
        .into_iter()
        .filter_map(|item| item.meta.source.as_deref())
        .collect();
    sources.into_iter().map(String::from).collect()
}

/// Distinct types in first-seen order.
pub fn type_options<'a, I>(items: I) -> Vec<ReadingType>
where
    I: IntoIterator<Item = &'a ReadingItem>,
{
    let mut kinds = Vec::new();
    for item in items {
        if !kinds.contains(&item.meta.kind) {
            kinds.push(item.meta.kind);
        }
    }
    kinds
}

/// Groups items by calendar year, newest year first.
///
/// Items keep their input order within each group.
pub fn group_by_year<'a, I>(items: I) -> Vec<(i32, Vec<&'a ReadingItem>)>
where
    I: IntoIterator<Item = &'a ReadingItem>,
{
    let mut groups: Vec<(i32, Vec<&'a ReadingItem>)> = Vec::new();

    for item in items {
        let year = item.meta.year();
        match groups.iter_mut().find(|(y, _)| *y == year) {
            Some((_, group)) => group.push(item),
            None => groups.push((year, vec![item])),
        }
    }

    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups
}
