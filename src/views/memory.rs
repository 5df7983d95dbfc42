//! In-process view counters for local serving and tests.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashMap, sync::Mutex};

use anyhow::Result;

use super::ViewStore;

/// Mutex-guarded map of slug to count
#[derive(Debug, Default)]
pub struct MemoryStore {
    counts: Mutex<HashMap<String, u64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing counts.
    pub fn with_counts<'a>(counts: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
        Self {
            counts: Mutex::new(
                counts
                    .into_iter()
                    .map(|(slug, views)| (slug.to_string(), views))
                    .collect(),
            ),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, u64>>> {
        self.counts
            .lock()
            .map_err(|_| anyhow::anyhow!("view counter lock poisoned"))
    }
}

impl ViewStore for MemoryStore {
    fn fetch(&self, slug: &str) -> Result<Option<u64>> {
        Ok(self.lock()?.get(slug).copied())
    }

    fn insert(&self, slug: &str, views: u64) -> Result<u64> {
        let mut counts = self.lock()?;
        if counts.contains_key(slug) {
            anyhow::bail!("duplicate key value for slug '{slug}'");
        }
        counts.insert(slug.to_string(), views);
        Ok(views)
    }

    fn update(&self, slug: &str, views: u64) -> Result<u64> {
        let mut counts = self.lock()?;
        match counts.get_mut(slug) {
            Some(current) => {
                *current = views;
                Ok(views)
            }
            None => anyhow::bail!("no row for slug '{slug}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates() {
        let store = MemoryStore::new();
        assert_eq!(store.insert("a", 1).unwrap(), 1);
        assert!(store.insert("a", 1).is_err());
    }

    #[test]
    fn test_update_requires_row() {
        let store = MemoryStore::with_counts([("a", 1)]);
        assert_eq!(store.update("a", 5).unwrap(), 5);
        assert_eq!(store.fetch("a").unwrap(), Some(5));
        assert!(store.update("b", 1).is_err());
    }
}
