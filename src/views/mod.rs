//! # Page Views
//!
//! Per-page view counters kept in a remote table keyed by slug. Recording a
//! view is a plain read-then-write: fetch the current count, then update it
//! to `views + 1` or insert a fresh row with `1`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod memory;
pub mod supabase;

use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;

pub use self::{memory::MemoryStore, supabase::SupabaseStore};
use crate::config::{Config, ViewsBackend};

/// Storage for page view counters.
pub trait ViewStore: Send + Sync {
    /// Current count for `slug`, or `None` if no row exists.
    fn fetch(&self, slug: &str) -> Result<Option<u64>>;

    /// Creates the row for `slug`; returns the stored count.
    fn insert(&self, slug: &str, views: u64) -> Result<u64>;

    /// Overwrites the count for `slug`; returns the stored count.
    fn update(&self, slug: &str, views: u64) -> Result<u64>;
}

/// Errors from recording or reading view counts
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Slug is required")]
    MissingSlug,

    #[error("Failed to update views: {0:#}")]
    Store(#[from] anyhow::Error),
}

/// A slug is used exactly as given; only an absent or empty one is rejected.
fn require_slug(slug: Option<&str>) -> Result<&str, ViewError> {
    slug.filter(|s| !s.is_empty())
        .ok_or(ViewError::MissingSlug)
}

/// Records one view of `slug` and returns the new count.
pub fn record_view(store: &dyn ViewStore, slug: Option<&str>) -> Result<u64, ViewError> {
    let slug = require_slug(slug)?;

    let views = match store.fetch(slug)? {
        Some(current) => store.update(slug, current + 1)?,
        None => store.insert(slug, 1)?,
    };

    tracing::debug!(slug, views, "recorded view");
    Ok(views)
}

/// Returns the count for `slug`.
///
/// Only a missing slug is an error; store failures read as zero.
pub fn current_views(store: &dyn ViewStore, slug: Option<&str>) -> Result<u64, ViewError> {
    let slug = require_slug(slug)?;

    match store.fetch(slug) {
        Ok(views) => Ok(views.unwrap_or(0)),
        Err(e) => {
            tracing::warn!(slug, "failed to fetch views: {e:#}");
            Ok(0)
        }
    }
}

/// Opens the store configured for this site.
pub fn open_store(config: &Config) -> Result<Arc<dyn ViewStore>> {
    let views = &config.site.views;

    match views.backend {
        ViewsBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        ViewsBackend::Supabase => {
            let credentials = config.supabase_credentials()?;
            Ok(Arc::new(SupabaseStore::new(credentials, &views.table)))
        }
    }
}
