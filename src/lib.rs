//! # folio
//!
//! Content toolkit for a Markdown-driven personal site.
//!
//! Blog posts, works and reading list entries are plain Markdown files with YAML
//! frontmatter, so they stay human-readable and easy to version.
//!
//! ## Features
//!
//! - **Content Loading**: Frontmatter parsing, slugs and reading time estimates
//! - **Reading List**: Faceted filtering, free-text search and grouping by year
//! - **Intake**: Validated creation of new reading entries
//! - **Page Views**: Per-slug counters in Supabase or in memory, served over HTTP
//! - **Sitemap**: XML sitemap of the static pages and blog posts
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod content;
pub mod editor;
pub mod intake;
pub mod reading;
pub mod server;
pub mod sitemap;
pub mod storage;
pub mod tui;
pub mod ui;
pub mod views;

pub use config::{set_home_override, Config};
pub use content::{Post, PostMeta};
pub use reading::{FilterState, ReadingItem, ReadingMeta, ReadingStatus, ReadingType};
