//! # Constants
//!
//! Centralized constants for magic values used throughout folio.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// UI Display
// =============================================================================

/// Maximum length for title display in lists (truncated with ellipsis).
pub const UI_TITLE_TRUNCATE_LEN: usize = 48;

/// Maximum length for tags display in lists (truncated with ellipsis).
pub const UI_TAGS_TRUNCATE_LEN: usize = 24;

// =============================================================================
// Content Format
// =============================================================================

/// Maximum slug length in characters for generated file names.
pub const MAX_SLUG_LENGTH: usize = 50;

/// YAML frontmatter delimiter.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// File extensions recognized as content files.
pub const CONTENT_EXTENSIONS: &[&str] = &["mdx", "md"];

/// Extension used for files created by the reading intake.
pub const READING_FILE_EXTENSION: &str = "mdx";

/// Title used when a document has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Reading speed used for reading time estimates.
pub const WORDS_PER_MINUTE: f64 = 200.0;

// =============================================================================
// File System
// =============================================================================

/// Site configuration file name (at the site root).
pub const SITE_CONFIG_FILE: &str = ".folio";

/// Default content root (relative to the site root).
pub const DEFAULT_CONTENT_DIR: &str = "src/content";

/// Default blog directory (inside the content root).
pub const DEFAULT_BLOG_DIR: &str = "blog";

/// Default works directory (inside the content root).
pub const DEFAULT_WORKS_DIR: &str = "works";

/// Default reading list directory (inside the content root).
pub const DEFAULT_READING_DIR: &str = "reading";

/// Global configuration directory name (inside user's config directory).
pub const GLOBAL_CONFIG_DIR: &str = "folio";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

// =============================================================================
// Site & Page Views
// =============================================================================

/// Base URL used when neither config nor environment provide one.
pub const DEFAULT_SITE_URL: &str = "https://example.com";

/// Default remote table holding page view counters.
pub const DEFAULT_VIEWS_TABLE: &str = "page_views";

/// Default bind address for `folio serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Environment variables consulted for the Supabase project URL (first wins).
pub const ENV_SUPABASE_URL: &[&str] = &["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];

/// Environment variables consulted for the Supabase anon key (first wins).
pub const ENV_SUPABASE_KEY: &[&str] = &["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"];

/// Environment variables consulted for the public site URL (first wins).
pub const ENV_SITE_URL: &[&str] = &["SITE_URL", "NEXT_PUBLIC_SITE_URL"];

/// Timeout for requests to the view counter backend, in seconds.
pub const VIEWS_HTTP_TIMEOUT_SECS: u64 = 10;
