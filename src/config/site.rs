//! # Site Configuration
//!
//! Handles the site-level configuration stored at `.folio` in the site root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND, DEFAULT_BLOG_DIR, DEFAULT_CONTENT_DIR, DEFAULT_READING_DIR, DEFAULT_VIEWS_TABLE,
    DEFAULT_WORKS_DIR, SITE_CONFIG_FILE,
};

/// Which store backs the page view counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewsBackend {
    /// Supabase (PostgREST) table, credentials from the environment
    #[default]
    Supabase,
    /// In-process counters, lost on exit
    Memory,
}

/// `[views]` table of the site config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsConfig {
    #[serde(default)]
    pub backend: ViewsBackend,

    /// Remote table keyed by page slug
    #[serde(default = "default_views_table")]
    pub table: String,

    /// Listen address for `folio serve`
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            backend: ViewsBackend::default(),
            table: default_views_table(),
            bind: default_bind(),
        }
    }
}

/// Site configuration stored at .folio in the site root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Content root relative to the site root (default: "src/content")
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Blog posts directory inside the content root (default: "blog")
    #[serde(default = "default_blog_dir")]
    pub blog_dir: String,

    /// Works directory inside the content root (default: "works")
    #[serde(default = "default_works_dir")]
    pub works_dir: String,

    /// Reading list directory inside the content root (default: "reading")
    #[serde(default = "default_reading_dir")]
    pub reading_dir: String,

    /// Public base URL, used for the sitemap
    #[serde(default)]
    pub site_url: Option<String>,

    #[serde(default)]
    pub views: ViewsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            blog_dir: default_blog_dir(),
            works_dir: default_works_dir(),
            reading_dir: default_reading_dir(),
            site_url: None,
            views: ViewsConfig::default(),
        }
    }
}

fn default_content_dir() -> String {
    DEFAULT_CONTENT_DIR.to_string()
}

fn default_blog_dir() -> String {
    DEFAULT_BLOG_DIR.to_string()
}

fn default_works_dir() -> String {
    DEFAULT_WORKS_DIR.to_string()
}

fn default_reading_dir() -> String {
    DEFAULT_READING_DIR.to_string()
}

fn default_views_table() -> String {
    DEFAULT_VIEWS_TABLE.to_string()
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

impl SiteConfig {
    /// Finds the site root by searching for .folio upward from the current directory
    pub fn find_site_root() -> Option<PathBuf> {
        let mut current = env::current_dir().ok()?;

        loop {
            if current.join(SITE_CONFIG_FILE).exists() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the path to the site config file
    pub fn path(site_root: &Path) -> PathBuf {
        site_root.join(SITE_CONFIG_FILE)
    }

    /// Loads the site config from .folio in the given directory
    pub fn load(site_root: &Path) -> Result<Self> {
        let path = Self::path(site_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read site config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse site config: {}", path.display()))
    }

    /// Writes a commented .folio with the current values
    pub fn save_with_comments(&self, site_root: &Path) -> Result<()> {
        let path = Self::path(site_root);
        let site_url_line = self.site_url.as_ref().map_or_else(
            || "# site_url = \"https://example.com\"".to_string(),
            |url| format!("site_url = \"{url}\""),
        );
        let backend = match self.views.backend {
            ViewsBackend::Supabase => "supabase",
            ViewsBackend::Memory => "memory",
        };

        let content = format!(
            r#"# folio Site Configuration

# Content root, relative to this file.
content_dir = "{content_dir}"

# Directories inside the content root.
blog_dir = "{blog_dir}"
works_dir = "{works_dir}"
reading_dir = "{reading_dir}"

# Public base URL used for sitemap entries.
# Falls back to $SITE_URL / $NEXT_PUBLIC_SITE_URL, then https://example.com.
{site_url_line}

[views]
# "supabase" reads SUPABASE_URL and SUPABASE_ANON_KEY (or their NEXT_PUBLIC_
# variants) from the environment or a .env file next to this config.
# "memory" keeps counters in process, for local development.
backend = "{backend}"
table = "{table}"
bind = "{bind}"
"#,
            content_dir = self.content_dir,
            blog_dir = self.blog_dir,
            works_dir = self.works_dir,
            reading_dir = self.reading_dir,
            table = self.views.table,
            bind = self.views.bind,
        );

        fs::write(&path, content)
            .with_context(|| format!("Failed to write site config: {}", path.display()))
    }

    /// Returns the full path to the content root
    pub fn content_path(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.content_dir)
    }

    /// Returns the full path to the blog directory
    pub fn blog_path(&self, site_root: &Path) -> PathBuf {
        self.content_path(site_root).join(&self.blog_dir)
    }

    /// Returns the full path to the works directory
    pub fn works_path(&self, site_root: &Path) -> PathBuf {
        self.content_path(site_root).join(&self.works_dir)
    }

    /// Returns the full path to the reading list directory
    pub fn reading_path(&self, site_root: &Path) -> PathBuf {
        self.content_path(site_root).join(&self.reading_dir)
    }
}
