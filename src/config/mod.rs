//! # Configuration
//!
//! Merged configuration combining global (~/.config/folio/config) and site (.folio)
//! settings, plus secrets taken from the environment or a `.env` file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;
pub mod site;

use std::path::{Path, PathBuf};

use anyhow::Result;

pub use self::{
    global::{set_home_override, GlobalConfig},
    site::{SiteConfig, ViewsBackend, ViewsConfig},
};
use crate::constants::{DEFAULT_SITE_URL, ENV_SITE_URL, ENV_SUPABASE_KEY, ENV_SUPABASE_URL};

/// Supabase project coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseCredentials {
    pub url: String,
    pub anon_key: String,
}

/// Merged configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Site configuration
    pub site: SiteConfig,

    /// Resolved site root path
    pub site_root: PathBuf,
}

impl Config {
    /// Loads configuration from both global and site sources.
    ///
    /// A `.env` file in the site root is loaded into the process environment;
    /// variables that are already set win.
    pub fn load() -> Result<Self> {
        let global = GlobalConfig::load()?;

        let site_root = SiteConfig::find_site_root()
            .ok_or_else(|| anyhow::anyhow!("Not in a folio site (no .folio file found)"))?;

        let site = SiteConfig::load(&site_root)?;

        let env_file = site_root.join(".env");
        if env_file.exists() {
            if let Err(e) = dotenv::from_path(&env_file) {
                tracing::warn!("skipping {}: {e}", env_file.display());
            }
        }

        Ok(Self {
            global,
            site,
            site_root,
        })
    }

    /// Creates a config for initialization (no existing site required)
    pub fn for_init() -> Result<Self> {
        let global = GlobalConfig::load()?;
        let site_root = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Cannot get current directory: {e}"))?;

        Ok(Self {
            global,
            site: SiteConfig::default(),
            site_root,
        })
    }

    /// Returns the effective editor command
    pub fn editor(&self) -> Option<String> {
        self.global.editor.clone().or_else(|| {
            std::env::var("VISUAL")
                .ok()
                .or_else(|| std::env::var("EDITOR").ok())
        })
    }

    /// Whether interactive mode is on by default
    pub const fn interactive(&self) -> bool {
        self.global.interactive
    }

    /// Returns the blog directory path
    pub fn blog_path(&self) -> PathBuf {
        self.site.blog_path(&self.site_root)
    }

    /// Returns the works directory path
    pub fn works_path(&self) -> PathBuf {
        self.site.works_path(&self.site_root)
    }

    /// Returns the reading list directory path
    pub fn reading_path(&self) -> PathBuf {
        self.site.reading_path(&self.site_root)
    }

    /// Public base URL without a trailing slash.
    ///
    /// Order: `site_url` in .folio, then `SITE_URL` / `NEXT_PUBLIC_SITE_URL`,
    /// then the placeholder default.
    pub fn site_url(&self) -> String {
        let url = self
            .site
            .site_url
            .clone()
            .or_else(|| first_env(ENV_SITE_URL))
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        url.trim_end_matches('/').to_string()
    }

    /// Supabase credentials from the environment.
    pub fn supabase_credentials(&self) -> Result<SupabaseCredentials> {
        let url = first_env(ENV_SUPABASE_URL).ok_or_else(|| {
            anyhow::anyhow!("Supabase URL not set (expected {})", ENV_SUPABASE_URL.join(" or "))
        })?;
        let anon_key = first_env(ENV_SUPABASE_KEY).ok_or_else(|| {
            anyhow::anyhow!("Supabase key not set (expected {})", ENV_SUPABASE_KEY.join(" or "))
        })?;

        Ok(SupabaseCredentials { url, anon_key })
    }

    /// Returns path relative to site root
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.site_root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}

/// Returns the first non-empty variable among `names`.
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}
