//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/folio/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/folio/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Editor command (e.g., "nvim", "code --wait")
    #[serde(default)]
    pub editor: Option<String>,

    /// Whether to enable interactive mode (wizards, filter panels, pickers)
    #[serde(default = "default_true")]
    pub interactive: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            editor: None,
            interactive: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/folio/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Returns the path if it was created, `None` if it already existed.
    pub fn create_default_if_missing() -> Result<Option<PathBuf>> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if path.exists() {
            return Ok(None);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(Some(path))
    }

    /// Saves config with comments for all options.
    fn save_with_comments(path: &Path, config: &Self) -> Result<()> {
        let editor_line = config.editor.as_ref().map_or_else(
            || "# editor = \"nvim\"".to_string(),
            |v| format!("editor = \"{v}\""),
        );

        let content = format!(
            r#"# folio Global Configuration
# Location: ~/.config/folio/config

# Editor command used by `folio add --edit`.
# Supports commands with arguments (e.g., "code --wait", "nvim").
# If not set, falls back to $VISUAL, then $EDITOR, then "vi".
{editor_line}

# Whether to enable interactive mode (intake wizard, filter panel, pickers).
# Set to false for scripting.
# Default: true
interactive = {interactive}
"#,
            interactive = config.interactive,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert!(config.interactive);
        assert!(config.editor.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
editor = "nvim"
"#;
        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.editor, Some("nvim".to_string()));
        assert!(config.interactive); // default
    }

    #[test]
    fn test_home_override() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let expected_path = temp.path().join(".config").join("folio").join("config");

        set_home_override(Some(temp.path().to_path_buf()));
        assert_eq!(GlobalConfig::path().unwrap(), expected_path);

        // Missing file loads defaults
        let config = GlobalConfig::load().unwrap();
        assert!(config.interactive);

        // Created file round-trips through load
        let created = GlobalConfig::create_default_if_missing().unwrap();
        assert_eq!(created, Some(expected_path.clone()));
        assert!(GlobalConfig::create_default_if_missing().unwrap().is_none());
        let config = GlobalConfig::load().unwrap();
        assert!(config.interactive);

        set_home_override(None);
        let path = GlobalConfig::path();
        assert_ne!(path, Some(expected_path));
    }
}
