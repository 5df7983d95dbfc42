//! # Test Harness
//!
//! Provides utilities for integration testing folio without affecting user configuration.
//! Library calls use a thread-local home override; the binary gets `HOME` pointed at a
//! temporary directory instead.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

use folio::set_home_override;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Environment variables the binary must not inherit from the developer's shell.
const SCRUBBED_VARS: &[&str] = &[
    "SITE_URL",
    "NEXT_PUBLIC_SITE_URL",
    "SUPABASE_URL",
    "NEXT_PUBLIC_SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "NEXT_PUBLIC_SUPABASE_ANON_KEY",
    "RUST_LOG",
];

/// Test environment that manages temporary directories for both
/// the "home" directory (for global config) and the site directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/folio/config)
    pub home_dir: TempDir,
    /// Temporary directory for the site
    pub site_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    ///
    /// Changes to the site directory for the duration of the test.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let site_dir = TempDir::new().expect("Failed to create temp site dir");

        let original_cwd = env::current_dir().expect("Failed to get current dir");

        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(site_dir.path()).expect("Failed to change to site dir");

        Self {
            home_dir,
            site_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the site directory.
    pub fn site_path(&self) -> &Path {
        self.site_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("folio")
            .join("config")
    }

    /// Returns the path where site config would be stored.
    pub fn site_config_path(&self) -> PathBuf {
        self.site_dir.path().join(".folio")
    }

    pub fn blog_path(&self) -> PathBuf {
        self.site_dir.path().join("src/content/blog")
    }

    pub fn works_path(&self) -> PathBuf {
        self.site_dir.path().join("src/content/works")
    }

    pub fn reading_path(&self) -> PathBuf {
        self.site_dir.path().join("src/content/reading")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Creates a site config file with the given content.
    pub fn write_site_config(&self, content: &str) {
        fs::write(self.site_config_path(), content).expect("Failed to write site config");
    }

    /// Writes a file relative to the site root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.site_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Lists all files in the reading directory, sorted by name.
    pub fn list_reading_files(&self) -> Vec<PathBuf> {
        let dir = self.reading_path();
        if !dir.exists() {
            return Vec::new();
        }
        let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .collect();
        files.sort();
        files
    }

    /// Creates a folio command running in the site with the temp home.
    pub fn folio_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").expect("folio binary should build");
        cmd.current_dir(self.site_dir.path());
        cmd.env("HOME", self.home_dir.path());
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Creates an initialized site with non-interactive global config.
pub fn setup_site() -> TestEnv {
    let env = TestEnv::new();
    env.write_global_config(&GlobalConfigBuilder::new().build());
    folio::commands::init().expect("init should succeed");
    env
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Builder for the global config file.
pub struct GlobalConfigBuilder {
    editor: Option<String>,
    interactive: bool,
}

impl Default for GlobalConfigBuilder {
    fn default() -> Self {
        Self {
            editor: Some("true".to_string()), // no-op editor
            interactive: false,
        }
    }
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(editor) = &self.editor {
            lines.push(format!("editor = \"{editor}\""));
        }
        lines.push(format!("interactive = {}", self.interactive));
        lines.join("\n")
    }
}

// =============================================================================
// Content Fixtures
// =============================================================================

/// Frontmatter fields of a reading fixture.
pub struct ReadingFixture<'a> {
    pub title: &'a str,
    pub date: &'a str,
    pub kind: &'a str,
    pub status: &'a str,
    pub source: Option<&'a str>,
    pub tags: &'a [&'a str],
}

impl Default for ReadingFixture<'_> {
    fn default() -> Self {
        Self {
            title: "Untitled",
            date: "2024-01-01",
            kind: "article",
            status: "inbox",
            source: None,
            tags: &[],
        }
    }
}

fn yaml_list(values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{v}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Writes a reading item named `{file}.mdx`.
pub fn create_reading(env: &TestEnv, file: &str, fixture: &ReadingFixture<'_>) -> PathBuf {
    let source = fixture
        .source
        .map(|s| format!("source: \"{s}\"\n"))
        .unwrap_or_default();
    let content = format!(
        "---\ntitle: \"{}\"\ndescription: \"About {}\"\ndate: \"{}\"\ntype: \"{}\"\nstatus: \"{}\"\nlink: \"https://example.com/{file}\"\n{source}tags: {}\n---\n\nNotes.\n",
        fixture.title,
        fixture.title,
        fixture.date,
        fixture.kind,
        fixture.status,
        yaml_list(fixture.tags),
    );
    env.write_file(&format!("src/content/reading/{file}.mdx"), &content)
}

/// Writes a blog post named `{slug}.mdx`.
pub fn create_post(
    env: &TestEnv,
    slug: &str,
    title: &str,
    date: &str,
    tags: &[&str],
    category: Option<&str>,
) -> PathBuf {
    let category = category
        .map(|c| format!("category: \"{c}\"\n"))
        .unwrap_or_default();
    let content = format!(
        "---\ntitle: \"{title}\"\ndescription: \"Post about {title}\"\ndate: \"{date}\"\ntags: {}\n{category}---\n\nBody of {title}.\n",
        yaml_list(tags),
    );
    env.write_file(&format!("src/content/blog/{slug}.mdx"), &content)
}

/// Writes a work named `{slug}.md`.
pub fn create_work(env: &TestEnv, slug: &str, title: &str, date: &str, link: Option<&str>) -> PathBuf {
    let link = link.map(|l| format!("link: \"{l}\"\n")).unwrap_or_default();
    let content = format!("---\ntitle: \"{title}\"\ndate: \"{date}\"\n{link}---\n\nWork.\n");
    env.write_file(&format!("src/content/works/{slug}.md"), &content)
}
