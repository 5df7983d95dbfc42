//! # Add Command Tests
//!
//! Creating reading list entries from flags.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::fs;

use common::setup_site;
use folio::{
    commands::{self, AddArgs},
    reading::{ReadingStatus, ReadingType},
    storage,
    ui::InteractiveArgs,
    Config,
};
use predicates::prelude::*;

fn non_interactive() -> InteractiveArgs {
    InteractiveArgs {
        interactive: false,
        no_interactive: true,
    }
}

#[test]
fn test_add_writes_frontmatter() {
    let env = setup_site();

    let output = env
        .folio_cmd()
        .args([
            "add",
            "--title",
            "The Rust Book",
            "--link",
            "https://doc.rust-lang.org/book/",
            "--type",
            "book",
            "--status",
            "reading",
            "--source",
            "HN",
            "--tags",
            "rust, books, ",
            "--no-interactive",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let printed = stdout.trim();
    assert!(printed.starts_with("src/content/reading/"), "{printed}");
    assert!(printed.ends_with("-the-rust-book.mdx"), "{printed}");

    let files = env.list_reading_files();
    assert_eq!(files.len(), 1);
    let content = fs::read_to_string(&files[0]).unwrap();
    assert!(content.starts_with("---\ntitle: \"The Rust Book\"\n"));
    assert!(content.contains("type: \"book\""));
    assert!(content.contains("status: \"reading\""));
    assert!(content.contains("link: \"https://doc.rust-lang.org/book/\""));
    assert!(content.contains("source: \"HN\""));
    assert!(content.contains("tags: [\"rust\", \"books\"]"));
    assert!(!content.contains("author:"));
}

#[test]
fn test_add_defaults_to_article_in_inbox() {
    let env = setup_site();

    env.folio_cmd()
        .args(["add", "--title", "Plain", "--link", "https://example.com"])
        .assert()
        .success();

    let content = fs::read_to_string(&env.list_reading_files()[0]).unwrap();
    assert!(content.contains("type: \"article\""));
    assert!(content.contains("status: \"inbox\""));
    assert!(!content.contains("tags:"));
}

#[test]
fn test_add_requires_title() {
    let env = setup_site();

    env.folio_cmd()
        .args(["add", "--link", "https://example.com", "--no-interactive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title is required"));

    assert!(env.list_reading_files().is_empty());
}

#[test]
fn test_add_rejects_invalid_link() {
    let env = setup_site();

    env.folio_cmd()
        .args(["add", "--title", "Broken", "--link", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid URL"));

    assert!(env.list_reading_files().is_empty());
}

#[test]
fn test_add_rejects_unknown_type() {
    let env = setup_site();

    env.folio_cmd()
        .args(["add", "--title", "X", "--link", "https://x.dev", "--type", "paper"])
        .assert()
        .failure();
}

#[test]
fn test_add_title_without_slug_uses_timestamp() {
    let env = setup_site();

    env.folio_cmd()
        .args(["add", "--title", "???", "--link", "https://example.com"])
        .assert()
        .success();

    let files = env.list_reading_files();
    let name = files[0].file_name().unwrap().to_str().unwrap();
    let stem = name.strip_suffix(".mdx").unwrap();
    assert!(stem.chars().all(|c| c.is_ascii_digit()), "{name}");
}

#[test]
fn test_added_item_round_trips_through_loader() {
    let _env = setup_site();

    commands::add(&AddArgs {
        title: Some("Say \"hi\" to C:\\paths".into()),
        link: Some("https://example.com/hi".into()),
        description: Some("  quoted  ".into()),
        kind: ReadingType::Thread,
        status: ReadingStatus::Finished,
        author: Some("Ann".into()),
        tags: Some("a,b".into()),
        interactive: non_interactive(),
        ..AddArgs::default()
    })
    .expect("add should succeed");

    let config = Config::load().unwrap();
    let items = storage::all_readings(&config).unwrap();
    assert_eq!(items.len(), 1);

    let meta = &items[0].meta;
    assert_eq!(meta.title, "Say \"hi\" to C:\\paths");
    assert_eq!(meta.description, "quoted");
    assert_eq!(meta.kind, ReadingType::Thread);
    assert_eq!(meta.status, ReadingStatus::Finished);
    assert_eq!(meta.author.as_deref(), Some("Ann"));
    assert_eq!(meta.source, None);
    assert_eq!(meta.tags, vec!["a", "b"]);
    assert!(meta.slug.ends_with("-say-hi-to-cpaths"), "{}", meta.slug);
}

#[test]
fn test_added_item_is_listed() {
    let env = setup_site();

    env.folio_cmd()
        .args(["add", "--title", "Fresh Link", "--link", "https://fresh.dev"])
        .assert()
        .success();

    env.folio_cmd()
        .args(["reading", "--no-interactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh Link"))
        .stdout(predicate::str::contains("Showing 1 / 1"));
}
