//! # Add Command
//!
//! Adds a reading list entry, from flags or through the interactive wizard.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{
    config::Config,
    editor,
    intake::RawReadingInput,
    reading::{tag_options, ReadingStatus, ReadingType},
    storage,
    tui::{self, screens::ReadingWizard},
    ui::{self, InteractiveArgs},
};

/// Arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub kind: ReadingType,
    pub status: ReadingStatus,
    pub source: Option<String>,
    pub author: Option<String>,
    /// Comma-separated
    pub tags: Option<String>,
    pub edit: bool,
    pub interactive: InteractiveArgs,
}

impl AddArgs {
    fn raw_input(&self) -> RawReadingInput {
        RawReadingInput {
            title: self.title.clone().unwrap_or_default(),
            link: self.link.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            kind: self.kind,
            status: self.status,
            source: self.source.clone().unwrap_or_default(),
            author: self.author.clone().unwrap_or_default(),
            tags: self.tags.clone().unwrap_or_default(),
        }
    }
}

/// Executes the add command.
pub fn execute(args: &AddArgs) -> Result<()> {
    let config = Config::load()?;
    let interactive = args.interactive.should_run(&config);

    let raw = if interactive {
        let existing = storage::all_readings(&config)?;
        let wizard = ReadingWizard::new(tag_options(&existing)).with_defaults(&args.raw_input());
        match tui::run(wizard)? {
            Some(raw) => raw,
            None => return Ok(()),
        }
    } else {
        args.raw_input()
    };

    let input = raw.normalize()?;
    let path = storage::create_reading(&config, &input)?;

    if interactive {
        ui::print_success("Added reading item", &config, &path);
    } else {
        println!("{}", config.relative_path(&path).display());
    }

    if args.edit {
        editor::open(&path, &config).context("Failed to open editor")?;
    }

    Ok(())
}
