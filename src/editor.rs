//! # Editor Integration
//!
//! Opens content files in the user's preferred editor.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io::IsTerminal, path::Path, process::Command};

use anyhow::{Context, Result};

use crate::config::Config;

/// Splits an editor setting such as `code --wait` into program and arguments.
fn parse_command(editor: &str) -> Result<(&str, Vec<&str>)> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().context("Empty editor command")?;
    Ok((program, parts.collect()))
}

/// Opens a file in the user's configured editor.
///
/// The editor is, in order: the `editor` setting, `$VISUAL`, `$EDITOR`, `vi`.
/// Nothing happens when stdout is not a terminal.
pub fn open(path: &Path, config: &Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        return Ok(());
    }

    let editor = config.editor().unwrap_or_else(|| "vi".to_string());
    let (program, args) = parse_command(&editor)?;

    tracing::debug!(program, path = %path.display(), "opening editor");

    let status = Command::new(program)
        .args(&args)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor: {editor}"))?;

    if !status.success() {
        anyhow::bail!("Editor exited with error: {status}");
    }

    Ok(())
}
