use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::Context;

use crate::cli::root_commands::InputArgs;

/// Resolve the news text: positional argument, then `--file`, then piped
/// stdin. An interactive stdin yields an empty string, which validation
/// rejects downstream.
pub fn read_text(args: &InputArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return read_file(path);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("failed to read news text from stdin")?;
    Ok(buffer)
}

pub fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read news text from {}", path.display()))
}

/// Non-blank lines of a batch file. Blank lines are dropped, so reported
/// line numbers count texts, not file lines.
pub fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    Ok(read_file(path)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
