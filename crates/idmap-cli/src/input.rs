//! Identifier input loading
//!
//! Input files are UTF-8 text with identifiers separated by whitespace or
//! newlines. Blank lines are ignored.

use crate::error::{CliError, Result};
use crate::InputArgs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Which tokens of each line are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenSelection {
    /// Every whitespace-separated token
    #[default]
    All,
    /// Only the field at this 0-based index
    Column(usize),
}

impl TokenSelection {
    /// Build from a 1-based column number as given on the command line
    pub fn from_column(column: Option<usize>) -> Result<Self> {
        match column {
            None => Ok(TokenSelection::All),
            Some(0) => Err(CliError::config("Column numbers start at 1")),
            Some(n) => Ok(TokenSelection::Column(n - 1)),
        }
    }
}

/// Split text into an ordered, flat sequence of identifiers
pub fn tokens_from_text(text: &str, selection: TokenSelection) -> Vec<String> {
    let mut tokens = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match selection {
            TokenSelection::All => {
                tokens.extend(line.split_whitespace().map(String::from));
            },
            TokenSelection::Column(index) => match line.split_whitespace().nth(index) {
                Some(field) => tokens.push(field.to_string()),
                None => warn!(line = line_no + 1, column = index + 1, "Line has no such column, skipped"),
            },
        }
    }

    tokens
}

/// Read identifiers from a file
pub fn load_tokens(path: &Path, selection: TokenSelection) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "Cannot read input file");
        match e.kind() {
            io::ErrorKind::NotFound => CliError::input_not_found(path.display().to_string()),
            _ => CliError::Io(e),
        }
    })?;

    let tokens = tokens_from_text(&text, selection);
    debug!(path = %path.display(), tokens = tokens.len(), "Loaded identifiers");
    Ok(tokens)
}

/// Resolve the identifier list for a batch command.
///
/// Literal `--id` values win over `--input`; with neither, the file path is
/// prompted for when stdin is a terminal.
pub fn collect_identifiers(args: &InputArgs) -> Result<Vec<String>> {
    if !args.ids.is_empty() {
        return Ok(args
            .ids
            .iter()
            .flat_map(|id| id.split_whitespace())
            .map(String::from)
            .collect());
    }

    let selection = TokenSelection::from_column(args.column)?;
    let path = match args.input {
        Some(ref path) => path.clone(),
        None => prompt_for_path()?,
    };

    load_tokens(&path, selection)
}

fn prompt_for_path() -> Result<PathBuf> {
    if !io::stdin().is_terminal() {
        return Err(CliError::config(
            "No identifiers given. Pass --input <FILE> or --id <ID>",
        ));
    }

    let answer = inquire::Text::new("Path to the identifier file:").prompt()?;
    Ok(PathBuf::from(answer.trim()))
}
