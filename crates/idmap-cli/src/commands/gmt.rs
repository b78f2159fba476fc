//! `idmap gmt` command implementation
//!
//! Turns a one-item-per-line list into a single GMT-style line: every line is
//! followed by a tab and the result ends with a newline.

use crate::error::{CliError, Result};
use crate::output;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Join lines, appending a tab to each
pub fn join_lines(text: &str) -> String {
    let mut joined: String = text.lines().map(|line| format!("{}\t", line)).collect();
    joined.push('\n');
    joined
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::input_not_found(path.display().to_string()),
        _ => CliError::Io(e),
    })
}

/// Run the gmt command
pub async fn run(input: PathBuf, output_path: PathBuf) -> Result<()> {
    let text = read_input(&input)?;
    let line = join_lines(&text);

    output::write_text(&output_path, &line)?;
    println!(
        "{} Joined {} line(s) into {}",
        "✓".green(),
        text.lines().count(),
        output_path.display()
    );
    Ok(())
}
