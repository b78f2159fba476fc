//! Output formats and file writing

use crate::batch::ResolvedRow;
use crate::error::Result;
use crate::table::{self, TableLayout};
use clap::ValueEnum;
use idmap_common::NOT_AVAILABLE;
use std::path::Path;
use tracing::info;

/// File format of a batch result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table with a dashed rule under the header
    #[default]
    Table,
    /// `accession<TAB>recommended name`, named resolved rows only
    Tsv,
    /// JSON array of input/outcome pairs
    Json,
}

/// Two-column TSV of the resolved rows; records without a recommended name
/// are left out
pub fn render_tsv(rows: &[ResolvedRow]) -> String {
    rows.iter()
        .filter_map(|row| row.resolution.record())
        .filter(|record| record.recommended_name != NOT_AVAILABLE)
        .map(|record| format!("{}\t{}\n", record.accession, record.recommended_name))
        .collect()
}

/// Render rows in the requested format
pub fn render_rows(rows: &[ResolvedRow], layout: TableLayout, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => table::render_resolved(rows, layout),
        OutputFormat::Tsv => render_tsv(rows),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(rows)?;
            json.push('\n');
            json
        },
    })
}

/// Write text to `path`, creating parent directories as needed
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "Output written");
    Ok(())
}
