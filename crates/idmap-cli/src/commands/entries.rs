//! `idmap entries` command implementation
//!
//! Fetches UniProt entries by accession and writes the six-column name table.

use crate::commands::{print_summary, resolve_batch};
use crate::config::Config;
use crate::error::Result;
use crate::input::collect_identifiers;
use crate::output::{self, OutputFormat};
use crate::resolver::ResolverProfile;
use crate::table::TableLayout;
use crate::{BatchArgs, InputArgs};
use std::path::PathBuf;
use tracing::warn;

/// Run the entries command
pub async fn run(
    input: &InputArgs,
    batch: &BatchArgs,
    output_path: PathBuf,
    format: OutputFormat,
    mut config: Config,
) -> Result<()> {
    config.apply_batch(batch);
    config.validate()?;

    let accessions = collect_identifiers(input)?;
    if accessions.is_empty() {
        warn!("No accessions to fetch");
    }

    let outcome = resolve_batch(&accessions, ResolverProfile::Entry, &config).await?;

    let text = output::render_rows(&outcome.rows, TableLayout::Entries, format)?;
    output::write_text(&output_path, &text)?;

    print_summary(&outcome.summary(), &output_path);
    Ok(())
}
