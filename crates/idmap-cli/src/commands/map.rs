//! `idmap map` command implementation
//!
//! Maps gene symbols or protein names to UniProt accessions through the
//! search endpoint.

use crate::commands::{print_summary, resolve_batch};
use crate::config::Config;
use crate::error::Result;
use crate::input::collect_identifiers;
use crate::output::{self, OutputFormat};
use crate::resolver::{QueryField, ResolverProfile, SearchQuery};
use crate::table::TableLayout;
use crate::{BatchArgs, InputArgs};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Run the map command
pub async fn run(
    input: &InputArgs,
    batch: &BatchArgs,
    by: QueryField,
    organism: u32,
    output_path: PathBuf,
    format: OutputFormat,
    mut config: Config,
) -> Result<()> {
    config.apply_batch(batch);
    config.validate()?;

    let identifiers = collect_identifiers(input)?;
    if identifiers.is_empty() {
        warn!("No identifiers to resolve");
    }

    debug!(by = ?by, organism, count = identifiers.len(), "Starting name mapping");

    let profile = ResolverProfile::Search(SearchQuery {
        field: by,
        organism_id: organism,
    });
    let outcome = resolve_batch(&identifiers, profile, &config).await?;

    let text = output::render_rows(&outcome.rows, TableLayout::Map, format)?;
    output::write_text(&output_path, &text)?;

    print_summary(&outcome.summary(), &output_path);
    Ok(())
}
