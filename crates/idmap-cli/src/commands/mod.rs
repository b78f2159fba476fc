//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod entries;
pub mod gmt;
pub mod map;
pub mod pubmed;

use crate::api::UniProtClient;
use crate::batch::{duration_ms, BatchOptions, BatchOutcome, BatchRunner, BatchSummary};
use crate::cache::ResolutionCache;
use crate::config::Config;
use crate::error::Result;
use crate::progress;
use crate::resolver::{ResolverProfile, SkipFilter, UniProtResolver};
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Resolve a batch through UniProt with a fresh run cache
pub(crate) async fn resolve_batch(
    identifiers: &[String],
    profile: ResolverProfile,
    config: &Config,
) -> Result<BatchOutcome> {
    let client = UniProtClient::new(config)?;
    let resolver = UniProtResolver::new(
        client,
        profile,
        SkipFilter::new(config.skip_prefixes.iter().cloned()),
        ResolutionCache::new(),
    );

    let options = BatchOptions {
        workers: config.workers,
        delay: config.delay,
    };
    let runner = BatchRunner::new(Arc::new(resolver), options)
        .with_progress(progress::create_progress_bar(0, "Querying UniProt"));

    let outcome = runner.run(identifiers).await;
    let summary = outcome.summary();
    info!(
        rows = summary.rows,
        unique = summary.unique,
        resolved = summary.resolved,
        not_found = summary.not_found,
        skipped = summary.skipped,
        failed = summary.failed,
        elapsed_ms = duration_ms(outcome.elapsed),
        "Batch finished"
    );

    Ok(outcome)
}

/// Print the end-of-run console summary
pub(crate) fn print_summary(summary: &BatchSummary, output: &Path) {
    println!(
        "{} {} identifier(s), {} unique",
        "→".cyan(),
        summary.rows,
        summary.unique
    );
    println!("  Resolved:  {}", summary.resolved.to_string().green());
    println!("  Not found: {}", summary.not_found);
    println!("  Skipped:   {}", summary.skipped);
    if summary.failed > 0 {
        println!("  Failed:    {}", summary.failed.to_string().red());
    } else {
        println!("  Failed:    0");
    }
    println!("{} Results saved to {}", "✓".green(), output.display());
}
