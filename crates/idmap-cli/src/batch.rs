//! Bounded batch resolution
//!
//! Unique identifiers are resolved by at most `workers` concurrent tasks; each
//! task pauses for `delay` after it finishes, which caps the aggregate request
//! rate. Results are fanned back out to the original input order.

use crate::dedup::unique_in_order;
use crate::resolver::Resolve;
use futures::stream::{self, StreamExt};
use idmap_common::Resolution;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Whole milliseconds in `duration`, saturating at `u64::MAX`
pub(crate) fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Worker pool settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Maximum lookups in flight, at least 1
    pub workers: usize,
    /// Pause after each completed lookup
    pub delay: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: crate::config::DEFAULT_WORKERS,
            delay: Duration::from_millis(crate::config::DEFAULT_DELAY_MS),
        }
    }
}

/// One input identifier with its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRow {
    pub input: String,
    pub resolution: Resolution,
}

/// Outcome counts across all input rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub unique: usize,
    pub resolved: usize,
    pub not_found: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Output of one batch, in input order
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub rows: Vec<ResolvedRow>,
    pub unique: usize,
    pub elapsed: Duration,
}

impl BatchOutcome {
    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            rows: self.rows.len(),
            unique: self.unique,
            ..Default::default()
        };

        for row in &self.rows {
            match row.resolution {
                Resolution::Resolved(_) => summary.resolved += 1,
                Resolution::NotFound => summary.not_found += 1,
                Resolution::Skipped => summary.skipped += 1,
                Resolution::Failed(_) => summary.failed += 1,
            }
        }

        summary
    }
}

/// Runs a resolver over a batch of identifiers
pub struct BatchRunner {
    resolver: Arc<dyn Resolve>,
    options: BatchOptions,
    progress: ProgressBar,
}

impl BatchRunner {
    pub fn new(resolver: Arc<dyn Resolve>, options: BatchOptions) -> Self {
        Self {
            resolver,
            options,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report each completed lookup on this progress bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Resolve every identifier, looking each distinct value up once
    pub async fn run(&self, identifiers: &[String]) -> BatchOutcome {
        let started = Instant::now();
        let unique = unique_in_order(identifiers);
        let workers = self.options.workers.max(1);
        let delay = self.options.delay;

        info!(
            total = identifiers.len(),
            unique = unique.len(),
            workers,
            delay_ms = duration_ms(delay),
            "Resolving identifiers"
        );
        self.progress.set_length(unique.len() as u64);

        let results: HashMap<String, Resolution> = stream::iter(unique.iter().cloned())
            .map(|identifier| {
                let resolver = Arc::clone(&self.resolver);
                async move {
                    let key = identifier.clone();
                    let task = tokio::spawn(async move { resolver.resolve(&key).await });

                    let resolution = match task.await {
                        Ok(resolution) => resolution,
                        Err(e) => {
                            error!(identifier = %identifier, error = %e, "Resolution task failed");
                            Resolution::Failed(format!("resolution task failed: {}", e))
                        },
                    };

                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }

                    (identifier, resolution)
                }
            })
            .buffer_unordered(workers)
            .inspect(|_| self.progress.inc(1))
            .collect()
            .await;

        self.progress.finish_and_clear();

        let rows = identifiers
            .iter()
            .map(|input| ResolvedRow {
                input: input.clone(),
                resolution: results.get(input).cloned().unwrap_or_else(|| {
                    Resolution::Failed("identifier was not resolved".to_string())
                }),
            })
            .collect();

        BatchOutcome {
            rows,
            unique: unique.len(),
            elapsed: started.elapsed(),
        }
    }
}
