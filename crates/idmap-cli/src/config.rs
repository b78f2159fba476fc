//! Configuration management for idmap
//!
//! Values come from `IDMAP_*` environment variables (a `.env` file is loaded
//! by the binary first) and are then overridden by command-line flags.

use crate::error::{CliError, Result};
use crate::{ApiOptions, BatchArgs};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Configuration Constants
// ============================================================================

/// UniProt REST API root
pub const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org";

/// NCBI E-utilities root
pub const DEFAULT_EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default number of concurrent lookups
pub const DEFAULT_WORKERS: usize = 5;

/// Default pause after each completed lookup
pub const DEFAULT_DELAY_MS: u64 = 200;

/// Default per-request timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Identifier prefixes that never name a gene or protein: URL schemes and
/// the collection labels that lead GMT gene-set lines.
pub const DEFAULT_SKIP_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "ftp://",
    "HALLMARK_",
    "KEGG_",
    "REACTOME_",
    "GO_",
];

/// Runtime configuration shared by all subcommands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Contact email sent as `From` and in the user agent
    pub email: Option<String>,

    /// UniProt bearer token
    pub uniprot_api_key: Option<String>,

    /// NCBI E-utilities key
    pub ncbi_api_key: Option<String>,

    pub uniprot_url: String,
    pub eutils_url: String,

    /// Concurrent lookups, at least 1
    pub workers: usize,

    /// Pause after each completed lookup
    pub delay: Duration,

    pub skip_prefixes: Vec<String>,

    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email: None,
            uniprot_api_key: None,
            ncbi_api_key: None,
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            eutils_url: DEFAULT_EUTILS_URL.to_string(),
            workers: DEFAULT_WORKERS,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            skip_prefixes: DEFAULT_SKIP_PREFIXES.iter().map(|p| p.to_string()).collect(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(email) = non_empty_var("IDMAP_EMAIL") {
            config.email = Some(email);
        }

        if let Some(key) = non_empty_var("IDMAP_UNIPROT_API_KEY") {
            config.uniprot_api_key = Some(key);
        }

        if let Some(key) = non_empty_var("IDMAP_NCBI_API_KEY") {
            config.ncbi_api_key = Some(key);
        }

        if let Some(url) = non_empty_var("IDMAP_UNIPROT_URL") {
            config.uniprot_url = url;
        }

        if let Some(url) = non_empty_var("IDMAP_EUTILS_URL") {
            config.eutils_url = url;
        }

        if let Some(workers) = non_empty_var("IDMAP_WORKERS") {
            config.workers = parse_number("IDMAP_WORKERS", &workers)?;
        }

        if let Some(delay) = non_empty_var("IDMAP_DELAY_MS") {
            config.delay = Duration::from_millis(parse_number("IDMAP_DELAY_MS", &delay)?);
        }

        if let Some(secs) = non_empty_var("IDMAP_HTTP_TIMEOUT_SECS") {
            config.http_timeout =
                Duration::from_secs(parse_number("IDMAP_HTTP_TIMEOUT_SECS", &secs)?);
        }

        if let Some(prefixes) = non_empty_var("IDMAP_SKIP_PREFIXES") {
            config.skip_prefixes = prefixes
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(config)
    }

    /// Apply API flags given on the command line
    pub fn apply_api(&mut self, api: &ApiOptions) {
        if let Some(ref email) = api.email {
            self.email = Some(email.clone());
        }
        if let Some(ref key) = api.api_key {
            self.uniprot_api_key = Some(key.clone());
        }
        if let Some(ref key) = api.ncbi_api_key {
            self.ncbi_api_key = Some(key.clone());
        }
        if let Some(ref url) = api.uniprot_url {
            self.uniprot_url = url.clone();
        }
        if let Some(ref url) = api.eutils_url {
            self.eutils_url = url.clone();
        }
    }

    /// Apply worker pool flags given on the command line
    pub fn apply_batch(&mut self, batch: &BatchArgs) {
        if let Some(workers) = batch.workers {
            self.workers = workers;
        }
        if let Some(delay_ms) = batch.delay_ms {
            self.delay = Duration::from_millis(delay_ms);
        }
        if !batch.skip_prefixes.is_empty() {
            self.skip_prefixes = batch.skip_prefixes.clone();
        }
    }

    /// Reject settings no batch can run with
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(CliError::config("Worker count must be at least 1"));
        }
        if self.uniprot_url.trim().is_empty() || self.eutils_url.trim().is_empty() {
            return Err(CliError::config("API base URLs cannot be empty"));
        }
        if self.http_timeout.is_zero() {
            return Err(CliError::config("HTTP timeout must be greater than 0"));
        }
        Ok(())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::config(format!("{} must be a number, got '{}'", name, value)))
}
