//! idmap CLI Library
//!
//! Batch lookups against public bioinformatics APIs.
//!
//! # Overview
//!
//! - **Name mapping**: Gene symbols or protein names to UniProt accessions (`idmap map`)
//! - **Entry tables**: UniProt accessions to a table of names, genes and chains (`idmap entries`)
//! - **Literature**: PubMed search plus raw MEDLINE fetch (`idmap pubmed`)
//! - **GMT lines**: Join a list file into one tab-separated line (`idmap gmt`)
//!
//! Identifier batches are deduplicated, resolved through a bounded worker pool
//! with a run-scoped cache, and written back out in input order.

pub mod api;
pub mod batch;
pub mod cache;
pub mod commands;
pub mod config;
pub mod dedup;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod resolver;
pub mod table;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, ResolveError, Result};

use clap::{Args, Parser, Subcommand};
use output::OutputFormat;
use resolver::QueryField;
use std::path::PathBuf;

/// idmap - resolve biological identifiers through UniProt and PubMed
#[derive(Parser, Debug)]
#[command(name = "idmap")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub api: ApiOptions,
}

/// Remote API identity and endpoints, shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ApiOptions {
    /// Contact email sent with every request
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// UniProt bearer token
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// NCBI E-utilities API key
    #[arg(long, global = true)]
    pub ncbi_api_key: Option<String>,

    /// UniProt REST base URL
    #[arg(long, global = true)]
    pub uniprot_url: Option<String>,

    /// NCBI E-utilities base URL
    #[arg(long, global = true)]
    pub eutils_url: Option<String>,
}

/// Where a batch of identifiers comes from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// File of whitespace-separated identifiers (prompted for when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Identifier given on the command line (repeatable, replaces --input)
    #[arg(long = "id", value_name = "ID")]
    pub ids: Vec<String>,

    /// Keep only this 1-based field of each non-blank line
    #[arg(long, value_name = "N")]
    pub column: Option<usize>,
}

/// Worker pool and filter settings
#[derive(Args, Debug, Clone, Default)]
pub struct BatchArgs {
    /// Concurrent lookups
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Pause after each completed lookup, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Identifier prefix that is never looked up (repeatable, replaces defaults)
    #[arg(long = "skip-prefix", value_name = "PREFIX")]
    pub skip_prefixes: Vec<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map gene symbols or protein names to UniProt accessions
    Map {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        batch: BatchArgs,

        /// What the identifiers are
        #[arg(long, value_enum, default_value_t = QueryField::Gene)]
        by: QueryField,

        /// NCBI taxonomy id the match must belong to
        #[arg(long, default_value_t = 9606)]
        organism: u32,

        /// Output file
        #[arg(short, long, default_value = "uniprot_results.txt")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Fetch UniProt entries by accession and tabulate their names
    Entries {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        batch: BatchArgs,

        /// Output file
        #[arg(short, long, default_value = "uniprot_data_table.txt")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Search PubMed and save the matching MEDLINE records
    Pubmed {
        /// Boolean search term (defaults to the MYC interaction query)
        #[arg(short, long, conflicts_with = "query_file")]
        query: Option<String>,

        /// Read the search term from a file
        #[arg(long)]
        query_file: Option<PathBuf>,

        /// Maximum number of PMIDs returned by the search
        #[arg(long, default_value_t = 1000)]
        retmax: u32,

        /// Number of leading PMIDs whose records are fetched
        #[arg(long, default_value_t = 100)]
        fetch_limit: usize,

        /// Output file
        #[arg(short, long, default_value = "pubmed_articles.txt")]
        output: PathBuf,
    },

    /// Join the lines of a file into a single tab-separated line
    Gmt {
        /// Input file
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_map_defaults() {
        let cli = Cli::parse_from(["idmap", "map", "--input", "genes.txt"]);
        match cli.command {
            Commands::Map {
                input,
                by,
                organism,
                output,
                format,
                ..
            } => {
                assert_eq!(input.input, Some(PathBuf::from("genes.txt")));
                assert_eq!(by, QueryField::Gene);
                assert_eq!(organism, 9606);
                assert_eq!(output, PathBuf::from("uniprot_results.txt"));
                assert_eq!(format, OutputFormat::Table);
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_api_options_after_subcommand() {
        let cli = Cli::parse_from([
            "idmap",
            "entries",
            "--id",
            "P04637",
            "--email",
            "lab@example.org",
            "--skip-prefix",
            "http",
        ]);
        assert_eq!(cli.api.email.as_deref(), Some("lab@example.org"));
        match cli.command {
            Commands::Entries { input, batch, .. } => {
                assert_eq!(input.ids, vec!["P04637".to_string()]);
                assert_eq!(batch.skip_prefixes, vec!["http".to_string()]);
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_pubmed_query_sources_conflict() {
        let result = Cli::try_parse_from([
            "idmap",
            "pubmed",
            "--query",
            "MYC",
            "--query-file",
            "q.txt",
        ]);
        assert!(result.is_err());
    }
}
