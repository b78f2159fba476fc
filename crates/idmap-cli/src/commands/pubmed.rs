//! `idmap pubmed` command implementation
//!
//! Runs a PubMed search, fetches MEDLINE records for the leading hits and
//! writes the fetched text unchanged.

use crate::api::PubMedClient;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output;
use crate::progress::{create_spinner, format_bytes};
use anyhow::Context;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// MYC interaction studies in neoplasms, excluding reviews and case reports
pub const DEFAULT_QUERY: &str = r#"
((MYC OR "c-Myc" OR "MYC protein" OR "MYC targets")
AND ("target" OR "regulation" OR "binding" OR "activation" OR "repression"))
AND ("Protein Interaction Maps"[Mesh] OR "Protein Binding"[Mesh])
AND ("Neoplasms"[Mesh] OR "Neoplastic Processes"[Mesh])
NOT ("Review"[Publication Type] OR "Case Reports"[Publication Type])
"#;

/// Collapse a multi-line query into the single line sent to esearch
pub fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn load_query(query: Option<&str>, query_file: Option<&Path>) -> Result<String> {
    let raw = match (query, query_file) {
        (Some(q), _) => q.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file {}", path.display()))?,
        (None, None) => DEFAULT_QUERY.to_string(),
    };

    let normalized = normalize_query(&raw);
    if normalized.is_empty() {
        return Err(CliError::config("PubMed query cannot be empty"));
    }
    Ok(normalized)
}

/// Run the pubmed command
pub async fn run(
    query: Option<String>,
    query_file: Option<PathBuf>,
    retmax: u32,
    fetch_limit: usize,
    output_path: PathBuf,
    config: Config,
) -> Result<()> {
    config.validate()?;
    let term = load_query(query.as_deref(), query_file.as_deref())?;
    let client = PubMedClient::new(&config)?;

    let spinner = create_spinner("Searching PubMed...");
    let pmids = client.esearch(&term, retmax).await;
    spinner.finish_and_clear();
    let pmids = pmids?;

    let selected = &pmids[..pmids.len().min(fetch_limit)];
    info!(found = pmids.len(), fetching = selected.len(), "PubMed search complete");

    let text = if selected.is_empty() {
        warn!("PubMed search returned no articles");
        String::new()
    } else {
        let spinner = create_spinner("Fetching MEDLINE records...");
        let text = client.efetch_medline(selected).await;
        spinner.finish_and_clear();
        text?
    };

    output::write_text(&output_path, &text)?;

    println!(
        "{} Found {} article(s); saved the first {} to {} ({})",
        "✓".green(),
        pmids.len(),
        selected.len(),
        output_path.display(),
        format_bytes(text.len() as u64)
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_query_is_single_line() {
        let query = load_query(None, None).unwrap();
        assert!(!query.contains('\n'));
        assert!(query.starts_with("((MYC OR \"c-Myc\""));
        assert!(query.ends_with("\"Case Reports\"[Publication Type])"));
    }

    #[test]
    fn test_query_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "TP53[Gene]\n  AND apoptosis").unwrap();

        let query = load_query(None, Some(file.path())).unwrap();
        assert_eq!(query, "TP53[Gene] AND apoptosis");
    }

    #[test]
    fn test_blank_query_rejected() {
        assert!(matches!(load_query(Some("   "), None), Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_query_file() {
        let result = load_query(None, Some(Path::new("/nonexistent/query.txt")));
        assert!(matches!(result, Err(CliError::Other(_))));
    }
}
