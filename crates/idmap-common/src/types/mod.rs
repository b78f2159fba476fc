//! Resolution outcomes and the UniProt record model

use serde::{Deserialize, Serialize};

/// Marker written in place of any field the remote record does not carry
pub const NOT_AVAILABLE: &str = "N/A";

/// Accession cell text for an identifier with no match
pub const NOT_FOUND: &str = "Not found";

/// Accession cell text for an identifier rejected by the skip filter
pub const SKIPPED: &str = "Skipped";

/// A UniProt entry reduced to the fields idmap reports.
///
/// Descriptive fields hold [`NOT_AVAILABLE`] rather than an empty string when
/// the source entry lacks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub accession: String,
    pub recommended_name: String,
    pub short_names: String,
    pub alternative_names: String,
    pub gene_names: String,
    pub chains: String,
}

impl Record {
    /// Create a record with every descriptive field set to [`NOT_AVAILABLE`]
    pub fn new(accession: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
            recommended_name: NOT_AVAILABLE.to_string(),
            short_names: NOT_AVAILABLE.to_string(),
            alternative_names: NOT_AVAILABLE.to_string(),
            gene_names: NOT_AVAILABLE.to_string(),
            chains: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Outcome of resolving one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Resolution {
    /// The remote API returned a matching entry
    Resolved(Record),
    /// The API answered but had no match
    NotFound,
    /// The identifier matched a skip prefix and was never sent
    Skipped,
    /// Transport, status or decoding failure
    Failed(String),
}

impl Resolution {
    pub fn record(&self) -> Option<&Record> {
        match self {
            Resolution::Resolved(record) => Some(record),
            _ => None,
        }
    }

    /// Text shown in the accession column of an output table
    pub fn accession_cell(&self) -> String {
        match self {
            Resolution::Resolved(record) => record.accession.clone(),
            Resolution::NotFound => NOT_FOUND.to_string(),
            Resolution::Skipped => SKIPPED.to_string(),
            Resolution::Failed(msg) => format!("Error: {}", msg),
        }
    }

    /// Project a descriptive field, falling back to [`NOT_AVAILABLE`]
    pub fn field(&self, pick: impl Fn(&Record) -> &str) -> String {
        self.record()
            .map(|r| pick(r).to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Resolved(record) => write!(f, "resolved ({})", record.accession),
            Resolution::NotFound => write!(f, "not found"),
            Resolution::Skipped => write!(f, "skipped"),
            Resolution::Failed(msg) => write!(f, "failed: {}", msg),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults_to_marker() {
        let record = Record::new("P01308");
        assert_eq!(record.accession, "P01308");
        assert_eq!(record.recommended_name, NOT_AVAILABLE);
        assert_eq!(record.chains, NOT_AVAILABLE);
    }

    #[test]
    fn test_accession_cell_sentinels() {
        assert_eq!(Resolution::NotFound.accession_cell(), "Not found");
        assert_eq!(Resolution::Skipped.accession_cell(), "Skipped");
        assert_eq!(
            Resolution::Failed("HTTP 500".to_string()).accession_cell(),
            "Error: HTTP 500"
        );
    }

    #[test]
    fn test_field_falls_back_for_sentinels() {
        let mut record = Record::new("P04637");
        record.gene_names = "TP53, P53".to_string();

        let resolved = Resolution::Resolved(record);
        assert_eq!(resolved.field(|r| &r.gene_names), "TP53, P53");
        assert_eq!(Resolution::Skipped.field(|r| &r.gene_names), NOT_AVAILABLE);
    }

    #[test]
    fn test_resolution_serialization() {
        let json = serde_json::to_string(&Resolution::Skipped).unwrap();
        assert_eq!(json, r#"{"status":"skipped"}"#);

        let failed: Resolution =
            serde_json::from_str(r#"{"status":"failed","value":"timeout"}"#).unwrap();
        assert_eq!(failed, Resolution::Failed("timeout".to_string()));
    }
}
