//! API response types
//!
//! Only the parts of the UniProtKB and E-utilities JSON that idmap reads are
//! modelled. Every nested block is optional; the extraction functions below
//! return `None` for anything absent and [`UniProtEntry::into_record`] turns
//! that into the `N/A` marker.

use idmap_common::{Record, NOT_AVAILABLE};
use serde::{Deserialize, Serialize};

/// `/uniprotkb/search` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<UniProtEntry>,
}

/// One UniProtKB entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniProtEntry {
    pub primary_accession: String,

    #[serde(default)]
    pub protein_description: Option<ProteinDescription>,

    #[serde(default)]
    pub genes: Vec<Gene>,

    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinDescription {
    #[serde(default)]
    pub recommended_name: Option<ProteinName>,

    #[serde(default)]
    pub alternative_names: Vec<ProteinName>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinName {
    #[serde(default)]
    pub full_name: Option<EvidencedValue>,

    #[serde(default)]
    pub short_names: Vec<EvidencedValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidencedValue {
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    #[serde(default)]
    pub gene_name: Option<EvidencedValue>,

    #[serde(default)]
    pub synonyms: Vec<EvidencedValue>,
}

/// Sequence feature; chains carry `"type": "Chain"`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub description: Option<String>,
}

fn join_non_empty<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let values: Vec<&str> = values
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

impl UniProtEntry {
    fn recommended(&self) -> Option<&ProteinName> {
        self.protein_description
            .as_ref()
            .and_then(|d| d.recommended_name.as_ref())
    }

    /// `proteinDescription.recommendedName.fullName.value`
    pub fn recommended_name(&self) -> Option<String> {
        self.recommended()
            .and_then(|name| name.full_name.as_ref())
            .and_then(|full| join_non_empty([full.value.as_str()]))
    }

    /// `proteinDescription.recommendedName.shortNames[].value`
    pub fn short_names(&self) -> Option<String> {
        self.recommended()
            .and_then(|name| join_non_empty(name.short_names.iter().map(|s| s.value.as_str())))
    }

    /// Full and short names of every `proteinDescription.alternativeNames[]`
    pub fn alternative_names(&self) -> Option<String> {
        let description = self.protein_description.as_ref()?;
        join_non_empty(description.alternative_names.iter().flat_map(|alt| {
            alt.full_name
                .iter()
                .chain(alt.short_names.iter())
                .map(|v| v.value.as_str())
        }))
    }

    /// `genes[].geneName.value` followed by that gene's synonyms
    pub fn gene_names(&self) -> Option<String> {
        join_non_empty(self.genes.iter().flat_map(|gene| {
            gene.gene_name
                .iter()
                .chain(gene.synonyms.iter())
                .map(|v| v.value.as_str())
        }))
    }

    /// Descriptions of `features[]` with type `Chain`
    pub fn chains(&self) -> Option<String> {
        join_non_empty(
            self.features
                .iter()
                .filter(|f| f.kind.eq_ignore_ascii_case("chain"))
                .filter_map(|f| f.description.as_deref()),
        )
    }

    /// Flatten into the reported record, marking absent fields `N/A`
    pub fn into_record(self) -> Record {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Record {
            recommended_name: or_na(self.recommended_name()),
            short_names: or_na(self.short_names()),
            alternative_names: or_na(self.alternative_names()),
            gene_names: or_na(self.gene_names()),
            chains: or_na(self.chains()),
            accession: self.primary_accession,
        }
    }
}

/// `esearch.fcgi?retmode=json` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ESearchResponse {
    #[serde(default)]
    pub esearchresult: ESearchResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ESearchResult {
    /// Total hit count, reported by NCBI as a string
    #[serde(default)]
    pub count: Option<String>,

    #[serde(default)]
    pub idlist: Vec<String>,

    /// Present when the term itself could not be processed
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
}
