//! API endpoint URL builders
//!
//! Helper functions to construct UniProt and E-utilities URLs. Base URLs may
//! carry a trailing slash.

/// Tool name reported to NCBI
pub const EUTILS_TOOL: &str = "idmap";

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Build UniProtKB search URL returning at most `size` JSON results
pub fn uniprot_search_url(base_url: &str, query: &str, fields: &[&str], size: u32) -> String {
    format!(
        "{}/uniprotkb/search?query={}&format=json&fields={}&size={}",
        trim_base(base_url),
        urlencoding::encode(query),
        fields.join(","),
        size
    )
}

/// Build UniProtKB single-entry JSON URL
pub fn uniprot_entry_url(base_url: &str, accession: &str) -> String {
    format!(
        "{}/uniprotkb/{}.json",
        trim_base(base_url),
        urlencoding::encode(accession)
    )
}

/// Build PubMed esearch URL (JSON result)
pub fn esearch_url(
    base_url: &str,
    term: &str,
    retmax: u32,
    api_key: Option<&str>,
    email: Option<&str>,
) -> String {
    let url = format!(
        "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
        trim_base(base_url),
        urlencoding::encode(term),
        retmax
    );
    with_identity(url, api_key, email)
}

/// Build PubMed efetch URL for MEDLINE text records
pub fn efetch_url(
    base_url: &str,
    pmids: &[String],
    api_key: Option<&str>,
    email: Option<&str>,
) -> String {
    let url = format!(
        "{}/efetch.fcgi?db=pubmed&id={}&rettype=medline&retmode=text",
        trim_base(base_url),
        pmids.join(",")
    );
    with_identity(url, api_key, email)
}

fn with_identity(mut url: String, api_key: Option<&str>, email: Option<&str>) -> String {
    url.push_str(&format!("&tool={}", EUTILS_TOOL));

    if let Some(email) = email {
        url.push_str(&format!("&email={}", urlencoding::encode(email)));
    }

    if let Some(key) = api_key {
        url.push_str(&format!("&api_key={}", urlencoding::encode(key)));
    }

    url
}
