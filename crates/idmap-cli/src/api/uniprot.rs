//! HTTP client for the UniProt REST API
//!
//! One GET per call, no retries. Errors are reported as [`ResolveError`] so the
//! resolver can record them against the identifier.

use crate::api::{endpoints, types::*};
use crate::config::Config;
use crate::error::{CliError, ResolveError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, FROM};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Outcome of one UniProt request
pub type LookupResult<T> = std::result::Result<T, ResolveError>;

/// Fields requested from the search endpoint
pub const SEARCH_FIELDS: &[&str] = &["accession", "protein_name", "gene_names", "ft_chain"];

/// UniProt REST client
#[derive(Debug, Clone)]
pub struct UniProtClient {
    client: Client,
    base_url: String,
}

impl UniProtClient {
    /// Create a client with the contact and credential headers from `config`
    pub fn new(config: &Config) -> Result<Self> {
        let contact = config.email.as_deref().unwrap_or("no contact given");
        let user_agent = format!("idmap/{} ({})", env!("CARGO_PKG_VERSION"), contact);

        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(user_agent)
            .default_headers(identity_headers(config)?)
            .build()?;

        Ok(Self {
            client,
            base_url: config.uniprot_url.clone(),
        })
    }

    /// Best search hit for a query, `None` when nothing matches
    pub async fn search_first(&self, query: &str) -> LookupResult<Option<UniProtEntry>> {
        let url = endpoints::uniprot_search_url(&self.base_url, query, SEARCH_FIELDS, 1);
        let results: SearchResults = self.get_json(&url).await?;
        Ok(results.results.into_iter().next())
    }

    /// Fetch an entry by accession, `None` when UniProt has no such entry
    pub async fn entry(&self, accession: &str) -> LookupResult<Option<UniProtEntry>> {
        let url = endpoints::uniprot_entry_url(&self.base_url, accession);

        match self.get_json(&url).await {
            Ok(entry) => Ok(Some(entry)),
            Err(ResolveError::Status { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> LookupResult<T> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn identity_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    if let Some(ref email) = config.email {
        let value = HeaderValue::from_str(email)
            .map_err(|_| CliError::config(format!("Email '{}' is not a valid header value", email)))?;
        headers.insert(FROM, value);
    }

    if let Some(ref key) = config.uniprot_api_key {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| CliError::config("UniProt API key contains invalid characters"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
