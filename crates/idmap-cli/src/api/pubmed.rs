//! NCBI E-utilities client for PubMed
//!
//! Endpoints used:
//!   esearch: `<base>/esearch.fcgi` (JSON id list)
//!   efetch:  `<base>/efetch.fcgi`  (MEDLINE text)

use crate::api::{endpoints, types::ESearchResponse};
use crate::config::Config;
use crate::error::{CliError, Result};
use reqwest::Client;
use tracing::{debug, instrument};

/// PubMed search and fetch client
#[derive(Debug, Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    email: Option<String>,
}

impl PubMedClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.eutils_url.clone(),
            api_key: config.ncbi_api_key.clone(),
            email: config.email.clone(),
        })
    }

    /// Search PubMed and return up to `retmax` PMIDs
    #[instrument(skip(self, term))]
    pub async fn esearch(&self, term: &str, retmax: u32) -> Result<Vec<String>> {
        let url = endpoints::esearch_url(
            &self.base_url,
            term,
            retmax,
            self.api_key.as_deref(),
            self.email.as_deref(),
        );

        let response: ESearchResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.esearchresult.error {
            return Err(CliError::api(format!("PubMed rejected the search term: {}", error)));
        }

        debug!(
            total = response.esearchresult.count.as_deref().unwrap_or("?"),
            returned = response.esearchresult.idlist.len(),
            "PubMed esearch finished"
        );
        Ok(response.esearchresult.idlist)
    }

    /// Fetch MEDLINE text records for the given PMIDs
    #[instrument(skip(self, pmids), fields(count = pmids.len()))]
    pub async fn efetch_medline(&self, pmids: &[String]) -> Result<String> {
        if pmids.is_empty() {
            return Ok(String::new());
        }

        let url = endpoints::efetch_url(
            &self.base_url,
            pmids,
            self.api_key.as_deref(),
            self.email.as_deref(),
        );

        let text = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(text)
    }
}
