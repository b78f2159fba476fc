//! Identifier resolution against UniProt
//!
//! [`UniProtResolver`] turns one identifier into a [`Resolution`]. It never
//! returns an error: transport and decoding failures become
//! [`Resolution::Failed`], and every outcome is stored in the run cache.

use crate::api::UniProtClient;
use crate::cache::ResolutionCache;
use crate::error::ResolveError;
use async_trait::async_trait;
use clap::ValueEnum;
use idmap_common::{Record, Resolution};
use tracing::{debug, warn};

/// Anything that can resolve identifiers for a batch
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(&self, identifier: &str) -> Resolution;
}

/// Field the search endpoint matches identifiers against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QueryField {
    /// Exact gene symbol
    #[default]
    Gene,
    /// Protein name
    Protein,
}

impl QueryField {
    fn as_uniprot_field(self) -> &'static str {
        match self {
            QueryField::Gene => "gene_exact",
            QueryField::Protein => "protein_name",
        }
    }
}

/// Search-endpoint query template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery {
    pub field: QueryField,
    /// NCBI taxonomy id, 9606 for human
    pub organism_id: u32,
}

impl SearchQuery {
    /// UniProt query string for one identifier
    pub fn for_identifier(&self, identifier: &str) -> String {
        format!(
            "{}:\"{}\" AND organism_id:{}",
            self.field.as_uniprot_field(),
            identifier.replace('\\', "\\\\").replace('"', "\\\""),
            self.organism_id
        )
    }
}

/// Which UniProt endpoint a resolver uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverProfile {
    /// Free-text names through `/uniprotkb/search`
    Search(SearchQuery),
    /// Accessions through `/uniprotkb/<accession>.json`
    Entry,
}

/// Literal prefixes of identifiers that are never looked up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipFilter {
    prefixes: Vec<String>,
}

impl SkipFilter {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// First configured prefix the identifier starts with
    pub fn matching_prefix(&self, identifier: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| identifier.starts_with(prefix))
    }
}

/// Caching UniProt resolver
pub struct UniProtResolver {
    client: UniProtClient,
    profile: ResolverProfile,
    skip: SkipFilter,
    cache: ResolutionCache,
}

impl UniProtResolver {
    pub fn new(
        client: UniProtClient,
        profile: ResolverProfile,
        skip: SkipFilter,
        cache: ResolutionCache,
    ) -> Self {
        Self {
            client,
            profile,
            skip,
            cache,
        }
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    async fn lookup(&self, identifier: &str) -> Result<Option<Record>, ResolveError> {
        let entry = match self.profile {
            ResolverProfile::Search(query) => {
                self.client
                    .search_first(&query.for_identifier(identifier))
                    .await?
            },
            ResolverProfile::Entry => self.client.entry(identifier).await?,
        };

        Ok(entry.map(|e| e.into_record()))
    }
}

#[async_trait]
impl Resolve for UniProtResolver {
    async fn resolve(&self, identifier: &str) -> Resolution {
        if let Some(cached) = self.cache.get(identifier) {
            debug!(identifier, outcome = %cached, "Cache hit");
            return cached;
        }

        let outcome = if let Some(prefix) = self.skip.matching_prefix(identifier) {
            debug!(identifier, prefix, "Skipped by prefix filter");
            Resolution::Skipped
        } else {
            match self.lookup(identifier).await {
                Ok(Some(record)) => Resolution::Resolved(record),
                Ok(None) => Resolution::NotFound,
                Err(e) => {
                    warn!(identifier, error = %e, "Lookup failed");
                    Resolution::Failed(e.to_string())
                },
            }
        };

        debug!(identifier, outcome = %outcome, "Resolved");
        self.cache.insert(identifier, outcome.clone());
        outcome
    }
}
