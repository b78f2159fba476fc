//! API client module
//!
//! HTTP clients for the UniProt REST API and NCBI E-utilities.

pub mod endpoints;
pub mod pubmed;
pub mod types;
pub mod uniprot;

pub use pubmed::PubMedClient;
pub use types::*;
pub use uniprot::UniProtClient;
