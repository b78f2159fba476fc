//! idmap Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, logging, and error handling for the idmap workspace.
//!
//! # Overview
//!
//! - **Error Handling**: Common error and result types
//! - **Logging**: `tracing` subscriber setup shared by every binary
//! - **Types**: Resolution outcomes and the UniProt record model
//!
//! # Example
//!
//! ```no_run
//! use idmap_common::types::{Record, Resolution};
//!
//! let outcome = Resolution::Resolved(Record::new("P04637"));
//! assert_eq!(outcome.accession_cell(), "P04637");
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{IdmapError, Result};
pub use types::{Record, Resolution, NOT_AVAILABLE};
