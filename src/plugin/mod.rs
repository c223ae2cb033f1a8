//! Host-side view of RDF metadata.
//!
//! Turns `rdf` records into the catalog types a plugin browser works with,
//! and persists the catalog between runs.

pub mod cache;
pub mod catalog;
pub mod types;

pub use catalog::DescriptorCatalog;
pub use types::*;
