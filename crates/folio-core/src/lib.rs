//! # folio-core
//!
//! Foundation crate for the Folio book recommendation engine.
//! Defines records, the normalized corpus, errors, config, tracing setup,
//! and the strategy tag. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod strategy;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{FolioConfig, RecommendConfig};
pub use errors::{ConfigError, FolioErrorCode, RecommendError, RecommendResult};
pub use models::{Catalog, CatalogItem, CatalogRecord, Corpus, CorpusRow, RatingRecord};
pub use strategy::Strategy;
