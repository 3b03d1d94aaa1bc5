//! Records handed over by the ingestion layer and the normalized
//! structures every strategy works from.

pub mod catalog;
pub mod corpus;
pub mod records;

pub use catalog::{Catalog, CatalogItem};
pub use corpus::{Corpus, CorpusRow};
pub use records::{CatalogRecord, RatingRecord};

/// Case-fold a string-valued field. Every title, author, genre, and seed
/// query goes through this so lookups agree.
pub fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}
