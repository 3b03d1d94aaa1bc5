//! Ratings joined with the catalog: the working dataset of the
//! collaborative strategies.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Catalog, CatalogRecord, RatingRecord};
use crate::constants::{IMPLICIT_RATING, MAX_RATING};
use crate::errors::{RecommendError, RecommendResult};

/// One explicit rating joined with its catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    pub user_id: String,
    pub item_id: String,
    pub title: String,
    pub author: String,
    /// Always in `1..=10`.
    pub rating: u8,
}

/// Explicit ratings inner-joined with the catalog on item id.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    rows: Vec<CorpusRow>,
}

impl Corpus {
    /// Normalize raw records into a corpus.
    pub fn from_records(
        ratings: &[RatingRecord],
        catalog: &[CatalogRecord],
    ) -> RecommendResult<Self> {
        let catalog = Catalog::from_records(catalog)?;
        Self::build(ratings, &catalog)
    }

    /// Join ratings with an already normalized catalog.
    ///
    /// Implicit (zero) ratings are dropped, ratings whose item id has no
    /// catalog row vanish, and a catalog id listed twice yields one row per
    /// match.
    pub fn build(ratings: &[RatingRecord], catalog: &Catalog) -> RecommendResult<Self> {
        let mut by_id: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
        for (idx, item) in catalog.items().iter().enumerate() {
            by_id.entry(item.item_id.as_str()).or_default().push(idx);
        }

        let mut rows = Vec::with_capacity(ratings.len());
        let mut implicit = 0usize;
        let mut unmatched = 0usize;
        for (index, rating) in ratings.iter().enumerate() {
            let user_id = rating.user_id.trim();
            if user_id.is_empty() {
                return Err(integrity(index, "user_id", "is missing or empty".to_string()));
            }
            let item_id = rating.item_id.trim();
            if item_id.is_empty() {
                return Err(integrity(index, "item_id", "is missing or empty".to_string()));
            }
            if rating.rating > MAX_RATING {
                return Err(integrity(
                    index,
                    "rating",
                    format!("{} is outside 0..={}", rating.rating, MAX_RATING),
                ));
            }
            if rating.rating == IMPLICIT_RATING {
                implicit += 1;
                continue;
            }
            let Some(matches) = by_id.get(item_id) else {
                unmatched += 1;
                continue;
            };
            for &idx in matches {
                let item = &catalog.items()[idx];
                rows.push(CorpusRow {
                    user_id: user_id.to_lowercase(),
                    item_id: item.item_id.clone(),
                    title: item.title.clone(),
                    author: item.author.clone(),
                    rating: rating.rating,
                });
            }
        }

        debug!(
            rows = rows.len(),
            implicit,
            unmatched,
            catalog = catalog.len(),
            "corpus normalized"
        );

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any row carries `title` (already folded).
    pub fn contains_title(&self, title: &str) -> bool {
        self.rows.iter().any(|row| row.title == title)
    }
}

fn integrity(index: usize, field: &'static str, message: String) -> RecommendError {
    RecommendError::DataIntegrity {
        source_name: "ratings",
        index,
        field,
        message,
    }
}
