//! Content-based strategy: author/genre term vectors ranked by cosine
//! similarity to the seed. Runs over the whole catalog; ratings play no
//! part.

pub mod vectorizer;

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use folio_core::errors::{RecommendError, RecommendResult};
use folio_core::models::{fold, Catalog};

pub use vectorizer::{cosine_similarity, CountVectorizer, TermVector};

/// A catalog item scored against the seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarItem {
    /// Position in the catalog.
    pub index: usize,
    pub item_id: String,
    pub title: String,
    pub author: String,
    pub similarity: f64,
}

/// `author genre` text of every catalog item.
///
/// Fails with `DataIntegrity` on the first item without a genre.
pub fn feature_texts(catalog: &Catalog) -> RecommendResult<Vec<String>> {
    catalog
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| match &item.genre {
            Some(genre) => Ok(format!("{} {}", item.author, genre)),
            None => Err(RecommendError::DataIntegrity {
                source_name: "catalog",
                index,
                field: "genre",
                message: format!("is required for content similarity (item {})", item.item_id),
            }),
        })
        .collect()
}

/// Similarity descending, then title ascending, then catalog position.
pub fn rank_order(a: &SimilarItem, b: &SimilarItem) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.index.cmp(&b.index))
}

/// Rank every other catalog item by similarity to `seed`.
///
/// The seed is the first catalog row carrying its title; later rows with
/// the same title are left out of the result as well.
pub fn recommend(catalog: &Catalog, seed: &str) -> RecommendResult<Vec<SimilarItem>> {
    let seed = fold(seed);
    let seed_idx = catalog
        .position_of(&seed)
        .ok_or_else(|| RecommendError::SeedNotFound {
            title: seed.clone(),
            scope: "catalog",
        })?;

    let texts = feature_texts(catalog)?;
    let (vectorizer, vectors) = CountVectorizer::fit_transform(&texts);
    let seed_vector = &vectors[seed_idx];
    let seed_text = &texts[seed_idx];

    let mut ranked: Vec<SimilarItem> = catalog
        .items()
        .iter()
        .zip(vectors.iter().zip(&texts))
        .enumerate()
        .filter(|(_, (item, _))| item.title != seed)
        .map(|(index, (item, (vector, text)))| SimilarItem {
            index,
            item_id: item.item_id.clone(),
            title: item.title.clone(),
            author: item.author.clone(),
            // Identical text is a perfect match even when no token survives.
            similarity: if text == seed_text {
                1.0
            } else {
                cosine_similarity(seed_vector, vector)
            },
        })
        .collect();
    ranked.sort_by(rank_order);

    debug!(
        items = catalog.len(),
        vocabulary = vectorizer.vocabulary_len(),
        seed_index = seed_idx,
        "content similarity complete"
    );

    Ok(ranked)
}
