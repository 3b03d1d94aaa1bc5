//! Co-rating filter: readers of the seed and the titles they rated often
//! enough to compare.
//!
//! Shared unmodified by the correlation and association strategies so both
//! see the same neighborhood; only the downstream statistic differs.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use folio_core::errors::{RecommendError, RecommendResult};
use folio_core::models::{fold, Corpus, CorpusRow};

/// Per-title tallies over the neighborhood rows.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    count: usize,
    sum: u64,
}

/// The corpus restricted to readers of the seed title.
#[derive(Debug, Clone)]
pub struct Neighborhood<'a> {
    seed: String,
    rows: Vec<&'a CorpusRow>,
    readers: usize,
    tallies: FxHashMap<&'a str, Tally>,
    /// Titles other than the seed with at least `min_ratings` rows, sorted.
    comparison: Vec<&'a str>,
}

impl<'a> Neighborhood<'a> {
    /// Restrict `corpus` to readers of `seed` and pick comparison titles.
    ///
    /// Fails with `SeedNotFound` when nobody rated the seed and with
    /// `InsufficientData` when no other title reaches `min_ratings`.
    pub fn build(corpus: &'a Corpus, seed: &str, min_ratings: usize) -> RecommendResult<Self> {
        let seed = fold(seed);

        let readers: FxHashSet<&str> = corpus
            .rows()
            .iter()
            .filter(|row| row.title == seed)
            .map(|row| row.user_id.as_str())
            .collect();
        if readers.is_empty() {
            return Err(RecommendError::SeedNotFound {
                title: seed,
                scope: "rated corpus",
            });
        }

        let rows: Vec<&CorpusRow> = corpus
            .rows()
            .iter()
            .filter(|row| readers.contains(row.user_id.as_str()))
            .collect();

        let mut tallies: FxHashMap<&str, Tally> = FxHashMap::default();
        for &row in &rows {
            let tally = tallies.entry(row.title.as_str()).or_default();
            tally.count += 1;
            tally.sum += u64::from(row.rating);
        }

        let mut comparison: Vec<&str> = tallies
            .iter()
            .filter(|(title, tally)| **title != seed && tally.count >= min_ratings)
            .map(|(title, _)| *title)
            .collect();
        comparison.sort_unstable();

        debug!(
            seed = %seed,
            readers = readers.len(),
            rows = rows.len(),
            titles = tallies.len(),
            comparison = comparison.len(),
            min_ratings,
            "neighborhood built"
        );

        if comparison.is_empty() {
            return Err(RecommendError::InsufficientData { seed, min_ratings });
        }

        Ok(Self {
            seed,
            readers: readers.len(),
            rows,
            tallies,
            comparison,
        })
    }

    /// The folded seed title.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Every corpus row of a seed reader, seed rows included.
    pub fn rows(&self) -> &[&'a CorpusRow] {
        &self.rows
    }

    /// Number of distinct users who rated the seed.
    pub fn reader_count(&self) -> usize {
        self.readers
    }

    pub fn comparison_titles(&self) -> &[&'a str] {
        &self.comparison
    }

    /// Rows carrying `title` within the neighborhood.
    pub fn rating_count(&self, title: &str) -> usize {
        self.tallies.get(title).map_or(0, |t| t.count)
    }

    /// Mean rating of `title` over all neighborhood rows, regardless of
    /// whether it passed the `min_ratings` cut.
    pub fn mean_rating(&self, title: &str) -> Option<f64> {
        self.tallies
            .get(title)
            .filter(|t| t.count > 0)
            .map(|t| t.sum as f64 / t.count as f64)
    }
}
