//! Pearson correlation against the seed column of a user × title matrix.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use statrs::statistics::Statistics;
use tracing::debug;

use folio_core::models::CorpusRow;

use crate::neighborhood::Neighborhood;

/// One title's mean rating per user; users are kept ordered so every
/// pairwise computation visits them in the same order.
pub type RatingColumn<'a> = BTreeMap<&'a str, f64>;

/// Sparse user × title rating matrix. Missing cells are unknown, not zero.
#[derive(Debug, Clone, Default)]
pub struct UserItemMatrix<'a> {
    columns: FxHashMap<&'a str, RatingColumn<'a>>,
}

impl<'a> UserItemMatrix<'a> {
    /// Build the matrix over `titles`, averaging repeated ratings of the
    /// same title by the same user.
    pub fn build(rows: &[&'a CorpusRow], titles: &[&'a str]) -> Self {
        let wanted: FxHashSet<&str> = titles.iter().copied().collect();
        let mut cells: FxHashMap<(&'a str, &'a str), (u32, u32)> = FxHashMap::default();
        for &row in rows {
            if !wanted.contains(row.title.as_str()) {
                continue;
            }
            let cell = cells
                .entry((row.title.as_str(), row.user_id.as_str()))
                .or_default();
            cell.0 += u32::from(row.rating);
            cell.1 += 1;
        }

        let mut columns: FxHashMap<&'a str, RatingColumn<'a>> = FxHashMap::default();
        for ((title, user), (sum, count)) in cells {
            columns
                .entry(title)
                .or_default()
                .insert(user, f64::from(sum) / f64::from(count));
        }
        Self { columns }
    }

    pub fn column(&self, title: &str) -> Option<&RatingColumn<'a>> {
        self.columns.get(title)
    }

    pub fn title_count(&self) -> usize {
        self.columns.len()
    }
}

/// Pearson correlation over users present in both columns.
///
/// Returns NaN with fewer than two shared users or when either side has
/// no variance.
pub fn pearson(a: &RatingColumn<'_>, b: &RatingColumn<'_>) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = a
        .iter()
        .filter_map(|(user, &x)| b.get(user).map(|&y| (x, y)))
        .unzip();
    if xs.len() < 2 {
        return f64::NAN;
    }
    let cov = xs.iter().covariance(ys.iter());
    let denom = xs.iter().std_dev() * ys.iter().std_dev();
    if denom == 0.0 {
        return f64::NAN;
    }
    (cov / denom).clamp(-1.0, 1.0)
}

/// A title ranked by correlation with the seed.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelatedTitle {
    pub title: String,
    /// NaN when undefined.
    pub correlation: f64,
    /// Informational; only breaks correlation ties.
    pub mean_rating: f64,
}

/// Correlation first (NaN last), then mean rating, both descending, then
/// title ascending.
pub fn rank_order(a: &CorrelatedTitle, b: &CorrelatedTitle) -> Ordering {
    let by_corr = match (a.correlation.is_nan(), b.correlation.is_nan()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => b.correlation.total_cmp(&a.correlation),
    };
    by_corr
        .then_with(|| b.mean_rating.total_cmp(&a.mean_rating))
        .then_with(|| a.title.cmp(&b.title))
}

/// Rank every comparison title by correlation with the seed.
pub fn recommend(neighborhood: &Neighborhood<'_>) -> Vec<CorrelatedTitle> {
    let seed = neighborhood.seed();
    // The seed column rides along even when the seed itself is below the
    // rating threshold.
    let mut titles: Vec<&str> = Vec::with_capacity(neighborhood.comparison_titles().len() + 1);
    titles.extend(neighborhood.comparison_titles().iter().copied());
    titles.push(seed);

    let matrix = UserItemMatrix::build(neighborhood.rows(), &titles);
    let empty = RatingColumn::new();
    let seed_column = matrix.column(seed).unwrap_or(&empty);

    let mut ranked: Vec<CorrelatedTitle> = neighborhood
        .comparison_titles()
        .iter()
        .map(|&title| {
            let correlation = matrix
                .column(title)
                .map_or(f64::NAN, |column| pearson(column, seed_column));
            CorrelatedTitle {
                title: title.to_string(),
                correlation,
                mean_rating: neighborhood.mean_rating(title).unwrap_or(f64::NAN),
            }
        })
        .collect();
    ranked.sort_by(rank_order);

    debug!(
        users = seed_column.len(),
        titles = matrix.title_count(),
        undefined = ranked.iter().filter(|c| c.correlation.is_nan()).count(),
        "correlation ranking complete"
    );

    ranked
}
