//! Ranked output records shared by every strategy.

use std::fmt;

use serde::Serialize;

use crate::collaborative::{AssociatedTitle, CorrelatedTitle};
use crate::content::SimilarItem;

/// The number that justifies a recommendation's rank, tagged by strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metric {
    /// Pearson r with the seed; NaN when undefined.
    Correlation { coefficient: f64, mean_rating: f64 },
    /// Statistics of the highest-lift rule reaching the title.
    Association {
        lift: f64,
        confidence: f64,
        support: f64,
    },
    /// Cosine similarity of the author/genre vectors.
    Similarity {
        similarity: f64,
        item_id: String,
        author: String,
    },
}

impl Metric {
    /// The ranking number: correlation, lift, or similarity.
    pub fn score(&self) -> f64 {
        match self {
            Self::Correlation { coefficient, .. } => *coefficient,
            Self::Association { lift, .. } => *lift,
            Self::Similarity { similarity, .. } => *similarity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Correlation { .. } => "correlation",
            Self::Association { .. } => "lift",
            Self::Similarity { .. } => "similarity",
        }
    }
}

/// One entry of a ranked recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// 1-based position in the list.
    pub rank: usize,
    pub title: String,
    pub metric: Metric,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.metric.score();
        if score.is_nan() {
            write!(f, "{}. {} ({} undefined)", self.rank, self.title, self.metric.label())
        } else {
            write!(f, "{}. {} ({} {:.2})", self.rank, self.title, self.metric.label(), score)
        }
    }
}

impl From<CorrelatedTitle> for (String, Metric) {
    fn from(c: CorrelatedTitle) -> Self {
        (
            c.title,
            Metric::Correlation {
                coefficient: c.correlation,
                mean_rating: c.mean_rating,
            },
        )
    }
}

impl From<AssociatedTitle> for (String, Metric) {
    fn from(a: AssociatedTitle) -> Self {
        (
            a.title,
            Metric::Association {
                lift: a.lift,
                confidence: a.confidence,
                support: a.support,
            },
        )
    }
}

impl From<SimilarItem> for (String, Metric) {
    fn from(s: SimilarItem) -> Self {
        (
            s.title,
            Metric::Similarity {
                similarity: s.similarity,
                item_id: s.item_id,
                author: s.author,
            },
        )
    }
}

/// Take the first `top_n` ranked entries and number them from 1.
pub fn ranked<T>(items: Vec<T>, top_n: usize) -> Vec<Recommendation>
where
    T: Into<(String, Metric)>,
{
    items
        .into_iter()
        .take(top_n)
        .enumerate()
        .map(|(i, item)| {
            let (title, metric) = item.into();
            Recommendation {
                rank: i + 1,
                title,
                metric,
            }
        })
        .collect()
}
