//! Bag-of-terms count vectors and cosine similarity.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

/// Runs of two or more word characters; single-character tokens are noise.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Split lowercase text into count-vectorizer tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}

/// Sparse term-count vector, entries sorted by term index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, u32)>,
}

impl TermVector {
    pub fn entries(&self) -> &[(usize, u32)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of squared counts, exact in f64 for any realistic document.
    fn norm_squared(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, c)| f64::from(c) * f64::from(c))
            .sum()
    }

    fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j, mut dot) = (0, 0, 0.0f64);
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, ci) = self.entries[i];
            let (tj, cj) = other.entries[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += f64::from(ci) * f64::from(cj);
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }
}

/// Cosine similarity between two count vectors.
/// Returns 0.0 when either vector is empty.
///
/// Counts are integers, so the dot product and the norm product are exact
/// and identical vectors score exactly 1.0.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let denom = (a.norm_squared() * b.norm_squared()).sqrt();
    if denom < f64::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0)
}

/// Vocabulary learned from a document set.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    vocabulary: FxHashMap<String, usize>,
}

impl CountVectorizer {
    /// Learn the vocabulary of `documents` and return one count vector per
    /// document. Term indices follow sorted term order.
    pub fn fit_transform(documents: &[String]) -> (Self, Vec<TermVector>) {
        let mut terms: Vec<&str> = documents.iter().flat_map(|d| tokenize(d)).collect();
        terms.sort_unstable();
        terms.dedup();
        let vocabulary: FxHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        let vectorizer = Self { vocabulary };
        let vectors = documents.iter().map(|d| vectorizer.transform(d)).collect();
        (vectorizer, vectors)
    }

    /// Count vector of `document` over the learned vocabulary; unknown
    /// terms are ignored.
    pub fn transform(&self, document: &str) -> TermVector {
        let mut counts: FxHashMap<usize, u32> = FxHashMap::default();
        for token in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(token) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }
        let mut entries: Vec<(usize, u32)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(idx, _)| idx);
        TermVector { entries }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}
