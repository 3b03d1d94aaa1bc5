//! Level-wise frequent itemset mining over a boolean presence matrix.
//!
//! 1. Frequent 1-itemsets: columns with support >= `min_support`
//! 2. Join (k-1)-itemsets sharing their first k-2 items into k-candidates
//! 3. Prune candidates with an infrequent (k-1)-subset
//! 4. Count the survivors against the matrix, keep the frequent ones
//! 5. Repeat until a level comes back empty

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::debug;

use crate::mining_span;

/// Sorted column indices of an itemset.
pub type ItemSet = SmallVec<[usize; 4]>;

/// Users as rows, titles as columns; a set bit means the user rated the
/// title at least once.
#[derive(Debug, Clone)]
pub struct PresenceMatrix {
    n_users: usize,
    columns: Vec<Vec<u64>>,
}

impl PresenceMatrix {
    /// Create an all-false matrix.
    pub fn new(n_users: usize, n_columns: usize) -> Self {
        let words = n_users.div_ceil(64);
        Self {
            n_users,
            columns: vec![vec![0u64; words]; n_columns],
        }
    }

    pub fn set(&mut self, user: usize, column: usize) {
        self.columns[column][user / 64] |= 1u64 << (user % 64);
    }

    pub fn contains(&self, user: usize, column: usize) -> bool {
        self.columns[column][user / 64] & (1u64 << (user % 64)) != 0
    }

    pub fn n_users(&self) -> usize {
        self.n_users
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    fn column(&self, column: usize) -> &[u64] {
        &self.columns[column]
    }
}

/// An itemset whose support cleared the mining threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset {
    pub items: ItemSet,
    /// Fraction of users holding every item in the set.
    pub support: f64,
}

/// Working entry of one mining level: the itemset plus the users covering it.
struct LevelEntry {
    items: ItemSet,
    cover: Vec<u64>,
}

/// Apriori miner.
#[derive(Debug, Clone, Copy)]
pub struct Apriori {
    min_support: f64,
}

impl Apriori {
    pub fn new(min_support: f64) -> Self {
        Self { min_support }
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    /// Mine every frequent itemset, ordered by size then lexicographically.
    pub fn mine(&self, matrix: &PresenceMatrix) -> Vec<FrequentItemset> {
        let _span = mining_span!(matrix.n_users(), matrix.n_columns()).entered();
        if matrix.n_users() == 0 {
            return Vec::new();
        }
        let n_users = matrix.n_users() as f64;
        let mut frequent = Vec::new();

        let mut level: Vec<LevelEntry> = (0..matrix.n_columns())
            .map(|c| LevelEntry {
                items: SmallVec::from_slice(&[c]),
                cover: matrix.column(c).to_vec(),
            })
            .filter(|entry| self.is_frequent(popcount(&entry.cover), n_users))
            .collect();

        let mut k = 1;
        while !level.is_empty() {
            debug!(k, itemsets = level.len(), "frequent level");
            for entry in &level {
                frequent.push(FrequentItemset {
                    items: entry.items.clone(),
                    support: popcount(&entry.cover) as f64 / n_users,
                });
            }
            level = self.next_level(&level, matrix, n_users);
            k += 1;
        }

        frequent
    }

    fn is_frequent(&self, count: usize, n_users: f64) -> bool {
        count > 0 && count as f64 / n_users >= self.min_support
    }

    /// Join, prune, and count the next level. `level` is sorted
    /// lexicographically, so entries sharing a prefix are contiguous.
    fn next_level(
        &self,
        level: &[LevelEntry],
        matrix: &PresenceMatrix,
        n_users: f64,
    ) -> Vec<LevelEntry> {
        let known: FxHashSet<&[usize]> = level.iter().map(|e| e.items.as_slice()).collect();
        let mut next = Vec::new();

        for (i, a) in level.iter().enumerate() {
            let prefix = &a.items[..a.items.len() - 1];
            for b in &level[i + 1..] {
                if &b.items[..b.items.len() - 1] != prefix {
                    break;
                }
                let last = b.items[b.items.len() - 1];
                let mut candidate = a.items.clone();
                candidate.push(last);

                if has_infrequent_subset(&candidate, &known) {
                    continue;
                }

                let cover: Vec<u64> = a
                    .cover
                    .iter()
                    .zip(matrix.column(last))
                    .map(|(x, y)| x & y)
                    .collect();
                if self.is_frequent(popcount(&cover), n_users) {
                    next.push(LevelEntry {
                        items: candidate,
                        cover,
                    });
                }
            }
        }

        next
    }
}

/// Whether dropping any single item yields a set missing from `known`.
fn has_infrequent_subset(candidate: &[usize], known: &FxHashSet<&[usize]>) -> bool {
    let mut subset: ItemSet = SmallVec::with_capacity(candidate.len() - 1);
    (0..candidate.len()).any(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, &item)| item),
        );
        !known.contains(subset.as_slice())
    })
}

fn popcount(bits: &[u64]) -> usize {
    bits.iter().map(|w| w.count_ones() as usize).sum()
}

/// Support lookup keyed by itemset.
pub fn support_index(itemsets: &[FrequentItemset]) -> FxHashMap<ItemSet, f64> {
    itemsets
        .iter()
        .map(|set| (set.items.clone(), set.support))
        .collect()
}
