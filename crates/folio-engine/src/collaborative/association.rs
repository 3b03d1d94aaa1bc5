//! Association rules over the co-rating neighborhood, ranked by lift.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use super::apriori::{support_index, Apriori, FrequentItemset, ItemSet, PresenceMatrix};
use crate::neighborhood::Neighborhood;

/// Thresholds for rule mining.
#[derive(Debug, Clone, Copy)]
pub struct RuleThresholds {
    pub min_support: f64,
    pub min_lift: f64,
}

/// `antecedent => consequent` over titles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    /// Support of antecedent ∪ consequent.
    pub support: f64,
    /// support(itemset) / support(antecedent).
    pub confidence: f64,
    /// confidence / support(consequent).
    pub lift: f64,
}

/// A recommended title with the statistics of the best rule behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociatedTitle {
    pub title: String,
    pub lift: f64,
    pub confidence: f64,
    pub support: f64,
}

/// Everything one association query produced.
#[derive(Debug, Clone, Default)]
pub struct AssociationOutcome {
    /// Rules with lift >= `min_lift` and the seed in the antecedent.
    pub rules: Vec<AssociationRule>,
    /// Distinct consequent titles, highest lift first.
    pub titles: Vec<AssociatedTitle>,
}

/// Build the presence matrix for the seed plus every comparison title.
///
/// Column 0 is the seed; the remaining columns follow the sorted
/// comparison titles. Users are the seed's readers in id order.
pub fn presence_matrix<'a>(neighborhood: &Neighborhood<'a>) -> (PresenceMatrix, Vec<&'a str>) {
    let mut users: Vec<&str> = neighborhood
        .rows()
        .iter()
        .map(|row| row.user_id.as_str())
        .collect();
    users.sort_unstable();
    users.dedup();
    let user_index: FxHashMap<&str, usize> =
        users.iter().enumerate().map(|(i, &u)| (u, i)).collect();

    let mut titles: Vec<&'a str> = Vec::with_capacity(neighborhood.comparison_titles().len() + 1);
    let seed_title = neighborhood
        .rows()
        .iter()
        .copied()
        .map(|row| row.title.as_str())
        .find(|&title| title == neighborhood.seed());
    titles.extend(seed_title);
    titles.extend(neighborhood.comparison_titles().iter().copied());
    let title_index: FxHashMap<&str, usize> =
        titles.iter().enumerate().map(|(i, &t)| (t, i)).collect();

    let mut matrix = PresenceMatrix::new(users.len(), titles.len());
    for row in neighborhood.rows() {
        let (Some(&u), Some(&t)) = (
            user_index.get(row.user_id.as_str()),
            title_index.get(row.title.as_str()),
        ) else {
            continue;
        };
        matrix.set(u, t);
    }
    (matrix, titles)
}

/// Every rule from `itemsets` whose lift clears `min_lift`.
///
/// Each frequent itemset of size >= 2 contributes one rule per
/// non-trivial bipartition.
pub fn generate_rules(
    itemsets: &[FrequentItemset],
    titles: &[&str],
    min_lift: f64,
) -> Vec<AssociationRule> {
    let supports = support_index(itemsets);
    let mut rules = Vec::new();

    for set in itemsets.iter().filter(|s| s.items.len() >= 2) {
        let n = set.items.len();
        debug_assert!(n < 64, "itemset of {n} titles is past the bipartition mask width");
        for mask in 1..(1u64 << n) - 1 {
            let (antecedent, consequent): (ItemSet, ItemSet) = split(&set.items, mask);
            // Subsets of a frequent set are frequent, so both lookups hit.
            let (Some(&ante_support), Some(&cons_support)) =
                (supports.get(&antecedent), supports.get(&consequent))
            else {
                continue;
            };
            let confidence = set.support / ante_support;
            let lift = confidence / cons_support;
            if lift >= min_lift {
                rules.push(AssociationRule {
                    antecedent: names(&antecedent, titles),
                    consequent: names(&consequent, titles),
                    support: set.support,
                    confidence,
                    lift,
                });
            }
        }
    }

    rules
}

fn split(items: &[usize], mask: u64) -> (ItemSet, ItemSet) {
    let mut antecedent = ItemSet::new();
    let mut consequent = ItemSet::new();
    for (i, &item) in items.iter().enumerate() {
        if mask & (1u64 << i) != 0 {
            antecedent.push(item);
        } else {
            consequent.push(item);
        }
    }
    (antecedent, consequent)
}

fn names(items: &[usize], titles: &[&str]) -> Vec<String> {
    items.iter().map(|&i| titles[i].to_string()).collect()
}

/// Flatten rule consequents into distinct titles. A title reached by
/// several rules keeps its highest-lift rule; ties go to the first rule
/// generated. Sorted by lift descending, then title ascending.
pub fn rank_consequents(rules: &[AssociationRule], seed: &str) -> Vec<AssociatedTitle> {
    let mut best: FxHashMap<&str, &AssociationRule> = FxHashMap::default();
    for rule in rules {
        for title in rule.consequent.iter().filter(|t| t.as_str() != seed) {
            best.entry(title.as_str())
                .and_modify(|current| {
                    if rule.lift > current.lift {
                        *current = rule;
                    }
                })
                .or_insert(rule);
        }
    }

    let mut ranked: Vec<AssociatedTitle> = best
        .into_iter()
        .map(|(title, rule)| AssociatedTitle {
            title: title.to_string(),
            lift: rule.lift,
            confidence: rule.confidence,
            support: rule.support,
        })
        .collect();
    ranked.sort_by(rank_order);
    ranked
}

/// Lift descending, then title ascending.
pub fn rank_order(a: &AssociatedTitle, b: &AssociatedTitle) -> Ordering {
    b.lift
        .total_cmp(&a.lift)
        .then_with(|| a.title.cmp(&b.title))
}

/// Mine rules over the neighborhood and rank the titles they point to.
pub fn recommend(neighborhood: &Neighborhood<'_>, thresholds: RuleThresholds) -> AssociationOutcome {
    let seed = neighborhood.seed();
    let (matrix, titles) = presence_matrix(neighborhood);
    let itemsets = Apriori::new(thresholds.min_support).mine(&matrix);
    let all_rules = generate_rules(&itemsets, &titles, thresholds.min_lift);
    let total_rules = all_rules.len();

    let rules: Vec<AssociationRule> = all_rules
        .into_iter()
        .filter(|rule| rule.antecedent.iter().any(|t| t == seed))
        .collect();
    let titles = rank_consequents(&rules, seed);

    debug!(
        users = matrix.n_users(),
        columns = matrix.n_columns(),
        itemsets = itemsets.len(),
        rules = total_rules,
        seed_rules = rules.len(),
        recommended = titles.len(),
        "association mining complete"
    );

    AssociationOutcome { rules, titles }
}
