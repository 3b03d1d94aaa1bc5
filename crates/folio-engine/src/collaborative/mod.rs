//! Collaborative strategies over the co-rating neighborhood.

pub mod apriori;
pub mod association;
pub mod correlation;

pub use apriori::{Apriori, FrequentItemset, PresenceMatrix};
pub use association::{AssociatedTitle, AssociationOutcome, AssociationRule, RuleThresholds};
pub use correlation::{CorrelatedTitle, UserItemMatrix};
