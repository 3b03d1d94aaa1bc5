//! # folio-engine
//!
//! Recommends books for one seed title over a ratings/catalog corpus.
//!
//! ## 3 Strategies
//!
//! | Strategy | Input | Ranked by |
//! |----------|-------|-----------|
//! | Correlation | Co-rating neighborhood | Pearson r with the seed column |
//! | Association | Co-rating neighborhood | Max lift of rules with the seed in the antecedent |
//! | Content | Whole catalog | Cosine similarity of author/genre term counts |
//!
//! Every query normalizes its own snapshot of the records; nothing is
//! cached between queries.

pub mod collaborative;
pub mod content;
pub mod engine;
pub mod neighborhood;
pub mod recommendation;
pub mod spans;

pub use engine::{recommend, RecommendEngine, RecommendRequest};
pub use neighborhood::Neighborhood;
pub use recommendation::{Metric, Recommendation};
