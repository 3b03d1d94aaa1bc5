//! Span definitions per operation.

/// Create the span wrapping one recommendation query.
#[macro_export]
macro_rules! recommend_span {
    ($seed:expr, $strategy:expr) => {
        tracing::info_span!("folio.recommend", seed = %$seed, strategy = %$strategy)
    };
}

/// Create the span wrapping frequent-itemset mining.
#[macro_export]
macro_rules! mining_span {
    ($users:expr, $titles:expr) => {
        tracing::debug_span!("folio.mining", users = $users, titles = $titles)
    };
}
