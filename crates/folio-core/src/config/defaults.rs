// Single source of truth for all default values.

// --- Ranking ---
pub const DEFAULT_TOP_N: usize = 10;

// --- Co-rating filter ---
pub const DEFAULT_MIN_RATINGS: usize = 8;

// --- Association rules ---
pub const DEFAULT_MIN_SUPPORT: f64 = 0.05;
pub const DEFAULT_MIN_LIFT: f64 = 2.0;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "folio=info";
