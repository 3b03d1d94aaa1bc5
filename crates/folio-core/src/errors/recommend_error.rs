//! Recommendation query errors.

use super::error_code::{self, FolioErrorCode};
use super::ConfigError;

/// Errors raised by a recommendation query.
///
/// Every variant is fatal for the query that produced it. An undefined
/// correlation or an empty association result is not an error.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("Data integrity error in {source_name} record {index}: {field} {message}")]
    DataIntegrity {
        source_name: &'static str,
        index: usize,
        field: &'static str,
        message: String,
    },

    #[error("Seed title '{title}' not found in the {scope}")]
    SeedNotFound { title: String, scope: &'static str },

    #[error("No titles co-rated with '{seed}' reach {min_ratings} ratings")]
    InsufficientData { seed: String, min_ratings: usize },

    #[error("Unknown strategy '{tag}' (expected correlation, association, or content)")]
    UnknownStrategy { tag: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FolioErrorCode for RecommendError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DataIntegrity { .. } => error_code::DATA_INTEGRITY,
            Self::SeedNotFound { .. } => error_code::SEED_NOT_FOUND,
            Self::InsufficientData { .. } => error_code::INSUFFICIENT_DATA,
            Self::UnknownStrategy { .. } => error_code::UNKNOWN_STRATEGY,
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used across the engine.
pub type RecommendResult<T> = Result<T, RecommendError>;
