//! Error handling for Folio.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod recommend_error;

pub use config_error::ConfigError;
pub use error_code::FolioErrorCode;
pub use recommend_error::{RecommendError, RecommendResult};
