//! Configuration system for Folio.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod defaults;
pub mod folio_config;
pub mod recommend_config;

pub use folio_config::{ConfigOverrides, FolioConfig};
pub use recommend_config::RecommendConfig;
