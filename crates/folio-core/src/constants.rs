/// Folio engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest explicit rating on the rating scale.
pub const MAX_RATING: u8 = 10;

/// Rating value meaning "implicit interaction, no explicit rating".
pub const IMPLICIT_RATING: u8 = 0;

/// Environment variable read by [`crate::tracing::init_tracing`].
pub const LOG_ENV_VAR: &str = "FOLIO_LOG";

/// Project-level config file name.
pub const CONFIG_FILENAME: &str = "folio.toml";
