//! FolioErrorCode trait for callers across a process boundary.

/// Trait for mapping Folio errors to stable error code strings.
/// Every error enum implements this so a caller can branch on the code
/// instead of parsing the message.
pub trait FolioErrorCode {
    /// Returns the error code string (e.g., "SEED_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const DATA_INTEGRITY: &str = "DATA_INTEGRITY";
pub const SEED_NOT_FOUND: &str = "SEED_NOT_FOUND";
pub const INSUFFICIENT_DATA: &str = "INSUFFICIENT_DATA";
pub const UNKNOWN_STRATEGY: &str = "UNKNOWN_STRATEGY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
