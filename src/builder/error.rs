//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Maximum entry length must be at least 1")]
    ZeroEntryLength,

    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Invalid calculator config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
