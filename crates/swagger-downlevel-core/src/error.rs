//! Error types for document downleveling.

use thiserror::Error;

use crate::converter::Dialect;

#[derive(Debug, Error)]
pub enum DownlevelError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Conversion failed: {reason}")]
    Conversion { reason: String },

    #[error("Unsupported dialect conversion: {from} -> {to}")]
    UnsupportedDialect { from: Dialect, to: Dialect },
}
