//! Rewrite records produced during normalization.

use serde::{Deserialize, Serialize};

/// What a normalization run actually changed.
///
/// Each pass appends the JSON Pointer of every node it rewrote, in
/// visitation order. Purely observational; callers that only want the
/// normalized document can drop it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    /// Top-level fields removed (e.g. `#/servers`).
    pub stripped_fields: Vec<String>,
    /// Schema nodes whose nullable-string `anyOf` was collapsed.
    pub collapsed_unions: Vec<String>,
}

impl NormalizeReport {
    /// True when the run changed nothing.
    pub fn is_empty(&self) -> bool {
        self.stripped_fields.is_empty() && self.collapsed_unions.is_empty()
    }
}
