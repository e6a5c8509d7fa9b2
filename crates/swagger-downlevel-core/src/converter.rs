//! The dialect-converter seam.
//!
//! Actual OpenAPI 3 → Swagger 2 translation is someone else's job; callers
//! plug an implementation in behind [`SpecConverter`]. This module owns the
//! wire shapes of that exchange: the dialect tags, the request envelope, and
//! the converter's optional `{spec: ...}` response wrapper.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DownlevelError;

/// A named version of the API-description language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    /// OpenAPI 3.x, the newer dialect.
    #[serde(rename = "openapi_3")]
    OpenApi3,
    /// Swagger 2.0, the older dialect consumers are built against.
    #[serde(rename = "swagger_2")]
    Swagger2,
}

impl Dialect {
    /// The wire tag used in converter requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::OpenApi3 => "openapi_3",
            Dialect::Swagger2 => "swagger_2",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dialect-translation request handed to a [`SpecConverter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub from: Dialect,
    pub to: Dialect,
    /// The document to translate, in the `from` dialect.
    pub source: Value,
}

/// External dialect converter.
///
/// Implementations may return either the translated document itself or a
/// `{spec: <document>}` envelope; [`extract_spec`] accepts both. A rejected
/// input surfaces as [`DownlevelError::Conversion`] (or
/// [`DownlevelError::UnsupportedDialect`] for a dialect pair the
/// implementation does not handle).
pub trait SpecConverter {
    fn convert(&self, request: ConvertRequest) -> Result<Value, DownlevelError>;
}

/// Unwrap a converter's optional `spec` envelope.
///
/// If `value` is an object carrying a non-null `spec` key, the document is
/// that key's value; otherwise `value` is already the document. A null
/// `spec` does not count as an envelope.
pub fn extract_spec(value: Value) -> Value {
    let is_envelope = matches!(value.get("spec"), Some(spec) if !spec.is_null());
    match value {
        Value::Object(mut obj) if is_envelope => match obj.shift_remove("spec") {
            Some(spec) => spec,
            None => Value::Object(obj),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dialect_wire_tags() {
        assert_eq!(
            serde_json::to_value(Dialect::OpenApi3).unwrap(),
            json!("openapi_3")
        );
        assert_eq!(
            serde_json::to_value(Dialect::Swagger2).unwrap(),
            json!("swagger_2")
        );
    }

    #[test]
    fn test_convert_request_wire_shape() {
        let request = ConvertRequest {
            from: Dialect::OpenApi3,
            to: Dialect::Swagger2,
            source: json!({"swagger": "2.0"}),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "from": "openapi_3",
                "to": "swagger_2",
                "source": {"swagger": "2.0"}
            })
        );
    }

    #[test]
    fn test_extract_spec_unwraps_envelope() {
        let wrapped = json!({"spec": {"swagger": "2.0"}});
        assert_eq!(extract_spec(wrapped), json!({"swagger": "2.0"}));
    }

    #[test]
    fn test_extract_spec_passes_bare_document_through() {
        let bare = json!({"swagger": "2.0", "paths": {}});
        assert_eq!(extract_spec(bare.clone()), bare);
    }

    #[test]
    fn test_extract_spec_ignores_null_spec() {
        let doc = json!({"spec": null, "paths": {}});
        assert_eq!(extract_spec(doc.clone()), doc);
    }

    #[test]
    fn test_extract_spec_non_object_passthrough() {
        assert_eq!(extract_spec(json!([1, 2])), json!([1, 2]));
        assert_eq!(extract_spec(Value::Null), Value::Null);
    }
}
