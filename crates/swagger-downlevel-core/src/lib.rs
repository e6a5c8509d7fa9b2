//! Normalize converted OpenAPI 3 documents into Swagger 2-compatible form.
//!
//! Dialect translation itself (OpenAPI 3 → Swagger 2) is delegated to an
//! external converter behind the [`SpecConverter`] seam. What the converter
//! hands back still carries OpenAPI 3 idioms that Swagger 2 consumers choke
//! on; this crate repairs them in place:
//!
//! 1. Top-level fields the older dialect has no concept of (`servers`) are
//!    removed ([`passes::strip_fields`]).
//! 2. Two-member `anyOf` unions of `{type: string}` and `{type: null}` (the
//!    OpenAPI 3 spelling of a nullable string) are collapsed to a plain
//!    `{type: "string"}` ([`passes::nullable_unions`]).
//!
//! Both passes are total: every well-formed document comes out normalized,
//! and unmatched structures are left untouched. The only fallible step is
//! the converter call in [`downlevel`].

pub mod converter;
pub mod error;
pub mod passes;
pub mod pointer;
pub mod report;

use serde_json::Value;

pub use converter::{extract_spec, ConvertRequest, Dialect, SpecConverter};
pub use error::DownlevelError;
pub use pointer::{build_path, escape_pointer_segment};
pub use report::NormalizeReport;

use passes::nullable_unions::collapse_nullable_unions;
use passes::strip_fields::strip_unsupported_fields;

/// Normalize a converted document in place.
///
/// Runs the field-strip pass, then the union-collapse pass, and returns a
/// [`NormalizeReport`] recording the JSON Pointer of every rewrite.
/// Idempotent: a second run finds nothing left to rewrite.
pub fn normalize(document: &mut Value) -> NormalizeReport {
    let mut report = NormalizeReport::default();
    strip_unsupported_fields(document, &mut report);
    collapse_nullable_unions(document, "#", &mut report);
    tracing::debug!(
        stripped = report.stripped_fields.len(),
        collapsed = report.collapsed_unions.len(),
        "normalization complete"
    );
    report
}

/// Run the full downlevel pipeline: convert, unwrap, normalize.
///
/// Hands `source` to the converter as an OpenAPI 3 → Swagger 2 request,
/// unwraps the converter's optional `spec` envelope via [`extract_spec`],
/// and normalizes the result. Converter failures are surfaced verbatim.
pub fn downlevel(
    source: &Value,
    converter: &dyn SpecConverter,
) -> Result<(Value, NormalizeReport), DownlevelError> {
    let request = ConvertRequest {
        from: Dialect::OpenApi3,
        to: Dialect::Swagger2,
        source: source.clone(),
    };
    let converted = converter.convert(request)?;
    let mut document = extract_spec(converted);
    let report = normalize(&mut document);
    Ok((document, report))
}
