//! Nullable-string union collapsing.
//!
//! OpenAPI 3 spells a nullable string as a two-member union:
//!
//! ```json
//! { "anyOf": [ { "type": "string" }, { "type": "null" } ] }
//! ```
//!
//! Swagger 2 has no `anyOf`; consumers built against it expect a plain
//! `{ "type": "string" }`. This pass rewrites every such union, in either
//! member order, anywhere in the document. All other unions (wrong arity,
//! wrong type pair, members without a plain `type`) are left structurally
//! intact and recursed into, since their sub-schemas may contain collapsible
//! unions of their own.

use serde_json::Value;

use crate::pointer::build_path;
use crate::report::NormalizeReport;

/// Collapse every nullable-string union reachable from `node`.
///
/// Rewrites in place: the matching node gains `type: "string"`, loses its
/// `anyOf`, and keeps every other key untouched. Mappings are iterated over
/// a snapshot of their key list, so the mid-pass `anyOf` deletion can
/// neither skip nor revisit sibling keys.
pub fn collapse_nullable_unions(node: &mut Value, path: &str, report: &mut NormalizeReport) {
    match node {
        Value::Array(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                let child_path = build_path(path, &[&i.to_string()]);
                collapse_nullable_unions(item, &child_path, report);
            }
        }
        Value::Object(obj) => {
            let keys: Vec<String> = obj.keys().cloned().collect();
            for key in keys {
                if key == "anyOf" {
                    let matched = obj
                        .get(&key)
                        .and_then(Value::as_array)
                        .is_some_and(|schemas| is_nullable_string_union(schemas));
                    if matched {
                        obj.insert("type".to_string(), Value::String("string".to_string()));
                        // shift_remove keeps the sibling keys in their
                        // original relative order.
                        obj.shift_remove(&key);
                        tracing::debug!(path, "collapsed nullable-string union");
                        report.collapsed_unions.push(path.to_string());
                        // The removed members contain nothing left to visit.
                        continue;
                    }
                }
                if let Some(child) = obj.get_mut(&key) {
                    let child_path = build_path(path, &[&key]);
                    collapse_nullable_unions(child, &child_path, report);
                }
            }
        }
        // Scalars have no structure to rewrite.
        _ => {}
    }
}

/// A two-member `anyOf` whose members' `type` values sort to
/// `["null", "string"]`.
///
/// A member without a string-valued `type` (a `$ref`, a nested union, an
/// array-form `type`) never matches; such unions fall through to the
/// recursive case.
fn is_nullable_string_union(schemas: &[Value]) -> bool {
    if schemas.len() != 2 {
        return false;
    }
    let mut types: Vec<&str> = schemas
        .iter()
        .filter_map(|schema| schema.get("type").and_then(Value::as_str))
        .collect();
    if types.len() != 2 {
        return false;
    }
    types.sort_unstable();
    types == ["null", "string"]
}
