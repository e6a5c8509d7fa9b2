//! Top-level field removal.
//!
//! Swagger 2 has a single `host`/`basePath`/`schemes` triple where OpenAPI 3
//! has a `servers` array; converters leave `servers` behind, and older
//! consumers reject it. This pass deletes such fields from the document root.

use serde_json::Value;

use crate::pointer::build_path;
use crate::report::NormalizeReport;

/// Top-level keys with no Swagger 2 counterpart.
pub(crate) const UNSUPPORTED_TOP_LEVEL: &[&str] = &["servers"];

/// Remove unsupported top-level fields from the document root.
///
/// No-op when the root is not an object or a field is absent.
pub fn strip_unsupported_fields(document: &mut Value, report: &mut NormalizeReport) {
    let Some(obj) = document.as_object_mut() else {
        return;
    };

    for &key in UNSUPPORTED_TOP_LEVEL {
        // shift_remove: `remove` is swap_remove under preserve_order and
        // would reorder the trailing keys.
        if obj.shift_remove(key).is_some() {
            tracing::debug!(field = key, "removed unsupported top-level field");
            report.stripped_fields.push(build_path("#", &[key]));
        }
    }
}
