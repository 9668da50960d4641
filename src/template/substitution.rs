//! Placeholder substitution engine for template text.
//!
//! Templates carry `{{path}}` markers, where `path` is a dot-separated
//! sequence of identifier segments. Substitution walks each path against a
//! `serde_json::Value` scope and splices the resolved value's string form
//! into the output. A marker whose path cannot be resolved is left in the
//! output verbatim, so partially-filled templates stay visibly debuggable.
//!
//! The engine is pure: same template and scope always produce the same
//! output, and nothing is escaped; section data is trusted page-author
//! input, not user input.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

lazy_static! {
    /// Matches `{{ path }}` markers: one or more dot-separated identifier
    /// segments, whitespace around the path tolerated. Anything else that
    /// merely looks brace-like (`{{}}`, `{{a b}}`, an unterminated `{{`)
    /// is not a marker and passes through untouched.
    static ref MARKER: Regex =
        Regex::new(r"\{\{\s*([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\s*\}\}")
            .expect("marker pattern is valid");
}

/// Substitute `{{path}}` markers in `template` with values from `scope`.
///
/// Each marker path is split on `.` and walked against `scope`: at every
/// step the current value must be an object containing the segment key,
/// otherwise the walk aborts and the marker text is kept as-is. Matching is
/// case-sensitive and there is no escaping syntax for literal braces.
pub fn substitute(template: &str, scope: &Value) -> String {
    MARKER
        .replace_all(template, |caps: &Captures| {
            let path = &caps[1];
            match resolve_path(scope, path) {
                Some(value) => render_value(value),
                // Unresolved markers survive verbatim, including braces.
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Walk a dot-separated path against a scope value.
///
/// Returns `None` as soon as the current value is not an object or does not
/// contain the next segment; an intermediate `null` therefore aborts the
/// walk, while a `null` leaf resolves (and renders as the empty string).
fn resolve_path<'a>(scope: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = scope;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// The string form of a resolved value: strings verbatim (no quotes),
/// numbers and booleans via their display form, `null` as the empty string,
/// arrays and objects as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // Arrays and objects keep their JSON representation
        other => other.to_string(),
    }
}
