//! Helpers for reading shading parameters out of a `serde_json::Value` object.
//!
//! Missing or wrongly typed entries fall back to the supplied default, so
//! parameter parsing never fails.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing, of the
/// wrong type, or non-finite.
///
/// Accepts both JSON floats and integers.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params
        .get(name)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}
