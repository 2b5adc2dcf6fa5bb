//! Pure helpers for extracting typed parameters from a `serde_json::Value`.
//!
//! Each helper takes a JSON object, a key, and a default. If the key is
//! missing or the wrong type, the default is returned — these never fail.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Accepts both JSON floats and integers.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_extracts_existing_float() {
        let params = json!({"decay": 0.98});
        assert!((param_f64(&params, "decay", 0.5) - 0.98).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let params = json!({"radius": 2});
        assert!((param_f64(&params, "radius", 0.0) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let params = json!({"other": 1.0});
        assert!((param_f64(&params, "decay", 0.99) - 0.99).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let params = json!({"decay": "fast"});
        assert!((param_f64(&params, "decay", 0.99) - 0.99).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let params = json!("not an object");
        assert!((param_f64(&params, "decay", 0.7) - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn param_usize_extracts_existing_integer() {
        let params = json!({"count": 100});
        assert_eq!(param_usize(&params, "count", 0), 100);
    }

    #[test]
    fn param_usize_returns_default_when_key_missing() {
        let params = json!({});
        assert_eq!(param_usize(&params, "count", 10), 10);
    }

    #[test]
    fn param_usize_returns_default_for_float_value() {
        let params = json!({"count": 2.5});
        assert_eq!(param_usize(&params, "count", 10), 10);
    }

    #[test]
    fn param_usize_returns_default_for_negative_value() {
        let params = json!({"count": -3});
        assert_eq!(param_usize(&params, "count", 10), 10);
    }
}
