//! Assertion utilities for testing.
//!
//! Aggregates such as TAVG come back as JSON floats, so comparisons go
//! through an epsilon.

use serde_json::Value;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that a JSON field holds a number approximately equal to `expected`.
///
/// # Panics
///
/// Panics if the field is missing, not a number, or too far from `expected`.
pub fn assert_json_number(value: &Value, field: &str, expected: f64) {
    let actual = value
        .get(field)
        .and_then(Value::as_f64)
        .unwrap_or_else(|| panic!("Field {} is not a number in {}", field, value));
    assert_approx_eq(actual, expected, None);
}

/// Assert that every key of a JSON object is an ISO date on or after `since`.
///
/// # Panics
///
/// Panics if `value` is not an object or any key sorts before `since`.
pub fn assert_keys_on_or_after(value: &Value, since: &str) {
    let object = value.as_object().expect("Expected a JSON object");
    for key in object.keys() {
        assert!(
            key.as_str() >= since,
            "Key {} is earlier than {}",
            key,
            since
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(72.33333333333333, 72.333333333, Some(1e-6));
    }

    #[test]
    fn test_assert_json_number() {
        assert_json_number(&json!({"TAVG": 70.5}), "TAVG", 70.5);
    }

    #[test]
    fn test_assert_keys_on_or_after() {
        assert_keys_on_or_after(&json!({"2017-01-01": 0.1, "2017-06-01": null}), "2017-01-01");
    }
}
