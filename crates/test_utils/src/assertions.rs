//! Custom Test Assertions
//!
//! Assertion helpers that print the values involved when they fail.

use rust_decimal::Decimal;

/// Asserts that two decimals differ by no more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimals differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that every item satisfies `predicate`, naming the first that does not
pub fn assert_all<T: std::fmt::Debug>(items: &[T], predicate: impl Fn(&T) -> bool, what: &str) {
    if let Some(bad) = items.iter().find(|item| !predicate(item)) {
        panic!("Expected every item to be {}, found {:?}", what, bad);
    }
}

/// Asserts that a JSON response body is a success envelope and returns its `data`
pub fn assert_success_envelope(body: &serde_json::Value) -> &serde_json::Value {
    assert_eq!(body["success"], true, "expected success envelope, got {}", body);
    assert!(
        body["metadata"]["requestId"].is_string(),
        "success envelope without requestId: {}",
        body
    );
    &body["data"]
}

/// Asserts that a JSON response body is a failure envelope with `code`
pub fn assert_error_envelope(body: &serde_json::Value, code: &str) {
    assert_eq!(body["success"], false, "expected failure envelope, got {}", body);
    assert_eq!(body["error"]["code"], code, "unexpected error code in {}", body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_approx_eq_within_tolerance() {
        assert_decimal_approx_eq(dec!(33.3333), dec!(33.33), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_decimal_approx_eq_outside_tolerance() {
        assert_decimal_approx_eq(dec!(34), dec!(33), dec!(0.5));
    }

    #[test]
    fn test_envelopes() {
        let ok = serde_json::json!({"success": true, "data": [1], "metadata": {"requestId": "r", "timestamp": "t"}});
        assert_eq!(assert_success_envelope(&ok), &serde_json::json!([1]));

        let err = serde_json::json!({"success": false, "error": {"code": "NOT_FOUND", "message": "x"}});
        assert_error_envelope(&err, "NOT_FOUND");
    }
}
