//! Tests for core_kernel error types

use core_kernel::ports::PortError;
use core_kernel::temporal::{parse_iso_date, TemporalError};

#[test]
fn test_port_error_not_found() {
    let error = PortError::not_found("Vendor", "VEN-9");

    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "Not found: Vendor with id VEN-9");
}

#[test]
fn test_port_error_validation_keeps_field() {
    let error = PortError::validation_field("rate must be positive", "rate");

    match error {
        PortError::Validation { message, field } => {
            assert_eq!(message, "rate must be positive");
            assert_eq!(field.as_deref(), Some("rate"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_port_error_conflict_is_not_not_found() {
    let error = PortError::conflict("Cannot delete a billed entry");

    assert!(!error.is_not_found());
    assert!(error.to_string().contains("billed"));
}

#[test]
fn test_port_error_internal_display() {
    let error = PortError::internal("store poisoned");

    assert_eq!(error.to_string(), "Internal error: store poisoned");
}

#[test]
fn test_temporal_error_from_bad_date() {
    let error = parse_iso_date("2024-13-45").unwrap_err();

    assert_eq!(error, TemporalError::InvalidDate("2024-13-45".to_string()));
    assert!(error.to_string().contains("YYYY-MM-DD"));
}

#[test]
fn test_temporal_error_timezone_display() {
    let error = TemporalError::InvalidTimezone("Mars/Olympus".to_string());

    assert_eq!(error.to_string(), "Unknown timezone: Mars/Olympus");
}
