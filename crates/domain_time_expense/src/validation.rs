//! Entry validation rules
//!
//! # Rules
//!
//! ## Time entries
//! - Claim number and adjuster id are required
//! - Duration, rate and amount must not be negative
//! - Duration cannot exceed 24 hours for one day
//! - Rate and amount cannot exceed [`MAX_ENTRY_AMOUNT`]
//! - Amount that differs from duration × rate is a warning, not an error
//!
//! ## Expense entries
//! - Claim number and adjuster id are required
//! - Amount and quantity must not be negative
//! - Amount cannot exceed [`MAX_ENTRY_AMOUNT`]
//! - Missing receipt on a receipt-required type is a warning
//! - Amount above the type's rate cap is a warning

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entry::TimeEntry;
use crate::error::TimeExpenseError;
use crate::expense::ExpenseEntry;
use crate::reference::ExpenseType;

const MAX_HOURS_PER_DAY: Decimal = dec!(24);

/// Largest rate or amount a single entry may carry
///
/// Keeps per-entry arithmetic and claim-level totals far from the
/// `Decimal` range.
pub const MAX_ENTRY_AMOUNT: Decimal = dec!(1000000000);

/// Result of entry validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// Non-fatal issues
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Converts to a `Result`, keeping the warnings on success
    pub fn into_result(self) -> Result<Vec<String>, TimeExpenseError> {
        if self.is_valid {
            Ok(self.warnings)
        } else {
            Err(TimeExpenseError::Validation(self.errors.join("; ")))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for time and expense entries
pub struct EntryValidator;

impl EntryValidator {
    /// Validates a time entry before it is stored
    pub fn validate_time_entry(entry: &TimeEntry) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_keys(&entry.claim_number, &entry.adjuster_id, &mut result);
        Self::validate_non_negative("duration", entry.duration, &mut result);
        Self::validate_non_negative("rate", entry.rate, &mut result);
        Self::validate_non_negative("amount", entry.amount, &mut result);

        if entry.duration > MAX_HOURS_PER_DAY {
            result.add_error(format!(
                "duration of {} hours exceeds {} hours in a day",
                entry.duration, MAX_HOURS_PER_DAY
            ));
        }

        Self::validate_ceiling("rate", entry.rate, &mut result);
        Self::validate_ceiling("amount", entry.amount, &mut result);

        if result.is_valid {
            if let Some(expected) = entry.duration.checked_mul(entry.rate) {
                if entry.amount != expected {
                    result.add_warning(format!(
                        "amount {} differs from duration × rate ({})",
                        entry.amount, expected
                    ));
                }
            }
        }

        result
    }

    /// Validates an expense entry, optionally against its expense type
    pub fn validate_expense(entry: &ExpenseEntry, expense_type: Option<&ExpenseType>) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_keys(&entry.claim_number, &entry.adjuster_id, &mut result);
        Self::validate_non_negative("amount", entry.amount, &mut result);
        Self::validate_ceiling("amount", entry.amount, &mut result);
        if let Some(quantity) = entry.quantity {
            Self::validate_non_negative("quantity", quantity, &mut result);
        }

        if let Some(kind) = expense_type {
            if kind.receipt_required && !entry.receipt_attached {
                result.add_warning(format!("{} requires a receipt", kind.name));
            }
            if let Some(cap) = kind.rate_cap {
                if entry.amount > cap {
                    result.add_warning(format!("amount {} exceeds the {} cap of {}", entry.amount, kind.code, cap));
                }
            }
        }

        result
    }

    fn validate_keys(claim_number: &str, adjuster_id: &str, result: &mut ValidationResult) {
        if claim_number.trim().is_empty() {
            result.add_error("claimNumber is required");
        }
        if adjuster_id.trim().is_empty() {
            result.add_error("adjusterId is required");
        }
    }

    fn validate_ceiling(field: &str, value: Decimal, result: &mut ValidationResult) {
        if value > MAX_ENTRY_AMOUNT {
            result.add_error(format!("{} must not exceed {}", field, MAX_ENTRY_AMOUNT));
        }
    }

    fn validate_non_negative(field: &str, value: Decimal, result: &mut ValidationResult) {
        if value.is_sign_negative() && !value.is_zero() {
            result.add_error(format!("{} must not be negative", field));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::entry::TimeEntryDraft;
    use crate::expense::ExpenseEntryDraft;
    use crate::reference::RateType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn time_entry(duration: Decimal, rate: Decimal) -> TimeEntry {
        TimeEntry::create(
            TimeEntryDraft {
                claim_number: "CLM-2024-001234".to_string(),
                adjuster_id: "ADJ-001".to_string(),
                duration,
                rate,
                ..Default::default()
            },
            today(),
        )
    }

    #[test]
    fn test_valid_time_entry() {
        let result = EntryValidator::validate_time_entry(&time_entry(dec!(1.5), dec!(100)));
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let result = EntryValidator::validate_time_entry(&time_entry(dec!(-1), dec!(100)));
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("duration")));
    }

    #[test]
    fn test_missing_keys_are_rejected() {
        let mut entry = time_entry(dec!(1), dec!(100));
        entry.claim_number = String::new();
        entry.adjuster_id = "  ".to_string();

        let err = EntryValidator::validate_time_entry(&entry).into_result().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("claimNumber"));
        assert!(message.contains("adjusterId"));
    }

    #[test]
    fn test_overlong_day() {
        let result = EntryValidator::validate_time_entry(&time_entry(dec!(25), dec!(100)));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_overflowing_rate_is_rejected_not_panicking() {
        let entry = time_entry(dec!(24), Decimal::from_i128_with_scale(10i128.pow(28), 0));
        assert_eq!(entry.amount, Decimal::MAX);

        let err = EntryValidator::validate_time_entry(&entry).into_result().unwrap_err();
        assert!(err.to_string().contains("rate must not exceed"));
        assert!(err.to_string().contains("amount must not exceed"));
    }

    #[test]
    fn test_amount_at_ceiling_is_accepted() {
        let mut entry = time_entry(dec!(1), MAX_ENTRY_AMOUNT);
        assert!(EntryValidator::validate_time_entry(&entry).is_valid);

        entry.amount = MAX_ENTRY_AMOUNT + dec!(0.01);
        assert!(!EntryValidator::validate_time_entry(&entry).is_valid);
    }

    #[test]
    fn test_amount_mismatch_is_warning() {
        let mut entry = time_entry(dec!(2), dec!(100));
        entry.amount = dec!(150);

        let warnings = EntryValidator::validate_time_entry(&entry).into_result().unwrap();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_expense_receipt_and_cap_warnings() {
        let kind = ExpenseType {
            id: "EXT-002".to_string(),
            code: "LODGING".to_string(),
            name: "Lodging".to_string(),
            category: "TRAVEL".to_string(),
            rate_type: RateType::PassThrough,
            default_rate: None,
            rate_cap: Some(dec!(200)),
            receipt_required: true,
            is_active: true,
        };
        let expense = ExpenseEntry::create(
            ExpenseEntryDraft {
                claim_number: "CLM-2024-001234".to_string(),
                adjuster_id: "ADJ-001".to_string(),
                amount: dec!(250),
                ..Default::default()
            },
            today(),
        );

        let result = EntryValidator::validate_expense(&expense, Some(&kind));
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_expense_above_ceiling_is_rejected() {
        let expense = ExpenseEntry::create(
            ExpenseEntryDraft {
                claim_number: "CLM-2024-001234".to_string(),
                adjuster_id: "ADJ-001".to_string(),
                amount: Decimal::MAX,
                ..Default::default()
            },
            today(),
        );

        let err = EntryValidator::validate_expense(&expense, None).into_result().unwrap_err();
        assert!(err.to_string().contains("amount must not exceed"));
    }

    #[test]
    fn test_merge() {
        let mut a = ValidationResult::ok();
        a.add_warning("w");
        let b = ValidationResult::fail(vec!["e".to_string()]);
        a.merge(b);
        assert!(!a.is_valid);
        assert_eq!(a.errors, vec!["e".to_string()]);
        assert_eq!(a.warnings, vec!["w".to_string()]);
    }
}
