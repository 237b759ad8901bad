//! Request and response bodies
//!
//! Requests derive `Validate`; handlers take them through
//! [`ValidatedJson`](crate::extract::ValidatedJson). Records that already
//! serialize in wire shape are returned as-is.

pub mod time_expense;
pub mod vendor;
pub mod assure;
pub mod servicenow;

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::ValidationError;

/// Field rule: hours, rates, amounts and quantities may not be negative
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.message = Some(Cow::Borrowed("must not be negative"));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_non_negative() {
        assert!(non_negative(&dec!(0)).is_ok());
        assert!(non_negative(&dec!(-0.0)).is_ok());
        assert!(non_negative(&dec!(1.25)).is_ok());
        assert!(non_negative(&dec!(-0.1)).is_err());
    }
}
