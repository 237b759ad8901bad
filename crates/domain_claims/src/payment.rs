//! Payment requests sent to Assure Claims

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::PaymentId;

use crate::error::ClaimError;
use crate::reserve::ReserveType;

/// Days between a payment request and the expected payment
const PAYMENT_LEAD_DAYS: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayeeType {
    Vendor,
    Adjuster,
}

/// Request to pay a vendor or adjuster out of a claim reserve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payee_id: String,
    pub payee_name: String,
    pub payee_type: PayeeType,
    pub invoice_reference: String,
    pub claim_number: String,
    pub amount: Decimal,
    pub reserve_type: ReserveType,
    pub service_description: String,
    pub service_date: NaiveDate,
}

impl PaymentRequest {
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.amount <= Decimal::ZERO {
            return Err(ClaimError::InvalidPayment(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        if self.reserve_type == ReserveType::Legal {
            return Err(ClaimError::InvalidPayment(
                "payments cannot be drawn from the LEGAL reserve".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentState {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// Where a payment request stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub payment_id: String,
    pub status: PaymentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl PaymentStatus {
    /// Status of a freshly accepted request: pending, paid a week out
    pub fn requested(today: NaiveDate) -> Self {
        Self {
            payment_id: PaymentId::new().to_string(),
            status: PaymentState::Pending,
            expected_payment_date: today.checked_add_days(Days::new(PAYMENT_LEAD_DAYS)),
            actual_payment_date: None,
            check_number: None,
            error_message: None,
        }
    }

    /// Status of a payment that has been issued by check
    pub fn completed(payment_id: impl Into<String>, paid_on: NaiveDate, check_number: u32) -> Self {
        Self {
            payment_id: payment_id.into(),
            status: PaymentState::Completed,
            expected_payment_date: None,
            actual_payment_date: Some(paid_on),
            check_number: Some(format!("CHK-{}", check_number)),
            error_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(amount: Decimal, reserve_type: ReserveType) -> PaymentRequest {
        PaymentRequest {
            payee_id: "VEN-001".to_string(),
            payee_name: "Midwest IME Services".to_string(),
            payee_type: PayeeType::Vendor,
            invoice_reference: "INV-2024-0001".to_string(),
            claim_number: "CLM-2024-001234".to_string(),
            amount,
            reserve_type,
            service_description: "Independent medical exam".to_string(),
            service_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        }
    }

    #[test]
    fn test_requested_payment_is_expected_in_a_week() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        let status = PaymentStatus::requested(today);

        assert!(status.payment_id.starts_with("PAY-"));
        assert_eq!(status.status, PaymentState::Pending);
        assert_eq!(status.expected_payment_date, NaiveDate::from_ymd_opt(2024, 3, 4));
    }

    #[test]
    fn test_completed_payment_has_check_number() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let status = PaymentStatus::completed("PAY-1", today, 48213);
        assert_eq!(status.check_number.as_deref(), Some("CHK-48213"));
        assert_eq!(status.actual_payment_date, Some(today));
    }

    #[test]
    fn test_payment_request_validation() {
        assert!(request(dec!(850), ReserveType::Medical).validate().is_ok());
        assert!(request(dec!(0), ReserveType::Medical).validate().is_err());
        assert!(request(dec!(850), ReserveType::Legal).validate().is_err());
    }
}
