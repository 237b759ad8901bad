//! Claim reserves

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Reserve category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReserveType {
    Medical,
    Indemnity,
    /// Allocated loss adjustment expense
    Expense,
    Legal,
}

/// A carrier's budgeted, paid and outstanding amount for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserve {
    pub reserve_type: ReserveType,
    pub amount: Decimal,
    pub paid: Decimal,
    pub outstanding: Decimal,
    pub last_updated: NaiveDate,
}

impl Reserve {
    /// Creates a reserve line; outstanding is derived from amount and paid
    pub fn new(
        reserve_type: ReserveType,
        amount: Decimal,
        paid: Decimal,
        last_updated: NaiveDate,
    ) -> Result<Self, ClaimError> {
        if amount < Decimal::ZERO || paid < Decimal::ZERO {
            return Err(ClaimError::InvalidReserve(format!(
                "{:?} reserve amounts must not be negative",
                reserve_type
            )));
        }
        if paid > amount {
            return Err(ClaimError::InvalidReserve(format!(
                "{:?} paid {} exceeds reserve {}",
                reserve_type, paid, amount
            )));
        }

        Ok(Self {
            reserve_type,
            amount,
            paid,
            outstanding: amount - paid,
            last_updated,
        })
    }
}

/// Totals across a claim's reserve lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveSummary {
    pub total_reserved: Decimal,
    pub total_paid: Decimal,
    pub total_outstanding: Decimal,
}

impl ReserveSummary {
    pub fn from_reserves(reserves: &[Reserve]) -> Self {
        reserves.iter().fold(Self::default(), |acc, r| Self {
            total_reserved: acc.total_reserved.saturating_add(r.amount),
            total_paid: acc.total_paid.saturating_add(r.paid),
            total_outstanding: acc.total_outstanding.saturating_add(r.outstanding),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_new_reserve_derives_outstanding() {
        let reserve = Reserve::new(ReserveType::Medical, dec!(50000), dec!(12500), date()).unwrap();
        assert_eq!(reserve.outstanding, dec!(37500));
    }

    #[test]
    fn test_overpaid_reserve_is_rejected() {
        assert!(Reserve::new(ReserveType::Legal, dec!(100), dec!(150), date()).is_err());
        assert!(Reserve::new(ReserveType::Legal, dec!(-1), dec!(0), date()).is_err());
    }

    #[test]
    fn test_summary() {
        let reserves = vec![
            Reserve::new(ReserveType::Medical, dec!(50000), dec!(12500), date()).unwrap(),
            Reserve::new(ReserveType::Expense, dec!(10000), dec!(2500), date()).unwrap(),
        ];
        let summary = ReserveSummary::from_reserves(&reserves);
        assert_eq!(summary.total_reserved, dec!(60000));
        assert_eq!(summary.total_paid, dec!(15000));
        assert_eq!(summary.total_outstanding, dec!(45000));
    }

    #[test]
    fn test_empty_summary_is_zero() {
        assert_eq!(ReserveSummary::from_reserves(&[]), ReserveSummary::default());
    }
}
