//! Per-claim billing summary

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_time_expense::{CaptureType, EntryStatus, ExpenseEntry, TimeEntry};

use crate::accumulate;

/// Billing totals for one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    pub total_hours: Decimal,
    pub total_amount: Decimal,
    pub total_expenses: Decimal,
    /// Share of time entries captured automatically, 0-100, unrounded
    pub auto_captured_percentage: Decimal,
    pub auto_captured_count: usize,
    pub total_entries: usize,
    /// Amount still waiting on submission (status PENDING only)
    pub pending_amount: Decimal,
}

impl Default for BillingSummary {
    fn default() -> Self {
        Self {
            total_hours: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            auto_captured_percentage: Decimal::ZERO,
            auto_captured_count: 0,
            total_entries: 0,
            pending_amount: Decimal::ZERO,
        }
    }
}

/// Computes the billing summary of a claim's time and expense entries
///
/// Callers pass entries already narrowed to one claim; nothing here checks
/// claim numbers.
pub fn compute_claim_billing_summary(time_entries: &[TimeEntry], expense_entries: &[ExpenseEntry]) -> BillingSummary {
    let mut summary = time_entries.iter().fold(BillingSummary::default(), |mut acc, entry| {
        acc.total_hours = accumulate(acc.total_hours, entry.duration);
        acc.total_amount = accumulate(acc.total_amount, entry.amount);
        if entry.capture_type == CaptureType::Auto {
            acc.auto_captured_count += 1;
        }
        if entry.status == EntryStatus::Pending {
            acc.pending_amount = accumulate(acc.pending_amount, entry.amount);
        }
        acc
    });

    summary.total_entries = time_entries.len();
    summary.total_expenses = expense_entries.iter().fold(Decimal::ZERO, |total, e| accumulate(total, e.amount));
    summary.auto_captured_percentage = percentage(summary.auto_captured_count, summary.total_entries);
    summary
}

fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole)
}
