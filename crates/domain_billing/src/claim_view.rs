//! Claim detail view

use serde::Serialize;

use domain_claims::{AssureClaimsEvent, Claim};
use domain_time_expense::{ExpenseEntry, TimeEntry};

use crate::summary::{compute_claim_billing_summary, BillingSummary};

/// A claim with everything billed against it
///
/// Serializes as the claim's own fields plus `timeEntries`,
/// `expenseEntries`, `events` and `billingSummary`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDetail {
    #[serde(flatten)]
    pub claim: Claim,
    pub time_entries: Vec<TimeEntry>,
    pub expense_entries: Vec<ExpenseEntry>,
    pub events: Vec<AssureClaimsEvent>,
    pub billing_summary: BillingSummary,
}

impl ClaimDetail {
    /// Builds the view from a claim and candidate records
    ///
    /// Records belonging to other claims are dropped, so callers may pass
    /// whole collections.
    pub fn assemble(
        claim: Claim,
        time_entries: Vec<TimeEntry>,
        expense_entries: Vec<ExpenseEntry>,
        events: Vec<AssureClaimsEvent>,
    ) -> Self {
        let number = claim.claim_number.as_str();
        let time_entries: Vec<TimeEntry> = time_entries.into_iter().filter(|t| t.claim_number == number).collect();
        let expense_entries: Vec<ExpenseEntry> =
            expense_entries.into_iter().filter(|e| e.claim_number == number).collect();
        let events: Vec<AssureClaimsEvent> = events.into_iter().filter(|e| e.claim_number == number).collect();
        let billing_summary = compute_claim_billing_summary(&time_entries, &expense_entries);

        Self {
            claim,
            time_entries,
            expense_entries,
            events,
            billing_summary,
        }
    }
}
