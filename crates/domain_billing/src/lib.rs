//! Billing Aggregation
//!
//! Pure functions that turn raw time, expense, vendor, referral and invoice
//! records into the numbers the back office looks at: per-claim billing
//! summaries, adjuster time stats, and status roll-ups.
//!
//! Every function here is total. Empty inputs produce zeroes, negative
//! hours or amounts count as zero rather than failing, and sums that would
//! leave the `Decimal` range stop at `Decimal::MAX`.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::compute_claim_billing_summary;
//!
//! let summary = compute_claim_billing_summary(&time_entries, &expense_entries);
//! assert!(summary.auto_captured_count <= time_entries.len());
//! ```

pub mod summary;
pub mod time_stats;
pub mod collection_stats;
pub mod claim_view;

pub use summary::{compute_claim_billing_summary, BillingSummary};
pub use time_stats::{compute_time_entry_stats, TimeStats};
pub use collection_stats::{
    compute_collection_stats, compute_invoice_stats, compute_referral_stats, compute_vendor_stats,
    CollectionStats, InvoiceStats, ReferralStats, StatusBucket, VendorStats,
};
pub use claim_view::ClaimDetail;

use rust_decimal::Decimal;

/// Clamps a contribution to a sum at zero
pub(crate) fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Adds a non-negative contribution to a running total without overflowing
pub(crate) fn accumulate(total: Decimal, value: Decimal) -> Decimal {
    total.saturating_add(non_negative(value))
}
