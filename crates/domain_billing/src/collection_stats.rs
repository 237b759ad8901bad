//! Status roll-ups for vendors, referrals and invoices
//!
//! [`compute_collection_stats`] counts records into named status buckets
//! and sums one numeric field. The typed stats below are thin wrappers
//! that pick the buckets each screen shows.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_vendor::{Invoice, Referral, Vendor};

use crate::accumulate;

/// A named group of status values counted together
#[derive(Debug, Clone, Copy)]
pub struct StatusBucket {
    pub name: &'static str,
    pub statuses: &'static [&'static str],
}

impl StatusBucket {
    pub const fn new(name: &'static str, statuses: &'static [&'static str]) -> Self {
        Self { name, statuses }
    }

    fn contains(&self, status: &str) -> bool {
        self.statuses.contains(&status)
    }
}

/// Bucket counts plus the sum of one numeric field
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    /// Every requested bucket is present, zero when nothing matched
    pub counts: BTreeMap<&'static str, usize>,
    pub total: Decimal,
}

impl CollectionStats {
    pub fn count(&self, bucket: &str) -> usize {
        self.counts.get(bucket).copied().unwrap_or(0)
    }
}

/// Counts `items` into `buckets` by status and sums `amount_of`
///
/// A record lands in every bucket that lists its status; buckets may
/// overlap. Negative amounts count as zero and the sum saturates at
/// `Decimal::MAX`.
pub fn compute_collection_stats<T, S, A>(
    items: &[T],
    status_of: S,
    buckets: &[StatusBucket],
    amount_of: A,
) -> CollectionStats
where
    S: Fn(&T) -> &str,
    A: Fn(&T) -> Decimal,
{
    let mut counts: BTreeMap<&'static str, usize> = buckets.iter().map(|b| (b.name, 0)).collect();
    let mut total = Decimal::ZERO;

    for item in items {
        let status = status_of(item);
        for bucket in buckets.iter().filter(|b| b.contains(status)) {
            *counts.entry(bucket.name).or_insert(0) += 1;
        }
        total = accumulate(total, amount_of(item));
    }

    CollectionStats { counts, total }
}

const VENDOR_BUCKETS: &[StatusBucket] = &[
    StatusBucket::new("active", &["ACTIVE"]),
    StatusBucket::new("inactive", &["INACTIVE"]),
    StatusBucket::new("pendingOnboarding", &["PENDING_DOCUMENTATION"]),
];

const REFERRAL_BUCKETS: &[StatusBucket] = &[
    StatusBucket::new("open", &["ASSIGNED", "ACCEPTED", "IN_PROGRESS"]),
    StatusBucket::new("completed", &["COMPLETE"]),
];

const INVOICE_BUCKETS: &[StatusBucket] = &[
    StatusBucket::new("pending", &["PENDING_REVIEW"]),
    StatusBucket::new("approved", &["APPROVED"]),
    StatusBucket::new("paid", &["PAID"]),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorStats {
    pub total_active: usize,
    pub total_inactive: usize,
    pub pending_onboarding: usize,
    pub total_referrals: usize,
}

/// Vendor roll-up; `total_referrals` counts every referral on the book
pub fn compute_vendor_stats(vendors: &[Vendor], referrals: &[Referral]) -> VendorStats {
    let stats = compute_collection_stats(vendors, |v| v.status.as_str(), VENDOR_BUCKETS, |_| Decimal::ZERO);

    VendorStats {
        total_active: stats.count("active"),
        total_inactive: stats.count("inactive"),
        pending_onboarding: stats.count("pendingOnboarding"),
        total_referrals: referrals.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralStats {
    pub total_open: usize,
    pub total_completed: usize,
    pub sla_breaches: usize,
    /// Mean days from assignment to completion, one decimal place
    pub avg_completion_time: Decimal,
}

/// Referral roll-up
///
/// The completion average covers every referral with a completion date,
/// including ones since moved on to REVIEWED.
pub fn compute_referral_stats(referrals: &[Referral]) -> ReferralStats {
    let stats = compute_collection_stats(referrals, |r| r.status.as_str(), REFERRAL_BUCKETS, |_| Decimal::ZERO);

    let durations: Vec<i64> = referrals.iter().filter_map(Referral::completion_days).collect();
    let avg_completion_time = if durations.is_empty() {
        Decimal::ZERO
    } else {
        (Decimal::from(durations.iter().sum::<i64>()) / Decimal::from(durations.len())).round_dp(1)
    };

    ReferralStats {
        total_open: stats.count("open"),
        total_completed: stats.count("completed"),
        sla_breaches: referrals.iter().filter(|r| r.sla_breach).count(),
        avg_completion_time,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStats {
    pub total_pending: usize,
    pub total_approved: usize,
    pub total_paid: usize,
    /// Sum of `totalAmount` over every invoice, whatever its status
    pub total_amount: Decimal,
}

pub fn compute_invoice_stats(invoices: &[Invoice]) -> InvoiceStats {
    let stats = compute_collection_stats(invoices, |i| i.status.as_str(), INVOICE_BUCKETS, |i| i.total_amount);

    InvoiceStats {
        total_pending: stats.count("pending"),
        total_approved: stats.count("approved"),
        total_paid: stats.count("paid"),
        total_amount: stats.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct Row(&'static str, Decimal);

    const BUCKETS: &[StatusBucket] = &[
        StatusBucket::new("open", &["A", "B"]),
        StatusBucket::new("closed", &["C"]),
        StatusBucket::new("a_only", &["A"]),
    ];

    #[test]
    fn test_counts_and_total() {
        let rows = vec![Row("A", dec!(10)), Row("B", dec!(5)), Row("C", dec!(2.5)), Row("Z", dec!(1))];
        let stats = compute_collection_stats(&rows, |r| r.0, BUCKETS, |r| r.1);

        assert_eq!(stats.count("open"), 2);
        assert_eq!(stats.count("closed"), 1);
        assert_eq!(stats.count("a_only"), 1);
        assert_eq!(stats.total, dec!(18.5));
    }

    #[test]
    fn test_empty_collection_has_zero_buckets() {
        let stats = compute_collection_stats(&[] as &[Row], |r| r.0, BUCKETS, |r| r.1);
        assert_eq!(stats.counts.len(), 3);
        assert!(stats.counts.values().all(|&c| c == 0));
        assert_eq!(stats.total, Decimal::ZERO);
        assert_eq!(stats.count("unknown"), 0);
    }

    #[test]
    fn test_negative_amount_counts_as_zero() {
        let rows = vec![Row("A", dec!(-10)), Row("A", dec!(4))];
        let stats = compute_collection_stats(&rows, |r| r.0, BUCKETS, |r| r.1);
        assert_eq!(stats.total, dec!(4));
    }

    #[test]
    fn test_empty_typed_stats() {
        assert_eq!(compute_vendor_stats(&[], &[]), VendorStats::default());

        let referrals = compute_referral_stats(&[]);
        assert_eq!(referrals.total_open, 0);
        assert_eq!(referrals.avg_completion_time, Decimal::ZERO);

        let invoices = compute_invoice_stats(&[]);
        assert_eq!(invoices.total_amount, Decimal::ZERO);
    }
}
