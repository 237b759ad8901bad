//! Property-Based Test Generators
//!
//! Proptest strategies producing records that respect the domain
//! invariants (non-negative hours and amounts, known status vocabularies).

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_time_expense::{CaptureType, EntryStatus, ExpenseEntry, TimeEntry};

use crate::builders::{ExpenseEntryBuilder, TimeEntryBuilder};
use crate::fixtures::DateFixtures;

pub fn capture_type_strategy() -> impl Strategy<Value = CaptureType> {
    prop_oneof![
        Just(CaptureType::Manual),
        Just(CaptureType::Timer),
        Just(CaptureType::Auto),
    ]
}

pub fn entry_status_strategy() -> impl Strategy<Value = EntryStatus> {
    prop_oneof![
        Just(EntryStatus::Draft),
        Just(EntryStatus::Pending),
        Just(EntryStatus::Submitted),
        Just(EntryStatus::Approved),
        Just(EntryStatus::Rejected),
        Just(EntryStatus::Billed),
    ]
}

/// Hours in tenths, 0.0 to 12.0
pub fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=120i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

/// Amounts in cents, 0.00 to 10,000.00
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

pub fn adjuster_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ADJ-001".to_string()),
        Just("ADJ-002".to_string()),
        Just("ADJ-003".to_string()),
    ]
}

/// A time entry dated within the first half of February 2024
pub fn time_entry_strategy() -> impl Strategy<Value = TimeEntry> {
    (
        hours_strategy(),
        amount_strategy(),
        capture_type_strategy(),
        entry_status_strategy(),
        adjuster_id_strategy(),
        1u32..=15u32,
    )
        .prop_map(|(hours, amount, capture_type, status, adjuster, day)| {
            TimeEntryBuilder::new()
                .with_duration(hours)
                .with_amount(amount)
                .with_capture_type(capture_type)
                .with_status(status)
                .with_adjuster(&adjuster)
                .with_date(DateFixtures::date(2, day))
                .build()
        })
}

pub fn time_entries_strategy(max: usize) -> impl Strategy<Value = Vec<TimeEntry>> {
    proptest::collection::vec(time_entry_strategy(), 0..max)
}

pub fn expense_entry_strategy() -> impl Strategy<Value = ExpenseEntry> {
    (amount_strategy(), entry_status_strategy()).prop_map(|(amount, status)| {
        ExpenseEntryBuilder::new()
            .with_amount(amount)
            .with_status(status)
            .build()
    })
}

pub fn expense_entries_strategy(max: usize) -> impl Strategy<Value = Vec<ExpenseEntry>> {
    proptest::collection::vec(expense_entry_strategy(), 0..max)
}
