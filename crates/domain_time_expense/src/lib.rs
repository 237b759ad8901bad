//! Time & Expense Domain
//!
//! This crate models the billable work adjusters record against claims:
//! time entries, expense entries, and the reference data used to price and
//! classify them (adjusters, activity codes, expense types, event triggers).
//!
//! # Entry Lifecycle
//!
//! ```text
//! DRAFT / PENDING -> SUBMITTED -> APPROVED -> BILLED
//!                              \-> REJECTED
//! ```
//!
//! Entries can be edited or deleted only before submission.
//!
//! # Capture Types
//!
//! - **MANUAL**: typed in by the adjuster
//! - **TIMER**: produced by the stopwatch
//! - **AUTO**: created from an Assure Claims event through an event trigger

pub mod entry;
pub mod expense;
pub mod reference;
pub mod validation;
pub mod error;

pub use entry::{TimeEntry, TimeEntryDraft, TimeEntryPatch, CaptureType, EntryStatus};
pub use expense::{ExpenseEntry, ExpenseEntryDraft, ExpenseEntryPatch};
pub use reference::{
    Adjuster, ActivityCode, ActivityCategory, BillingType, ExpenseType, RateType, EventTrigger,
};
pub use validation::{EntryValidator, ValidationResult, MAX_ENTRY_AMOUNT};
pub use error::TimeExpenseError;
