//! Core Kernel - Foundational types for the claims smart apps back end
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Prefixed string identifiers for claims-side records
//! - The record store port that domains read snapshots from
//! - The filter layer that narrows collections by query parameters
//! - Business-date helpers (today in a configured timezone, ISO parsing)

pub mod identifiers;
pub mod temporal;
pub mod ports;
pub mod filter;

pub use identifiers::{
    TimeEntryId, ExpenseEntryId, VendorId, ReferralId, InvoiceId,
    EventId, PaymentId, DocumentId, CaseId,
};
pub use temporal::{Timezone, TemporalError, parse_iso_date, days_between};
pub use ports::{
    PortError, DomainPort, Record, RecordStore, RecordMutator, BulkMutator, RemoveGuard,
    AdapterHealth, HealthCheckResult, HealthCheckable,
};
pub use filter::{FilterSpec, FilterField, MatchKind, QueryParams};
