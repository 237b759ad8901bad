//! Test Utilities Crate
//!
//! Shared test infrastructure for the claims billing workspace.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims, adjusters, vendors and dates
//! - `builders`: Builder patterns for time entries, expenses, referrals and invoices
//! - `assertions`: Assertion helpers for decimals and filtered collections
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
