//! Time & expense domain errors

use thiserror::Error;

use crate::entry::EntryStatus;

/// Errors that can occur in the time & expense domain
#[derive(Debug, Error)]
pub enum TimeExpenseError {
    #[error("{entity} {id} not found")]
    EntryNotFound { entity: &'static str, id: String },

    #[error("{entity} {id} is {status} and can no longer be changed")]
    EntryLocked {
        entity: &'static str,
        id: String,
        status: EntryStatus,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Event trigger {0} is inactive")]
    TriggerInactive(String),
}
