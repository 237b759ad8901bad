//! Vendor domain errors

use thiserror::Error;

/// Errors that can occur in the vendor domain
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("{entity} {id} cannot move from {from} to {to}")]
    InvalidStatusTransition {
        entity: &'static str,
        id: String,
        from: String,
        to: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Vendor {0} is not accepting referrals")]
    VendorUnavailable(String),
}
