//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim {0} not found")]
    ClaimNotFound(String),

    #[error("Invalid reserve: {0}")]
    InvalidReserve(String),

    #[error("Invalid payment request: {0}")]
    InvalidPayment(String),
}
