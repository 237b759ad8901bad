//! Claims Domain
//!
//! Claim context as received from Assure Claims, plus the events and
//! payment requests exchanged with it. Claims are read-only here: they are
//! the join key that time, expense, referral and invoice records hang off.
//!
//! # Claim Status
//!
//! ```text
//! OPEN -> PENDING -> CLOSED -> REOPENED
//! ```

pub mod claim;
pub mod reserve;
pub mod event;
pub mod payment;
pub mod error;

pub use claim::{Address, Claim, ClaimHandler, ClaimParty, ClaimStatus, ClaimType, InjuryInfo, PartyType, TreatmentStatus};
pub use reserve::{Reserve, ReserveSummary, ReserveType};
pub use event::AssureClaimsEvent;
pub use payment::{PaymentRequest, PaymentState, PaymentStatus, PayeeType};
pub use error::ClaimError;
