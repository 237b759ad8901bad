//! Vendor Management Domain
//!
//! Outside service providers (IME physicians, surveillance firms, field
//! appraisers), the referrals that assign them work on a claim, and the
//! invoices they send back.
//!
//! # Referral Lifecycle
//!
//! ```text
//! ASSIGNED -> ACCEPTED -> IN_PROGRESS -> COMPLETE -> REVIEWED
//!     \___________\_____________\-> CANCELLED
//! ```
//!
//! # Invoice Lifecycle
//!
//! ```text
//! SUBMITTED / PENDING_REVIEW -> APPROVED -> PAID
//!                            \-> REJECTED
//! ```

pub mod vendor;
pub mod referral;
pub mod invoice;
pub mod error;

pub use vendor::{
    License, PaymentConfiguration, PaymentMethod, PaymentTerms, Vendor, VendorAddress, VendorContact,
    VendorDraft, VendorPatch, VendorStatus, VendorType, W9Status,
};
pub use referral::{sla_target_days, Referral, ReferralDraft, ReferralStatus, WorkItem};
pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus};
pub use error::VendorError;
