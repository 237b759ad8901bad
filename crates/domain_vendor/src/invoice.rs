//! Vendor invoices

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{FilterSpec, InvoiceId, Record};

use crate::error::VendorError;
use crate::vendor::PaymentTerms;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Submitted,
    PendingReview,
    Approved,
    Rejected,
    Paid,
    Disputed,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "DRAFT",
            InvoiceStatus::Submitted => "SUBMITTED",
            InvoiceStatus::PendingReview => "PENDING_REVIEW",
            InvoiceStatus::Approved => "APPROVED",
            InvoiceStatus::Rejected => "REJECTED",
            InvoiceStatus::Paid => "PAID",
            InvoiceStatus::Disputed => "DISPUTED",
        }
    }

    /// Awaiting an approve / reject decision
    pub fn is_reviewable(&self) -> bool {
        matches!(
            self,
            InvoiceStatus::Submitted | InvoiceStatus::PendingReview | InvoiceStatus::Disputed
        )
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    /// Human-facing number, `INV-<year>-NNNN`
    pub invoice_number: String,
    #[serde(default)]
    pub referral_id: String,
    pub vendor_id: String,
    #[serde(default)]
    pub vendor_name: String,
    pub claim_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_amount: Option<Decimal>,
    pub status: InvoiceStatus,
    pub submitted_by: String,
    pub submitted_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assure_payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_number: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceDraft {
    pub referral_id: String,
    pub vendor_id: String,
    pub vendor_name: String,
    pub claim_number: String,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub total_amount: Decimal,
    pub submitted_by: Option<String>,
}

impl Invoice {
    /// Submits a vendor invoice for review
    ///
    /// Without an explicit due date the invoice is due under `terms`
    /// counted from the invoice date.
    pub fn submit(
        draft: InvoiceDraft,
        sequence: usize,
        terms: PaymentTerms,
        now: DateTime<Utc>,
    ) -> Result<Self, VendorError> {
        if draft.vendor_id.trim().is_empty() {
            return Err(VendorError::Validation("vendorId is required".to_string()));
        }
        if draft.total_amount < Decimal::ZERO {
            return Err(VendorError::Validation("totalAmount must not be negative".to_string()));
        }

        let invoice_date = draft.invoice_date.unwrap_or_else(|| now.date_naive());
        let due_date = match draft.due_date {
            Some(date) => date,
            None => invoice_date
                .checked_add_days(Days::new(terms.days()))
                .unwrap_or(invoice_date),
        };

        Ok(Self {
            id: InvoiceId::new(),
            invoice_number: format!("INV-{}-{:04}", now.year(), sequence),
            submitted_by: draft.submitted_by.unwrap_or_else(|| draft.vendor_id.clone()),
            referral_id: draft.referral_id,
            vendor_id: draft.vendor_id,
            vendor_name: draft.vendor_name,
            claim_number: draft.claim_number,
            invoice_date,
            due_date,
            total_amount: draft.total_amount,
            approved_amount: None,
            status: InvoiceStatus::PendingReview,
            submitted_date: now,
            approved_by: None,
            approved_date: None,
            rejection_reason: None,
            assure_payment_id: None,
            payment_date: None,
            check_number: None,
        })
    }

    /// Approves the invoice, for the full amount unless told otherwise
    ///
    /// A partial approval may pay less than the billed total, never more.
    pub fn approve(
        &mut self,
        approved_amount: Option<Decimal>,
        approved_by: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), VendorError> {
        self.ensure_reviewable(InvoiceStatus::Approved)?;

        let amount = approved_amount.unwrap_or(self.total_amount);
        if amount < Decimal::ZERO {
            return Err(VendorError::Validation("approvedAmount must not be negative".to_string()));
        }
        if amount > self.total_amount {
            return Err(VendorError::Validation(format!(
                "approvedAmount {} exceeds invoice total {}",
                amount, self.total_amount
            )));
        }

        self.status = InvoiceStatus::Approved;
        self.approved_amount = Some(amount);
        self.approved_by = Some(approved_by.into());
        self.approved_date = Some(now);
        self.rejection_reason = None;
        Ok(())
    }

    pub fn reject(&mut self, reason: impl Into<String>) -> Result<(), VendorError> {
        self.ensure_reviewable(InvoiceStatus::Rejected)?;
        self.status = InvoiceStatus::Rejected;
        self.rejection_reason = Some(reason.into());
        Ok(())
    }

    fn ensure_reviewable(&self, to: InvoiceStatus) -> Result<(), VendorError> {
        if self.status.is_reviewable() {
            Ok(())
        } else {
            Err(VendorError::InvalidStatusTransition {
                entity: Self::ENTITY,
                id: self.id.to_string(),
                from: self.status.to_string(),
                to: to.to_string(),
            })
        }
    }

    pub fn filter_spec() -> FilterSpec<Self> {
        FilterSpec::new()
            .exact("status", |i: &Invoice| Some(Cow::Borrowed(i.status.as_str())))
            .exact("vendorId", |i: &Invoice| Some(Cow::Borrowed(i.vendor_id.as_str())))
            .exact("claimNumber", |i: &Invoice| Some(Cow::Borrowed(i.claim_number.as_str())))
    }
}

impl Record for Invoice {
    const ENTITY: &'static str = "Invoice";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn claim_number(&self) -> Option<&str> {
        Some(&self.claim_number)
    }
}
