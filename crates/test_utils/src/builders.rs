//! Test Data Builders
//!
//! Builders for records with many fields. Tests set only what they assert
//! on; everything else gets a fixed default.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ExpenseEntryId, TimeEntryId};
use domain_time_expense::{CaptureType, EntryStatus, ExpenseEntry, TimeEntry};
use domain_vendor::{Invoice, InvoiceDraft, PaymentTerms, Referral, ReferralDraft, ReferralStatus};

use crate::fixtures::{ClaimNumbers, DateFixtures};

/// Builder for time entries
///
/// Defaults: one MANUAL hour at 100 on the workers' comp claim by
/// ADJ-001, dated today, status DRAFT.
pub struct TimeEntryBuilder {
    entry: TimeEntry,
    amount_set: bool,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            entry: TimeEntry {
                id: TimeEntryId::new(),
                claim_number: ClaimNumbers::WORKERS_COMP.to_string(),
                adjuster_id: "ADJ-001".to_string(),
                adjuster_name: "Sarah Johnson".to_string(),
                role_id: "ROLE-002".to_string(),
                role_name: "Senior Adjuster".to_string(),
                activity_code_id: "ACT-001".to_string(),
                activity_code: "FILE_REVIEW".to_string(),
                activity_description: "File Review".to_string(),
                capture_type: CaptureType::Manual,
                entry_date: DateFixtures::today(),
                duration: dec!(1),
                rate: dec!(100),
                amount: dec!(100),
                carrier_id: None,
                carrier_name: None,
                status: EntryStatus::Draft,
                notes: None,
                auto_event_ref: None,
                created_by: "ADJ-001".to_string(),
                created_date: DateFixtures::instant(2, 15),
                submitted_date: None,
                approved_by: None,
                approved_date: None,
                rejection_reason: None,
            },
            amount_set: false,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.entry.id = TimeEntryId::from(id);
        self
    }

    pub fn with_claim(mut self, claim_number: &str) -> Self {
        self.entry.claim_number = claim_number.to_string();
        self
    }

    pub fn with_adjuster(mut self, adjuster_id: &str) -> Self {
        self.entry.adjuster_id = adjuster_id.to_string();
        self.entry.created_by = adjuster_id.to_string();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.entry.entry_date = date;
        self
    }

    /// Sets the duration; amount follows duration × rate unless set explicitly
    pub fn with_duration(mut self, hours: Decimal) -> Self {
        self.entry.duration = hours;
        self
    }

    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.entry.rate = rate;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.entry.amount = amount;
        self.amount_set = true;
        self
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.entry.status = status;
        self
    }

    pub fn with_capture_type(mut self, capture_type: CaptureType) -> Self {
        self.entry.capture_type = capture_type;
        self
    }

    pub fn auto(self) -> Self {
        self.with_capture_type(CaptureType::Auto)
    }

    pub fn build(mut self) -> TimeEntry {
        if !self.amount_set {
            self.entry.amount = self.entry.duration.saturating_mul(self.entry.rate);
        }
        self.entry
    }
}

/// Builder for expense entries
pub struct ExpenseEntryBuilder {
    entry: ExpenseEntry,
}

impl Default for ExpenseEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseEntryBuilder {
    pub fn new() -> Self {
        Self {
            entry: ExpenseEntry {
                id: ExpenseEntryId::new(),
                claim_number: ClaimNumbers::WORKERS_COMP.to_string(),
                adjuster_id: "ADJ-001".to_string(),
                adjuster_name: "Sarah Johnson".to_string(),
                expense_type_id: "EXT-001".to_string(),
                expense_code: "MILEAGE".to_string(),
                expense_description: "Mileage".to_string(),
                entry_date: DateFixtures::today(),
                amount: dec!(25),
                quantity: None,
                receipt_attached: false,
                receipt_document_id: None,
                status: EntryStatus::Draft,
                notes: None,
                created_by: "ADJ-001".to_string(),
                created_date: DateFixtures::instant(2, 15),
                submitted_date: None,
                approved_by: None,
                approved_date: None,
                rejection_reason: None,
            },
        }
    }

    pub fn with_claim(mut self, claim_number: &str) -> Self {
        self.entry.claim_number = claim_number.to_string();
        self
    }

    pub fn with_adjuster(mut self, adjuster_id: &str) -> Self {
        self.entry.adjuster_id = adjuster_id.to_string();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.entry.amount = amount;
        self
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.entry.status = status;
        self
    }

    pub fn build(self) -> ExpenseEntry {
        self.entry
    }
}

/// Builder for referrals, assigned on Feb 1 2024
pub struct ReferralBuilder {
    draft: ReferralDraft,
    sequence: usize,
    assigned_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    status: Option<ReferralStatus>,
}

impl Default for ReferralBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferralBuilder {
    pub fn new() -> Self {
        Self {
            draft: ReferralDraft {
                vendor_id: "VEN-001".to_string(),
                vendor_name: "Midwest IME Services".to_string(),
                claim_number: ClaimNumbers::WORKERS_COMP.to_string(),
                claimant_name: "John Doe".to_string(),
                service_type: "IME".to_string(),
                service_category: "MEDICAL".to_string(),
                ..Default::default()
            },
            sequence: 1,
            assigned_at: DateFixtures::instant(2, 1),
            completed_at: None,
            status: None,
        }
    }

    pub fn with_vendor(mut self, vendor_id: &str) -> Self {
        self.draft.vendor_id = vendor_id.to_string();
        self
    }

    pub fn with_claim(mut self, claim_number: &str) -> Self {
        self.draft.claim_number = claim_number.to_string();
        self
    }

    pub fn with_service_type(mut self, service_type: &str) -> Self {
        self.draft.service_type = service_type.to_string();
        self
    }

    pub fn with_sequence(mut self, sequence: usize) -> Self {
        self.sequence = sequence;
        self
    }

    /// Moves the referral to `status` right after assignment
    pub fn with_status(mut self, status: ReferralStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Completes the referral `days` after assignment
    pub fn completed_after(mut self, days: i64) -> Self {
        self.completed_at = Some(self.assigned_at + chrono::Duration::days(days));
        self
    }

    pub fn build(self) -> Referral {
        let mut referral = Referral::assign(self.draft, self.sequence, "USR-001", self.assigned_at)
            .expect("builder draft is valid");
        if let Some(done) = self.completed_at {
            referral
                .update_status(ReferralStatus::Complete, None, "VEN-001", done)
                .expect("fresh referral can complete");
        }
        if let Some(status) = self.status {
            referral
                .update_status(status, None, "USR-001", self.completed_at.unwrap_or(self.assigned_at))
                .expect("status change is allowed");
        }
        referral
    }
}

/// Builder for invoices, submitted on Feb 1 2024 under NET 30
pub struct InvoiceBuilder {
    draft: InvoiceDraft,
    sequence: usize,
}

impl Default for InvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceBuilder {
    pub fn new() -> Self {
        Self {
            draft: InvoiceDraft {
                referral_id: "REF-1".to_string(),
                vendor_id: "VEN-001".to_string(),
                vendor_name: "Midwest IME Services".to_string(),
                claim_number: ClaimNumbers::WORKERS_COMP.to_string(),
                total_amount: dec!(1000),
                ..Default::default()
            },
            sequence: 1,
        }
    }

    pub fn with_vendor(mut self, vendor_id: &str) -> Self {
        self.draft.vendor_id = vendor_id.to_string();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.draft.total_amount = amount;
        self
    }

    pub fn with_sequence(mut self, sequence: usize) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn build(self) -> Invoice {
        Invoice::submit(self.draft, self.sequence, PaymentTerms::Net30, DateFixtures::instant(2, 1))
            .expect("builder draft is valid")
    }
}
