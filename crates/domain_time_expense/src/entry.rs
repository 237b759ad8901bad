//! Time entries
//!
//! A time entry records a slice of adjuster work on a claim: how long, at
//! what rate, and how it was captured.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{FilterSpec, Record, TimeEntryId};

use crate::error::TimeExpenseError;
use crate::reference::{ActivityCode, Adjuster, EventTrigger};

/// Smallest billable increment (six minutes)
const MIN_INCREMENT_HOURS: Decimal = dec!(0.1);

/// How a time entry was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureType {
    /// Typed in by the adjuster
    Manual,
    /// Produced by the stopwatch
    Timer,
    /// Created from an external claims event
    Auto,
}

impl CaptureType {
    /// Wire name of the capture type
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureType::Manual => "MANUAL",
            CaptureType::Timer => "TIMER",
            CaptureType::Auto => "AUTO",
        }
    }
}

/// Billing status shared by time and expense entries
///
/// `DRAFT` and `PENDING` both mean "not yet submitted"; different screens
/// of the source system use one or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Draft,
    Pending,
    Submitted,
    Approved,
    Rejected,
    Billed,
}

impl EntryStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Draft => "DRAFT",
            EntryStatus::Pending => "PENDING",
            EntryStatus::Submitted => "SUBMITTED",
            EntryStatus::Approved => "APPROVED",
            EntryStatus::Rejected => "REJECTED",
            EntryStatus::Billed => "BILLED",
        }
    }

    /// True while the entry has not been submitted for billing
    pub fn is_unsubmitted(&self) -> bool {
        matches!(self, EntryStatus::Draft | EntryStatus::Pending)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A billable slice of adjuster time on a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: TimeEntryId,
    pub claim_number: String,
    pub adjuster_id: String,
    #[serde(default)]
    pub adjuster_name: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub role_name: String,
    #[serde(default)]
    pub activity_code_id: String,
    #[serde(default)]
    pub activity_code: String,
    #[serde(default)]
    pub activity_description: String,
    pub capture_type: CaptureType,
    pub entry_date: NaiveDate,
    /// Hours, fractional
    #[serde(default)]
    pub duration: Decimal,
    #[serde(default)]
    pub rate: Decimal,
    /// Normally duration × rate; not enforced after creation
    #[serde(default)]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_name: Option<String>,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Assure event that produced an AUTO entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_event_ref: Option<String>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Caller-supplied fields of a new time entry
#[derive(Debug, Clone, Default)]
pub struct TimeEntryDraft {
    pub claim_number: String,
    pub adjuster_id: String,
    pub adjuster_name: String,
    pub role_id: String,
    pub role_name: String,
    pub activity_code_id: String,
    pub activity_code: String,
    pub activity_description: String,
    pub capture_type: Option<CaptureType>,
    pub entry_date: Option<NaiveDate>,
    pub duration: Decimal,
    pub rate: Decimal,
    pub amount: Option<Decimal>,
    pub carrier_id: Option<String>,
    pub carrier_name: Option<String>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

/// Partial update of a time entry; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct TimeEntryPatch {
    pub activity_code_id: Option<String>,
    pub activity_code: Option<String>,
    pub activity_description: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub duration: Option<Decimal>,
    pub rate: Option<Decimal>,
    pub amount: Option<Decimal>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
}

impl TimeEntry {
    /// Creates a time entry from a draft
    ///
    /// Missing capture type defaults to MANUAL, missing date to `today`,
    /// missing status to DRAFT, and a missing amount to duration × rate.
    /// A product too large for a `Decimal` saturates; the validator then
    /// rejects the entry for exceeding [`MAX_ENTRY_AMOUNT`](crate::MAX_ENTRY_AMOUNT).
    pub fn create(draft: TimeEntryDraft, today: NaiveDate) -> Self {
        let now = Utc::now();
        let amount = draft
            .amount
            .unwrap_or_else(|| draft.duration.saturating_mul(draft.rate));

        Self {
            id: TimeEntryId::new(),
            created_by: draft.created_by.unwrap_or_else(|| draft.adjuster_id.clone()),
            claim_number: draft.claim_number,
            adjuster_id: draft.adjuster_id,
            adjuster_name: draft.adjuster_name,
            role_id: draft.role_id,
            role_name: draft.role_name,
            activity_code_id: draft.activity_code_id,
            activity_code: draft.activity_code,
            activity_description: draft.activity_description,
            capture_type: draft.capture_type.unwrap_or(CaptureType::Manual),
            entry_date: draft.entry_date.unwrap_or(today),
            duration: draft.duration,
            rate: draft.rate,
            amount,
            carrier_id: draft.carrier_id,
            carrier_name: draft.carrier_name,
            status: draft.status.unwrap_or(EntryStatus::Draft),
            notes: draft.notes,
            auto_event_ref: None,
            created_date: now,
            submitted_date: None,
            approved_by: None,
            approved_date: None,
            rejection_reason: None,
        }
    }

    /// Creates an AUTO entry for a claims event matched by an event trigger
    ///
    /// Triggers flagged for review produce a DRAFT entry; all others go
    /// straight to PENDING.
    pub fn auto_captured(
        claim_number: impl Into<String>,
        adjuster: &Adjuster,
        trigger: &EventTrigger,
        activity: Option<&ActivityCode>,
        event_ref: impl Into<String>,
        entry_date: NaiveDate,
    ) -> Result<Self, TimeExpenseError> {
        if !trigger.is_active {
            return Err(TimeExpenseError::TriggerInactive(trigger.event_code.clone()));
        }

        let duration = trigger.default_duration.unwrap_or(MIN_INCREMENT_HOURS);
        let draft = TimeEntryDraft {
            claim_number: claim_number.into(),
            adjuster_id: adjuster.id.clone(),
            adjuster_name: adjuster.full_name(),
            role_id: adjuster.role_id.clone(),
            role_name: adjuster.role_name.clone(),
            activity_code_id: trigger.mapped_activity_code_id.clone(),
            activity_code: trigger.mapped_activity_code.clone(),
            activity_description: activity
                .map(|a| a.name.clone())
                .unwrap_or_else(|| trigger.assure_event_name.clone()),
            capture_type: Some(CaptureType::Auto),
            entry_date: Some(entry_date),
            duration,
            rate: adjuster.default_rate,
            amount: None,
            status: Some(if trigger.requires_review {
                EntryStatus::Draft
            } else {
                EntryStatus::Pending
            }),
            created_by: Some("SYSTEM".to_string()),
            ..Default::default()
        };

        let mut entry = Self::create(draft, entry_date);
        entry.auto_event_ref = Some(event_ref.into());

        tracing::debug!(
            entry_id = %entry.id,
            event_code = %trigger.event_code,
            status = %entry.status,
            "auto-captured time entry"
        );
        Ok(entry)
    }

    /// Merges a partial update into the entry
    pub fn apply_patch(&mut self, patch: TimeEntryPatch) {
        if let Some(v) = patch.activity_code_id {
            self.activity_code_id = v;
        }
        if let Some(v) = patch.activity_code {
            self.activity_code = v;
        }
        if let Some(v) = patch.activity_description {
            self.activity_description = v;
        }
        if let Some(v) = patch.entry_date {
            self.entry_date = v;
        }
        if let Some(v) = patch.duration {
            self.duration = v;
        }
        if let Some(v) = patch.rate {
            self.rate = v;
        }
        if let Some(v) = patch.amount {
            self.amount = v;
        }
        if let Some(status) = patch.status {
            if status == EntryStatus::Approved && self.status != EntryStatus::Approved {
                self.approved_date = Some(Utc::now());
            }
            self.status = status;
        }
        if let Some(v) = patch.notes {
            self.notes = Some(v);
        }
        if let Some(v) = patch.approved_by {
            self.approved_by = Some(v);
        }
        if let Some(v) = patch.rejection_reason {
            self.rejection_reason = Some(v);
        }
    }

    /// Submits the entry for billing
    ///
    /// Returns true when the entry moved to SUBMITTED; entries that were
    /// already submitted are left as they are.
    pub fn submit(&mut self, at: DateTime<Utc>) -> bool {
        if !self.status.is_unsubmitted() {
            return false;
        }
        self.status = EntryStatus::Submitted;
        self.submitted_date = Some(at);
        true
    }

    /// Fails unless the entry may still be deleted
    pub fn ensure_deletable(&self) -> Result<(), TimeExpenseError> {
        if self.status.is_unsubmitted() {
            Ok(())
        } else {
            Err(TimeExpenseError::EntryLocked {
                entity: Self::ENTITY,
                id: self.id.to_string(),
                status: self.status,
            })
        }
    }

    /// True when the entry was created from a claims event
    pub fn is_auto_captured(&self) -> bool {
        self.capture_type == CaptureType::Auto
    }

    /// Query keys understood by the time-entry listing
    pub fn filter_spec() -> FilterSpec<Self> {
        FilterSpec::new()
            .exact("claimNumber", |t: &TimeEntry| Some(Cow::Borrowed(t.claim_number.as_str())))
            .exact("adjusterId", |t: &TimeEntry| Some(Cow::Borrowed(t.adjuster_id.as_str())))
            .exact("status", |t: &TimeEntry| Some(Cow::Borrowed(t.status.as_str())))
            .exact("captureType", |t: &TimeEntry| Some(Cow::Borrowed(t.capture_type.as_str())))
            .on_or_after("startDate", |t: &TimeEntry| Some(Cow::Owned(t.entry_date.to_string())))
            .on_or_before("endDate", |t: &TimeEntry| Some(Cow::Owned(t.entry_date.to_string())))
    }
}

impl Record for TimeEntry {
    const ENTITY: &'static str = "Time entry";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn claim_number(&self) -> Option<&str> {
        Some(&self.claim_number)
    }

    fn adjuster_id(&self) -> Option<&str> {
        Some(&self.adjuster_id)
    }
}
