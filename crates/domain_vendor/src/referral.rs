//! Referrals
//!
//! A referral assigns one unit of work on a claim to a vendor. Each
//! referral carries an SLA target derived from its service type; finishing
//! after the target is an SLA breach.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{days_between, FilterSpec, Record, ReferralId};

use crate::error::VendorError;

const IME_SLA_DAYS: i64 = 14;
const SURVEILLANCE_SLA_DAYS: i64 = 7;
const DEFAULT_SLA_DAYS: i64 = 10;

/// Calendar days a vendor has to complete work of the given service type
pub fn sla_target_days(service_type: &str) -> i64 {
    match service_type {
        "IME" => IME_SLA_DAYS,
        "SURVEILLANCE" => SURVEILLANCE_SLA_DAYS,
        _ => DEFAULT_SLA_DAYS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferralStatus {
    Assigned,
    Accepted,
    InProgress,
    Complete,
    Reviewed,
    Cancelled,
}

impl ReferralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralStatus::Assigned => "ASSIGNED",
            ReferralStatus::Accepted => "ACCEPTED",
            ReferralStatus::InProgress => "IN_PROGRESS",
            ReferralStatus::Complete => "COMPLETE",
            ReferralStatus::Reviewed => "REVIEWED",
            ReferralStatus::Cancelled => "CANCELLED",
        }
    }

    /// Work the vendor still owes
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            ReferralStatus::Assigned | ReferralStatus::Accepted | ReferralStatus::InProgress
        )
    }

    /// No further status changes are allowed
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReferralStatus::Reviewed | ReferralStatus::Cancelled)
    }
}

impl fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a referral's status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub status: ReferralStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub updated_by: String,
    pub updated_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub id: ReferralId,
    /// Human-facing number, `REF-<year>-NNNN`
    pub referral_number: String,
    pub vendor_id: String,
    pub vendor_name: String,
    pub claim_number: String,
    #[serde(default)]
    pub claimant_name: String,
    pub service_type: String,
    #[serde(default)]
    pub service_category: String,
    pub status: ReferralStatus,
    pub assigned_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<Decimal>,
    #[serde(default)]
    pub approval_required: bool,
    /// Date by which the work should be complete
    pub sla_target: NaiveDate,
    #[serde(default)]
    pub sla_breach: bool,
    #[serde(default)]
    pub work_items: Vec<WorkItem>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ReferralDraft {
    pub vendor_id: String,
    pub vendor_name: String,
    pub claim_number: String,
    pub claimant_name: String,
    pub service_type: String,
    pub service_category: String,
    pub due_date: Option<NaiveDate>,
    pub instructions: String,
    pub estimated_cost: Option<Decimal>,
    pub approval_required: bool,
}

impl Referral {
    /// Assigns new work to a vendor
    ///
    /// `sequence` is the 1-based position of the referral in the book and
    /// becomes the numeric part of the referral number.
    pub fn assign(
        draft: ReferralDraft,
        sequence: usize,
        created_by: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, VendorError> {
        if draft.vendor_id.trim().is_empty() {
            return Err(VendorError::Validation("vendorId is required".to_string()));
        }
        if draft.claim_number.trim().is_empty() {
            return Err(VendorError::Validation("claimNumber is required".to_string()));
        }
        if matches!(draft.estimated_cost, Some(cost) if cost < Decimal::ZERO) {
            return Err(VendorError::Validation("estimatedCost must not be negative".to_string()));
        }

        let created_by = created_by.into();
        let sla_target = now.date_naive() + Duration::days(sla_target_days(&draft.service_type));

        Ok(Self {
            id: ReferralId::new(),
            referral_number: format!("REF-{}-{:04}", now.year(), sequence),
            vendor_id: draft.vendor_id,
            vendor_name: draft.vendor_name,
            claim_number: draft.claim_number,
            claimant_name: draft.claimant_name,
            service_type: draft.service_type,
            service_category: draft.service_category,
            status: ReferralStatus::Assigned,
            assigned_date: now,
            due_date: draft.due_date,
            completed_date: None,
            instructions: draft.instructions,
            estimated_cost: draft.estimated_cost,
            approval_required: draft.approval_required,
            sla_target,
            sla_breach: false,
            work_items: vec![WorkItem {
                status: ReferralStatus::Assigned,
                notes: None,
                updated_by: created_by.clone(),
                updated_date: now,
            }],
            created_by,
            created_date: now,
            last_modified_date: now,
        })
    }

    /// Moves the referral to `status` and records the change
    ///
    /// Completing a referral stamps the completion date and flags an SLA
    /// breach when it lands after the target.
    pub fn update_status(
        &mut self,
        status: ReferralStatus,
        notes: Option<String>,
        updated_by: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), VendorError> {
        if self.status.is_terminal() {
            return Err(VendorError::InvalidStatusTransition {
                entity: Self::ENTITY,
                id: self.id.to_string(),
                from: self.status.to_string(),
                to: status.to_string(),
            });
        }

        if status == ReferralStatus::Complete && self.completed_date.is_none() {
            self.completed_date = Some(now);
            self.sla_breach = now.date_naive() > self.sla_target;
            if self.sla_breach {
                tracing::warn!(
                    referral = %self.referral_number,
                    vendor_id = %self.vendor_id,
                    sla_target = %self.sla_target,
                    "referral completed after SLA target"
                );
            }
        }

        self.status = status;
        self.last_modified_date = now;
        self.work_items.push(WorkItem {
            status,
            notes,
            updated_by: updated_by.into(),
            updated_date: now,
        });
        Ok(())
    }

    /// Whole days from assignment to completion, for completed referrals
    pub fn completion_days(&self) -> Option<i64> {
        self.completed_date
            .map(|done| days_between(self.assigned_date, done).max(0))
    }

    pub fn filter_spec() -> FilterSpec<Self> {
        FilterSpec::new()
            .exact("status", |r: &Referral| Some(Cow::Borrowed(r.status.as_str())))
            .exact("vendorId", |r: &Referral| Some(Cow::Borrowed(r.vendor_id.as_str())))
            .exact("claimNumber", |r: &Referral| Some(Cow::Borrowed(r.claim_number.as_str())))
    }
}

impl Record for Referral {
    const ENTITY: &'static str = "Referral";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn claim_number(&self) -> Option<&str> {
        Some(&self.claim_number)
    }
}
