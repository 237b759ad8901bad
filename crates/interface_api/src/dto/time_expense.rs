//! Time & expense DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_time_expense::{
    CaptureType, EntryStatus, ExpenseEntryDraft, ExpenseEntryPatch, TimeEntryDraft, TimeEntryPatch,
};

use super::non_negative;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimeEntryRequest {
    #[validate(length(min = 1, message = "claimNumber is required"))]
    pub claim_number: String,
    #[validate(length(min = 1, message = "adjusterId is required"))]
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
    pub capture_type: Option<CaptureType>,
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    pub duration: Decimal,
    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    pub rate: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub amount: Option<Decimal>,
    pub carrier_id: Option<String>,
    pub carrier_name: Option<String>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

impl From<CreateTimeEntryRequest> for TimeEntryDraft {
    fn from(req: CreateTimeEntryRequest) -> Self {
        TimeEntryDraft {
            claim_number: req.claim_number,
            adjuster_id: req.adjuster_id,
            adjuster_name: req.adjuster_name,
            role_id: req.role_id,
            role_name: req.role_name,
            activity_code_id: req.activity_code_id,
            activity_code: req.activity_code,
            activity_description: req.activity_description,
            capture_type: req.capture_type,
            entry_date: req.entry_date,
            duration: req.duration,
            rate: req.rate,
            amount: req.amount,
            carrier_id: req.carrier_id,
            carrier_name: req.carrier_name,
            status: req.status,
            notes: req.notes,
            created_by: req.created_by,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimeEntryRequest {
    pub activity_code_id: Option<String>,
    pub activity_code: Option<String>,
    pub activity_description: Option<String>,
    pub entry_date: Option<NaiveDate>,
    #[validate(custom(function = "non_negative"))]
    pub duration: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub rate: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub amount: Option<Decimal>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
}

impl From<UpdateTimeEntryRequest> for TimeEntryPatch {
    fn from(req: UpdateTimeEntryRequest) -> Self {
        TimeEntryPatch {
            activity_code_id: req.activity_code_id,
            activity_code: req.activity_code,
            activity_description: req.activity_description,
            entry_date: req.entry_date,
            duration: req.duration,
            rate: req.rate,
            amount: req.amount,
            status: req.status,
            notes: req.notes,
            approved_by: req.approved_by,
            rejection_reason: req.rejection_reason,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEntriesRequest {
    pub entry_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResult {
    /// Entries that actually moved to SUBMITTED
    pub submitted: usize,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseEntryRequest {
    #[validate(length(min = 1, message = "claimNumber is required"))]
    pub claim_number: String,
    #[validate(length(min = 1, message = "adjusterId is required"))]
    pub adjuster_id: String,
    #[serde(default)]
    pub adjuster_name: String,
    #[serde(default)]
    pub expense_type_id: String,
    #[serde(default)]
    pub expense_code: String,
    #[serde(default)]
    pub expense_description: String,
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(custom(function = "non_negative"))]
    pub amount: Decimal,
    #[validate(custom(function = "non_negative"))]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub receipt_attached: bool,
    pub receipt_document_id: Option<String>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

impl From<CreateExpenseEntryRequest> for ExpenseEntryDraft {
    fn from(req: CreateExpenseEntryRequest) -> Self {
        ExpenseEntryDraft {
            claim_number: req.claim_number,
            adjuster_id: req.adjuster_id,
            adjuster_name: req.adjuster_name,
            expense_type_id: req.expense_type_id,
            expense_code: req.expense_code,
            expense_description: req.expense_description,
            entry_date: req.entry_date,
            amount: req.amount,
            quantity: req.quantity,
            receipt_attached: req.receipt_attached,
            receipt_document_id: req.receipt_document_id,
            status: req.status,
            notes: req.notes,
            created_by: req.created_by,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseEntryRequest {
    pub expense_type_id: Option<String>,
    pub expense_code: Option<String>,
    pub expense_description: Option<String>,
    pub entry_date: Option<NaiveDate>,
    #[validate(custom(function = "non_negative"))]
    pub amount: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub quantity: Option<Decimal>,
    pub receipt_attached: Option<bool>,
    pub receipt_document_id: Option<String>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
}

impl From<UpdateExpenseEntryRequest> for ExpenseEntryPatch {
    fn from(req: UpdateExpenseEntryRequest) -> Self {
        ExpenseEntryPatch {
            expense_type_id: req.expense_type_id,
            expense_code: req.expense_code,
            expense_description: req.expense_description,
            entry_date: req.entry_date,
            amount: req.amount,
            quantity: req.quantity,
            receipt_attached: req.receipt_attached,
            receipt_document_id: req.receipt_document_id,
            status: req.status,
            notes: req.notes,
            approved_by: req.approved_by,
            rejection_reason: req.rejection_reason,
        }
    }
}
