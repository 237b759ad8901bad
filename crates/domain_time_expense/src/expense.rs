//! Expense entries

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseEntryId, FilterSpec, Record};

use crate::entry::EntryStatus;
use crate::error::TimeExpenseError;

/// An out-of-pocket cost incurred by an adjuster on a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    pub id: ExpenseEntryId,
    pub claim_number: String,
    pub adjuster_id: String,
    #[serde(default)]
    pub adjuster_name: String,
    #[serde(default)]
    pub expense_type_id: String,
    #[serde(default)]
    pub expense_code: String,
    #[serde(default)]
    pub expense_description: String,
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub receipt_attached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_document_id: Option<String>,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
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

#[derive(Debug, Clone, Default)]
pub struct ExpenseEntryDraft {
    pub claim_number: String,
    pub adjuster_id: String,
    pub adjuster_name: String,
    pub expense_type_id: String,
    pub expense_code: String,
    pub expense_description: String,
    pub entry_date: Option<NaiveDate>,
    pub amount: Decimal,
    pub quantity: Option<Decimal>,
    pub receipt_attached: bool,
    pub receipt_document_id: Option<String>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseEntryPatch {
    pub expense_type_id: Option<String>,
    pub expense_code: Option<String>,
    pub expense_description: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub receipt_attached: Option<bool>,
    pub receipt_document_id: Option<String>,
    pub status: Option<EntryStatus>,
    pub notes: Option<String>,
    pub approved_by: Option<String>,
    pub rejection_reason: Option<String>,
}

impl ExpenseEntry {
    /// Creates an expense entry, DRAFT unless a status is given
    pub fn create(draft: ExpenseEntryDraft, today: NaiveDate) -> Self {
        Self {
            id: ExpenseEntryId::new(),
            created_by: draft.created_by.unwrap_or_else(|| draft.adjuster_id.clone()),
            claim_number: draft.claim_number,
            adjuster_id: draft.adjuster_id,
            adjuster_name: draft.adjuster_name,
            expense_type_id: draft.expense_type_id,
            expense_code: draft.expense_code,
            expense_description: draft.expense_description,
            entry_date: draft.entry_date.unwrap_or(today),
            amount: draft.amount,
            quantity: draft.quantity,
            receipt_attached: draft.receipt_attached,
            receipt_document_id: draft.receipt_document_id,
            status: draft.status.unwrap_or(EntryStatus::Draft),
            notes: draft.notes,
            created_date: Utc::now(),
            submitted_date: None,
            approved_by: None,
            approved_date: None,
            rejection_reason: None,
        }
    }

    pub fn apply_patch(&mut self, patch: ExpenseEntryPatch) {
        if let Some(v) = patch.expense_type_id {
            self.expense_type_id = v;
        }
        if let Some(v) = patch.expense_code {
            self.expense_code = v;
        }
        if let Some(v) = patch.expense_description {
            self.expense_description = v;
        }
        if let Some(v) = patch.entry_date {
            self.entry_date = v;
        }
        if let Some(v) = patch.amount {
            self.amount = v;
        }
        if let Some(v) = patch.quantity {
            self.quantity = Some(v);
        }
        if let Some(v) = patch.receipt_attached {
            self.receipt_attached = v;
        }
        if let Some(v) = patch.receipt_document_id {
            self.receipt_document_id = Some(v);
        }
        if let Some(status) = patch.status {
            if status == EntryStatus::Submitted && self.submitted_date.is_none() {
                self.submitted_date = Some(Utc::now());
            }
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

    /// Fails once the expense has left DRAFT / PENDING
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

    pub fn filter_spec() -> FilterSpec<Self> {
        FilterSpec::new()
            .exact("claimNumber", |e: &ExpenseEntry| Some(Cow::Borrowed(e.claim_number.as_str())))
            .exact("adjusterId", |e: &ExpenseEntry| Some(Cow::Borrowed(e.adjuster_id.as_str())))
            .exact("status", |e: &ExpenseEntry| Some(Cow::Borrowed(e.status.as_str())))
    }
}

impl Record for ExpenseEntry {
    const ENTITY: &'static str = "Expense entry";

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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_create_and_patch() {
        let mut expense = ExpenseEntry::create(
            ExpenseEntryDraft {
                claim_number: "CLM-2024-001234".to_string(),
                adjuster_id: "ADJ-001".to_string(),
                expense_code: "MILEAGE".to_string(),
                amount: dec!(33.50),
                quantity: Some(dec!(50)),
                ..Default::default()
            },
            today(),
        );
        assert!(expense.id.as_str().starts_with("EXP-"));
        assert_eq!(expense.status, EntryStatus::Draft);

        expense.apply_patch(ExpenseEntryPatch {
            amount: Some(dec!(40)),
            status: Some(EntryStatus::Submitted),
            ..Default::default()
        });
        assert_eq!(expense.amount, dec!(40));
        assert_eq!(expense.quantity, Some(dec!(50)));
        assert!(expense.submitted_date.is_some());
        assert!(expense.ensure_deletable().is_err());
    }
}
