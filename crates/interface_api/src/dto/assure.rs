//! Assure Claims integration DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::DocumentId;
use domain_claims::AssureClaimsEvent;
use domain_time_expense::TimeEntry;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest {
    #[validate(length(min = 1, message = "activityType is required"))]
    pub activity_type: String,
    #[serde(default)]
    pub description: String,
    pub user_id: Option<String>,
}

/// Activity journal entry as posted to the claim
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogged {
    pub activity_id: String,
    pub claim_number: String,
    pub activity_type: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSyncRequest {
    #[validate(length(min = 1, message = "documentType is required"))]
    pub document_type: String,
    #[validate(length(min = 1, message = "fileName is required"))]
    pub file_name: String,
    pub uploaded_by: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSynced {
    pub assure_doc_id: DocumentId,
    pub claim_number: String,
    pub document_type: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
    pub uploaded_date: DateTime<Utc>,
}

/// Event pushed by Assure Claims
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEventRequest {
    #[validate(length(min = 1, message = "eventCode is required"))]
    pub event_code: String,
    #[validate(length(min = 1, message = "claimNumber is required"))]
    pub claim_number: String,
    pub event_name: Option<String>,
    #[serde(default)]
    pub event_data: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAck {
    pub acknowledged: bool,
    pub event: AssureClaimsEvent,
    /// Time entry captured from the event, when a trigger billed it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_entry: Option<TimeEntry>,
    pub timestamp: DateTime<Utc>,
}
