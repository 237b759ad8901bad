//! ServiceNow integration DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::CaseId;

/// Referral fields a case is opened from
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseReferral {
    pub referral_id: Option<String>,
    pub service_type: Option<String>,
    pub vendor_id: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseRequest {
    pub referral: Option<CaseReferral>,
    #[serde(default)]
    pub claim_context: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseCreated {
    pub case_id: CaseId,
    pub case_number: String,
    pub status: &'static str,
    pub created_date: DateTime<Utc>,
    pub sla_target: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCaseRequest {
    #[validate(length(min = 1, message = "status must not be blank"))]
    pub status: Option<String>,
    pub milestone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseUpdated {
    pub case_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
    pub updated_date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    pub case_id: String,
    pub case_number: String,
    pub status: &'static str,
    pub assigned_to: &'static str,
    pub created_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[validate(length(min = 1, message = "recipientId is required"))]
    pub recipient_id: String,
    #[validate(length(min = 1, message = "notificationType is required"))]
    pub notification_type: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSent {
    pub notification_id: String,
    pub sent_date: DateTime<Utc>,
    pub delivery_status: &'static str,
}
