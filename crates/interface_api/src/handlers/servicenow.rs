//! Simulated ServiceNow integration
//!
//! Cases and notifications are acknowledged without being stored.

use axum::extract::Path;
use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use core_kernel::CaseId;
use domain_vendor::sla_target_days;

use crate::dto::servicenow::{
    CaseCreated, CaseDetails, CaseUpdated, CreateCaseRequest, NotificationRequest, NotificationSent, UpdateCaseRequest,
};
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::response::{ApiResponse, RequestContext};

const CASE_NUMBER_RANGE: u128 = 100_000;
/// Age reported for any case looked up by id
const CASE_AGE_DAYS: i64 = 3;

/// Opens a case for a referral, with an SLA target set by its service type
pub async fn create_case(
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<CreateCaseRequest>,
) -> ApiResponse<CaseCreated> {
    let referral = request.referral.unwrap_or_default();
    let service_type = referral.service_type.as_deref().unwrap_or_default();
    let now = Utc::now();

    let created = CaseCreated {
        case_id: CaseId::new(),
        case_number: format!("CSE-{:05}", Uuid::new_v4().as_u128() % CASE_NUMBER_RANGE),
        status: "ASSIGNED",
        created_date: now,
        sla_target: now + Duration::days(sla_target_days(service_type)),
    };

    info!(
        case_id = %created.case_id,
        case_number = %created.case_number,
        referral_id = referral.referral_id.as_deref().unwrap_or("-"),
        vendor_id = referral.vendor_id.as_deref().unwrap_or("-"),
        service_type,
        has_claim_context = !request.claim_context.is_null(),
        "case created"
    );
    ctx.ok(created)
}

pub async fn update_case(
    ctx: RequestContext,
    Path(case_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCaseRequest>,
) -> ApiResponse<CaseUpdated> {
    info!(
        case_id = %case_id,
        status = request.status.as_deref().unwrap_or("-"),
        milestone = request.milestone.as_deref().unwrap_or("-"),
        has_notes = request.notes.is_some(),
        "case updated"
    );

    ctx.ok(CaseUpdated {
        case_id,
        status: request.status,
        milestone: request.milestone,
        updated_date: Utc::now(),
    })
}

/// `CASE-1234` is case `CSE-1234`; ids without a suffix name no case
fn case_number_for(case_id: &str) -> Option<String> {
    case_id
        .split_once('-')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
        .map(|rest| format!("CSE-{}", rest))
}

/// Case lookup; the case number is derived from the id's suffix
pub async fn get_case(ctx: RequestContext, Path(case_id): Path<String>) -> Result<ApiResponse<CaseDetails>, ApiError> {
    let case_number =
        case_number_for(&case_id).ok_or_else(|| ApiError::not_found(format!("Case {} not found", case_id)))?;
    let now = Utc::now();

    Ok(ctx.ok(CaseDetails {
        case_number,
        case_id,
        status: "IN_PROGRESS",
        assigned_to: "Vendor User",
        created_date: now - Duration::days(CASE_AGE_DAYS),
        last_updated: now,
    }))
}

pub async fn send_notification(
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<NotificationRequest>,
) -> ApiResponse<NotificationSent> {
    let sent = NotificationSent {
        notification_id: Uuid::new_v4().to_string(),
        sent_date: Utc::now(),
        delivery_status: "SENT",
    };

    info!(
        notification_id = %sent.notification_id,
        recipient_id = %request.recipient_id,
        notification_type = %request.notification_type,
        chars = request.message.len(),
        "notification sent"
    );
    ctx.ok(sent)
}
