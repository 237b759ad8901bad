//! Simulated Assure Claims integration
//!
//! Claim context, activity journal, payments and documents answer from the
//! claim store. The event webhook is the one path with side effects: an
//! event matching an active auto-billing trigger books an AUTO time entry
//! for the claim's adjuster.

use axum::extract::{Path, State};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use core_kernel::{DocumentId, RecordStore};
use domain_claims::{AssureClaimsEvent, Claim, ClaimError, PaymentRequest, PaymentStatus};
use domain_time_expense::TimeEntry;

use crate::dto::assure::{
    ActivityLogged, ActivityRequest, DocumentSyncRequest, DocumentSynced, WebhookAck, WebhookEventRequest,
};
use crate::error::ApiError;
use crate::extract::{JsonBody, ValidatedJson};
use crate::response::{ApiResponse, RequestContext};
use crate::AppState;

const CHECK_NUMBER_RANGE: u128 = 100_000;

async fn find_claim(state: &AppState, claim_number: &str) -> Result<Claim, ApiError> {
    state
        .stores
        .claims
        .get(claim_number)
        .await
        .map_err(|_| ClaimError::ClaimNotFound(claim_number.to_string()).into())
}

pub async fn claim_context(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(claim_number): Path<String>,
) -> Result<ApiResponse<Claim>, ApiError> {
    Ok(ctx.ok(find_claim(&state, &claim_number).await?))
}

/// Posts an activity journal entry to the claim
pub async fn post_activity(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(claim_number): Path<String>,
    ValidatedJson(request): ValidatedJson<ActivityRequest>,
) -> Result<ApiResponse<ActivityLogged>, ApiError> {
    let claim = find_claim(&state, &claim_number).await?;

    let logged = ActivityLogged {
        activity_id: Uuid::new_v4().to_string(),
        claim_number: claim.claim_number,
        activity_type: request.activity_type,
        description: request.description,
        timestamp: Utc::now(),
    };

    info!(
        activity_id = %logged.activity_id,
        claim = %logged.claim_number,
        activity_type = %logged.activity_type,
        user_id = request.user_id.as_deref().unwrap_or("-"),
        "activity logged"
    );
    Ok(ctx.ok(logged))
}

/// Requests a reserve payment; it is expected to clear in a week
pub async fn request_payment(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(claim_number): Path<String>,
    JsonBody(mut request): JsonBody<PaymentRequest>,
) -> Result<ApiResponse<PaymentStatus>, ApiError> {
    find_claim(&state, &claim_number).await?;

    if request.claim_number.trim().is_empty() {
        request.claim_number = claim_number.clone();
    } else if request.claim_number != claim_number {
        return Err(ApiError::validation(format!(
            "claimNumber {} does not match the claim in the path",
            request.claim_number
        )));
    }
    request.validate()?;

    let status = PaymentStatus::requested(state.today());
    info!(
        payment_id = %status.payment_id,
        claim = %claim_number,
        payee_id = %request.payee_id,
        amount = %request.amount,
        reserve = ?request.reserve_type,
        "payment requested"
    );
    Ok(ctx.ok(status))
}

/// Payment status; every known payment has been issued by check
pub async fn payment_status(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(payment_id): Path<String>,
) -> ApiResponse<PaymentStatus> {
    let check_number = (Uuid::new_v4().as_u128() % CHECK_NUMBER_RANGE) as u32;
    ctx.ok(PaymentStatus::completed(payment_id, state.today(), check_number))
}

pub async fn sync_document(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(claim_number): Path<String>,
    ValidatedJson(request): ValidatedJson<DocumentSyncRequest>,
) -> Result<ApiResponse<DocumentSynced>, ApiError> {
    let claim = find_claim(&state, &claim_number).await?;

    let synced = DocumentSynced {
        assure_doc_id: DocumentId::new(),
        claim_number: claim.claim_number,
        document_type: request.document_type,
        file_name: request.file_name,
        uploaded_by: request.uploaded_by,
        uploaded_date: Utc::now(),
    };

    info!(doc_id = %synced.assure_doc_id, claim = %synced.claim_number, "document synced");
    Ok(ctx.ok(synced))
}

/// Receives an Assure Claims event
///
/// The event is always recorded. When an active trigger bills its code and
/// both the claim and its adjuster are on file, an AUTO time entry is
/// booked and linked to the event.
pub async fn receive_event(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<WebhookEventRequest>,
) -> Result<ApiResponse<WebhookAck>, ApiError> {
    let stores = &state.stores;
    let trigger = stores
        .event_triggers
        .snapshot()
        .await
        .into_iter()
        .find(|t| t.bills(&request.event_code));

    let event_name = request
        .event_name
        .clone()
        .or_else(|| trigger.as_ref().map(|t| t.assure_event_name.clone()))
        .unwrap_or_else(|| request.event_code.clone());
    let mut event = AssureClaimsEvent::received(
        &request.claim_number,
        &request.event_code,
        event_name,
        request.event_data,
    );

    let mut time_entry = None;
    if let Some(trigger) = trigger {
        match stores.claims.get(&request.claim_number).await {
            Ok(claim) => {
                let adjuster = stores.adjusters.get(&claim.adjuster_id).await?;
                let activity = stores.activity_codes.get(&trigger.mapped_activity_code_id).await.ok();

                let entry = TimeEntry::auto_captured(
                    &claim.claim_number,
                    &adjuster,
                    &trigger,
                    activity.as_ref(),
                    event.id.as_str(),
                    state.today(),
                )?;
                let entry = stores.time_entries.append(entry).await?;
                event.mark_billed(entry.id.as_str());

                info!(
                    event_id = %event.id,
                    entry_id = %entry.id,
                    claim = %claim.claim_number,
                    adjuster_id = %adjuster.id,
                    hours = %entry.duration,
                    "event auto-billed"
                );
                time_entry = Some(entry);
            }
            Err(_) => debug!(claim = %request.claim_number, "event for unknown claim left unbilled"),
        }
    }

    let event = stores.events.append(event).await?;
    info!(event_id = %event.id, event_code = %event.event_code, auto_billed = event.auto_billed, "event received");

    Ok(ctx.ok(WebhookAck {
        acknowledged: true,
        event,
        time_entry,
        timestamp: Utc::now(),
    }))
}
