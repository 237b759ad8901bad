//! Referral handlers

use axum::extract::{Path, State};
use chrono::Utc;
use tracing::info;

use core_kernel::{PortError, RecordStore};
use domain_billing::{compute_referral_stats, ReferralStats};
use domain_vendor::{Referral, VendorError};

use crate::dto::vendor::{CreateReferralRequest, UpdateReferralStatusRequest};
use crate::error::ApiError;
use crate::extract::{Filters, ValidatedJson};
use crate::handlers::vendors::SYSTEM_USER;
use crate::response::{ApiResponse, RequestContext};
use crate::AppState;

/// Carries a domain rejection out of a store mutator with its category intact
pub(crate) fn to_port_error(err: VendorError) -> PortError {
    match err {
        VendorError::Validation(_) => PortError::validation(err.to_string()),
        VendorError::InvalidStatusTransition { .. } | VendorError::VendorUnavailable(_) => {
            PortError::conflict(err.to_string())
        }
    }
}

pub async fn list_referrals(
    State(state): State<AppState>,
    ctx: RequestContext,
    filters: Filters,
) -> ApiResponse<Vec<Referral>> {
    let referrals = state.stores.referrals.snapshot().await;
    ctx.ok(Referral::filter_spec().apply(&referrals, &filters.0))
}

pub async fn referral_stats(State(state): State<AppState>, ctx: RequestContext) -> ApiResponse<ReferralStats> {
    ctx.ok(compute_referral_stats(&state.stores.referrals.snapshot().await))
}

pub async fn get_referral(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<Referral>, ApiError> {
    Ok(ctx.ok(state.stores.referrals.get(&id).await?))
}

/// Assigns work to a vendor that is currently taking referrals
pub async fn create_referral(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<CreateReferralRequest>,
) -> Result<ApiResponse<Referral>, ApiError> {
    let (mut draft, created_by) = request.into_draft();

    let vendor = state.stores.vendors.get(&draft.vendor_id).await?;
    if !vendor.status.accepts_referrals() {
        return Err(VendorError::VendorUnavailable(format!(
            "vendor {} is {} and cannot take referrals",
            vendor.id, vendor.status
        ))
        .into());
    }
    if draft.vendor_name.trim().is_empty() {
        draft.vendor_name = vendor.legal_name.clone();
    }

    let referral = Referral::assign(
        draft,
        state.stores.referral_numbers.next(),
        created_by.unwrap_or_else(|| SYSTEM_USER.to_string()),
        Utc::now(),
    )?;

    let referral = state.stores.referrals.append(referral).await?;
    info!(
        referral = %referral.referral_number,
        vendor_id = %referral.vendor_id,
        sla_target = %referral.sla_target,
        "referral assigned"
    );
    Ok(ctx.created(referral))
}

/// Moves a referral through its lifecycle
pub async fn update_referral_status(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateReferralStatusRequest>,
) -> Result<ApiResponse<Referral>, ApiError> {
    let updated_by = request.updated_by.unwrap_or_else(|| SYSTEM_USER.to_string());
    let (status, notes) = (request.status, request.notes);

    let referral = state
        .stores
        .referrals
        .update_with(
            &id,
            Box::new(move |referral: &mut Referral| {
                referral
                    .update_status(status, notes, updated_by, Utc::now())
                    .map_err(to_port_error)
            }),
        )
        .await?;

    info!(referral = %referral.referral_number, status = %referral.status, sla_breach = referral.sla_breach, "referral status updated");
    Ok(ctx.ok(referral))
}
