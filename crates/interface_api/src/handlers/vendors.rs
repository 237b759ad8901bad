//! Vendor handlers

use axum::extract::{Path, State};
use tracing::info;

use core_kernel::RecordStore;
use domain_billing::{compute_vendor_stats, VendorStats};
use domain_vendor::Vendor;

use crate::dto::vendor::{CreateVendorRequest, UpdateVendorRequest};
use crate::error::ApiError;
use crate::extract::{Filters, ValidatedJson};
use crate::response::{ApiResponse, RequestContext};
use crate::AppState;

/// Actor recorded when a request does not name one
pub(crate) const SYSTEM_USER: &str = "SYSTEM";

pub async fn list_vendors(
    State(state): State<AppState>,
    ctx: RequestContext,
    filters: Filters,
) -> ApiResponse<Vec<Vendor>> {
    let vendors = state.stores.vendors.snapshot().await;
    ctx.ok(Vendor::filter_spec().apply(&vendors, &filters.0))
}

pub async fn vendor_stats(State(state): State<AppState>, ctx: RequestContext) -> ApiResponse<VendorStats> {
    let (vendors, referrals) = tokio::join!(state.stores.vendors.snapshot(), state.stores.referrals.snapshot());
    ctx.ok(compute_vendor_stats(&vendors, &referrals))
}

pub async fn get_vendor(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<Vendor>, ApiError> {
    Ok(ctx.ok(state.stores.vendors.get(&id).await?))
}

pub async fn create_vendor(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<CreateVendorRequest>,
) -> Result<ApiResponse<Vendor>, ApiError> {
    let (draft, created_by) = request.into_draft();
    let vendor = Vendor::create(draft, created_by.unwrap_or_else(|| SYSTEM_USER.to_string()));

    let vendor = state.stores.vendors.append(vendor).await?;
    info!(vendor_id = %vendor.id, status = %vendor.status, "vendor onboarded");
    Ok(ctx.created(vendor))
}

pub async fn update_vendor(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateVendorRequest>,
) -> Result<ApiResponse<Vendor>, ApiError> {
    let (patch, modified_by) = request.into_patch();
    let modified_by = modified_by.unwrap_or_else(|| SYSTEM_USER.to_string());

    let vendor = state
        .stores
        .vendors
        .update_with(
            &id,
            Box::new(move |vendor: &mut Vendor| {
                vendor.apply_patch(patch, modified_by);
                Ok(())
            }),
        )
        .await?;

    info!(vendor_id = %vendor.id, status = %vendor.status, "vendor updated");
    Ok(ctx.ok(vendor))
}
