//! Claims handlers

use axum::extract::{Path, State};

use core_kernel::RecordStore;
use domain_billing::ClaimDetail;
use domain_claims::Claim;

use crate::error::ApiError;
use crate::extract::Filters;
use crate::response::{ApiResponse, RequestContext};
use crate::AppState;

/// Lists claims
pub async fn list_claims(
    State(state): State<AppState>,
    ctx: RequestContext,
    filters: Filters,
) -> ApiResponse<Vec<Claim>> {
    let claims = state.stores.claims.snapshot().await;
    ctx.ok(Claim::filter_spec().apply(&claims, &filters.0))
}

/// Gets a claim with its time, expenses, events and billing summary
pub async fn get_claim(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(claim_number): Path<String>,
) -> Result<ApiResponse<ClaimDetail>, ApiError> {
    let claim = state.stores.claims.get(&claim_number).await?;

    let stores = &state.stores;
    let (time_entries, expense_entries, events) = tokio::join!(
        stores.time_entries.by_claim(&claim_number),
        stores.expense_entries.by_claim(&claim_number),
        stores.events.by_claim(&claim_number),
    );

    Ok(ctx.ok(ClaimDetail::assemble(claim, time_entries, expense_entries, events)))
}
