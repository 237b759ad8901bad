//! Reference data handlers: adjusters, activity codes, expense types

use axum::extract::{Path, State};

use core_kernel::RecordStore;
use domain_time_expense::reference::activity_code_filter;
use domain_time_expense::{ActivityCode, Adjuster, ExpenseType};

use crate::error::ApiError;
use crate::extract::Filters;
use crate::response::{ApiResponse, RequestContext};
use crate::AppState;

pub async fn list_adjusters(State(state): State<AppState>, ctx: RequestContext) -> ApiResponse<Vec<Adjuster>> {
    ctx.ok(state.stores.adjusters.snapshot().await)
}

pub async fn get_adjuster(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<Adjuster>, ApiError> {
    Ok(ctx.ok(state.stores.adjusters.get(&id).await?))
}

/// Lists activity codes, optionally narrowed by `code`
pub async fn list_activity_codes(
    State(state): State<AppState>,
    ctx: RequestContext,
    filters: Filters,
) -> ApiResponse<Vec<ActivityCode>> {
    let codes = state.stores.activity_codes.snapshot().await;
    ctx.ok(activity_code_filter().apply(&codes, &filters.0))
}

pub async fn list_expense_types(State(state): State<AppState>, ctx: RequestContext) -> ApiResponse<Vec<ExpenseType>> {
    ctx.ok(state.stores.expense_types.snapshot().await)
}
