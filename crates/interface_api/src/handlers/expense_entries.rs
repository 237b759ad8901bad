//! Expense entry handlers

use axum::extract::{Path, State};
use tracing::{info, warn};

use core_kernel::{PortError, RecordStore};
use domain_time_expense::{EntryValidator, ExpenseEntry, ExpenseEntryDraft, ExpenseEntryPatch};

use crate::dto::time_expense::{CreateExpenseEntryRequest, UpdateExpenseEntryRequest};
use crate::error::ApiError;
use crate::extract::{Filters, ValidatedJson};
use crate::response::{ApiResponse, RequestContext};
use crate::AppState;

pub async fn list_expense_entries(
    State(state): State<AppState>,
    ctx: RequestContext,
    filters: Filters,
) -> ApiResponse<Vec<ExpenseEntry>> {
    let entries = state.stores.expense_entries.snapshot().await;
    ctx.ok(ExpenseEntry::filter_spec().apply(&entries, &filters.0))
}

/// Creates an expense; receipt and rate-cap problems are logged, not rejected
pub async fn create_expense_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<CreateExpenseEntryRequest>,
) -> Result<ApiResponse<ExpenseEntry>, ApiError> {
    let entry = ExpenseEntry::create(ExpenseEntryDraft::from(request), state.today());
    let expense_type = state.stores.expense_types.get(&entry.expense_type_id).await.ok();

    let warnings = EntryValidator::validate_expense(&entry, expense_type.as_ref()).into_result()?;
    for warning in &warnings {
        warn!(entry_id = %entry.id, %warning, "expense accepted with warning");
    }

    let entry = state.stores.expense_entries.append(entry).await?;
    info!(entry_id = %entry.id, claim = %entry.claim_number, amount = %entry.amount, "expense entry created");
    Ok(ctx.created(entry))
}

pub async fn update_expense_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateExpenseEntryRequest>,
) -> Result<ApiResponse<ExpenseEntry>, ApiError> {
    let patch = ExpenseEntryPatch::from(request);
    let entry = state
        .stores
        .expense_entries
        .update_with(
            &id,
            Box::new(move |entry: &mut ExpenseEntry| {
                entry.apply_patch(patch);
                EntryValidator::validate_expense(entry, None)
                    .into_result()
                    .map(|_| ())
                    .map_err(|e| PortError::validation(e.to_string()))
            }),
        )
        .await?;

    info!(entry_id = %entry.id, status = %entry.status, "expense entry updated");
    Ok(ctx.ok(entry))
}

pub async fn delete_expense_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    state
        .stores
        .expense_entries
        .remove_if(
            &id,
            Box::new(|entry: &ExpenseEntry| entry.ensure_deletable().map_err(|e| PortError::conflict(e.to_string()))),
        )
        .await?;

    info!(entry_id = %id, "expense entry deleted");
    Ok(ctx.empty())
}
