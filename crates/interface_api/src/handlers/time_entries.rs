//! Time entry handlers

use axum::extract::{Path, State};
use chrono::Utc;
use tracing::{info, warn};

use core_kernel::{PortError, RecordStore};
use domain_billing::{compute_time_entry_stats, TimeStats};
use domain_time_expense::{EntryValidator, TimeEntry, TimeEntryDraft, TimeEntryPatch};

use crate::dto::time_expense::{CreateTimeEntryRequest, SubmitEntriesRequest, SubmitResult, UpdateTimeEntryRequest};
use crate::error::ApiError;
use crate::extract::{Filters, ValidatedJson};
use crate::response::{ApiResponse, RequestContext};
use crate::AppState;

/// Lists time entries matching the query filters
pub async fn list_time_entries(
    State(state): State<AppState>,
    ctx: RequestContext,
    filters: Filters,
) -> Result<ApiResponse<Vec<TimeEntry>>, ApiError> {
    filters.require_dates(&["startDate", "endDate"])?;
    let entries = state.stores.time_entries.snapshot().await;
    Ok(ctx.ok(TimeEntry::filter_spec().apply(&entries, &filters.0)))
}

/// Hour roll-up for one adjuster, or everyone when `adjusterId` is absent
pub async fn time_entry_stats(
    State(state): State<AppState>,
    ctx: RequestContext,
    filters: Filters,
) -> ApiResponse<TimeStats> {
    let entries = state.stores.time_entries.snapshot().await;
    ctx.ok(compute_time_entry_stats(&entries, state.today(), filters.get("adjusterId")))
}

pub async fn create_time_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<CreateTimeEntryRequest>,
) -> Result<ApiResponse<TimeEntry>, ApiError> {
    let entry = TimeEntry::create(TimeEntryDraft::from(request), state.today());

    let warnings = EntryValidator::validate_time_entry(&entry).into_result()?;
    for warning in &warnings {
        warn!(entry_id = %entry.id, %warning, "time entry accepted with warning");
    }

    let entry = state.stores.time_entries.append(entry).await?;
    info!(entry_id = %entry.id, claim = %entry.claim_number, amount = %entry.amount, "time entry created");
    Ok(ctx.created(entry))
}

pub async fn update_time_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTimeEntryRequest>,
) -> Result<ApiResponse<TimeEntry>, ApiError> {
    let patch = TimeEntryPatch::from(request);
    let entry = state
        .stores
        .time_entries
        .update_with(
            &id,
            Box::new(move |entry: &mut TimeEntry| {
                entry.apply_patch(patch);
                EntryValidator::validate_time_entry(entry)
                    .into_result()
                    .map(|_| ())
                    .map_err(|e| PortError::validation(e.to_string()))
            }),
        )
        .await?;

    info!(entry_id = %entry.id, status = %entry.status, "time entry updated");
    Ok(ctx.ok(entry))
}

/// Deletes an entry that has not been submitted yet
pub async fn delete_time_entry(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    state
        .stores
        .time_entries
        .remove_if(
            &id,
            Box::new(|entry: &TimeEntry| entry.ensure_deletable().map_err(|e| PortError::conflict(e.to_string()))),
        )
        .await?;

    info!(entry_id = %id, "time entry deleted");
    Ok(ctx.empty())
}

/// Submits entries for billing
///
/// Unknown ids and entries already past DRAFT/PENDING are skipped; the
/// count reflects the entries that actually changed.
pub async fn submit_time_entries(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<SubmitEntriesRequest>,
) -> ApiResponse<SubmitResult> {
    let now = Utc::now();
    let submitted = state
        .stores
        .time_entries
        .update_many(&request.entry_ids, Box::new(move |entry: &mut TimeEntry| entry.submit(now)))
        .await;

    info!(requested = request.entry_ids.len(), submitted = submitted.len(), "time entries submitted for billing");
    ctx.ok(SubmitResult {
        submitted: submitted.len(),
    })
}
