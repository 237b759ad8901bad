//! Invoice handlers

use axum::extract::{Path, State};
use chrono::Utc;
use tracing::info;

use core_kernel::RecordStore;
use domain_billing::{compute_invoice_stats, InvoiceStats};
use domain_vendor::{Invoice, InvoiceDraft, PaymentTerms};

use crate::dto::vendor::{ApproveInvoiceRequest, RejectInvoiceRequest, SubmitInvoiceRequest};
use crate::error::ApiError;
use crate::extract::{Filters, ValidatedJson};
use crate::handlers::referrals::to_port_error;
use crate::handlers::vendors::SYSTEM_USER;
use crate::response::{ApiResponse, RequestContext};
use crate::AppState;

pub async fn list_invoices(
    State(state): State<AppState>,
    ctx: RequestContext,
    filters: Filters,
) -> ApiResponse<Vec<Invoice>> {
    let invoices = state.stores.invoices.snapshot().await;
    ctx.ok(Invoice::filter_spec().apply(&invoices, &filters.0))
}

pub async fn invoice_stats(State(state): State<AppState>, ctx: RequestContext) -> ApiResponse<InvoiceStats> {
    ctx.ok(compute_invoice_stats(&state.stores.invoices.snapshot().await))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
) -> Result<ApiResponse<Invoice>, ApiError> {
    Ok(ctx.ok(state.stores.invoices.get(&id).await?))
}

/// Submits an invoice for review
///
/// The due date follows the vendor's payment terms, NET 30 when the vendor
/// is not on file.
pub async fn submit_invoice(
    State(state): State<AppState>,
    ctx: RequestContext,
    ValidatedJson(request): ValidatedJson<SubmitInvoiceRequest>,
) -> Result<ApiResponse<Invoice>, ApiError> {
    let mut draft = InvoiceDraft::from(request);

    let terms = match state.stores.vendors.get(&draft.vendor_id).await {
        Ok(vendor) => {
            if draft.vendor_name.trim().is_empty() {
                draft.vendor_name = vendor.legal_name;
            }
            vendor.payment_config.terms
        }
        Err(_) => PaymentTerms::Net30,
    };

    let invoice = Invoice::submit(draft, state.stores.invoice_numbers.next(), terms, Utc::now())?;
    let invoice = state.stores.invoices.append(invoice).await?;

    info!(
        invoice = %invoice.invoice_number,
        vendor_id = %invoice.vendor_id,
        total = %invoice.total_amount,
        due = %invoice.due_date,
        "invoice submitted"
    );
    Ok(ctx.created(invoice))
}

/// Approves an invoice, for the full amount unless `approvedAmount` is given
pub async fn approve_invoice(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ApproveInvoiceRequest>,
) -> Result<ApiResponse<Invoice>, ApiError> {
    let approved_by = request.approved_by.unwrap_or_else(|| SYSTEM_USER.to_string());
    let approved_amount = request.approved_amount;

    let invoice = state
        .stores
        .invoices
        .update_with(
            &id,
            Box::new(move |invoice: &mut Invoice| {
                invoice
                    .approve(approved_amount, approved_by, Utc::now())
                    .map_err(to_port_error)
            }),
        )
        .await?;

    info!(invoice = %invoice.invoice_number, approved_amount = ?invoice.approved_amount, "invoice approved");
    Ok(ctx.ok(invoice))
}

pub async fn reject_invoice(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<RejectInvoiceRequest>,
) -> Result<ApiResponse<Invoice>, ApiError> {
    let reason = request.reason;
    let invoice = state
        .stores
        .invoices
        .update_with(
            &id,
            Box::new(move |invoice: &mut Invoice| invoice.reject(reason).map_err(to_port_error)),
        )
        .await?;

    info!(invoice = %invoice.invoice_number, "invoice rejected");
    Ok(ctx.ok(invoice))
}
