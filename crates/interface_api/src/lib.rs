//! HTTP API Layer
//!
//! This crate provides the REST API for claims billing using Axum: time and
//! expense capture, claim billing views, vendor referrals and invoices, plus
//! simulated Assure Claims and ServiceNow endpoints.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent `{success, error: {code, message}}` envelopes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::new(Stores::seeded(today)?, config)?;
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod response;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use chrono::NaiveDate;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{TemporalError, Timezone};
use infra_store::Stores;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::handlers::{
    assure, claims, expense_entries, health, invoices, reference, referrals, servicenow, time_entries, vendors,
};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub config: Arc<ApiConfig>,
    pub timezone: Timezone,
}

impl AppState {
    /// Fails when the configured business timezone is unknown
    pub fn new(stores: Stores, config: ApiConfig) -> Result<Self, TemporalError> {
        let timezone = config.timezone()?;
        Ok(Self {
            stores,
            config: Arc::new(config),
            timezone,
        })
    }

    /// Today's date on the business calendar
    pub fn today(&self) -> NaiveDate {
        self.timezone.today()
    }
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Stores and configuration shared by every handler
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let time_entry_routes = Router::new()
        .route("/", get(time_entries::list_time_entries).post(time_entries::create_time_entry))
        .route("/stats", get(time_entries::time_entry_stats))
        .route("/submit", post(time_entries::submit_time_entries))
        .route(
            "/:id",
            patch(time_entries::update_time_entry).delete(time_entries::delete_time_entry),
        );

    let expense_entry_routes = Router::new()
        .route(
            "/",
            get(expense_entries::list_expense_entries).post(expense_entries::create_expense_entry),
        )
        .route(
            "/:id",
            patch(expense_entries::update_expense_entry).delete(expense_entries::delete_expense_entry),
        );

    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/:claim_number", get(claims::get_claim));

    let vendor_routes = Router::new()
        .route("/", get(vendors::list_vendors).post(vendors::create_vendor))
        .route("/stats", get(vendors::vendor_stats))
        .route("/:id", get(vendors::get_vendor).patch(vendors::update_vendor));

    let referral_routes = Router::new()
        .route("/", get(referrals::list_referrals).post(referrals::create_referral))
        .route("/stats", get(referrals::referral_stats))
        .route("/:id", get(referrals::get_referral))
        .route("/:id/status", patch(referrals::update_referral_status));

    let invoice_routes = Router::new()
        .route("/", get(invoices::list_invoices).post(invoices::submit_invoice))
        .route("/stats", get(invoices::invoice_stats))
        .route("/:id", get(invoices::get_invoice))
        .route("/:id/approve", post(invoices::approve_invoice))
        .route("/:id/reject", post(invoices::reject_invoice));

    let assure_routes = Router::new()
        .route("/claims/:claim_number/context", get(assure::claim_context))
        .route("/claims/:claim_number/activity", post(assure::post_activity))
        .route("/claims/:claim_number/payments", post(assure::request_payment))
        .route("/claims/:claim_number/documents", post(assure::sync_document))
        .route("/payments/:payment_id/status", get(assure::payment_status))
        .route("/events/webhook", post(assure::receive_event));

    let servicenow_routes = Router::new()
        .route("/cases", post(servicenow::create_case))
        .route("/cases/:case_id", get(servicenow::get_case).patch(servicenow::update_case))
        .route("/notifications", post(servicenow::send_notification));

    let api_routes = Router::new()
        .nest("/time-entries", time_entry_routes)
        .nest("/expense-entries", expense_entry_routes)
        .nest("/claims", claims_routes)
        .route("/adjusters", get(reference::list_adjusters))
        .route("/adjusters/:id", get(reference::get_adjuster))
        .route("/activity-codes", get(reference::list_activity_codes))
        .route("/expense-types", get(reference::list_expense_types))
        .nest("/vendors", vendor_routes)
        .nest("/referrals", referral_routes)
        .nest("/invoices", invoice_routes)
        .nest("/assure", assure_routes)
        .nest("/servicenow", servicenow_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
