//! Success envelope and request context
//!
//! Successful responses look like
//! `{success: true, data, metadata: {timestamp, requestId}}`. The request id
//! is the one the request-id layer attached (taken from `x-request-id` or
//! generated), so it matches the header echoed back to the caller.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::request_id::RequestId;
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub timestamp: DateTime<Utc>,
    pub request_id: String,
}

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip)]
    status: StatusCode,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub metadata: Metadata,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// Per-request context handed to handlers
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}

impl RequestContext {
    fn envelope<T>(&self, status: StatusCode, data: Option<T>) -> ApiResponse<T> {
        ApiResponse {
            status,
            success: true,
            data,
            metadata: Metadata {
                timestamp: Utc::now(),
                request_id: self.request_id.clone(),
            },
        }
    }

    /// 200 with `data`
    pub fn ok<T>(&self, data: T) -> ApiResponse<T> {
        self.envelope(StatusCode::OK, Some(data))
    }

    /// 201 with the created record
    pub fn created<T>(&self, data: T) -> ApiResponse<T> {
        self.envelope(StatusCode::CREATED, Some(data))
    }

    /// 200 without a `data` member
    pub fn empty(&self) -> ApiResponse<()> {
        self.envelope(StatusCode::OK, None)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .or_else(|| parts.headers.get("x-request-id").and_then(|v| v.to_str().ok()))
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Self { request_id })
    }
}
