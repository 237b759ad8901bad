//! Request extractors that fail with the API error envelope

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use core_kernel::{parse_iso_date, QueryParams};

use crate::error::ApiError;

/// JSON body that is deserialized and then validated
///
/// Malformed JSON and failed field rules both come back as `VALIDATION`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// JSON body for types that validate themselves after extraction
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

/// Flat query parameters for the filter layer
#[derive(Debug, Clone, Default)]
pub struct Filters(pub QueryParams);

impl Filters {
    /// Rejects date parameters that are present but not `YYYY-MM-DD`
    pub fn require_dates(&self, keys: &[&str]) -> Result<(), ApiError> {
        for key in keys {
            if let Some(value) = self.0.get(*key).filter(|v| !v.trim().is_empty()) {
                parse_iso_date(value)?;
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|v| !v.trim().is_empty())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Filters
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(params) = axum::extract::Query::<QueryParams>::from_request_parts(parts, state).await?;
        Ok(Filters(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(pairs: &[(&str, &str)]) -> Filters {
        Filters(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn test_require_dates_accepts_iso_and_blank() {
        let f = filters(&[("startDate", "2024-02-01"), ("endDate", "")]);
        assert!(f.require_dates(&["startDate", "endDate"]).is_ok());
    }

    #[test]
    fn test_require_dates_rejects_garbage() {
        let f = filters(&[("startDate", "02/01/2024")]);
        let err = f.require_dates(&["startDate"]).unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
    }

    #[test]
    fn test_blank_values_read_as_absent() {
        let f = filters(&[("adjusterId", "  ")]);
        assert_eq!(f.get("adjusterId"), None);
    }
}
