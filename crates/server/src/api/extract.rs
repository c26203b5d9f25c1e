//! Query-string extractor that never rejects repeated parameters.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;

/// Like [`Query`], but a repeated key keeps its first value and failures
/// come back as an [`ApiError`].
///
/// Target fields are expected to be `Option<String>`; numeric and boolean
/// parsing happens in the handlers.
#[derive(Debug, Clone)]
pub struct LenientQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for LenientQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        let mut first = Map::new();
        for (key, value) in pairs {
            first.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(first))
            .map(LenientQuery)
            .map_err(|e| ApiError::Validation(format!("Invalid query string: {}", e)))
    }
}
