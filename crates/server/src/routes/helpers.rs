use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ApiError;

/// Decode a request body regardless of its content type; any failure is a 400.
///
/// The body must be a JSON object. Input structs default missing fields, which
/// would otherwise let serde fill them positionally from an array.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("malformed JSON body: {e}")))?;
    if !value.is_object() {
        return Err(ApiError::BadRequest("JSON body must be an object".into()));
    }
    T::deserialize(value).map_err(|e| ApiError::BadRequest(format!("malformed JSON body: {e}")))
}

/// `201 Created` with an empty body and the new resource's location.
pub fn created(location: String) -> Response {
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}

/// Serde helper: `null` decodes like a missing value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    let value = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
