use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

use crate::error::AlertError;

/// JSON body extractor for device and app clients.
///
/// - an empty body is treated as `{}` and yields `T::default()`
/// - the `content-type` header is not checked; some devices omit it
/// - malformed JSON is rejected as [`AlertError::InvalidBody`] (400)
/// - a body over the router's limit is [`AlertError::PayloadTooLarge`] (413)
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AlertError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AlertError::PayloadTooLarge,
                _ => AlertError::InvalidBody(rejection.body_text()),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AlertError::InvalidBody(e.to_string()))
    }
}
