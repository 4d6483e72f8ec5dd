use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{debug, error};

#[derive(Debug, ThisError)]
pub enum AlertError {
    #[error("email and password required")]
    MissingCredentials,

    #[error("user already exists")]
    UserExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Messaging provider rejected message with status {status}: {detail:?}")]
    ProviderRejected {
        status: StatusCode,
        detail: Option<TwilioError>,
    },
}

impl From<argon2::password_hash::Error> for AlertError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AlertError::PasswordHash(e.to_string())
    }
}

impl IntoResponse for AlertError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AlertError::MissingCredentials => {
                (StatusCode::BAD_REQUEST, "email and password required")
            }
            AlertError::UserExists => (StatusCode::BAD_REQUEST, "User already exists"),
            AlertError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            AlertError::InvalidBody(reason) => {
                debug!(%reason, "rejected request body");
                (StatusCode::BAD_REQUEST, "Invalid JSON body")
            }
            AlertError::PayloadTooLarge => {
                (StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
            }
            // logged by the alert handler, which knows the stored row id
            AlertError::Reqwest(_) | AlertError::ProviderRejected { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Alert stored but notification delivery failed",
            ),
            AlertError::DatabaseError(_)
            | AlertError::PasswordHash(_)
            | AlertError::InvalidConfig(_)
            | AlertError::Join(_) => {
                error!(error = %self, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.",
                )
            }
        };
        (
            status,
            Json(ApiErrorResponse {
                status: "error",
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Error body shared by every endpoint: `{"status":"error","message":...}`.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub status: &'static str,
    pub message: String,
}

/// Error document returned by the Twilio REST API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct TwilioError {
    pub code: Option<u32>,
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AlertError) -> (StatusCode, Value) {
        let resp = err.into_response();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        (status, serde_json::from_slice(&body).expect("body is json"))
    }

    #[tokio::test]
    async fn client_errors_keep_their_messages() {
        let (status, body) = render(AlertError::MissingCredentials).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "email and password required");

        let (status, body) = render(AlertError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");

        let (status, body) = render(AlertError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["message"], "request body too large");
    }

    #[tokio::test]
    async fn internal_errors_do_not_leak_detail() {
        let (status, body) = render(AlertError::DatabaseError(SqlxError::Protocol(
            "no such table: users".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["message"].as_str().unwrap();
        assert!(!message.contains("users"));
        assert_eq!(message, "An internal server error occurred.");
    }

    #[tokio::test]
    async fn provider_rejection_reports_stored_alert() {
        let err = AlertError::ProviderRejected {
            status: StatusCode::BAD_REQUEST,
            detail: Some(TwilioError {
                code: Some(21211),
                message: "The 'To' number is not a valid phone number.".to_string(),
                more_info: None,
                status: Some(400),
            }),
        };
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["message"],
            "Alert stored but notification delivery failed"
        );
    }
}
