//! Handlers for the stub test server: same surface, no storage, no messaging.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};
use tracing::info;

use crate::middleware::JsonBody;
use crate::types::alert::{AlertRequest, AlertResponse};
use crate::types::auth::{CredentialsRequest, LoginResponse};
use crate::error::ApiErrorResponse;

/// Fixed id handed out by the stub login.
pub const STUB_USER_ID: i64 = 123;

pub async fn stub_home_handler() -> Json<Value> {
    Json(json!({
        "message": "Test Server is running!",
        "status": "success",
        "endpoints": ["/register", "/login", "/send-alert", "/test"]
    }))
}

pub async fn stub_test_handler() -> Json<Value> {
    Json(json!({"status": "success", "message": "Test endpoint working!"}))
}

/// Accepts anything and echoes the email back.
pub async fn stub_register_handler(
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Json<Value> {
    info!(email = ?req.email, "stub registration request");
    Json(json!({
        "status": "success",
        "message": "Account created successfully!",
        "email": req.email,
    }))
}

/// Any non-empty email and password log in as [`STUB_USER_ID`].
pub async fn stub_login_handler(
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ApiErrorResponse>)> {
    info!(email = ?req.email, "stub login attempt");
    match req.require() {
        Ok(_) => Ok(Json(LoginResponse {
            status: "success",
            message: "Login successful!",
            user_id: STUB_USER_ID,
        })),
        Err(_) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiErrorResponse {
                status: "error",
                message: "Invalid credentials".to_string(),
            }),
        )),
    }
}

/// Logs the alert and reports it as received; nothing is stored or sent.
pub async fn stub_send_alert_handler(
    JsonBody(req): JsonBody<AlertRequest>,
) -> Json<AlertResponse> {
    info!(?req, "stub alert received");
    Json(AlertResponse {
        status: "success",
        message: "Alert received (stub)",
        twilio: None,
    })
}
