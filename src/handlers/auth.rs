use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, warn};

use crate::middleware::JsonBody;
use crate::service::password::{hash_password_blocking, verify_password_blocking};
use crate::types::auth::{CredentialsRequest, LoginResponse, StatusResponse};
use crate::{AlertError, router::AlertState};

/// POST /register -> creates a user with an Argon2id password hash.
pub async fn register_handler(
    State(state): State<AlertState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), AlertError> {
    let (email, password) = req.require()?;

    if state.users.find_by_email(&email).await?.is_some() {
        warn!(%email, "registration for existing email");
        return Err(AlertError::UserExists);
    }

    let hash = hash_password_blocking(password).await?;
    let id = state.users.insert(&email, &hash).await?;

    info!(user_id = id, %email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse {
            status: "success",
            message: "Registered",
        }),
    ))
}

/// POST /login -> checks credentials. No session is issued.
pub async fn login_handler(
    State(state): State<AlertState>,
    JsonBody(req): JsonBody<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AlertError> {
    let (email, password) = req.require()?;

    let user = state.users.find_by_email(&email).await?;
    let hash = user.as_ref().map(|u| u.password_hash.clone());

    // Unknown email still pays for one verification.
    let verified = verify_password_blocking(password, hash).await?;

    match user {
        Some(user) if verified => {
            info!(user_id = user.id, "login succeeded");
            Ok(Json(LoginResponse {
                status: "success",
                message: "Login successful",
                user_id: user.id,
            }))
        }
        _ => {
            warn!(%email, "login failed");
            Err(AlertError::InvalidCredentials)
        }
    }
}
