use axum::{Json, extract::State};
use chrono::Utc;
use tracing::{error, info};

use crate::middleware::JsonBody;
use crate::service::alert_message::format_alert_message;
use crate::types::alert::{AlertRequest, AlertResponse};
use crate::{AlertError, router::AlertState};

/// POST /send-alert -> stores the alert, then forwards it to the emergency contact.
///
/// The row is written before sending; a delivery failure leaves it stored and
/// reports so in the error message.
pub async fn send_alert_handler(
    State(state): State<AlertState>,
    JsonBody(req): JsonBody<AlertRequest>,
) -> Result<Json<AlertResponse>, AlertError> {
    let alert = req.into_new_alert(Utc::now());
    let alert_id = state.alerts.insert(&alert).await?;
    info!(
        alert_id,
        name = %alert.name,
        has_location = alert.latitude.is_some() && alert.longitude.is_some(),
        "alert stored"
    );

    let text = format_alert_message(&alert);

    let Some(notifier) = state.notifier.as_ref() else {
        info!(alert_id, "messaging not configured; alert not forwarded");
        return Ok(Json(AlertResponse {
            status: "success",
            message: "Alert stored",
            twilio: None,
        }));
    };

    let receipt = notifier.send(&text).await.inspect_err(|e| {
        error!(alert_id, error = %e, "alert stored but notification delivery failed");
    })?;
    info!(
        alert_id,
        sid = %receipt.sid,
        to = %notifier.recipient(),
        "alert forwarded"
    );

    Ok(Json(AlertResponse {
        status: "success",
        message: "Alert stored and sent",
        twilio: Some(receipt),
    }))
}
