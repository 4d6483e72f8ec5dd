use crate::api::twilio_api::TwilioApi;
use crate::config::TwilioSettings;
use crate::error::AlertError;
use crate::types::alert::DeliveryReceipt;
use std::time::Duration;
use tracing::warn;

/// Sends alert text to the one configured emergency recipient.
#[derive(Clone)]
pub struct AlertNotifier {
    client: reqwest::Client,
    settings: TwilioSettings,
}

impl AlertNotifier {
    pub fn new(settings: TwilioSettings) -> Result<Self, AlertError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("accident-alert/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn recipient(&self) -> &str {
        &self.settings.to
    }

    pub async fn send(&self, text: &str) -> Result<DeliveryReceipt, AlertError> {
        let message = TwilioApi::create_message(&self.client, &self.settings, text).await?;
        if let Some(code) = message.error_code {
            warn!(sid = %message.sid, code, "Twilio accepted message with an error code");
        }
        Ok(message.into())
    }
}
