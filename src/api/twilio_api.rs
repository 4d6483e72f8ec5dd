use crate::config::TwilioSettings;
use crate::error::{AlertError, TwilioError};
use crate::types::twilio::{CreateMessageForm, MessageResource};
use tracing::info;
use url::Url;

pub struct TwilioApi;

impl TwilioApi {
    /// `{api_base}/2010-04-01/Accounts/{sid}/Messages.json`
    pub fn messages_url(settings: &TwilioSettings) -> Result<Url, AlertError> {
        let mut url = settings.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| AlertError::InvalidConfig("twilio_api_base cannot be a base URL".into()))?
            .pop_if_empty()
            .extend(["2010-04-01", "Accounts", settings.account_sid.as_str(), "Messages.json"]);
        Ok(url)
    }

    /// Create one outbound message. Single attempt, no retry.
    pub async fn create_message(
        client: &reqwest::Client,
        settings: &TwilioSettings,
        body: &str,
    ) -> Result<MessageResource, AlertError> {
        let url = Self::messages_url(settings)?;
        let form = CreateMessageForm {
            from: &settings.from,
            to: &settings.to,
            body,
        };

        let resp = client
            .post(url)
            .basic_auth(&settings.account_sid, Some(&settings.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.json::<TwilioError>().await.ok();
            return Err(AlertError::ProviderRejected { status, detail });
        }

        let message: MessageResource = resp.json().await?;
        info!(sid = %message.sid, status = %message.status, "Twilio accepted message");
        Ok(message)
    }
}
