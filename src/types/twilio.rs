use serde::Deserialize;

use super::alert::DeliveryReceipt;

/// Subset of the Twilio Message resource returned by `Messages.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResource {
    pub sid: String,
    pub status: String,
    #[serde(default)]
    pub error_code: Option<i64>,
}

impl From<MessageResource> for DeliveryReceipt {
    fn from(m: MessageResource) -> Self {
        DeliveryReceipt {
            sid: m.sid,
            status: m.status,
        }
    }
}

/// Form fields of a create-message request.
#[derive(Debug, serde::Serialize)]
pub struct CreateMessageForm<'a> {
    #[serde(rename = "From")]
    pub from: &'a str,
    #[serde(rename = "To")]
    pub to: &'a str,
    #[serde(rename = "Body")]
    pub body: &'a str,
}
