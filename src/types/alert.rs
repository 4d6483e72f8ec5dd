use serde::{Deserialize, Deserializer, Serialize};

use crate::db::NewAlert;

pub const DEFAULT_NAME: &str = "Unknown";
pub const DEFAULT_BLOOD_GROUP: &str = "N/A";
pub const DEFAULT_PHONE: &str = "N/A";

/// Body of `POST /send-alert` as sent by the device. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct AlertRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub lon: Option<f64>,
    #[serde(default)]
    pub user_phone: Option<String>,
}

impl AlertRequest {
    /// Apply field defaults and stamp the alert with `created_at`.
    pub fn into_new_alert(self, created_at: chrono::DateTime<chrono::Utc>) -> NewAlert {
        NewAlert {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            blood_group: self
                .blood_group
                .unwrap_or_else(|| DEFAULT_BLOOD_GROUP.to_string()),
            latitude: self.lat,
            longitude: self.lon,
            user_phone: self.user_phone.unwrap_or_else(|| DEFAULT_PHONE.to_string()),
            created_at,
        }
    }
}

/// Devices send coordinates either as JSON numbers or as numeric strings.
/// Empty strings and `null` mean "no fix".
fn coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => match s.trim().parse::<f64>() {
            // `parse` also accepts "NaN" and "inf"
            Ok(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(serde::de::Error::custom(format!("invalid coordinate: {s:?}"))),
        },
    }
}

/// Provider receipt echoed back to the device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryReceipt {
    pub sid: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub twilio: Option<DeliveryReceipt>,
}
