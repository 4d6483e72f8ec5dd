use crate::db::NewAlert;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";
const LOCATION_UNAVAILABLE: &str = "Location not available";

/// Map link for a coordinate pair, or a placeholder when either half is missing.
pub fn map_link(latitude: Option<f64>, longitude: Option<f64>) -> String {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => format!("{MAPS_SEARCH_URL}{lat},{lon}"),
        _ => LOCATION_UNAVAILABLE.to_string(),
    }
}

/// Text sent to the emergency contact for one alert.
pub fn format_alert_message(alert: &NewAlert) -> String {
    format!(
        "🚨 ACCIDENT ALERT 🚨\n\
         Person: {}\n\
         Blood Group: {}\n\
         Phone: {}\n\
         Location: {}\n\
         Time (UTC): {}\n\
         Please respond immediately.",
        alert.name,
        alert.blood_group,
        alert.user_phone,
        map_link(alert.latitude, alert.longitude),
        alert.created_at.format("%Y-%m-%d %H:%M:%S"),
    )
}
