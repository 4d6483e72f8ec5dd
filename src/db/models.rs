use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbAlert {
    pub id: i64,
    pub name: String,
    pub blood_group: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub user_phone: String,
    pub created_at: DateTime<Utc>,
}

/// Alert fields as accepted from the device, after defaults are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub name: String,
    pub blood_group: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub user_phone: String,
    pub created_at: DateTime<Utc>,
}
