//! SQL DDL for the user and alert tables.

/// SQLite schema with:
/// - `users.email` UNIQUE, so concurrent registrations cannot both succeed
/// - timestamps stored as RFC3339 TEXT
/// - nullable coordinates on alerts
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE TABLE IF NOT EXISTS accident_alerts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    blood_group TEXT NOT NULL,
    latitude REAL NULL,
    longitude REAL NULL,
    user_phone TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_accident_alerts_created_at ON accident_alerts(created_at);
"#;
