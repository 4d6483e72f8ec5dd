use crate::db::models::{DbAlert, DbUser, NewAlert};
use crate::db::schema::SQLITE_INIT;
use crate::error::AlertError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `database_url`, creating the file if needed, and apply the schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AlertError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AlertError> {
    // sqlx::query runs a single statement at a time
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<DbUser>, AlertError> {
        let user = sqlx::query_as::<_, DbUser>(
            "SELECT id, email, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Insert a new user. A concurrent insert of the same email surfaces as
    /// [`AlertError::UserExists`] through the UNIQUE constraint.
    pub async fn insert(&self, email: &str, password_hash: &str) -> Result<i64, AlertError> {
        let result = sqlx::query(
            "INSERT INTO users (email, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e)
                if e
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation()) =>
            {
                Err(AlertError::UserExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn count(&self) -> Result<i64, AlertError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }
}

#[derive(Clone)]
pub struct AlertStorage {
    pool: SqlitePool,
}

impl AlertStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist one alert. Returns the row id.
    pub async fn insert(&self, alert: &NewAlert) -> Result<i64, AlertError> {
        let done = sqlx::query(
            r#"
            INSERT INTO accident_alerts (
                name, blood_group, latitude, longitude, user_phone, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&alert.name)
        .bind(&alert.blood_group)
        .bind(alert.latitude)
        .bind(alert.longitude)
        .bind(&alert.user_phone)
        .bind(alert.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(done.last_insert_rowid())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<DbAlert, AlertError> {
        let row = sqlx::query(
            r#"SELECT id, name, blood_group, latitude, longitude, user_phone, created_at
               FROM accident_alerts WHERE id = ?"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Self::row_to_model(row)
    }

    pub async fn count(&self) -> Result<i64, AlertError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accident_alerts")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    fn row_to_model(row: SqliteRow) -> Result<DbAlert, AlertError> {
        let created_at_str: String = row.try_get("created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(DbAlert {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            blood_group: row.try_get("blood_group")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            user_phone: row.try_get("user_phone")?,
            created_at,
        })
    }
}
