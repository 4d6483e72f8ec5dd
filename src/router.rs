use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{self, AlertStorage, SqlitePool, UserStorage};
use crate::error::AlertError;
use crate::handlers::{alert, auth, banner, stub};
use crate::service::notifier::AlertNotifier;

#[derive(Clone)]
pub struct AlertState {
    pub users: UserStorage,
    pub alerts: AlertStorage,
    /// `None` when the messaging provider is not configured; alerts are then only stored.
    pub notifier: Option<AlertNotifier>,
}

impl AlertState {
    pub fn new(pool: SqlitePool, notifier: Option<AlertNotifier>) -> Self {
        Self {
            users: UserStorage::new(pool.clone()),
            alerts: AlertStorage::new(pool),
            notifier,
        }
    }

    /// Open the database and build the messaging client described by `cfg`.
    pub async fn from_config(cfg: &Config) -> Result<Self, AlertError> {
        let pool = db::connect(&cfg.database_url).await?;
        let notifier = cfg.twilio().map(AlertNotifier::new).transpose()?;
        Ok(Self::new(pool, notifier))
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn alert_router(state: AlertState) -> Router {
    Router::new()
        .route("/", get(banner::home_handler))
        .route("/test", get(banner::test_handler))
        .route("/register", post(auth::register_handler))
        .route("/login", post(auth::login_handler))
        .route("/send-alert", post(alert::send_alert_handler))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Same surface as [`alert_router`] without storage or messaging.
pub fn stub_router() -> Router {
    Router::new()
        .route("/", get(stub::stub_home_handler))
        .route("/test", get(stub::stub_test_handler))
        .route("/register", post(stub::stub_register_handler))
        .route("/login", post(stub::stub_login_handler))
        .route("/send-alert", post(stub::stub_send_alert_handler))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
