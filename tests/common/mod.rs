#![allow(dead_code)]

use accident_alert::config::TwilioSettings;
use accident_alert::db::{self, SqlitePool};
use axum::{
    Form, Json, Router,
    body::{Body, to_bytes},
    extract::{Path, State},
    http::{HeaderMap, Request, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    fs,
    net::SocketAddr,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// A SQLite file under the temp dir, removed on drop.
pub struct TestDb {
    pub path: PathBuf,
    pub pool: SqlitePool,
}

impl TestDb {
    pub async fn new(label: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "accident-alert-{label}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", path.display());
        let pool = db::connect(&database_url)
            .await
            .expect("failed to open test database");
        Self { path, pool }
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.to_string()).await
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: String) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let value = serde_json::from_slice(&bytes).expect("response body was not json");
    (status, value)
}

/// One create-message call as seen by the fake provider.
#[derive(Debug, Clone)]
pub struct CapturedMessage {
    pub account_sid: String,
    pub authorization: Option<String>,
    pub form: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct FakeTwilioState {
    captured: Arc<Mutex<Vec<CapturedMessage>>>,
    reject: bool,
}

/// In-process stand-in for the Twilio Messages API.
pub struct FakeTwilio {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedMessage>>>,
}

impl FakeTwilio {
    pub async fn accepting() -> Self {
        Self::spawn(false).await
    }

    /// Answers every request with a 400 Twilio error document.
    pub async fn rejecting() -> Self {
        Self::spawn(true).await
    }

    async fn spawn(reject: bool) -> Self {
        let state = FakeTwilioState {
            reject,
            ..Default::default()
        };
        let captured = state.captured.clone();
        let app = Router::new()
            .route(
                "/2010-04-01/Accounts/{sid}/Messages.json",
                post(create_message),
            )
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake twilio");
        let addr = listener.local_addr().expect("fake twilio addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake twilio server");
        });

        Self { addr, captured }
    }

    pub fn settings(&self) -> TwilioSettings {
        settings_for(&format!("http://{}/", self.addr))
    }

    pub fn captured(&self) -> Vec<CapturedMessage> {
        self.captured.lock().expect("captured lock").clone()
    }
}

pub fn settings_for(api_base: &str) -> TwilioSettings {
    TwilioSettings {
        account_sid: "AC_test".to_string(),
        auth_token: "test-token".to_string(),
        from: "whatsapp:+14155238886".to_string(),
        to: "whatsapp:+910000000000".to_string(),
        api_base: url::Url::parse(api_base).expect("valid api base"),
    }
}

async fn create_message(
    State(state): State<FakeTwilioState>,
    Path(sid): Path<String>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .captured
        .lock()
        .expect("captured lock")
        .push(CapturedMessage {
            account_sid: sid,
            authorization,
            form,
        });

    if state.reject {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": 21211,
                "message": "The 'To' number is not a valid phone number.",
                "more_info": "https://www.twilio.com/docs/errors/21211",
                "status": 400
            })),
        );
    }

    (
        StatusCode::CREATED,
        Json(json!({"sid": "SM0123456789abcdef", "status": "queued", "error_code": null})),
    )
}
