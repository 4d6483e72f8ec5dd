use axum::Json;
use serde_json::{Value, json};

/// GET / -> service banner with the endpoint list.
pub async fn home_handler() -> Json<Value> {
    Json(json!({
        "message": "Accident Alert System API is running!",
        "endpoints": [
            "/register - POST",
            "/login - POST",
            "/send-alert - POST"
        ]
    }))
}

/// GET /test
pub async fn test_handler() -> Json<Value> {
    Json(json!({"status": "success", "message": "API is working!"}))
}
