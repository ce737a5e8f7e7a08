use std::sync::LazyLock;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::model::api::MessageDto;

/// Endpoints documentation, embedded at compile time and served verbatim.
static ENDPOINTS: LazyLock<Value> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../../endpoints.json"))
        .expect("endpoints.json ships with the binary and is valid JSON")
});

/// GET /api
pub async fn get_endpoints() -> impl IntoResponse {
    Json(json!({ "endpoints": &*ENDPOINTS }))
}

/// Catch-all for unmatched routes.
pub async fn path_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageDto {
            message: "Path Not Found".to_string(),
        }),
    )
}
