//! Response helpers shared by the three routers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// 200 with the items, or 204 when there are none.
///
/// The `{message}` body of the empty case is written, but HTTP drops the
/// body of a 204, so clients only ever see the status.
pub fn listing<T: Serialize>(items: Vec<T>, empty_message: &'static str) -> Response {
    if items.is_empty() {
        (StatusCode::NO_CONTENT, Json(json!({ "message": empty_message }))).into_response()
    } else {
        (StatusCode::OK, Json(items)).into_response()
    }
}

/// A plain `{message}` body.
pub fn message(text: &'static str) -> Json<serde_json::Value> {
    Json(json!({ "message": text }))
}
