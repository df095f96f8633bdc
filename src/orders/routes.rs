//! HTTP surface of the order service.

use super::OrderOrchestrator;
use crate::error::{AppError, AppResult};
use crate::model::OrderRequest;
use crate::response::listing;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn router(orchestrator: OrderOrchestrator) -> Router {
    Router::new()
        .route("/order", get(list_orders).post(place_order))
        .route("/order/{id}", get(get_order))
        .with_state(orchestrator)
}

#[derive(Debug, Deserialize)]
struct OrderFilter {
    #[serde(rename = "userID")]
    user_id: Option<u32>,
}

async fn place_order(
    State(orchestrator): State<OrderOrchestrator>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(request) = payload?;
    let order = orchestrator.place_order(request).await?;
    Ok(Json(json!({ "message": "order placed successfully", "order": order })))
}

async fn list_orders(
    State(orchestrator): State<OrderOrchestrator>,
    filter: Result<Query<OrderFilter>, QueryRejection>,
) -> AppResult<Response> {
    let Query(filter) = filter?;
    let orders = orchestrator.list_orders(filter.user_id).await?;
    Ok(listing(orders, "no orders found"))
}

async fn get_order(
    State(orchestrator): State<OrderOrchestrator>,
    id: Result<Path<u32>, PathRejection>,
) -> AppResult<Json<Value>> {
    let Path(id) = id.map_err(|_| AppError::BadRequest("Invalid order ID".into()))?;
    let order = orchestrator.get_order(id).await?;
    Ok(Json(json!(order)))
}
