//! HTTP surface of the catalog service.

use crate::clients::ProductClient;
use crate::error::{AppError, AppResult};
use crate::model::{ProductDraft, ProductId};
use crate::response::{listing, message};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use record_store::RecordClient;
use serde_json::{json, Value};

pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route("/product", get(list_products).post(create_product))
        .route(
            "/product/{id}",
            get(get_product).put(replace_product).delete(delete_product),
        )
        .with_state(products)
}

fn product_id(id: Result<Path<u32>, PathRejection>) -> AppResult<u32> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::BadRequest("Invalid product ID".into()))
}

async fn create_product(
    State(products): State<ProductClient>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let Json(draft) = payload?;
    let product = products.create(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "product created successfully", "product": product })),
    ))
}

async fn list_products(State(products): State<ProductClient>) -> AppResult<Response> {
    let all = products.list().await?;
    Ok(listing(all, "no products found"))
}

async fn get_product(
    State(products): State<ProductClient>,
    id: Result<Path<u32>, PathRejection>,
) -> AppResult<Json<Value>> {
    let id = product_id(id)?;
    let product = products
        .get(ProductId(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
    Ok(Json(json!(product)))
}

async fn replace_product(
    State(products): State<ProductClient>,
    id: Result<Path<u32>, PathRejection>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let id = product_id(id)?;
    let Json(draft) = payload?;
    let product = products.replace(id, draft).await?;
    Ok(Json(json!({ "message": "product updated successfully", "product": product })))
}

async fn delete_product(
    State(products): State<ProductClient>,
    id: Result<Path<u32>, PathRejection>,
) -> AppResult<Json<Value>> {
    let id = product_id(id)?;
    products.delete(ProductId(id)).await?;
    Ok(message("product deleted successfully"))
}
