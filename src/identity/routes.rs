//! HTTP surface of the identity service.

use super::IdentityService;
use crate::error::{AppError, AppResult};
use crate::model::Credentials;
use crate::response::listing;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// Placeholder token handed out on every successful login.
pub const LOGIN_TOKEN: &str = "some-jwt-token";

pub fn router(service: IdentityService) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        .with_state(service)
}

async fn register(
    State(service): State<IdentityService>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(credentials) = payload?;
    let user = service.register(credentials).await?;
    Ok(Json(json!({ "message": "Registration successful", "id": user.id })))
}

async fn login(
    State(service): State<IdentityService>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(credentials) = payload?;
    service.login(credentials).await?;
    Ok(Json(json!({ "message": "Login successful", "token": LOGIN_TOKEN })))
}

async fn list_users(State(service): State<IdentityService>) -> AppResult<Response> {
    let users = service.list().await?;
    Ok(listing(users, "no users found"))
}

async fn get_user(
    State(service): State<IdentityService>,
    id: Result<Path<u32>, PathRejection>,
) -> AppResult<Json<Value>> {
    let Path(id) = id.map_err(|_| AppError::BadRequest("Invalid user ID".into()))?;
    let user = service.user(id).await?;
    Ok(Json(json!({ "message": "user found", "username": user.username })))
}
