//! HTTP request handlers

use crate::error::{ApiError, Operation};
use crate::AppState;
use anythink_core::comment::{Comment, CommentPayload};
use anythink_core::error::AnythinkError;
use anythink_core::types::CommentId;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to Anythink Market Server" }))
}

pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let gateway = state.gateway;
    let comments = blocking(move || gateway.list())
        .await
        .map_err(|e| ApiError::from_error(Operation::Fetch, e))?;
    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<CommentPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::malformed_body(Operation::Create, e))?;

    let gateway = state.gateway;
    let comment = blocking(move || gateway.create(payload))
        .await
        .map_err(|e| ApiError::from_error(Operation::Create, e))?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CommentPayload>, JsonRejection>,
) -> Result<Json<Comment>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::malformed_body(Operation::Update, e))?;

    let gateway = state.gateway;
    let id = CommentId::from_string(id);
    let comment = blocking(move || gateway.update(&id, payload.into_update()))
        .await
        .map_err(|e| ApiError::from_error(Operation::Update, e))?;
    Ok(Json(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let gateway = state.gateway;
    let id = CommentId::from_string(id);
    blocking(move || gateway.delete(&id))
        .await
        .map_err(|e| ApiError::from_error(Operation::Delete, e))?;
    Ok(Json(json!({ "message": "Comment deleted successfully" })))
}

/// Run a storage call off the async runtime
async fn blocking<T, F>(f: F) -> anythink_core::Result<T>
where
    F: FnOnce() -> anythink_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AnythinkError::Storage(format!("Storage task failed: {}", e)))?
}
