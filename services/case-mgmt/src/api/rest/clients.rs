//! 委托人 HTTP 路由

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use lexcm_common::ClientId;
use lexcm_errors::{AppError, AppResult};

use super::extract::ApiJson;
use crate::application::dto::{ClientCreate, ClientRead, ClientUpdate};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client).get(list_clients))
        .route(
            "/{client_id}",
            get(get_client).put(update_client).delete(delete_client),
        )
}

async fn create_client(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ClientCreate>,
) -> AppResult<(StatusCode, Json<ClientRead>)> {
    let created = state.client_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<ClientRead>>> {
    Ok(Json(state.client_service.list().await?))
}

async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> AppResult<Json<ClientRead>> {
    state
        .client_service
        .get(ClientId(client_id))
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Client {} not found", client_id)))
}

async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
    ApiJson(patch): ApiJson<ClientUpdate>,
) -> AppResult<Json<ClientRead>> {
    state
        .client_service
        .update(ClientId(client_id), patch)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Client {} not found", client_id)))
}

async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.client_service.delete(ClientId(client_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
