use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    routing::{delete, get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use super::dto::{AcceptEntryRequest, HistoryPage, HistoryQuery};
use super::model::FoodEntry;
use super::services;
use crate::{error::AppError, state::AppState};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id/entries", get(list_entries))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/entries", post(create_entry))
        .route("/users/:user_id/entries/:entry_id", delete(delete_entry))
}

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryPage>, AppError> {
    let page = services::history(
        state.store.as_ref(),
        user_id,
        state.config.history_limit,
        &query,
    )
    .await?;
    Ok(Json(page))
}

/// POST /users/:user_id/entries — accept a nutrition estimate into the log.
#[instrument(skip(state, body))]
pub async fn create_entry(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<AcceptEntryRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<FoodEntry>), AppError> {
    let entry = services::accept_estimate(
        state.store.as_ref(),
        user_id,
        body.estimate,
        body.meal_type,
        body.image_url,
        OffsetDateTime::now_utc(),
    )
    .await?;

    let location = format!("/api/v1/users/{}/entries/{}", user_id, entry.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(entry)))
}

#[instrument(skip(state))]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    services::delete_entry(state.store.as_ref(), user_id, entry_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
