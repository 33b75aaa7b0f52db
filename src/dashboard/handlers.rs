use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use super::dto::{Dashboard, DashboardQuery};
use super::services;
use crate::{error::AppError, state::AppState};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id/dashboard", get(get_dashboard))
}

#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let window = query.window(OffsetDateTime::now_utc(), state.config.default_utc_offset)?;
    let dashboard = services::daily_dashboard(state.store.as_ref(), user_id, window).await?;
    Ok(Json(dashboard))
}
