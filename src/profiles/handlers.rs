use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;
use uuid::Uuid;

use super::{dto::ProfileEdit, model::NutritionProfile, services};
use crate::{error::AppError, state::AppState};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/users/:user_id/profile",
        get(get_profile).put(put_profile),
    )
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<NutritionProfile>, AppError> {
    let profile = services::load_or_create(state.store.as_ref(), user_id).await?;
    Ok(Json(profile))
}

#[instrument(skip(state, edit))]
pub async fn put_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(edit): Json<ProfileEdit>,
) -> Result<Json<NutritionProfile>, AppError> {
    let profile =
        services::save_profile(state.store.as_ref(), user_id, edit, OffsetDateTime::now_utc())
            .await?;
    Ok(Json(profile))
}
