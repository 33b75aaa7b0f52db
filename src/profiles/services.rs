use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use super::calculator::daily_calorie_target;
use super::dto::ProfileEdit;
use super::model::NutritionProfile;
use crate::error::AppError;
use crate::store::RecordStore;

/// Stored profile, or a blank one (not persisted) on first access.
pub async fn load_or_create(
    store: &dyn RecordStore,
    user_id: Uuid,
) -> Result<NutritionProfile, AppError> {
    match store.get_profile(user_id).await? {
        Some(profile) => Ok(profile),
        None => {
            debug!(%user_id, "no profile yet, starting blank");
            Ok(NutritionProfile::empty(user_id))
        }
    }
}

/// Apply an edit, recompute the calorie target and upsert.
pub async fn save_profile(
    store: &dyn RecordStore,
    user_id: Uuid,
    edit: ProfileEdit,
    now: OffsetDateTime,
) -> Result<NutritionProfile, AppError> {
    edit.validate()?;

    let existing = store.get_profile(user_id).await?;
    let created_at = existing
        .and_then(|p| p.created_at)
        .unwrap_or(now);

    let mut profile = NutritionProfile {
        id: user_id,
        email: edit.email,
        full_name: edit.full_name,
        weight: edit.weight,
        height: edit.height,
        age: edit.age,
        gender: edit.gender,
        activity_level: edit.activity_level,
        goal: edit.goal,
        daily_calorie_target: None,
        created_at: Some(created_at),
        updated_at: Some(now),
    };
    let target = daily_calorie_target(&profile);
    profile.daily_calorie_target = Some(target);

    store.upsert_profile(&profile).await?;
    info!(%user_id, daily_calorie_target = target, "profile saved");
    Ok(profile)
}
