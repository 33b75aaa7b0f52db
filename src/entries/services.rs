use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;

use super::dto::{HistoryPage, HistoryQuery};
use super::history::filter_entries;
use super::model::{parse_records, FoodEntry, MealType, NutritionEstimate};
use crate::error::AppError;
use crate::store::RecordStore;

/// Turn an accepted estimate into a logged entry and hand it to the store.
pub async fn accept_estimate(
    store: &dyn RecordStore,
    user_id: Uuid,
    estimate: NutritionEstimate,
    meal_type: MealType,
    image_url: Option<String>,
    now: OffsetDateTime,
) -> Result<FoodEntry, AppError> {
    let entry = FoodEntry::from_estimate(user_id, estimate, meal_type, image_url, now)?;
    store.insert_entry(entry.to_record()?).await?;
    info!(
        %user_id,
        entry_id = %entry.id,
        meal_type = ?entry.meal_type,
        calories = entry.calories,
        "food entry logged"
    );
    Ok(entry)
}

pub async fn delete_entry(
    store: &dyn RecordStore,
    user_id: Uuid,
    entry_id: Uuid,
) -> Result<(), AppError> {
    if store.delete_entry(user_id, entry_id).await? {
        info!(%user_id, %entry_id, "food entry deleted");
        Ok(())
    } else {
        warn!(%user_id, %entry_id, "delete of unknown food entry");
        Err(AppError::NotFound("food entry"))
    }
}

/// Latest `limit` entries, narrowed by the query.
pub async fn history(
    store: &dyn RecordStore,
    user_id: Uuid,
    limit: usize,
    query: &HistoryQuery,
) -> Result<HistoryPage, AppError> {
    let records = store.list_entries(user_id, limit).await?;
    let total = records.len();
    let parsed = parse_records(records);

    let entries = filter_entries(&parsed.entries, query.search.as_deref(), query.meal_type)
        .into_iter()
        .cloned()
        .collect();

    Ok(HistoryPage {
        total,
        skipped: parsed.skipped(),
        filtered: query.is_filtered(),
        entries,
    })
}
