use tracing::debug;
use uuid::Uuid;

use super::aggregate::{aggregate, DailyProgress, DayWindow};
use super::dto::{format_date, Dashboard};
use crate::entries::model::parse_records;
use crate::error::AppError;
use crate::profiles::calculator::DEFAULT_CALORIE_TARGET;
use crate::store::RecordStore;

/// Intake totals for one local day next to the user's calorie target.
pub async fn daily_dashboard(
    store: &dyn RecordStore,
    user_id: Uuid,
    window: DayWindow,
) -> Result<Dashboard, AppError> {
    let target = store
        .get_profile(user_id)
        .await?
        .map_or(DEFAULT_CALORIE_TARGET, |p| p.effective_target());

    let records = store
        .list_entries_between(user_id, window.start, window.end)
        .await?;
    let parsed = parse_records(records);
    let totals = aggregate(&parsed.entries, &window);
    let progress = DailyProgress::new(&totals, target);

    debug!(
        %user_id,
        entries = parsed.entries.len(),
        skipped = parsed.skipped(),
        calories = totals.calories,
        target,
        "dashboard computed"
    );

    Ok(Dashboard {
        date: format_date(window.date())?,
        totals,
        progress,
        skipped: parsed.skipped(),
    })
}
