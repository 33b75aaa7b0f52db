use serde::Serialize;
use time::{macros::time, Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

use crate::entries::model::FoodEntry;

/// Half-open `[start, end)` span of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl DayWindow {
    /// Calendar day in a local zone, from `00:00:00` up to (not including)
    /// `23:59:59`. Anything logged during the final second is left out.
    pub fn local_day(date: Date, offset: UtcOffset) -> Self {
        Self {
            start: PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_offset(offset),
            end: PrimitiveDateTime::new(date, time!(23:59:59)).assume_offset(offset),
        }
    }

    /// The local day `now` falls on.
    pub fn containing(now: OffsetDateTime, offset: UtcOffset) -> Self {
        Self::local_day(now.to_offset(offset).date(), offset)
    }

    pub fn contains(&self, at: OffsetDateTime) -> bool {
        self.start <= at && at < self.end
    }

    /// Local date the window starts on.
    pub fn date(&self) -> Date {
        self.start.date()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionTotals {
    fn add(mut self, e: &FoodEntry) -> Self {
        self.calories += e.calories;
        self.protein += e.protein;
        self.carbs += e.carbs;
        self.fat += e.fat;
        self
    }
}

/// Sum calories and macros of the entries created inside `window`.
pub fn aggregate<'a, I>(entries: I, window: &DayWindow) -> NutritionTotals
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    entries
        .into_iter()
        .filter(|e| window.contains(e.created_at))
        .fold(NutritionTotals::default(), NutritionTotals::add)
}

/// Progress of the day's intake against the calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyProgress {
    pub target_calories: i64,
    /// `calories / target`, or 0 when the target is not positive. Not capped at 1.
    pub progress: f64,
    pub remaining: f64,
    pub over_target: f64,
}

impl DailyProgress {
    pub fn new(totals: &NutritionTotals, target_calories: i64) -> Self {
        let target = target_calories as f64;
        let progress = if target_calories > 0 {
            totals.calories / target
        } else {
            0.0
        };
        Self {
            target_calories,
            progress,
            remaining: (target - totals.calories).max(0.0),
            over_target: (totals.calories - target).max(0.0),
        }
    }
}
