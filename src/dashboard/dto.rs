use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

use super::aggregate::{DailyProgress, DayWindow, NutritionTotals};
use crate::error::ParseError;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Local calendar day as `YYYY-MM-DD`; today when absent.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl DashboardQuery {
    pub fn window(
        &self,
        now: OffsetDateTime,
        default_offset: UtcOffset,
    ) -> Result<DayWindow, ParseError> {
        let offset = match self.utc_offset_minutes {
            Some(minutes) => offset_from_minutes(minutes)?,
            None => default_offset,
        };
        match self.date.as_deref() {
            Some(raw) => Ok(DayWindow::local_day(parse_date(raw)?, offset)),
            None => Ok(DayWindow::containing(now, offset)),
        }
    }
}

pub(crate) fn offset_from_minutes(minutes: i32) -> Result<UtcOffset, ParseError> {
    minutes
        .checked_mul(60)
        .and_then(|secs| UtcOffset::from_whole_seconds(secs).ok())
        .ok_or_else(|| ParseError::InvalidValue {
            field: "utc_offset_minutes",
            raw: minutes.to_string(),
        })
}

fn parse_date(raw: &str) -> Result<Date, ParseError> {
    Date::parse(raw, format_description!("[year]-[month]-[day]")).map_err(|_| {
        ParseError::InvalidValue {
            field: "date",
            raw: raw.to_string(),
        }
    })
}

pub(crate) fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[year]-[month]-[day]"))
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub date: String,
    #[serde(flatten)]
    pub totals: NutritionTotals,
    #[serde(flatten)]
    pub progress: DailyProgress,
    /// Entries in the day that could not be parsed and were left out.
    pub skipped: usize,
}
