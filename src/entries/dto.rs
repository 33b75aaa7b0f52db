use serde::{Deserialize, Serialize};

use super::model::{FoodEntry, MealType, NutritionEstimate};

/// Accepting an estimate: the estimate itself plus what the user picked.
#[derive(Debug, Deserialize)]
pub struct AcceptEntryRequest {
    #[serde(flatten)]
    pub estimate: NutritionEstimate,
    pub meal_type: MealType,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
}

impl HistoryQuery {
    pub fn is_filtered(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty()) || self.meal_type.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryPage {
    /// Rows fetched from the store before filtering, malformed ones included.
    pub total: usize,
    /// Rows left out because they could not be parsed.
    pub skipped: usize,
    /// Whether a search or meal-type filter was active.
    pub filtered: bool,
    pub entries: Vec<FoodEntry>,
}
