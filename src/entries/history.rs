use super::model::{FoodEntry, MealType};

/// Narrow a newest-first entry list by food name and meal type.
///
/// `search` is a case-insensitive substring of the food name; an empty string
/// matches everything. Both predicates must hold. Input order is kept.
pub fn filter_entries<'a, I>(
    entries: I,
    search: Option<&str>,
    meal_type: Option<MealType>,
) -> Vec<&'a FoodEntry>
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);

    entries
        .into_iter()
        .filter(|e| {
            needle
                .as_deref()
                .map_or(true, |n| e.food_name.to_lowercase().contains(n))
        })
        .filter(|e| meal_type.map_or(true, |m| e.meal_type == m))
        .collect()
}
