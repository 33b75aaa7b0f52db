use serde::{Deserialize, Serialize};
use time::{
    format_description::well_known::{Iso8601, Rfc3339},
    OffsetDateTime, PrimitiveDateTime,
};
use tracing::warn;
use uuid::Uuid;

use crate::error::{ParseError, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Read a store timestamp. RFC 3339 text keeps its offset; ISO-8601 text
/// without an offset (`2024-05-02T08:00:00`) is taken as UTC.
pub fn parse_created_at(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok().or_else(|| {
        PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
            .ok()
            .map(PrimitiveDateTime::assume_utc)
    })
}

/// Food entry in the shape the record store keeps it: `created_at` is still
/// the ISO-8601 text the store returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub serving_size: String,
    pub meal_type: MealType,
    pub image_url: Option<String>,
    pub confidence_score: Option<f64>,
    pub created_at: String,
}

/// One logged meal. Immutable once created.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food_name: String,
    pub calories: f64,      // kcal
    pub protein: f64,       // g
    pub carbs: f64,         // g
    pub fat: f64,           // g
    pub fiber: Option<f64>, // g
    pub sugar: Option<f64>, // g
    pub sodium: Option<f64>,
    pub serving_size: String,
    pub meal_type: MealType,
    pub image_url: Option<String>,
    pub confidence_score: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Structured estimate returned by the food-recognition service, or typed in
/// by hand for manual entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionEstimate {
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub sugar: Option<f64>,
    #[serde(default)]
    pub sodium: Option<f64>,
    #[serde(default)]
    pub serving_size: String,
    #[serde(default)]
    pub confidence_score: Option<f64>,
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    // NaN fails the comparison as well
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NegativeNutrient { field, value })
    }
}

impl NutritionEstimate {
    /// Energy is not cross-checked against macros; estimator output is taken as-is.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.food_name.trim().is_empty() {
            return Err(ValidationError::EmptyFoodName);
        }
        non_negative("calories", self.calories)?;
        non_negative("protein", self.protein)?;
        non_negative("carbs", self.carbs)?;
        non_negative("fat", self.fat)?;
        for (field, value) in [
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("sodium", self.sodium),
        ] {
            if let Some(v) = value {
                non_negative(field, v)?;
            }
        }
        if let Some(score) = self.confidence_score {
            if !(0.0..=1.0).contains(&score) {
                return Err(ValidationError::ConfidenceOutOfRange(score));
            }
        }
        Ok(())
    }
}

impl FoodEntry {
    /// Build the entry for an accepted estimate, stamped with `now`.
    pub fn from_estimate(
        user_id: Uuid,
        estimate: NutritionEstimate,
        meal_type: MealType,
        image_url: Option<String>,
        now: OffsetDateTime,
    ) -> Result<Self, ValidationError> {
        estimate.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            food_name: estimate.food_name.trim().to_string(),
            calories: estimate.calories,
            protein: estimate.protein,
            carbs: estimate.carbs,
            fat: estimate.fat,
            fiber: estimate.fiber,
            sugar: estimate.sugar,
            sodium: estimate.sodium,
            serving_size: estimate.serving_size,
            meal_type,
            image_url,
            confidence_score: estimate.confidence_score,
            created_at: now,
        })
    }

    pub fn to_record(&self) -> Result<FoodEntryRecord, time::error::Format> {
        Ok(FoodEntryRecord {
            id: self.id,
            user_id: self.user_id,
            food_name: self.food_name.clone(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
            sugar: self.sugar,
            sodium: self.sodium,
            serving_size: self.serving_size.clone(),
            meal_type: self.meal_type,
            image_url: self.image_url.clone(),
            confidence_score: self.confidence_score,
            created_at: self.created_at.format(&Rfc3339)?,
        })
    }
}

impl TryFrom<FoodEntryRecord> for FoodEntry {
    type Error = ParseError;

    fn try_from(r: FoodEntryRecord) -> Result<Self, Self::Error> {
        let Some(created_at) = parse_created_at(&r.created_at) else {
            return Err(ParseError::Timestamp {
                entry_id: r.id,
                raw: r.created_at,
            });
        };
        Ok(Self {
            id: r.id,
            user_id: r.user_id,
            food_name: r.food_name,
            calories: r.calories,
            protein: r.protein,
            carbs: r.carbs,
            fat: r.fat,
            fiber: r.fiber,
            sugar: r.sugar,
            sodium: r.sodium,
            serving_size: r.serving_size,
            meal_type: r.meal_type,
            image_url: r.image_url,
            confidence_score: r.confidence_score,
            created_at,
        })
    }
}

/// Records split into the entries that parsed and the ones that did not.
#[derive(Debug, Default)]
pub struct ParsedRecords {
    pub entries: Vec<FoodEntry>,
    pub errors: Vec<ParseError>,
}

impl ParsedRecords {
    pub fn skipped(&self) -> usize {
        self.errors.len()
    }
}

/// Parse store records, keeping input order. A malformed record is logged and
/// left out instead of failing the batch.
pub fn parse_records<I>(records: I) -> ParsedRecords
where
    I: IntoIterator<Item = FoodEntryRecord>,
{
    let mut parsed = ParsedRecords::default();
    for record in records {
        match FoodEntry::try_from(record) {
            Ok(entry) => parsed.entries.push(entry),
            Err(e) => {
                warn!(error = %e, "skipping malformed food entry");
                parsed.errors.push(e);
            }
        }
    }
    parsed
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use time::macros::datetime;

    #[test]
    fn record_round_trips_through_rfc3339() {
        let e = entry("Oatmeal", 300.0, MealType::Breakfast, datetime!(2024-05-01 07:30:15.250 UTC));
        let record = e.to_record().unwrap();
        assert_eq!(record.created_at, "2024-05-01T07:30:15.25Z");
        assert_eq!(FoodEntry::try_from(record).unwrap(), e);
    }

    #[test]
    fn store_style_timestamps_parse() {
        let mut record = entry("Soup", 120.0, MealType::Dinner, datetime!(2024-05-01 00:00 UTC))
            .to_record()
            .unwrap();
        record.created_at = "2024-05-01T18:45:12.123456+02:00".into();
        let parsed = FoodEntry::try_from(record).unwrap();
        assert_eq!(parsed.created_at, datetime!(2024-05-01 16:45:12.123456 UTC));
    }

    #[test]
    fn offsetless_timestamps_are_utc() {
        let mut record = entry("Soup", 120.0, MealType::Dinner, datetime!(2024-05-01 00:00 UTC))
            .to_record()
            .unwrap();
        record.created_at = "2024-05-02T08:00:00".into();
        let parsed = FoodEntry::try_from(record.clone()).unwrap();
        assert_eq!(parsed.created_at, datetime!(2024-05-02 08:00 UTC));

        record.created_at = "2024-05-02T08:00:00.123456".into();
        let parsed = FoodEntry::try_from(record).unwrap();
        assert_eq!(parsed.created_at, datetime!(2024-05-02 08:00:00.123456 UTC));

        assert_eq!(parse_created_at("2024-05-02"), None);
    }

    #[test]
    fn malformed_timestamp_is_a_parse_error() {
        let mut record = entry("Soup", 120.0, MealType::Dinner, datetime!(2024-05-01 00:00 UTC))
            .to_record()
            .unwrap();
        record.created_at = "05/01/2024 6pm".into();
        let id = record.id;
        let err = FoodEntry::try_from(record).unwrap_err();
        assert_eq!(
            err,
            ParseError::Timestamp {
                entry_id: id,
                raw: "05/01/2024 6pm".into()
            }
        );
    }

    #[test]
    fn parse_records_skips_bad_rows_and_keeps_order() {
        let t = datetime!(2024-05-01 12:00 UTC);
        let a = entry("A", 1.0, MealType::Snack, t).to_record().unwrap();
        let mut b = entry("B", 2.0, MealType::Snack, t).to_record().unwrap();
        b.created_at = String::new();
        let c = entry("C", 3.0, MealType::Snack, t).to_record().unwrap();

        let parsed = parse_records(vec![a, b, c]);
        let names: Vec<_> = parsed.entries.iter().map(|e| e.food_name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
        assert_eq!(parsed.skipped(), 1);
    }

    #[test]
    fn estimate_validation() {
        assert!(estimate("Chicken salad", 350.0).validate().is_ok());

        assert_eq!(
            estimate("   ", 350.0).validate(),
            Err(ValidationError::EmptyFoodName)
        );

        let negative = NutritionEstimate {
            fat: -1.0,
            ..estimate("Salad", 350.0)
        };
        assert_eq!(
            negative.validate(),
            Err(ValidationError::NegativeNutrient {
                field: "fat",
                value: -1.0
            })
        );

        let nan = estimate("Salad", f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(ValidationError::NegativeNutrient { field: "calories", .. })
        ));

        let bad_sodium = NutritionEstimate {
            sodium: Some(-3.0),
            ..estimate("Salad", 350.0)
        };
        assert!(bad_sodium.validate().is_err());

        let overconfident = NutritionEstimate {
            confidence_score: Some(1.2),
            ..estimate("Salad", 350.0)
        };
        assert_eq!(
            overconfident.validate(),
            Err(ValidationError::ConfidenceOutOfRange(1.2))
        );
    }

    #[test]
    fn calories_need_not_match_macros() {
        let odd = NutritionEstimate {
            calories: 10.0,
            protein: 100.0,
            carbs: 100.0,
            fat: 100.0,
            ..estimate("Mystery bar", 10.0)
        };
        assert!(odd.validate().is_ok());
    }

    #[test]
    fn from_estimate_stamps_owner_and_time() {
        let user = Uuid::new_v4();
        let now = datetime!(2024-05-01 13:05 UTC);
        let e = FoodEntry::from_estimate(
            user,
            estimate("  Grilled Chicken Salad ", 350.0),
            MealType::Lunch,
            Some("https://img.local/1.jpg".into()),
            now,
        )
        .unwrap();
        assert_eq!(e.user_id, user);
        assert_eq!(e.food_name, "Grilled Chicken Salad");
        assert_eq!(e.created_at, now);
        assert_eq!(e.meal_type, MealType::Lunch);
        assert_eq!(e.confidence_score, Some(0.87));
    }
}
