use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::calculator::DEFAULT_CALORIE_TARGET;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

/// Profile record as kept by the record store, one per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionProfile {
    pub id: Uuid,                             // owning user id
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub weight: Option<f64>,                  // kg
    pub height: Option<f64>,                  // cm
    pub age: Option<u32>,                     // years
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub daily_calorie_target: Option<i64>,    // derived on save
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// The four metrics the BMR formula needs, all present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
}

impl NutritionProfile {
    /// Blank profile handed out on first access, before anything is saved.
    pub fn empty(id: Uuid) -> Self {
        Self {
            id,
            email: None,
            full_name: None,
            weight: None,
            height: None,
            age: None,
            gender: None,
            activity_level: None,
            goal: None,
            daily_calorie_target: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn body_metrics(&self) -> Option<BodyMetrics> {
        Some(BodyMetrics {
            weight_kg: self.weight?,
            height_cm: self.height?,
            age: self.age?,
            gender: self.gender?,
        })
    }

    /// Target shown to the user: the stored one, or the default when never computed.
    pub fn effective_target(&self) -> i64 {
        self.daily_calorie_target.unwrap_or(DEFAULT_CALORIE_TARGET)
    }
}
