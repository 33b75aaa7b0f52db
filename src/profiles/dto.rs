use serde::Deserialize;

use super::model::{ActivityLevel, Gender, Goal};
use crate::error::ValidationError;

/// Body of a profile save. Every field replaces the stored value; a missing
/// field clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileEdit {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub goal: Option<Goal>,
}

impl ProfileEdit {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive = |v: Option<f64>| v.map_or(true, |v| v.is_finite() && v > 0.0);
        if !positive(self.weight) {
            return Err(ValidationError::NonPositiveMetric { field: "weight" });
        }
        if !positive(self.height) {
            return Err(ValidationError::NonPositiveMetric { field: "height" });
        }
        if self.age == Some(0) {
            return Err(ValidationError::NonPositiveMetric { field: "age" });
        }
        Ok(())
    }
}
