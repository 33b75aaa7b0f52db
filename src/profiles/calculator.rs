//! Daily calorie target from body metrics.
//!
//! BMR follows the Mifflin-St Jeor equation (Mifflin et al., 1990):
//! `10 x weight_kg + 6.25 x height_cm - 5 x age + s`, where `s` is +5 for
//! male and -161 otherwise. TDEE scales BMR by an activity factor, and the
//! goal shifts the rounded TDEE by a fixed 500 kcal.

use super::model::{ActivityLevel, BodyMetrics, Gender, Goal, NutritionProfile};

/// Target used whenever any of weight, height, age or gender is missing.
pub const DEFAULT_CALORIE_TARGET: i64 = 2000;

const MSJ_WEIGHT_COEF: f64 = 10.0;
const MSJ_HEIGHT_COEF: f64 = 6.25;
const MSJ_AGE_COEF: f64 = -5.0;
const MSJ_MALE_CONSTANT: f64 = 5.0;
const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Roughly 0.5 kg per week either way.
const GOAL_ADJUSTMENT_KCAL: i64 = 500;

impl ActivityLevel {
    pub const fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl Goal {
    pub const fn adjustment_kcal(self) -> i64 {
        match self {
            Goal::Lose => -GOAL_ADJUSTMENT_KCAL,
            Goal::Maintain => 0,
            Goal::Gain => GOAL_ADJUSTMENT_KCAL,
        }
    }
}

/// Basal Metabolic Rate in kcal/day.
///
/// `Other` takes the female constant, matching what existing targets were
/// computed with.
pub fn mifflin_st_jeor(metrics: &BodyMetrics) -> f64 {
    let gender_constant = match metrics.gender {
        Gender::Male => MSJ_MALE_CONSTANT,
        Gender::Female | Gender::Other => MSJ_FEMALE_CONSTANT,
    };

    MSJ_WEIGHT_COEF * metrics.weight_kg
        + MSJ_HEIGHT_COEF * metrics.height_cm
        + MSJ_AGE_COEF * f64::from(metrics.age)
        + gender_constant
}

/// Total Daily Energy Expenditure; an unset activity level counts as sedentary.
pub fn tdee(bmr: f64, activity_level: Option<ActivityLevel>) -> f64 {
    bmr * activity_level
        .unwrap_or(ActivityLevel::Sedentary)
        .multiplier()
}

/// Daily calorie target for a profile.
///
/// No clamping is applied: a goal adjustment may push the result to zero or
/// below for extreme inputs, and callers decide what to do with that. The
/// float-to-int cast and the goal shift saturate at the `i64` bounds.
pub fn daily_calorie_target(profile: &NutritionProfile) -> i64 {
    let Some(metrics) = profile.body_metrics() else {
        return DEFAULT_CALORIE_TARGET;
    };

    let bmr = mifflin_st_jeor(&metrics);
    let maintenance = tdee(bmr, profile.activity_level).round() as i64;

    maintenance.saturating_add(profile.goal.map_or(0, Goal::adjustment_kcal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn profile(
        weight: f64,
        height: f64,
        age: u32,
        gender: Gender,
        activity: Option<ActivityLevel>,
        goal: Option<Goal>,
    ) -> NutritionProfile {
        NutritionProfile {
            weight: Some(weight),
            height: Some(height),
            age: Some(age),
            gender: Some(gender),
            activity_level: activity,
            goal,
            ..NutritionProfile::empty(Uuid::new_v4())
        }
    }

    #[test]
    fn missing_any_metric_falls_back_to_default() {
        let full = profile(70.0, 175.0, 25, Gender::Male, None, Some(Goal::Lose));

        let mut no_weight = full.clone();
        no_weight.weight = None;
        let mut no_height = full.clone();
        no_height.height = None;
        let mut no_age = full.clone();
        no_age.age = None;
        let mut no_gender = full.clone();
        no_gender.gender = None;

        for p in [no_weight, no_height, no_age, no_gender] {
            assert_eq!(daily_calorie_target(&p), DEFAULT_CALORIE_TARGET);
        }
        assert_eq!(
            daily_calorie_target(&NutritionProfile::empty(Uuid::new_v4())),
            2000
        );
    }

    #[test]
    fn male_bmr() {
        let metrics = BodyMetrics {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 25,
            gender: Gender::Male,
        };
        // 700 + 1093.75 - 125 + 5
        assert_eq!(mifflin_st_jeor(&metrics), 1673.75);
    }

    #[test]
    fn female_and_other_share_constant() {
        let female = BodyMetrics {
            weight_kg: 60.0,
            height_cm: 165.0,
            age: 30,
            gender: Gender::Female,
        };
        let other = BodyMetrics {
            gender: Gender::Other,
            ..female
        };
        assert_eq!(mifflin_st_jeor(&female), 1320.25);
        assert_eq!(mifflin_st_jeor(&other), mifflin_st_jeor(&female));
    }

    #[test]
    fn sedentary_maintain_rounds_half_up() {
        // 1673.75 x 1.2 = 2008.5
        let p = profile(
            70.0,
            175.0,
            25,
            Gender::Male,
            Some(ActivityLevel::Sedentary),
            Some(Goal::Maintain),
        );
        assert_eq!(daily_calorie_target(&p), 2009);
    }

    #[test]
    fn goal_shifts_by_500() {
        let base = profile(
            70.0,
            175.0,
            25,
            Gender::Male,
            Some(ActivityLevel::Sedentary),
            None,
        );
        let lose = NutritionProfile {
            goal: Some(Goal::Lose),
            ..base.clone()
        };
        let gain = NutritionProfile {
            goal: Some(Goal::Gain),
            ..base.clone()
        };
        assert_eq!(daily_calorie_target(&base), 2009);
        assert_eq!(daily_calorie_target(&lose), 1509);
        assert_eq!(daily_calorie_target(&gain), 2509);
    }

    #[test]
    fn missing_activity_level_is_sedentary() {
        let with = profile(
            55.0,
            160.0,
            28,
            Gender::Female,
            Some(ActivityLevel::Sedentary),
            None,
        );
        let without = NutritionProfile {
            activity_level: None,
            ..with.clone()
        };
        // 1249 x 1.2 = 1498.8
        assert_eq!(daily_calorie_target(&with), 1499);
        assert_eq!(daily_calorie_target(&without), 1499);
    }

    #[test]
    fn activity_table() {
        let cases = [
            (ActivityLevel::Light, 2301),      // 1673.75 x 1.375
            (ActivityLevel::Moderate, 2594),   // 1673.75 x 1.55
            (ActivityLevel::Active, 2887),     // 1673.75 x 1.725
            (ActivityLevel::VeryActive, 3180), // 1673.75 x 1.9
        ];
        for (level, expected) in cases {
            let p = profile(70.0, 175.0, 25, Gender::Male, Some(level), None);
            assert_eq!(daily_calorie_target(&p), expected, "{level:?}");
        }
    }

    #[test]
    fn no_clamp_on_tiny_profiles() {
        let p = profile(
            1.0,
            1.0,
            100,
            Gender::Female,
            Some(ActivityLevel::Sedentary),
            Some(Goal::Lose),
        );
        assert!(daily_calorie_target(&p) < 0);
    }

    #[test]
    fn huge_metrics_saturate_instead_of_overflowing() {
        // 10 x 1e308 is +inf, which casts to i64::MAX
        let gain = profile(
            1e308,
            175.0,
            25,
            Gender::Male,
            Some(ActivityLevel::Sedentary),
            Some(Goal::Gain),
        );
        assert_eq!(daily_calorie_target(&gain), i64::MAX);

        let lose = NutritionProfile {
            goal: Some(Goal::Lose),
            ..gain.clone()
        };
        assert_eq!(daily_calorie_target(&lose), i64::MAX - 500);
    }
}
