//! Calorie goal estimation
//!
//! Mifflin-St Jeor basal metabolic rate times an activity factor, with macro
//! targets split from the resulting daily calories.

use super::error::{NutritionError, NutritionResult};
use crate::models::{ActivityLevel, Biometrics, CalorieGoal, Gender, GoalCategory};

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;
const KCAL_PER_G_CARBOHYDRATE: f64 = 4.0;

/// Activity multiplier for a level id (1 sedentary .. 5 extreme)
pub fn activity_factor(level_id: i64) -> NutritionResult<f64> {
    match level_id {
        1 => Ok(1.2),
        2 => Ok(1.375),
        3 => Ok(1.55),
        4 => Ok(1.725),
        5 => Ok(1.9),
        other => Err(NutritionError::InvalidActivityLevel(other)),
    }
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day
pub fn basal_metabolic_rate(gender: Gender, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily calorie target: BMR times the activity factor
pub fn daily_calorie_target(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    activity_level_id: i64,
) -> NutritionResult<f64> {
    let factor = activity_factor(activity_level_id)?;
    let bmr = basal_metabolic_rate(gender, weight_kg, height_cm, age_years);
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(NutritionError::NonPositiveMetabolicRate(bmr));
    }
    Ok(bmr * factor)
}

/// Energy share of protein, fat and carbohydrates for a goal category
pub fn macro_energy_split(category: GoalCategory) -> (f64, f64, f64) {
    match category {
        GoalCategory::WeightLoss => (0.30, 0.25, 0.45),
        GoalCategory::MassGain => (0.25, 0.25, 0.50),
        GoalCategory::Maintenance => (0.20, 0.30, 0.50),
    }
}

/// Full daily goal for a user
pub fn calorie_goal(biometrics: &Biometrics, category: GoalCategory) -> NutritionResult<CalorieGoal> {
    let daily_calories = daily_calorie_target(
        biometrics.gender,
        biometrics.weight_kg,
        biometrics.height_cm,
        biometrics.age_years,
        biometrics.activity_level.id(),
    )?;
    let (protein_share, fat_share, carbohydrate_share) = macro_energy_split(category);

    Ok(CalorieGoal {
        category,
        daily_calories,
        protein_goal: daily_calories * protein_share / KCAL_PER_G_PROTEIN,
        fat_goal: daily_calories * fat_share / KCAL_PER_G_FAT,
        carbohydrate_goal: daily_calories * carbohydrate_share / KCAL_PER_G_CARBOHYDRATE,
    })
}

impl Biometrics {
    /// Build biometrics from raw form values
    pub fn from_raw(
        gender: &str,
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        activity_level_id: i64,
    ) -> NutritionResult<Self> {
        for (field, value) in [("weight", weight_kg), ("height", height_cm), ("age", age_years)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(NutritionError::InvalidBiometric { field, value });
            }
        }

        Ok(Self {
            gender: gender.parse()?,
            weight_kg,
            height_cm,
            age_years,
            activity_level: ActivityLevel::new(activity_level_id)?,
        })
    }
}
