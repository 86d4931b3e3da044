//! User biometrics and diet goals

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::nutrition::{NutritionError, NutritionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(NutritionError::UnknownGender(s.to_string())),
        }
    }
}

/// Physical activity level, 1 (sedentary) to 5 (extreme)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ActivityLevel(u8);

impl ActivityLevel {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn new(id: i64) -> NutritionResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&id) {
            Ok(Self(id as u8))
        } else {
            Err(NutritionError::InvalidActivityLevel(id))
        }
    }

    pub fn id(&self) -> i64 {
        i64::from(self.0)
    }
}

impl TryFrom<i64> for ActivityLevel {
    type Error = NutritionError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ActivityLevel> for i64 {
    fn from(level: ActivityLevel) -> i64 {
        level.id()
    }
}

/// Dietary objective driving calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    WeightLoss,
    MassGain,
    Maintenance,
}

const WEIGHT_LOSS_KEYWORDS: &[&str] = &[
    "похудение",
    "снижение веса",
    "weight loss",
    "lose weight",
    "fat loss",
];

const MASS_GAIN_KEYWORDS: &[&str] = &[
    "набор массы",
    "увеличение массы",
    "mass gain",
    "muscle gain",
    "gain weight",
];

const MAINTENANCE_KEYWORDS: &[&str] = &["поддержание", "maintenance", "maintain"];

impl GoalCategory {
    /// Stable code used between client and server
    pub fn code(&self) -> &'static str {
        match self {
            GoalCategory::WeightLoss => "weight_loss",
            GoalCategory::MassGain => "mass_gain",
            GoalCategory::Maintenance => "maintenance",
        }
    }

    /// Resolve a human-readable goal name by case-insensitive substring match.
    ///
    /// Returns `None` when no keyword matches; the caller picks the fallback.
    pub fn from_display_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if matches(WEIGHT_LOSS_KEYWORDS) {
            Some(GoalCategory::WeightLoss)
        } else if matches(MASS_GAIN_KEYWORDS) {
            Some(GoalCategory::MassGain)
        } else if matches(MAINTENANCE_KEYWORDS) {
            Some(GoalCategory::Maintenance)
        } else {
            None
        }
    }

    /// Category for a display name, or `fallback` when no keyword matches
    pub fn resolve(name: &str, fallback: GoalCategory) -> Self {
        Self::from_display_name(name).unwrap_or_else(|| {
            tracing::warn!(
                goal_name = name,
                fallback = fallback.code(),
                "Unrecognized goal name, using fallback"
            );
            fallback
        })
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GoalCategory {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_loss" => Ok(GoalCategory::WeightLoss),
            "mass_gain" => Ok(GoalCategory::MassGain),
            "maintenance" => Ok(GoalCategory::Maintenance),
            _ => Err(NutritionError::UnknownGoalCategory(s.to_string())),
        }
    }
}

/// Inputs of the calorie goal estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub activity_level: ActivityLevel,
}

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieGoal {
    pub category: GoalCategory,
    pub daily_calories: f64,
    pub protein_goal: f64,      // grams
    pub fat_goal: f64,          // grams
    pub carbohydrate_goal: f64, // grams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_bounds() {
        assert!(ActivityLevel::new(1).is_ok());
        assert!(ActivityLevel::new(5).is_ok());
        assert_eq!(ActivityLevel::new(0).unwrap_err(), NutritionError::InvalidActivityLevel(0));
        assert_eq!(ActivityLevel::new(6).unwrap_err(), NutritionError::InvalidActivityLevel(6));
    }

    #[test]
    fn test_activity_level_deserialize_validates() {
        let level: ActivityLevel = serde_json::from_str("3").unwrap();
        assert_eq!(level.id(), 3);
        assert!(serde_json::from_str::<ActivityLevel>("7").is_err());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_goal_category_codes() {
        for category in [GoalCategory::WeightLoss, GoalCategory::MassGain, GoalCategory::Maintenance] {
            assert_eq!(category.code().parse::<GoalCategory>().unwrap(), category);
        }
        assert_eq!("Weight-Loss".parse::<GoalCategory>().unwrap(), GoalCategory::WeightLoss);
        assert!("bulk".parse::<GoalCategory>().is_err());
    }

    #[test]
    fn test_goal_category_from_display_name() {
        assert_eq!(GoalCategory::from_display_name("Похудение"), Some(GoalCategory::WeightLoss));
        assert_eq!(
            GoalCategory::from_display_name("Плавное снижение веса"),
            Some(GoalCategory::WeightLoss)
        );
        assert_eq!(GoalCategory::from_display_name("НАБОР МАССЫ"), Some(GoalCategory::MassGain));
        assert_eq!(GoalCategory::from_display_name("Mass gain"), Some(GoalCategory::MassGain));
        assert_eq!(
            GoalCategory::from_display_name("Поддержание веса"),
            Some(GoalCategory::Maintenance)
        );
        assert_eq!(GoalCategory::from_display_name("Здоровье"), None);
        assert_eq!(GoalCategory::from_display_name(""), None);
    }

    #[test]
    fn test_goal_category_resolve_with_fallback() {
        assert_eq!(
            GoalCategory::resolve("Набор массы", GoalCategory::Maintenance),
            GoalCategory::MassGain
        );
        assert_eq!(
            GoalCategory::resolve("Something else", GoalCategory::Maintenance),
            GoalCategory::Maintenance
        );
        assert_eq!(
            GoalCategory::resolve("Something else", GoalCategory::WeightLoss),
            GoalCategory::WeightLoss
        );
    }
}
