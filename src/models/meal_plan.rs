//! Meal plan model
//!
//! Entries logged by a user for a date, bucketed by meal time.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NutritionalProfile;
use crate::nutrition::NutritionError;

/// Named slot in a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealTime {
    /// All meal times in display order
    pub const ALL: [MealTime; 4] = [
        MealTime::Breakfast,
        MealTime::Lunch,
        MealTime::Dinner,
        MealTime::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealTime::Breakfast => "breakfast",
            MealTime::Lunch => "lunch",
            MealTime::Dinner => "dinner",
            MealTime::Snack => "snack",
        }
    }

    /// Backend meal-time id
    pub fn id(&self) -> i64 {
        match self {
            MealTime::Breakfast => 1,
            MealTime::Lunch => 2,
            MealTime::Dinner => 3,
            MealTime::Snack => 4,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl fmt::Display for MealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealTime {
    type Err = NutritionError;

    /// Accepts the lowercase code or the numeric backend id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Self::from_id(id).ok_or_else(|| NutritionError::UnknownMealTime(s.to_string()));
        }
        match trimmed.to_lowercase().as_str() {
            "breakfast" => Ok(MealTime::Breakfast),
            "lunch" => Ok(MealTime::Lunch),
            "dinner" => Ok(MealTime::Dinner),
            "snack" => Ok(MealTime::Snack),
            _ => Err(NutritionError::UnknownMealTime(s.to_string())),
        }
    }
}

/// What a meal plan entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum EntrySource {
    Product(i64),
    Recipe(i64),
}

/// A product or recipe logged into a meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub meal_time: MealTime,
    /// Grams eaten (portion weight for recipes)
    pub quantity: f64,
    pub source: EntrySource,
    pub profile: NutritionalProfile,
}
