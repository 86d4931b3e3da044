//! Meal-time budget splitter
//!
//! Apportions a daily calorie target across breakfast, lunch, dinner and snack.

use std::collections::BTreeMap;

use serde::Serialize;

use super::scaler::round_to_ten;
use crate::models::{GoalCategory, MealTime};

/// Calorie sub-budget per meal time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealBudget {
    pub category: GoalCategory,
    pub daily_calories: f64,
    pub by_meal_time: BTreeMap<MealTime, f64>,
}

impl MealBudget {
    pub fn get(&self, meal_time: MealTime) -> f64 {
        self.by_meal_time.get(&meal_time).copied().unwrap_or(0.0)
    }

    /// Sum of the rounded sub-budgets
    pub fn allocated(&self) -> f64 {
        self.by_meal_time.values().sum()
    }
}

/// Shares in `MealTime::ALL` order
fn meal_shares(category: GoalCategory) -> [f64; 4] {
    match category {
        GoalCategory::WeightLoss => [0.30, 0.40, 0.15, 0.15],
        GoalCategory::MassGain => [0.25, 0.30, 0.35, 0.10],
        GoalCategory::Maintenance => [0.30, 0.35, 0.25, 0.10],
    }
}

/// Split `daily_calories` by the category's table, each part rounded to 10 kcal
pub fn split_meal_budget(daily_calories: f64, category: GoalCategory) -> MealBudget {
    let by_meal_time = MealTime::ALL
        .into_iter()
        .zip(meal_shares(category))
        .map(|(meal_time, share)| (meal_time, round_to_ten(daily_calories * share)))
        .collect();

    MealBudget {
        category,
        daily_calories,
        by_meal_time,
    }
}
