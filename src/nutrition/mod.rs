//! Nutrition calculation module
//!
//! Pure, stateless functions: macro scaling, meal plan aggregation, calorie
//! goal estimation and meal-time budget splitting.

pub mod aggregator;
pub mod budget;
pub mod calories;
pub mod error;
pub mod scaler;

pub use aggregator::{
    aggregate_by_meal_time, aggregate_day, aggregate_week, entry_nutrition, macro_distribution,
    percentage_of_goal, previous_week_start, remaining_percentage, shift_days, week_start, DailyAggregate,
    DayBucket, GoalStatus, MacroDistribution, MealTimeTotals, WeeklyReport, DAYS_PER_WEEK,
};
pub use budget::{split_meal_budget, MealBudget};
pub use calories::{
    activity_factor, basal_metabolic_rate, calorie_goal, daily_calorie_target, macro_energy_split,
};
pub use error::{NutritionError, NutritionResult};
pub use scaler::{round_one_decimal, round_to_ten, scale, scale_per_100g};
