//! Calculator tools
//!
//! Wrap the nutrition core with JSON-friendly inputs and responses.

use chrono::NaiveDate;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

use crate::config::{Config, WeekAnchor};
use crate::models::{
    Biometrics, CalorieGoal, EntrySource, GoalCategory, MealPlanEntry, MealTime, Nutrition,
    NutritionalProfile, Product, ProfileBasis, Recipe, RecipeIngredient, DEFAULT_REFERENCE_QUANTITY,
};
use crate::nutrition::{
    aggregate_day, aggregate_week, basal_metabolic_rate, calorie_goal, macro_distribution,
    percentage_of_goal, previous_week_start, remaining_percentage, scale, shift_days,
    split_meal_budget, week_start, GoalStatus, MacroDistribution, MealBudget, WeeklyReport,
    DAYS_PER_WEEK,
};

// ============================================================================
// Inputs
// ============================================================================

/// Nutrition values per reference quantity
#[derive(Debug, Clone, Copy, Deserialize, schemars::JsonSchema)]
pub struct ProfileInput {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
    /// Grams the values refer to (default 100)
    pub reference_quantity: Option<f64>,
}

impl ProfileInput {
    fn base(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.fat, self.carbohydrates)
    }

    fn to_profile(self, basis: ProfileBasis) -> Result<NutritionalProfile, String> {
        let reference = self.reference_quantity.unwrap_or(DEFAULT_REFERENCE_QUANTITY);
        NutritionalProfile::new(basis, self.base(), reference).map_err(|e| e.to_string())
    }
}

/// One logged meal plan item
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct EntryInput {
    pub id: i64,
    /// ISO date: "2026-03-02"
    pub date: String,
    /// breakfast, lunch, dinner, snack or the numeric meal-time id
    pub meal_time: String,
    /// Grams eaten
    pub quantity: f64,
    /// "product" or "recipe"
    pub source_type: String,
    pub source_id: i64,
    pub profile: ProfileInput,
}

impl EntryInput {
    fn to_entry(&self) -> Result<MealPlanEntry, String> {
        let (source, basis) = match self.source_type.trim().to_lowercase().as_str() {
            "product" => (EntrySource::Product(self.source_id), ProfileBasis::Product),
            "recipe" => (EntrySource::Recipe(self.source_id), ProfileBasis::Recipe),
            other => {
                return Err(format!(
                    "Entry {}: unknown source_type '{}', expected 'product' or 'recipe'",
                    self.id, other
                ))
            }
        };

        Ok(MealPlanEntry {
            id: self.id,
            date: parse_date(&self.date)?,
            meal_time: self
                .meal_time
                .parse()
                .map_err(|e: crate::nutrition::NutritionError| format!("Entry {}: {}", self.id, e))?,
            quantity: self.quantity,
            source,
            profile: self
                .profile
                .to_profile(basis)
                .map_err(|e| format!("Entry {}: {}", self.id, e))?,
        })
    }
}

/// Ingredient line for a recipe profile
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct IngredientInput {
    pub product_id: i64,
    pub name: String,
    /// Grams used in the recipe
    pub amount: f64,
    /// Product values per 100 g
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ScaleResponse {
    pub quantity: f64,
    pub reference_quantity: f64,
    /// Full precision, for further aggregation
    pub nutrition: Nutrition,
    /// Rounded to one decimal place
    pub display: Nutrition,
}

#[derive(Debug, Serialize)]
pub struct RecipeProfileResponse {
    pub name: String,
    pub total_weight: f64,
    pub per_100g: Nutrition,
    pub portion_weight: f64,
    pub portion: Nutrition,
}

#[derive(Debug, Serialize)]
pub struct MealTimeSummary {
    pub meal_time: MealTime,
    pub meal_time_id: i64,
    pub nutrition: Nutrition,
    pub calorie_budget: Option<f64>,
    pub percentage_of_budget: f64,
    /// Share of the day's calories eaten at this meal time
    pub share_of_day: f64,
    pub status: GoalStatus,
}

#[derive(Debug, Serialize)]
pub struct DaySummaryResponse {
    pub date: NaiveDate,
    pub entry_count: usize,
    pub goal_category: GoalCategory,
    pub meal_times: Vec<MealTimeSummary>,
    pub total: Nutrition,
    pub daily_calorie_goal: Option<f64>,
    pub percentage_of_goal: f64,
    pub remaining_percentage: f64,
    pub macro_distribution: MacroDistribution,
}

#[derive(Debug, Serialize)]
pub struct WeeklyReportResponse {
    #[serde(flatten)]
    pub report: WeeklyReport,
    pub weekly_calorie_goal: Option<f64>,
    pub percentage_of_goal: f64,
    pub macro_distribution: MacroDistribution,
}

#[derive(Debug, Serialize)]
pub struct CalorieGoalResponse {
    pub basal_metabolic_rate: f64,
    pub goal: CalorieGoal,
    pub meal_budget: MealBudget,
}

#[derive(Debug, Serialize)]
pub struct GoalProgressResponse {
    pub consumed: f64,
    pub goal: Option<f64>,
    pub percentage_of_goal: f64,
    pub remaining_percentage: f64,
    pub status: GoalStatus,
}

// ============================================================================
// Tool Functions
// ============================================================================

/// Scale a per-reference profile to a quantity
pub fn scale_nutrition(profile: ProfileInput, quantity: f64) -> Result<ScaleResponse, String> {
    let profile = profile.to_profile(ProfileBasis::Product)?;
    let nutrition = scale(&profile, quantity).map_err(|e| e.to_string())?;

    tracing::debug!(quantity, calories = nutrition.calories, "Scaled nutrition");

    Ok(ScaleResponse {
        quantity,
        reference_quantity: profile.reference_quantity,
        nutrition,
        display: nutrition.rounded(),
    })
}

/// Derive a recipe's per-100 g profile and the nutrition of one portion
pub fn recipe_profile(
    name: &str,
    ingredients: &[IngredientInput],
    portion_weight: Option<f64>,
) -> Result<RecipeProfileResponse, String> {
    let lines = ingredients
        .iter()
        .map(|i| RecipeIngredient {
            product: Product {
                id: i.product_id,
                name: i.name.clone(),
                weight: 0.0,
                per_100g: Nutrition::new(i.calories, i.protein, i.fat, i.carbohydrates),
            },
            amount: i.amount,
        })
        .collect();

    let mut recipe = Recipe::from_ingredients(0, name, lines).map_err(|e| e.to_string())?;
    recipe.weight = portion_weight;

    let portion_weight = recipe.default_portion();
    let profile = recipe.profile().map_err(|e| e.to_string())?;
    let portion = scale(&profile, portion_weight).map_err(|e| e.to_string())?;

    Ok(RecipeProfileResponse {
        name: recipe.name,
        total_weight: recipe.total_weight,
        per_100g: recipe.per_100g.rounded(),
        portion_weight,
        portion: portion.rounded(),
    })
}

/// Per-meal-time totals for a date, with budgets and goal percentages
pub fn summarize_day(
    date: &str,
    entries: &[EntryInput],
    daily_calorie_goal: Option<f64>,
    goal_category: Option<&str>,
    goal_name: Option<&str>,
    config: &Config,
) -> Result<DaySummaryResponse, String> {
    let date = parse_date(date)?;
    let entries = to_entries(entries)?;
    let category = resolve_goal_category(goal_category, goal_name, config)?;

    let day = aggregate_day(&entries, date).map_err(|e| e.to_string())?;
    let budget = daily_calorie_goal.map(|goal| split_meal_budget(goal, category));

    let total = day.total();
    let meal_times = MealTime::ALL
        .into_iter()
        .map(|meal_time| {
            let nutrition = day.meal_times.get(meal_time);
            let calorie_budget = budget.as_ref().map(|b| b.get(meal_time));
            MealTimeSummary {
                meal_time,
                meal_time_id: meal_time.id(),
                nutrition,
                calorie_budget,
                percentage_of_budget: percentage_of_goal(nutrition.calories, calorie_budget),
                share_of_day: percentage_of_goal(nutrition.calories, Some(total.calories)),
                status: GoalStatus::classify(nutrition.calories, calorie_budget),
            }
        })
        .collect();

    tracing::debug!(%date, entries = day.entry_count, calories = total.calories, "Summarized day");

    Ok(DaySummaryResponse {
        date,
        entry_count: day.entry_count,
        goal_category: category,
        meal_times,
        total,
        daily_calorie_goal,
        percentage_of_goal: percentage_of_goal(total.calories, daily_calorie_goal),
        remaining_percentage: remaining_percentage(total.calories, daily_calorie_goal),
        macro_distribution: macro_distribution(&total),
    })
}

/// Seven-day report starting at (or at the Monday of) `start_date`.
///
/// With `previous_week` the window moves back one week.
pub fn weekly_report(
    start_date: &str,
    entries: &[EntryInput],
    daily_calorie_goal: Option<f64>,
    previous_week: bool,
    config: &Config,
) -> Result<WeeklyReportResponse, String> {
    let requested = parse_date(start_date)?;
    let start = match (config.week_anchor, previous_week) {
        (WeekAnchor::Monday, false) => week_start(requested),
        (WeekAnchor::Monday, true) => previous_week_start(requested),
        (WeekAnchor::AsGiven, false) => Ok(requested),
        (WeekAnchor::AsGiven, true) => shift_days(requested, -(DAYS_PER_WEEK as i64)),
    }
    .map_err(|e| e.to_string())?;
    let entries = to_entries(entries)?;

    let report = aggregate_week(&entries, start).map_err(|e| e.to_string())?;
    let weekly_calorie_goal = daily_calorie_goal.map(WeeklyReport::weekly_goal);

    tracing::debug!(%start, calories = report.total.calories, "Built weekly report");

    Ok(WeeklyReportResponse {
        percentage_of_goal: percentage_of_goal(report.total.calories, weekly_calorie_goal),
        macro_distribution: macro_distribution(&report.total),
        weekly_calorie_goal,
        report,
    })
}

/// Estimate the daily calorie goal and its meal-time split
#[allow(clippy::too_many_arguments)]
pub fn estimate_calorie_goal(
    gender: &str,
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    activity_level: i64,
    goal_category: Option<&str>,
    goal_name: Option<&str>,
    config: &Config,
) -> Result<CalorieGoalResponse, String> {
    let biometrics = Biometrics::from_raw(gender, weight_kg, height_cm, age_years, activity_level)
        .map_err(|e| e.to_string())?;
    let category = resolve_goal_category(goal_category, goal_name, config)?;
    let goal = calorie_goal(&biometrics, category).map_err(|e| e.to_string())?;

    Ok(CalorieGoalResponse {
        basal_metabolic_rate: basal_metabolic_rate(
            biometrics.gender,
            biometrics.weight_kg,
            biometrics.height_cm,
            biometrics.age_years,
        ),
        meal_budget: split_meal_budget(goal.daily_calories, category),
        goal,
    })
}

/// Split a daily calorie target across meal times
pub fn meal_budget(
    daily_calories: f64,
    goal_category: Option<&str>,
    goal_name: Option<&str>,
    config: &Config,
) -> Result<MealBudget, String> {
    if !daily_calories.is_finite() || daily_calories < 0.0 {
        return Err(format!("Invalid daily calories {}: must be zero or more", daily_calories));
    }
    let category = resolve_goal_category(goal_category, goal_name, config)?;
    Ok(split_meal_budget(daily_calories, category))
}

/// Percentage of a goal reached and the matching status
pub fn goal_progress(consumed: f64, goal: Option<f64>) -> GoalProgressResponse {
    GoalProgressResponse {
        consumed,
        goal,
        percentage_of_goal: percentage_of_goal(consumed, goal),
        remaining_percentage: remaining_percentage(consumed, goal),
        status: GoalStatus::classify(consumed, goal),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {} (expected YYYY-MM-DD)", date, e))
}

fn to_entries(entries: &[EntryInput]) -> Result<Vec<MealPlanEntry>, String> {
    entries.iter().map(EntryInput::to_entry).collect()
}

/// Category code wins over display name; unmatched names use the configured fallback
fn resolve_goal_category(
    code: Option<&str>,
    name: Option<&str>,
    config: &Config,
) -> Result<GoalCategory, String> {
    if let Some(code) = code {
        return code.parse().map_err(|e: crate::nutrition::NutritionError| e.to_string());
    }

    Ok(name.map_or(config.fallback_goal, |name| {
        GoalCategory::resolve(name, config.fallback_goal)
    }))
}
