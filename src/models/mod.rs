//! Data models
//!
//! Plain value types passed into and out of the nutrition calculations.

mod goal;
mod meal_plan;
mod nutrition;
mod profile;

pub use goal::{ActivityLevel, Biometrics, CalorieGoal, Gender, GoalCategory};
pub use meal_plan::{EntrySource, MealPlanEntry, MealTime};
pub use nutrition::Nutrition;
pub use profile::{
    NutritionalProfile, Product, ProfileBasis, Recipe, RecipeIngredient,
    DEFAULT_REFERENCE_QUANTITY,
};
