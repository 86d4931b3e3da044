//! Diet Calculator Library
//!
//! Nutrition scaling, meal plan aggregation, calorie goal estimation and
//! meal-time budget splitting for a diet-tracking client.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
