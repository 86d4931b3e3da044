//! Nutrition error types

use thiserror::Error;

/// Errors raised by the nutrition calculations
///
/// Every error here is deterministic: the same input always fails the same way,
/// so callers surface it to the user instead of retrying.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NutritionError {
    #[error("Invalid activity level {0}: expected a value from 1 to 5")]
    InvalidActivityLevel(i64),

    #[error("Invalid reference quantity {0}: must be a finite value greater than zero")]
    InvalidReferenceQuantity(f64),

    #[error("Invalid quantity {0}: must be a finite value of zero or more")]
    InvalidQuantity(f64),

    #[error("Invalid {field} value {value}: must be a finite value of zero or more")]
    InvalidNutrientValue { field: &'static str, value: f64 },

    #[error("Scaled {field} value {value} is out of range (quantity {quantity})")]
    ScaledValueOutOfRange {
        field: &'static str,
        value: f64,
        quantity: f64,
    },

    #[error("Invalid {field} {value}: must be a finite value greater than zero")]
    InvalidBiometric { field: &'static str, value: f64 },

    #[error("Basal metabolic rate {0:.1} kcal is not positive for these biometrics")]
    NonPositiveMetabolicRate(f64),

    #[error("Date {0} is too close to the supported calendar range for a 7-day window")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("Unknown gender '{0}': expected 'male' or 'female'")]
    UnknownGender(String),

    #[error("Unknown goal category '{0}': expected 'weight_loss', 'mass_gain' or 'maintenance'")]
    UnknownGoalCategory(String),

    #[error("Unknown meal time '{0}'")]
    UnknownMealTime(String),
}

/// Result type for nutrition calculations
pub type NutritionResult<T> = Result<T, NutritionError>;
