//! Shared nutrition data structure
//!
//! Used for scaled item values, meal-time totals and day/week aggregates.

use serde::{Deserialize, Serialize};

/// Calories and macronutrients
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,      // kcal
    pub protein: f64,       // grams
    pub fat: f64,           // grams
    pub carbohydrates: f64, // grams
}

impl Nutrition {
    pub fn new(calories: f64, protein: f64, fat: f64, carbohydrates: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbohydrates,
        }
    }

    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale nutrition values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
            carbohydrates: self.carbohydrates * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbohydrates: self.carbohydrates + other.carbohydrates,
        }
    }

    /// Sum of protein, fat and carbohydrate grams
    pub fn macro_grams(&self) -> f64 {
        self.protein + self.fat + self.carbohydrates
    }

    /// Copy rounded to one decimal place, for display only.
    ///
    /// Aggregation must always work on the unrounded values.
    pub fn rounded(&self) -> Self {
        use crate::nutrition::round_one_decimal;

        Self {
            calories: round_one_decimal(self.calories),
            protein: round_one_decimal(self.protein),
            fat: round_one_decimal(self.fat),
            carbohydrates: round_one_decimal(self.carbohydrates),
        }
    }

    /// Field name and value pairs, in display order
    pub(crate) fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("fat", self.fat),
            ("carbohydrates", self.carbohydrates),
        ]
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::AddAssign for Nutrition {
    fn add_assign(&mut self, other: Nutrition) {
        *self = Nutrition::add(self, &other);
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}
