//! Nutritional profiles for products and recipes
//!
//! A profile stores base values relative to a reference quantity (100 g for
//! products, 100 g of yield for recipes).

use serde::{Deserialize, Serialize};

use super::Nutrition;
use crate::nutrition::{NutritionError, NutritionResult};

/// Standard reference quantity in grams
pub const DEFAULT_REFERENCE_QUANTITY: f64 = 100.0;

/// What the reference quantity of a profile refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileBasis {
    /// Values per reference grams of the product
    Product,
    /// Values per reference grams of the cooked recipe yield
    Recipe,
}

/// Base nutrition values defined per reference quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionalProfile {
    pub basis: ProfileBasis,
    pub base: Nutrition,
    pub reference_quantity: f64,
}

impl NutritionalProfile {
    /// Create a profile, rejecting malformed reference data
    pub fn new(basis: ProfileBasis, base: Nutrition, reference_quantity: f64) -> NutritionResult<Self> {
        if !reference_quantity.is_finite() || reference_quantity <= 0.0 {
            return Err(NutritionError::InvalidReferenceQuantity(reference_quantity));
        }

        for (field, value) in base.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(NutritionError::InvalidNutrientValue { field, value });
            }
        }

        Ok(Self {
            basis,
            base,
            reference_quantity,
        })
    }

    /// Profile with values per 100 g of a product
    pub fn per_100g(base: Nutrition) -> NutritionResult<Self> {
        Self::new(ProfileBasis::Product, base, DEFAULT_REFERENCE_QUANTITY)
    }

    /// Profile with values per 100 g of recipe yield
    pub fn per_100g_of_recipe(base: Nutrition) -> NutritionResult<Self> {
        Self::new(ProfileBasis::Recipe, base, DEFAULT_REFERENCE_QUANTITY)
    }
}

/// A food product as delivered by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Default portion in grams
    pub weight: f64,
    pub per_100g: Nutrition,
}

impl Product {
    pub fn profile(&self) -> NutritionResult<NutritionalProfile> {
        NutritionalProfile::per_100g(self.per_100g)
    }

    /// Portion weight to show when the product is opened
    pub fn default_portion(&self) -> f64 {
        default_portion(Some(self.weight))
    }
}

/// An ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub product: Product,
    /// Amount in grams
    pub amount: f64,
}

/// A recipe with per-100 g values of its total yield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub total_weight: f64,
    pub per_100g: Nutrition,
    /// Portion weight chosen by the user, if any
    pub weight: Option<f64>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Build a recipe from its ingredients.
    ///
    /// The yield is the sum of ingredient amounts; a recipe without yield gets
    /// an all-zero profile.
    pub fn from_ingredients(
        id: i64,
        name: impl Into<String>,
        ingredients: Vec<RecipeIngredient>,
    ) -> NutritionResult<Self> {
        let mut total_weight = 0.0;
        let mut total = Nutrition::zero();

        for ingredient in &ingredients {
            let profile = ingredient.product.profile()?;
            total += crate::nutrition::scale(&profile, ingredient.amount)?;
            total_weight += ingredient.amount;
        }

        let per_100g = if total_weight > 0.0 {
            total.scale(DEFAULT_REFERENCE_QUANTITY / total_weight)
        } else {
            Nutrition::zero()
        };

        Ok(Self {
            id,
            name: name.into(),
            total_weight,
            per_100g,
            weight: None,
            ingredients,
        })
    }

    pub fn profile(&self) -> NutritionResult<NutritionalProfile> {
        NutritionalProfile::per_100g_of_recipe(self.per_100g)
    }

    /// Portion weight to show when the recipe is opened
    pub fn default_portion(&self) -> f64 {
        default_portion(self.weight)
    }
}

fn default_portion(weight: Option<f64>) -> f64 {
    match weight {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => DEFAULT_REFERENCE_QUANTITY,
    }
}
