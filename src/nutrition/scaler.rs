//! Macro scaler
//!
//! Converts a profile's reference values into the amounts for a chosen quantity.

use super::error::{NutritionError, NutritionResult};
use crate::models::{Nutrition, NutritionalProfile};

/// Scale a profile to `quantity` (same unit as the reference quantity).
///
/// Result is `base * quantity / reference_quantity`, unrounded.
pub fn scale(profile: &NutritionalProfile, quantity: f64) -> NutritionResult<Nutrition> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(NutritionError::InvalidQuantity(quantity));
    }
    // Profiles built through the constructor can't hit this, but fields are public.
    if !profile.reference_quantity.is_finite() || profile.reference_quantity <= 0.0 {
        return Err(NutritionError::InvalidReferenceQuantity(profile.reference_quantity));
    }

    if quantity == profile.reference_quantity {
        return Ok(profile.base);
    }

    let scaled = profile.base.scale(quantity / profile.reference_quantity);
    // A tiny reference with a huge quantity can overflow to inf, and 0 * inf is NaN
    if let Some((field, value)) = scaled.fields().into_iter().find(|(_, v)| !v.is_finite()) {
        return Err(NutritionError::ScaledValueOutOfRange { field, value, quantity });
    }

    Ok(scaled)
}

/// Scale raw per-100 g values
pub fn scale_per_100g(per_100g: Nutrition, quantity: f64) -> NutritionResult<Nutrition> {
    let profile = NutritionalProfile::per_100g(per_100g)?;
    scale(&profile, quantity)
}

/// Round to one decimal place for display
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to the nearest multiple of ten
pub fn round_to_ten(value: f64) -> f64 {
    (value / 10.0).round() * 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileBasis;

    fn chicken() -> NutritionalProfile {
        NutritionalProfile::per_100g(Nutrition::new(165.0, 31.0, 3.6, 0.0)).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scale_is_proportional() {
        let profile = chicken();
        for quantity in [1.0, 37.5, 150.0, 1000.0] {
            let scaled = scale(&profile, quantity).unwrap();
            assert!(close(scaled.calories, 165.0 * quantity / 100.0));
            assert!(close(scaled.protein, 31.0 * quantity / 100.0));
            assert!(close(scaled.fat, 3.6 * quantity / 100.0));
            assert!(close(scaled.carbohydrates, 0.0));
        }
    }

    #[test]
    fn test_scale_zero_quantity() {
        assert_eq!(scale(&chicken(), 0.0).unwrap(), Nutrition::zero());
    }

    #[test]
    fn test_scale_identity_at_reference() {
        let profile = chicken();
        assert_eq!(scale(&profile, 100.0).unwrap(), profile.base);

        let custom = NutritionalProfile::new(
            ProfileBasis::Recipe,
            Nutrition::new(90.0, 2.5, 1.0, 17.3),
            250.0,
        )
        .unwrap();
        assert_eq!(scale(&custom, 250.0).unwrap(), custom.base);
    }

    #[test]
    fn test_scale_custom_reference() {
        let profile = NutritionalProfile::new(
            ProfileBasis::Product,
            Nutrition::new(200.0, 10.0, 8.0, 20.0),
            50.0,
        )
        .unwrap();
        let scaled = scale(&profile, 125.0).unwrap();
        assert!(close(scaled.calories, 500.0));
        assert!(close(scaled.protein, 25.0));
    }

    #[test]
    fn test_scale_rejects_bad_quantity() {
        assert_eq!(
            scale(&chicken(), -5.0).unwrap_err(),
            NutritionError::InvalidQuantity(-5.0)
        );
        assert!(scale(&chicken(), f64::INFINITY).is_err());
    }

    #[test]
    fn test_scale_rejects_tampered_reference() {
        let mut profile = chicken();
        profile.reference_quantity = 0.0;
        assert_eq!(
            scale(&profile, 50.0).unwrap_err(),
            NutritionError::InvalidReferenceQuantity(0.0)
        );
    }

    #[test]
    fn test_scale_rejects_overflowing_result() {
        let profile = NutritionalProfile::new(
            ProfileBasis::Product,
            Nutrition::new(165.0, 31.0, 3.6, 0.0),
            1e-300,
        )
        .unwrap();
        let err = scale(&profile, 1e300).unwrap_err();
        assert!(matches!(
            err,
            NutritionError::ScaledValueOutOfRange { field: "calories", quantity, .. } if quantity == 1e300
        ));
    }

    #[test]
    fn test_scale_per_100g() {
        let scaled = scale_per_100g(Nutrition::new(52.0, 0.3, 0.2, 14.0), 180.0).unwrap();
        assert!(close(scaled.calories, 93.6));
        assert!(close(round_one_decimal(scaled.carbohydrates), 25.2));
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_one_decimal(12.345), 12.3);
        assert_eq!(round_one_decimal(0.0), 0.0);
        assert_eq!(round_to_ten(594.0), 590.0);
        assert_eq!(round_to_ten(596.0), 600.0);
        assert_eq!(round_to_ten(605.0), 610.0);
    }
}
