//! Cooling-coefficient combination
//!
//! The combined coefficient `k` is a product of independent per-category
//! multipliers. Enum-keyed factors live on their enums
//! ([`crate::core_types::subject`], [`crate::core_types::scene`]); the
//! factors that are functions of a scalar measurement live here. Every
//! multiplier that enters the product is also recorded in a
//! [`CoefficientBreakdown`] so a report layer can show the factor table
//! without re-deriving constants.

use crate::core_types::units::{Kilograms, KilometersPerHour, Percent};
use crate::estimator::EstimationInput;
use serde::{Deserialize, Serialize};

/// Below this mass the body cools noticeably faster than average
const LOW_MASS_THRESHOLD_KG: f64 = 50.0;

/// Above this mass the body cools noticeably slower than average
const HIGH_MASS_THRESHOLD_KG: f64 = 90.0;

/// Children cool faster: higher surface-area-to-volume ratio
const CHILD_AGE_THRESHOLD_YEARS: u32 = 10;

/// The elderly cool slightly faster: less insulating tissue
const ELDERLY_AGE_THRESHOLD_YEARS: u32 = 70;

/// Humidity correction is linear around this midpoint
const HUMIDITY_MIDPOINT_PCT: f64 = 50.0;

/// Cooling-rate multiplier for body mass.
///
/// Banded rather than continuous: light bodies (< 50 kg) cool 10% faster,
/// heavy bodies (> 90 kg) 10% slower, the middle band is the baseline.
pub(crate) fn mass_multiplier(mass: Kilograms) -> f64 {
    if *mass < LOW_MASS_THRESHOLD_KG {
        1.10
    } else if *mass > HIGH_MASS_THRESHOLD_KG {
        0.90
    } else {
        1.00
    }
}

/// Cooling-rate multiplier for subject age.
///
/// Higher at both extremes of age; the effect is stronger for children
/// than for the elderly.
pub(crate) fn age_multiplier(age_years: u32) -> f64 {
    if age_years < CHILD_AGE_THRESHOLD_YEARS {
        1.15
    } else if age_years > ELDERLY_AGE_THRESHOLD_YEARS {
        1.05
    } else {
        1.00
    }
}

/// Cooling-rate multiplier for relative humidity.
///
/// Linear around the 50% midpoint: `1 + (humidity - 50) / 200`, so the
/// full 0-100% range maps to 0.75-1.25.
pub(crate) fn humidity_multiplier(humidity: Percent) -> f64 {
    1.0 + (*humidity - HUMIDITY_MIDPOINT_PCT) / 200.0
}

/// Cooling-rate multiplier for wind speed.
///
/// Linear in the measured speed: `1 + speed / 50`, still air is neutral.
pub(crate) fn wind_multiplier(wind_speed: KilometersPerHour) -> f64 {
    1.0 + *wind_speed / 50.0
}

/// Per-factor audit record of a combined cooling coefficient
///
/// The scene factors hold 1.0 when the input carried no
/// [`crate::core_types::scene::SceneConditions`], so the product of the
/// fields always equals the coefficient the model applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientBreakdown {
    /// Insulation factor from clothing level
    pub clothing: f64,
    /// Subject sex factor
    pub sex: f64,
    /// Body mass band factor
    pub mass: f64,
    /// Age band factor
    pub age: f64,
    /// Body build factor (1.0 without scene conditions)
    pub body_build: f64,
    /// Recovery medium factor (1.0 without scene conditions)
    pub environment: f64,
    /// Relative humidity factor (1.0 without scene conditions)
    pub humidity: f64,
    /// Wind speed factor (1.0 without scene conditions)
    pub wind: f64,
    /// Exposure factor (1.0 without scene conditions)
    pub recovery_position: f64,
}

impl CoefficientBreakdown {
    /// Evaluate every per-category multiplier for `input`.
    pub(crate) fn for_input(input: &EstimationInput) -> Self {
        let mut breakdown = CoefficientBreakdown {
            clothing: input.clothing.cooling_multiplier(),
            sex: input.sex.cooling_multiplier(),
            mass: mass_multiplier(Kilograms::new(input.mass_kg)),
            age: age_multiplier(input.age_years),
            body_build: 1.0,
            environment: 1.0,
            humidity: 1.0,
            wind: 1.0,
            recovery_position: 1.0,
        };

        if let Some(scene) = &input.scene {
            breakdown.body_build = scene.body_build.cooling_multiplier();
            breakdown.environment = scene.environment.cooling_multiplier();
            breakdown.humidity = humidity_multiplier(scene.relative_humidity);
            breakdown.wind = wind_multiplier(scene.wind_speed);
            breakdown.recovery_position = scene.recovery_position.cooling_multiplier();
        }

        breakdown
    }

    /// Product of all per-category multipliers: the effective coefficient `k`.
    #[must_use]
    pub fn combined(&self) -> f64 {
        self.clothing
            * self.sex
            * self.mass
            * self.age
            * self.body_build
            * self.environment
            * self.humidity
            * self.wind
            * self.recovery_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::scene::SceneConditions;
    use crate::core_types::subject::{ClothingLevel, Sex};
    use approx::assert_relative_eq;

    fn basic_input() -> EstimationInput {
        EstimationInput {
            body_temperature_c: 30.0,
            ambient_temperature_c: 20.0,
            clothing: ClothingLevel::Medium,
            sex: Sex::Male,
            mass_kg: 70.0,
            age_years: 35,
            scene: None,
        }
    }

    #[test]
    fn test_mass_bands() {
        assert_relative_eq!(mass_multiplier(Kilograms::new(45.0)), 1.10);
        assert_relative_eq!(mass_multiplier(Kilograms::new(50.0)), 1.00);
        assert_relative_eq!(mass_multiplier(Kilograms::new(90.0)), 1.00);
        assert_relative_eq!(mass_multiplier(Kilograms::new(95.0)), 0.90);
    }

    #[test]
    fn test_age_bands() {
        assert_relative_eq!(age_multiplier(3), 1.15);
        assert_relative_eq!(age_multiplier(10), 1.00);
        assert_relative_eq!(age_multiplier(70), 1.00);
        assert_relative_eq!(age_multiplier(85), 1.05);
    }

    #[test]
    fn test_humidity_is_linear_around_midpoint() {
        assert_relative_eq!(humidity_multiplier(Percent::new(50.0)), 1.00);
        assert_relative_eq!(humidity_multiplier(Percent::new(100.0)), 1.25);
        assert_relative_eq!(humidity_multiplier(Percent::new(0.0)), 0.75);
    }

    #[test]
    fn test_still_air_is_neutral() {
        assert_relative_eq!(wind_multiplier(KilometersPerHour::new(0.0)), 1.00);
        assert_relative_eq!(wind_multiplier(KilometersPerHour::new(25.0)), 1.50);
    }

    #[test]
    fn test_basic_breakdown_leaves_scene_factors_neutral() {
        let breakdown = CoefficientBreakdown::for_input(&basic_input());
        assert_relative_eq!(breakdown.body_build, 1.0);
        assert_relative_eq!(breakdown.environment, 1.0);
        assert_relative_eq!(breakdown.humidity, 1.0);
        assert_relative_eq!(breakdown.wind, 1.0);
        assert_relative_eq!(breakdown.recovery_position, 1.0);
        // medium clothing x male
        assert_relative_eq!(breakdown.combined(), 0.7 * 1.05);
    }

    #[test]
    fn test_combined_is_product_of_fields() {
        let mut input = basic_input();
        input.scene = Some(SceneConditions {
            environment: crate::core_types::scene::Environment::Water,
            ..SceneConditions::default()
        });
        let breakdown = CoefficientBreakdown::for_input(&input);
        let expected = breakdown.clothing
            * breakdown.sex
            * breakdown.mass
            * breakdown.age
            * breakdown.body_build
            * breakdown.environment
            * breakdown.humidity
            * breakdown.wind
            * breakdown.recovery_position;
        assert_relative_eq!(breakdown.combined(), expected);
    }
}
