//! Field-level input validation
//!
//! Validation is the recoverable, user-correctable error path: every
//! problem found is reported, one entry per violated field, so an embedding
//! form can highlight all of them at once. Categorical fields need no
//! runtime membership check - the closed enums make an out-of-set value
//! unrepresentable.

use crate::estimator::EstimationInput;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Plausible measured core temperature for a recovered body (°C)
const BODY_TEMPERATURE_RANGE_C: RangeInclusive<f64> = 0.0..=42.0;

/// Plausible ambient temperature at a recovery site (°C)
const AMBIENT_TEMPERATURE_RANGE_C: RangeInclusive<f64> = -20.0..=50.0;

/// Relative humidity is a percentage
const HUMIDITY_RANGE_PCT: RangeInclusive<f64> = 0.0..=100.0;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending input field
    pub field: &'static str,
    /// Human-readable description of the problem
    pub reason: String,
}

impl FieldError {
    /// Failure for a value that is NaN or infinite.
    #[must_use]
    pub fn not_finite(field: &'static str) -> Self {
        FieldError {
            field,
            reason: "is not a finite number".to_string(),
        }
    }

    /// Failure for a finite value outside its plausible range.
    #[must_use]
    pub fn out_of_range(field: &'static str, range: &RangeInclusive<f64>, unit: &str) -> Self {
        FieldError {
            field,
            reason: format!(
                "is outside the plausible range {} to {} {unit}",
                range.start(),
                range.end()
            ),
        }
    }

    /// Failure for a value that must be strictly positive.
    #[must_use]
    pub fn not_positive(field: &'static str) -> Self {
        FieldError {
            field,
            reason: "must be positive".to_string(),
        }
    }

    /// Failure for a value that must not be negative.
    #[must_use]
    pub fn negative(field: &'static str) -> Self {
        FieldError {
            field,
            reason: "must not be negative".to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Check every field of `input` and report all problems at once.
///
/// Runs before the cooling model; [`crate::estimator::estimate`] calls it
/// itself, so a separate call is only needed when the caller wants the
/// per-field error list without running the model.
///
/// # Errors
/// Returns the full list of field-level failures - never just the first.
pub fn validate(input: &EstimationInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    check_in_range(
        &mut errors,
        "body_temperature_c",
        input.body_temperature_c,
        &BODY_TEMPERATURE_RANGE_C,
        "°C",
    );
    check_in_range(
        &mut errors,
        "ambient_temperature_c",
        input.ambient_temperature_c,
        &AMBIENT_TEMPERATURE_RANGE_C,
        "°C",
    );

    if input.mass_kg.is_finite() {
        if input.mass_kg <= 0.0 {
            errors.push(FieldError::not_positive("mass_kg"));
        }
    } else {
        errors.push(FieldError::not_finite("mass_kg"));
    }

    if let Some(scene) = &input.scene {
        check_in_range(
            &mut errors,
            "relative_humidity",
            scene.relative_humidity.value(),
            &HUMIDITY_RANGE_PCT,
            "%",
        );
        let wind = scene.wind_speed.value();
        if wind.is_finite() {
            if wind < 0.0 {
                errors.push(FieldError::negative("wind_speed"));
            }
        } else {
            errors.push(FieldError::not_finite("wind_speed"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_in_range(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
    unit: &str,
) {
    if value.is_finite() {
        if !range.contains(&value) {
            errors.push(FieldError::out_of_range(field, range, unit));
        }
    } else {
        errors.push(FieldError::not_finite(field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::scene::SceneConditions;
    use crate::core_types::subject::{ClothingLevel, Sex};
    use crate::core_types::units::{KilometersPerHour, Percent};

    fn valid_input() -> EstimationInput {
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
    fn test_valid_input_passes() {
        assert!(validate(&valid_input()).is_ok());
    }

    #[test]
    fn test_non_finite_temperature_rejected() {
        let mut input = valid_input();
        input.body_temperature_c = f64::NAN;
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "body_temperature_c");
    }

    #[test]
    fn test_zero_mass_rejected() {
        let mut input = valid_input();
        input.mass_kg = 0.0;
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors, vec![FieldError::not_positive("mass_kg")]);
    }

    #[test]
    fn test_all_problems_reported_at_once() {
        let mut input = valid_input();
        input.body_temperature_c = 60.0;
        input.ambient_temperature_c = f64::INFINITY;
        input.mass_kg = -5.0;
        let errors = validate(&input).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["body_temperature_c", "ambient_temperature_c", "mass_kg"]
        );
    }

    #[test]
    fn test_scene_fields_checked_when_present() {
        let mut input = valid_input();
        input.scene = Some(SceneConditions {
            relative_humidity: Percent::new(130.0),
            wind_speed: KilometersPerHour::new(-3.0),
            ..SceneConditions::default()
        });
        let errors = validate(&input).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["relative_humidity", "wind_speed"]);
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        let mut input = valid_input();
        input.body_temperature_c = 0.0;
        input.ambient_temperature_c = 50.0;
        assert!(validate(&input).is_ok());

        input.ambient_temperature_c = 50.1;
        assert!(validate(&input).is_err());
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::out_of_range("body_temperature_c", &(0.0..=42.0), "°C");
        assert_eq!(
            error.to_string(),
            "body_temperature_c is outside the plausible range 0 to 42 °C"
        );
    }
}
