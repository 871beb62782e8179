//! Canonical linear cooling model
//!
//! The estimate assumes the body loses heat at a constant fraction of the
//! body-ambient differential:
//!
//! `hours = (T_normal - T_body) / (k x base_rate x (T_normal - T_ambient))`
//!
//! where `k` is the combined correction coefficient and `base_rate` is the
//! loss per hour, per °C of differential, for an unclothed average body in
//! still air. With the canonical constants an unclothed body at a 17 °C
//! differential cools ~0.85 °C per hour.
//!
//! The divergent historical variants of this calculation (a flat rate that
//! ignored ambient temperature entirely, and one that applied the ambient
//! correction twice) are deliberately not ported; this module is the one
//! reconciled model, and its constants are illustrative defaults rather
//! than validated forensic values.

use crate::core_types::units::{Celsius, Hours};
use crate::estimator::coefficient::CoefficientBreakdown;
use crate::estimator::duration::format_duration;
use crate::estimator::validation::{validate, FieldError};
use crate::estimator::{EstimationInput, EstimationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Tunable constants of the cooling model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Core temperature assumed at the moment of death
    pub normal_body_temperature: Celsius,
    /// °C lost per hour, per °C of body-ambient differential, for an
    /// unclothed average body in still air
    pub base_rate_per_degree_hour: f64,
}

impl ModelParameters {
    /// The canonical constant set: 37.0 °C normal body temperature and a
    /// base rate of 0.05 °C/h per °C of differential.
    pub const CANONICAL: ModelParameters = ModelParameters {
        normal_body_temperature: Celsius::NORMAL_BODY,
        base_rate_per_degree_hour: 0.05,
    };
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Why an estimate could not be produced
///
/// The two kinds are deliberately distinct: validation failures point at
/// specific fields a user can correct, while a domain failure means the
/// fields are individually fine but jointly outside what the cooling model
/// can describe.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimationError {
    /// One or more input fields failed validation
    Validation(Vec<FieldError>),
    /// The model denominator was zero or negative - typically an ambient
    /// temperature at or above the normal body temperature
    InvalidModelDomain {
        /// The offending denominator value
        denominator: f64,
    },
}

impl fmt::Display for EstimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimationError::Validation(errors) => {
                write!(f, "invalid input: ")?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
            EstimationError::InvalidModelDomain { denominator } => write!(
                f,
                "cooling model does not apply (denominator {denominator:.4}): \
                 ambient temperature must stay below the normal body temperature"
            ),
        }
    }
}

impl std::error::Error for EstimationError {}

/// Estimate elapsed time since death with the canonical model constants.
///
/// # Errors
/// [`EstimationError::Validation`] when any input field is invalid;
/// [`EstimationError::InvalidModelDomain`] when the inputs drive the model
/// denominator to zero or below.
pub fn estimate(input: &EstimationInput) -> Result<EstimationResult, EstimationError> {
    estimate_with(ModelParameters::default(), input)
}

/// Estimate elapsed time since death with explicit model constants.
///
/// # Errors
/// [`EstimationError::Validation`] when any input field is invalid;
/// [`EstimationError::InvalidModelDomain`] when the inputs drive the model
/// denominator to zero or below.
pub fn estimate_with(
    params: ModelParameters,
    input: &EstimationInput,
) -> Result<EstimationResult, EstimationError> {
    validate(input).map_err(EstimationError::Validation)?;

    let coefficients = CoefficientBreakdown::for_input(input);
    let k = coefficients.combined();

    // Validation bounds both temperatures, so the unit constructors cannot trip.
    let body = Celsius::new(input.body_temperature_c);
    let ambient = Celsius::new(input.ambient_temperature_c);

    let differential = params.normal_body_temperature - ambient;
    let denominator = k * params.base_rate_per_degree_hour * differential.value();
    if denominator <= 0.0 {
        warn!(
            "cooling model rejected: denominator {denominator:.4} \
             (ambient {ambient}, coefficient {k:.3})"
        );
        return Err(EstimationError::InvalidModelDomain { denominator });
    }

    // A measured temperature above the normal body constant reads as "no
    // measurable cooling yet"; the estimate floors at zero.
    let cooled = params.normal_body_temperature - body;
    let hours_since_death = Hours::new((cooled.value() / denominator).max(0.0));
    debug!("estimated {hours_since_death} since death (coefficient {k:.3}, denominator {denominator:.4})");

    Ok(EstimationResult {
        formatted_duration: format_duration(hours_since_death),
        hours_since_death,
        effective_coefficient: k,
        coefficients,
    })
}
