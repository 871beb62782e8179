//! Cooling-model estimation of the postmortem interval
//!
//! The estimator is a pure calculation: a structured input record goes in,
//! an elapsed-time estimate and its audit trail come out. There is no state
//! to hold between calls, so it is safe to call from any number of
//! concurrent callers without coordination.
//!
//! Call [`validate`] to pre-check a record for field-level problems (all
//! problems are reported at once, not just the first), then [`estimate`]
//! to run the model. `estimate` re-runs validation itself, so a caller that
//! does not need per-field feedback can skip the separate call.

pub mod coefficient;
pub mod cooling;
pub mod duration;
pub mod validation;

pub use coefficient::CoefficientBreakdown;
pub use cooling::{estimate, estimate_with, EstimationError, ModelParameters};
pub use duration::format_duration;
pub use validation::{validate, FieldError};

use crate::core_types::scene::SceneConditions;
use crate::core_types::subject::{ClothingLevel, Sex};
use crate::core_types::units::Hours;
use serde::{Deserialize, Serialize};

/// One complete set of measurements and categories for an estimate
///
/// Temperatures and mass are raw measurements; [`validate`] range-checks
/// them before the model wraps them in their unit types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    /// Measured core temperature of the subject (°C)
    pub body_temperature_c: f64,
    /// Ambient temperature around the recovery site (°C)
    pub ambient_temperature_c: f64,
    /// Insulation category of what the subject was wearing
    pub clothing: ClothingLevel,
    /// Subject sex
    pub sex: Sex,
    /// Subject body mass (kg), must be positive
    pub mass_kg: f64,
    /// Subject age in whole years
    pub age_years: u32,
    /// Extended scene conditions; `None` selects the basic factor set
    pub scene: Option<SceneConditions>,
}

/// Outcome of a successful estimate
///
/// Carries everything an embedding layer needs to render or export the
/// calculation: the estimate itself, the combined coefficient that was
/// applied, the per-factor audit breakdown, and a human-readable duration.
/// Nothing is retained inside the library; callers thread this value into
/// whatever export step they choose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Estimated elapsed time since death, clamped to be non-negative
    pub hours_since_death: Hours,
    /// Combined correction coefficient `k` actually applied
    pub effective_coefficient: f64,
    /// Per-factor multipliers that entered `effective_coefficient`
    pub coefficients: CoefficientBreakdown,
    /// Days/hours/minutes rendering of `hours_since_death`
    pub formatted_duration: String,
}
