//! Postmortem Interval Estimation Core Library
//!
//! A typed calculation core that estimates elapsed time since death from a
//! measured body temperature, the ambient temperature, and a set of
//! categorical correction factors (clothing, sex, mass, age, and optional
//! recovery-scene conditions).
//!
//! The library is the calculation only: no UI, no report generation, no
//! stored history. An embedding presentation layer collects raw input,
//! calls [`validate`] and [`estimate`], and renders the returned
//! [`EstimationResult`] however it chooses.
//!
//! ```
//! use pmi_core::{estimate, ClothingLevel, EstimationInput, Sex};
//!
//! let input = EstimationInput {
//!     body_temperature_c: 30.0,
//!     ambient_temperature_c: 20.0,
//!     clothing: ClothingLevel::Medium,
//!     sex: Sex::Male,
//!     mass_kg: 70.0,
//!     age_years: 35,
//!     scene: None,
//! };
//!
//! let result = estimate(&input).expect("input is valid");
//! assert!(result.hours_since_death > 11.0 && result.hours_since_death < 11.5);
//! assert_eq!(result.formatted_duration, "11 hours, 12 minutes");
//! ```

// Core types and utilities
pub mod core_types;

// The cooling-model estimator
pub mod estimator;

// Re-export core types
pub use core_types::{
    BodyBuild, ClothingLevel, Environment, RecoveryPosition, SceneConditions, Sex,
};
pub use core_types::{Celsius, CelsiusDelta, Hours, Kilograms, KilometersPerHour, Percent};

// Re-export the estimator surface
pub use estimator::{
    estimate, estimate_with, format_duration, validate, CoefficientBreakdown, EstimationError,
    EstimationInput, EstimationResult, FieldError, ModelParameters,
};
