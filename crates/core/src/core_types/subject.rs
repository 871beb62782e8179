//! Categorical descriptions of the subject used as cooling corrections
//!
//! The source data for these categories is a set of closed correction
//! tables: each category scales the base cooling rate by a fixed
//! multiplier. Multipliers > 1 mean the body sheds heat faster than the
//! unclothed average; < 1 means slower. Keeping the categories as enums
//! makes adding one a compile-time-checked change — every `match` below
//! must be extended, there is no fallthrough default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Insulation category for what the subject was wearing when found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingLevel {
    /// Unclothed - the baseline the base cooling rate is calibrated to
    #[default]
    None,
    /// Light clothing (t-shirt, thin shirt)
    Light,
    /// Medium clothing (dress shirt, thin jacket)
    Medium,
    /// Heavy clothing (thick jacket, coat)
    Heavy,
}

impl ClothingLevel {
    /// Cooling-rate multiplier for this insulation level.
    ///
    /// Strictly decreasing from `None` to `Heavy`: more insulation always
    /// means slower cooling.
    #[must_use]
    pub fn cooling_multiplier(&self) -> f64 {
        match self {
            ClothingLevel::None => 1.00,
            ClothingLevel::Light => 0.90,
            ClothingLevel::Medium => 0.70,
            ClothingLevel::Heavy => 0.50,
        }
    }
}

impl fmt::Display for ClothingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClothingLevel::None => "unclothed",
            ClothingLevel::Light => "light clothing",
            ClothingLevel::Medium => "medium clothing",
            ClothingLevel::Heavy => "heavy clothing",
        };
        write!(f, "{label}")
    }
}

/// Subject sex, a small correction on the cooling rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Cooling-rate multiplier for subject sex (±5% around the baseline).
    #[must_use]
    pub fn cooling_multiplier(&self) -> f64 {
        match self {
            Sex::Male => 1.05,
            Sex::Female => 0.95,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sex::Male => "male",
            Sex::Female => "female",
        };
        write!(f, "{label}")
    }
}

/// Body build category, used by the extended scene variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyBuild {
    /// Low body fat, high surface-area-to-volume ratio
    Thin,
    #[default]
    Normal,
    Overweight,
    /// Heavy subcutaneous insulation
    Obese,
}

impl BodyBuild {
    /// Cooling-rate multiplier for body build.
    ///
    /// More body fat insulates; thin subjects lose heat faster.
    #[must_use]
    pub fn cooling_multiplier(&self) -> f64 {
        match self {
            BodyBuild::Thin => 1.10,
            BodyBuild::Normal => 1.00,
            BodyBuild::Overweight => 0.90,
            BodyBuild::Obese => 0.80,
        }
    }
}

impl fmt::Display for BodyBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BodyBuild::Thin => "thin",
            BodyBuild::Normal => "normal build",
            BodyBuild::Overweight => "overweight",
            BodyBuild::Obese => "obese",
        };
        write!(f, "{label}")
    }
}
