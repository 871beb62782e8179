//! Recovery-scene conditions used by the extended model variant
//!
//! The basic input set (temperatures, clothing, sex, mass, age) is enough
//! for an estimate; scenes with strong environmental effects — submersion,
//! wind exposure, burial — carry an optional `SceneConditions` record that
//! layers additional corrections onto the cooling coefficient.

use crate::core_types::subject::BodyBuild;
use crate::core_types::units::{KilometersPerHour, Percent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Medium the body was recovered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Land,
    /// Fully submerged. Water conducts heat far better than air.
    Water,
}

impl Environment {
    /// Cooling-rate multiplier for the recovery medium.
    ///
    /// Submerged bodies cool roughly twice as fast as bodies in still air.
    #[must_use]
    pub fn cooling_multiplier(&self) -> f64 {
        match self {
            Environment::Land => 1.0,
            Environment::Water => 2.0,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Environment::Land => "on land",
            Environment::Water => "in water",
        };
        write!(f, "{label}")
    }
}

/// Position/exposure of the body where it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryPosition {
    /// Exposed to open air
    #[default]
    Open,
    /// Sheltered from direct exposure
    Shaded,
    /// Buried, insulated by surrounding material
    Buried,
}

impl RecoveryPosition {
    /// Cooling-rate multiplier for exposure.
    ///
    /// Strictly decreasing from `Open` to `Buried`: less exposure always
    /// means slower cooling.
    #[must_use]
    pub fn cooling_multiplier(&self) -> f64 {
        match self {
            RecoveryPosition::Open => 1.1,
            RecoveryPosition::Shaded => 0.9,
            RecoveryPosition::Buried => 0.7,
        }
    }
}

impl fmt::Display for RecoveryPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecoveryPosition::Open => "open air",
            RecoveryPosition::Shaded => "shaded",
            RecoveryPosition::Buried => "buried",
        };
        write!(f, "{label}")
    }
}

/// Extended scene conditions for the full correction set
///
/// All fields are required once the record is present; an estimate either
/// uses the basic factor set or the full one, never a partial mix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneConditions {
    /// Subject body build
    pub body_build: BodyBuild,
    /// Recovery medium (land or water)
    pub environment: Environment,
    /// Relative humidity at the scene (0-100)
    pub relative_humidity: Percent,
    /// Wind speed at the scene
    pub wind_speed: KilometersPerHour,
    /// Exposure of the body where it was found
    pub recovery_position: RecoveryPosition,
}

impl Default for SceneConditions {
    /// Neutral scene: normal build, on land, 50% humidity, still air, open.
    ///
    /// With the default scene every scene correction is 1.0 except the
    /// open-air exposure factor, matching the source tables.
    fn default() -> Self {
        SceneConditions {
            body_build: BodyBuild::Normal,
            environment: Environment::Land,
            relative_humidity: Percent::new(50.0),
            wind_speed: KilometersPerHour::new(0.0),
            recovery_position: RecoveryPosition::Open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_doubles_cooling() {
        assert_eq!(Environment::Water.cooling_multiplier(), 2.0);
        assert_eq!(Environment::Land.cooling_multiplier(), 1.0);
    }

    #[test]
    fn test_position_multipliers_strictly_decrease_with_shelter() {
        let open = RecoveryPosition::Open.cooling_multiplier();
        let shaded = RecoveryPosition::Shaded.cooling_multiplier();
        let buried = RecoveryPosition::Buried.cooling_multiplier();
        assert!(open > shaded && shaded > buried);
    }

    #[test]
    fn test_default_scene_is_neutral_except_exposure() {
        let scene = SceneConditions::default();
        assert_eq!(scene.body_build.cooling_multiplier(), 1.0);
        assert_eq!(scene.environment.cooling_multiplier(), 1.0);
        assert_eq!(*scene.relative_humidity, 50.0);
        assert_eq!(*scene.wind_speed, 0.0);
        assert_eq!(scene.recovery_position, RecoveryPosition::Open);
    }
}
