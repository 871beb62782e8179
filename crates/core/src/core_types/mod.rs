//! Core types and utilities

pub mod scene;
pub mod subject;
pub mod units;

pub use scene::{Environment, RecoveryPosition, SceneConditions};
pub use subject::{BodyBuild, ClothingLevel, Sex};
pub use units::*;
