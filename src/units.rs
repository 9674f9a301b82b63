//! Display-unit conversion for report formatters.
//!
//! Stored statistics are always metric. These helpers only convert a value
//! at the moment it is formatted.

use serde::{Deserialize, Serialize};

pub const METERS_TO_FEET: f64 = 3.28084;
pub const SQ_METERS_TO_SQ_FEET: f64 = 10.7639;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn length(self, meters: f64) -> f64 {
        match self {
            UnitSystem::Metric => meters,
            UnitSystem::Imperial => meters * METERS_TO_FEET,
        }
    }

    pub fn area(self, square_meters: f64) -> f64 {
        match self {
            UnitSystem::Metric => square_meters,
            UnitSystem::Imperial => square_meters * SQ_METERS_TO_SQ_FEET,
        }
    }

    /// Converts a P21 intensity (m/m² → ft/ft²).
    pub fn intensity(self, per_meter: f64) -> f64 {
        match self {
            UnitSystem::Metric => per_meter,
            UnitSystem::Imperial => per_meter * METERS_TO_FEET / SQ_METERS_TO_SQ_FEET,
        }
    }

    /// Converts a linear frequency (1/m → 1/ft).
    pub fn frequency(self, per_meter: f64) -> f64 {
        match self {
            UnitSystem::Metric => per_meter,
            UnitSystem::Imperial => per_meter / METERS_TO_FEET,
        }
    }

    pub fn length_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "ft",
        }
    }

    pub fn area_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m²",
            UnitSystem::Imperial => "ft²",
        }
    }

    pub fn intensity_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/m²",
            UnitSystem::Imperial => "ft/ft²",
        }
    }
}
