use serde::{Deserialize, Serialize};

use super::Room;
use crate::math::Point2;

/// Converts a centimeter value into world units (meters).
///
/// Callers normalize each raw value exactly once.
#[must_use]
pub fn to_world_units(value: f64) -> f64 {
    value / 100.0
}

/// Linear unit that floor-plan coordinates are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm", alias = "millimeters")]
    Millimeters,
    #[default]
    #[serde(rename = "cm", alias = "centimeters")]
    Centimeters,
    #[serde(rename = "m", alias = "meters")]
    Meters,
}

impl LengthUnit {
    /// Number of stored units per world unit (meter).
    #[must_use]
    pub fn per_meter(self) -> f64 {
        match self {
            Self::Millimeters => 1000.0,
            Self::Centimeters => 100.0,
            Self::Meters => 1.0,
        }
    }
}

/// A room's outline and height expressed in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRoom {
    pub polygon: Vec<Point2>,
    pub height: f64,
}

/// Converts stored coordinates into world units.
#[derive(Debug, Clone, Copy)]
pub struct UnitNormalizer {
    unit: LengthUnit,
}

impl UnitNormalizer {
    /// Creates a normalizer for values stored in `unit`.
    #[must_use]
    pub fn new(unit: LengthUnit) -> Self {
        Self { unit }
    }

    /// Converts a single linear value.
    #[must_use]
    pub fn to_world(&self, value: f64) -> f64 {
        value / self.unit.per_meter()
    }

    /// Converts a stored `[x, y]` pair into a floor-plane point.
    #[must_use]
    pub fn point(&self, raw: [f64; 2]) -> Point2 {
        Point2::new(self.to_world(raw[0]), self.to_world(raw[1]))
    }

    /// Converts every point of a stored polygon.
    #[must_use]
    pub fn polygon(&self, raw: &[[f64; 2]]) -> Vec<Point2> {
        raw.iter().map(|&p| self.point(p)).collect()
    }

    /// Converts a room's polygon and height.
    #[must_use]
    pub fn room(&self, room: &Room) -> NormalizedRoom {
        NormalizedRoom {
            polygon: self.polygon(&room.polygon),
            height: self.to_world(room.height),
        }
    }
}
