//! Floor-plan input data: rooms, openings, furniture and the unit they are measured in.

mod units;

pub use units::{to_world_units, LengthUnit, NormalizedRoom, UnitNormalizer};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Top-level description of one or more rooms.
///
/// Every coordinate and height in the plan is expressed in [`FloorPlan::units`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Linear unit of all coordinates.
    pub units: LengthUnit,
    /// Rooms in plan order.
    pub rooms: Vec<Room>,
    /// Door and window footprints.
    #[serde(default)]
    pub openings: Vec<Opening>,
    /// Placed furniture.
    #[serde(default)]
    pub furniture: Vec<FurnitureItem>,
}

impl FloorPlan {
    /// Creates a plan with the given rooms and no openings or furniture.
    #[must_use]
    pub fn new(units: LengthUnit, rooms: Vec<Room>) -> Self {
        Self {
            units,
            rooms,
            openings: Vec::new(),
            furniture: Vec::new(),
        }
    }

    /// Parses a plan from its JSON shape and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Parse`] for malformed JSON and
    /// [`PlanError::DuplicateRoomId`] if two rooms share an id.
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: Self = serde_json::from_str(json).map_err(PlanError::from)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Checks plan-level invariants. Room geometry is validated on derivation.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::DuplicateRoomId`] if two rooms share an id.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.rooms.len());
        for room in &self.rooms {
            if !seen.insert(room.id.as_str()) {
                return Err(PlanError::DuplicateRoomId(room.id.clone()).into());
            }
        }
        Ok(())
    }

    /// Looks up a room by id.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

/// A single room footprint extruded to a height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Identifier, unique within a plan.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Outline points `[x, y]`, implicitly closed. `y` maps to world Z.
    pub polygon: Vec<[f64; 2]>,
    /// Wall height.
    pub height: f64,
}

impl Room {
    /// Creates a new room.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        polygon: Vec<[f64; 2]>,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            polygon,
            height,
        }
    }
}

/// Kind of wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

/// A door or window anchored to a room edge. Not consumed by geometry derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: String,
    pub room_id: String,
    pub kind: OpeningKind,
    /// Index of the polygon edge the opening sits on.
    pub edge: usize,
    /// Distance from the edge's start point.
    #[serde(default)]
    pub offset: f64,
    pub width: f64,
    pub height: f64,
}

/// A placed piece of furniture. Not consumed by geometry derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: String,
    pub kind: String,
    pub position: [f64; 2],
    /// Footprint `[width, depth]`.
    pub footprint: [f64; 2],
    /// Rotation around the vertical axis, in radians.
    #[serde(default)]
    pub rotation: f64,
}
