//! Assembly of derived floor, wall and furniture descriptors into per-room groups.

mod furniture;
mod store;

pub use furniture::{FurnitureBox, FurniturePlacer, NoFurniture, PlaceholderFurniture};
pub use store::{GroupId, LoadReport, SceneStore};

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, warn};

use crate::error::Result;
use crate::math::Point3;
use crate::operations::{ComputeFloorExtent, DeriveWalls, WallParams, WallSegment};
use crate::plan::{FloorPlan, LengthUnit, Room, UnitNormalizer};

/// Parameters controlling scene composition.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneParams {
    /// Wall derivation parameters.
    pub walls: WallParams,
}

/// Horizontal floor plane of a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorPlane {
    /// Center on the ground (`y = 0`).
    pub center: Point3,
    /// Extent along X.
    pub width: f64,
    /// Extent along Z.
    pub depth: f64,
    /// Rotation around X that lays a renderer's XY plane flat, facing up.
    pub rotation_x: f64,
}

/// Everything needed to render one room, in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGroup {
    pub room_id: String,
    pub name: String,
    pub floor: FloorPlane,
    /// One wall per polygon edge, in edge order.
    pub walls: Vec<WallSegment>,
    pub furniture: Vec<FurnitureBox>,
}

/// Composes the renderable group for a single room.
pub struct ComposeRoomScene<'a> {
    room: &'a Room,
    units: LengthUnit,
    params: SceneParams,
    furniture: &'a dyn FurniturePlacer,
}

impl<'a> ComposeRoomScene<'a> {
    /// Creates a new `ComposeRoomScene` operation for a room stored in `units`.
    ///
    /// Uses default parameters and [`PlaceholderFurniture`].
    #[must_use]
    pub fn new(room: &'a Room, units: LengthUnit) -> Self {
        Self {
            room,
            units,
            params: SceneParams::default(),
            furniture: &PlaceholderFurniture,
        }
    }

    /// Overrides the composition parameters.
    #[must_use]
    pub fn with_params(mut self, params: SceneParams) -> Self {
        self.params = params;
        self
    }

    /// Replaces the furniture placement step.
    #[must_use]
    pub fn with_furniture(mut self, placer: &'a dyn FurniturePlacer) -> Self {
        self.furniture = placer;
        self
    }

    /// Executes the composition.
    ///
    /// # Errors
    ///
    /// Returns the first geometry error from floor or wall derivation; no
    /// partial group is produced.
    pub fn execute(&self) -> Result<RoomGroup> {
        let normalized = UnitNormalizer::new(self.units).room(self.room);

        let extent = ComputeFloorExtent::new(&normalized.polygon).execute()?;
        let walls = DeriveWalls::new(&normalized.polygon, normalized.height)
            .with_params(self.params.walls)
            .execute()?;
        let furniture = self.furniture.place(self.room, &extent);

        debug!(
            room = %self.room.id,
            walls = walls.len(),
            furniture = furniture.len(),
            "composed room scene"
        );

        Ok(RoomGroup {
            room_id: self.room.id.clone(),
            name: self.room.name.clone(),
            floor: FloorPlane {
                center: Point3::new(extent.center.x, 0.0, extent.center.y),
                width: extent.width,
                depth: extent.depth,
                rotation_x: -FRAC_PI_2,
            },
            walls,
            furniture,
        })
    }
}

/// Composes the groups for every room of a plan.
pub struct ComposeFloorPlan<'a> {
    plan: &'a FloorPlan,
    params: SceneParams,
    furniture: &'a dyn FurniturePlacer,
}

impl<'a> ComposeFloorPlan<'a> {
    /// Creates a new `ComposeFloorPlan` operation.
    #[must_use]
    pub fn new(plan: &'a FloorPlan) -> Self {
        Self {
            plan,
            params: SceneParams::default(),
            furniture: &PlaceholderFurniture,
        }
    }

    /// Overrides the composition parameters.
    #[must_use]
    pub fn with_params(mut self, params: SceneParams) -> Self {
        self.params = params;
        self
    }

    /// Replaces the furniture placement step.
    #[must_use]
    pub fn with_furniture(mut self, placer: &'a dyn FurniturePlacer) -> Self {
        self.furniture = placer;
        self
    }

    /// Composes all rooms, failing on the first invalid room.
    ///
    /// # Errors
    ///
    /// Returns a plan validation error or the first room composition error.
    pub fn execute(&self) -> Result<Vec<RoomGroup>> {
        self.plan.validate()?;
        self.plan
            .rooms
            .iter()
            .map(|room| self.compose(room))
            .collect()
    }

    /// Composes all rooms independently, returning one outcome per room in
    /// plan order.
    #[must_use]
    pub fn execute_each(&self) -> Vec<(&'a Room, Result<RoomGroup>)> {
        self.plan
            .rooms
            .iter()
            .map(|room| {
                let outcome = self.compose(room);
                if let Err(err) = &outcome {
                    warn!(room = %room.id, error = %err, "room composition failed");
                }
                (room, outcome)
            })
            .collect()
    }

    fn compose(&self, room: &Room) -> Result<RoomGroup> {
        ComposeRoomScene::new(room, self.plan.units)
            .with_params(self.params)
            .with_furniture(self.furniture)
            .execute()
    }
}
