use crate::math::{Point3, Vector3};
use crate::operations::FloorExtent;
use crate::plan::Room;

/// A furniture box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurnitureBox {
    /// Center of the box.
    pub center: Point3,
    /// Rotation around the vertical axis, in radians.
    pub rotation_y: f64,
    /// `(width, height, depth)`.
    pub size: Vector3,
}

/// Places furniture boxes inside a composed room.
///
/// Implementations must be deterministic so re-composing a room yields the
/// same group.
pub trait FurniturePlacer {
    /// Returns the boxes to render for `room`, whose floor spans `floor`
    /// (world units).
    fn place(&self, room: &Room, floor: &FloorExtent) -> Vec<FurnitureBox>;
}

/// Emits a single fixed box one meter in front of the floor center.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFurniture;

impl PlaceholderFurniture {
    /// Size of the placeholder box, in meters.
    pub const SIZE: [f64; 3] = [1.5, 0.5, 0.8];
}

impl FurniturePlacer for PlaceholderFurniture {
    fn place(&self, _room: &Room, floor: &FloorExtent) -> Vec<FurnitureBox> {
        let [w, h, d] = Self::SIZE;
        vec![FurnitureBox {
            center: Point3::new(floor.center.x, h / 2.0, floor.center.y - 1.0),
            rotation_y: 0.0,
            size: Vector3::new(w, h, d),
        }]
    }
}

/// Emits no furniture.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFurniture;

impl FurniturePlacer for NoFurniture {
    fn place(&self, _room: &Room, _floor: &FloorExtent) -> Vec<FurnitureBox> {
        Vec::new()
    }
}
