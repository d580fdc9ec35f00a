use crate::scene::RoomGroup;

use super::{TessellateBox, TessellateFloor, TriangleMesh};

/// Triangle buffers for one room, split by surface so each can take its own material.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomMesh {
    pub floor: TriangleMesh,
    pub walls: TriangleMesh,
    pub furniture: TriangleMesh,
}

/// Tessellates every descriptor of a composed room group.
pub struct TessellateRoom<'a> {
    group: &'a RoomGroup,
}

impl<'a> TessellateRoom<'a> {
    /// Creates a new `TessellateRoom` operation.
    #[must_use]
    pub fn new(group: &'a RoomGroup) -> Self {
        Self { group }
    }

    /// Executes the tessellation.
    #[must_use]
    pub fn execute(&self) -> RoomMesh {
        let mut walls = TriangleMesh::default();
        for wall in &self.group.walls {
            walls.merge(&TessellateBox::wall(wall).execute());
        }
        let mut furniture = TriangleMesh::default();
        for item in &self.group.furniture {
            furniture.merge(&TessellateBox::furniture(item).execute());
        }
        RoomMesh {
            floor: TessellateFloor::new(self.group.floor).execute(),
            walls,
            furniture,
        }
    }
}
