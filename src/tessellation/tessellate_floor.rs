use crate::math::Vector3;
use crate::scene::FloorPlane;

use super::TriangleMesh;

/// Tessellates a floor plane into a single upward-facing quad.
pub struct TessellateFloor {
    floor: FloorPlane,
}

impl TessellateFloor {
    /// Creates a new `TessellateFloor` operation.
    #[must_use]
    pub fn new(floor: FloorPlane) -> Self {
        Self { floor }
    }

    /// Executes the tessellation.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::default();
        mesh.push_quad(
            self.floor.center,
            Vector3::y(),
            Vector3::z() * (self.floor.depth / 2.0),
            Vector3::x() * (self.floor.width / 2.0),
        );
        mesh
    }
}
