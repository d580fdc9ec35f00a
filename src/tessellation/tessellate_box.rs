use crate::math::{Point3, Vector3};
use crate::operations::WallSegment;
use crate::scene::FurnitureBox;

use super::TriangleMesh;

/// Tessellates a box rotated around the vertical axis.
///
/// The box's local X axis points along `(cos θ, 0, sin θ)` for rotation `θ`,
/// so a wall box lies along the polygon edge it was derived from.
pub struct TessellateBox {
    center: Point3,
    rotation_y: f64,
    size: Vector3,
}

impl TessellateBox {
    /// Creates a new `TessellateBox` operation. `size` is the full extent
    /// along the local X, Y and Z axes.
    #[must_use]
    pub fn new(center: Point3, rotation_y: f64, size: Vector3) -> Self {
        Self {
            center,
            rotation_y,
            size,
        }
    }

    /// Box for a wall segment.
    #[must_use]
    pub fn wall(wall: &WallSegment) -> Self {
        Self::new(wall.center, wall.rotation_y, wall.extents)
    }

    /// Box for a furniture placeholder.
    #[must_use]
    pub fn furniture(item: &FurnitureBox) -> Self {
        Self::new(item.center, item.rotation_y, item.size)
    }

    /// Executes the tessellation: 6 flat faces, 24 vertices, 12 triangles,
    /// normals pointing outward.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        let (sin, cos) = self.rotation_y.sin_cos();
        // Right-handed local frame: u × v = w.
        let axes = [
            Vector3::new(cos, 0.0, sin),
            Vector3::y(),
            Vector3::new(-sin, 0.0, cos),
        ];
        let half = self.size / 2.0;

        let mut mesh = TriangleMesh::default();
        for i in 0..3 {
            let (j, k) = ((i + 1) % 3, (i + 2) % 3);
            for sign in [1.0, -1.0] {
                let normal = axes[i] * sign;
                let a = axes[j] * half[j];
                let b = normal.cross(&axes[j]) * half[k];
                mesh.push_quad(self.center + normal * half[i], normal, a, b);
            }
        }
        mesh
    }
}
