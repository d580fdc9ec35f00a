mod tessellate_box;
mod tessellate_floor;
mod tessellate_room;

pub use tessellate_box::TessellateBox;
pub use tessellate_floor::TessellateFloor;
pub use tessellate_room::{RoomMesh, TessellateRoom};

use crate::math::{Point2, Point3, Vector3};

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Appends another mesh, offsetting its indices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices
            .extend(other.indices.iter().map(|t| [t[0] + offset, t[1] + offset, t[2] + offset]));
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends a flat quad. `a × b` must equal `normal` so the winding is
    /// counter-clockwise seen from the front.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push_quad(&mut self, center: Point3, normal: Vector3, a: Vector3, b: Vector3) {
        let base = self.vertices.len() as u32;
        for (sa, sb, uv) in [
            (-1.0, -1.0, Point2::new(0.0, 0.0)),
            (1.0, -1.0, Point2::new(1.0, 0.0)),
            (1.0, 1.0, Point2::new(1.0, 1.0)),
            (-1.0, 1.0, Point2::new(0.0, 1.0)),
        ] {
            self.vertices.push(center + a * sa + b * sb);
            self.normals.push(normal);
            self.uvs.push(uv);
        }
        self.indices.push([base, base + 1, base + 2]);
        self.indices.push([base, base + 2, base + 3]);
    }
}
