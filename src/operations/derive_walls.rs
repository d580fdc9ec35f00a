use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{all_finite, closed_edges, coincident};
use crate::math::{Point2, Point3, Vector3};

/// What to do with an edge whose endpoints coincide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegenerateEdgePolicy {
    /// Fail with [`GeometryError::DegenerateEdge`].
    #[default]
    Reject,
    /// Drop the edge and emit no wall for it.
    Skip,
}

/// Parameters controlling wall derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallParams {
    /// Wall thickness in world units.
    pub thickness: f64,
    /// Handling of zero-length edges.
    pub degenerate_edges: DegenerateEdgePolicy,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            thickness: 0.1,
            degenerate_edges: DegenerateEdgePolicy::Reject,
        }
    }
}

/// One polygon edge extruded vertically into a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Center of the box; `y` is half the wall height.
    pub center: Point3,
    /// Rotation around the vertical axis: `atan2(dz, dx)` of the edge.
    pub rotation_y: f64,
    /// `(length, height, thickness)`.
    pub extents: Vector3,
}

impl WallSegment {
    /// Length along the edge direction.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.extents.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.extents.y
    }

    /// Extent across the edge.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.extents.z
    }
}

/// Derives one wall segment per edge of a closed room polygon.
///
/// The polygon and height must already be in world units.
pub struct DeriveWalls<'a> {
    polygon: &'a [Point2],
    height: f64,
    params: WallParams,
}

impl<'a> DeriveWalls<'a> {
    /// Creates a new `DeriveWalls` operation with default parameters.
    #[must_use]
    pub fn new(polygon: &'a [Point2], height: f64) -> Self {
        Self {
            polygon,
            height,
            params: WallParams::default(),
        }
    }

    /// Overrides the wall parameters.
    #[must_use]
    pub fn with_params(mut self, params: WallParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the derivation, returning walls in polygon edge order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPolygon`] if the polygon has fewer than
    /// 3 points, non-finite coordinates, or fewer than 3 walls remain after
    /// skipping degenerate edges; [`GeometryError::InvalidHeight`] if the height
    /// is not positive; [`GeometryError::DegenerateEdge`] for a zero-length edge
    /// under [`DegenerateEdgePolicy::Reject`].
    pub fn execute(&self) -> Result<Vec<WallSegment>> {
        if self.polygon.len() < 3 {
            return Err(GeometryError::InvalidPolygon(format!(
                "at least 3 points required, got {}",
                self.polygon.len()
            ))
            .into());
        }
        if !all_finite(self.polygon) {
            return Err(
                GeometryError::InvalidPolygon("non-finite coordinate".to_owned()).into(),
            );
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(GeometryError::InvalidHeight(self.height).into());
        }

        let mut walls = Vec::with_capacity(self.polygon.len());
        for (index, start, end) in closed_edges(self.polygon) {
            if coincident(&start, &end) {
                match self.params.degenerate_edges {
                    DegenerateEdgePolicy::Reject => {
                        return Err(GeometryError::DegenerateEdge { index }.into());
                    }
                    DegenerateEdgePolicy::Skip => {
                        debug!(index, "skipping zero-length wall edge");
                        continue;
                    }
                }
            }
            let wall = wall_for_edge(start, end, self.height, self.params.thickness);
            let finite = wall.length().is_finite()
                && wall.center.x.is_finite()
                && wall.center.z.is_finite();
            if !finite {
                return Err(GeometryError::InvalidPolygon(format!(
                    "edge {index} exceeds the representable coordinate range"
                ))
                .into());
            }
            walls.push(wall);
        }

        if walls.len() < 3 {
            return Err(GeometryError::InvalidPolygon(format!(
                "only {} distinct edges after removing degenerate edges",
                walls.len()
            ))
            .into());
        }

        Ok(walls)
    }
}

fn wall_for_edge(start: Point2, end: Point2, height: f64, thickness: f64) -> WallSegment {
    let dx = end.x - start.x;
    let dz = end.y - start.y;
    let length = dx.hypot(dz);
    WallSegment {
        center: Point3::new((start.x + end.x) / 2.0, height / 2.0, (start.y + end.y) / 2.0),
        rotation_y: dz.atan2(dx),
        extents: Vector3::new(length, height, thickness),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::RoomgenError;

    fn p(x: f64, z: f64) -> Point2 {
        Point2::new(x, z)
    }

    fn rect(w: f64, d: f64) -> Vec<Point2> {
        vec![p(0.0, 0.0), p(w, 0.0), p(w, d), p(0.0, d)]
    }

    // ── Rectangle ──────────────────────────────────────────────

    #[test]
    fn rectangle_walls_in_edge_order() {
        let walls = DeriveWalls::new(&rect(5.0, 4.0), 3.0).execute().unwrap();
        let lengths: Vec<f64> = walls.iter().map(WallSegment::length).collect();
        assert_eq!(lengths.len(), 4);
        assert_relative_eq!(lengths[0], 5.0);
        assert_relative_eq!(lengths[1], 4.0);
        assert_relative_eq!(lengths[2], 5.0);
        assert_relative_eq!(lengths[3], 4.0);
        for wall in &walls {
            assert_relative_eq!(wall.center.y, 1.5);
            assert_relative_eq!(wall.height(), 3.0);
            assert_relative_eq!(wall.thickness(), 0.1);
        }
    }

    #[test]
    fn rectangle_wall_centers_are_edge_midpoints() {
        let walls = DeriveWalls::new(&rect(5.0, 4.0), 3.0).execute().unwrap();
        let centers: Vec<(f64, f64)> = walls.iter().map(|w| (w.center.x, w.center.z)).collect();
        assert_eq!(centers, vec![(2.5, 0.0), (5.0, 2.0), (2.5, 4.0), (0.0, 2.0)]);
    }

    #[test]
    fn rotation_follows_atan2_of_edge() {
        let walls = DeriveWalls::new(&rect(5.0, 4.0), 3.0).execute().unwrap();
        assert_relative_eq!(walls[0].rotation_y, 0.0);
        assert_relative_eq!(walls[1].rotation_y, FRAC_PI_2);
        assert_relative_eq!(walls[2].rotation_y, PI);
        assert_relative_eq!(walls[3].rotation_y, -FRAC_PI_2);
    }

    #[test]
    fn diagonal_edge_rotation_and_length() {
        let tri = vec![p(0.0, 0.0), p(3.0, 3.0), p(0.0, 3.0)];
        let walls = DeriveWalls::new(&tri, 2.0).execute().unwrap();
        assert_relative_eq!(walls[0].rotation_y, FRAC_PI_4);
        assert_relative_eq!(walls[0].length(), 18.0_f64.sqrt());
        assert_relative_eq!(walls[2].rotation_y, -FRAC_PI_2);
    }

    #[test]
    fn one_wall_per_vertex() {
        let l_shape = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ];
        assert_eq!(DeriveWalls::new(&l_shape, 2.5).execute().unwrap().len(), 6);
    }

    #[test]
    fn clockwise_winding_gives_same_walls_reversed() {
        let ccw = rect(5.0, 4.0);
        let cw: Vec<Point2> = ccw.iter().rev().copied().collect();
        let a = DeriveWalls::new(&ccw, 3.0).execute().unwrap();
        let b = DeriveWalls::new(&cw, 3.0).execute().unwrap();
        let mut la: Vec<f64> = a.iter().map(WallSegment::length).collect();
        let mut lb: Vec<f64> = b.iter().map(WallSegment::length).collect();
        la.sort_by(f64::total_cmp);
        lb.sort_by(f64::total_cmp);
        assert_eq!(la, lb);
    }

    #[test]
    fn custom_thickness() {
        let params = WallParams {
            thickness: 0.25,
            ..WallParams::default()
        };
        let walls = DeriveWalls::new(&rect(1.0, 1.0), 1.0)
            .with_params(params)
            .execute()
            .unwrap();
        assert!(walls.iter().all(|w| (w.thickness() - 0.25).abs() < f64::EPSILON));
    }

    #[test]
    fn repeated_derivation_is_identical() {
        let poly = rect(3.3, 2.7);
        let a = DeriveWalls::new(&poly, 2.4).execute().unwrap();
        let b = DeriveWalls::new(&poly, 2.4).execute().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn huge_finite_coordinates_give_finite_lengths() {
        let poly = vec![p(0.0, 0.0), p(1e300, 0.0), p(1e300, 1e300)];
        let walls = DeriveWalls::new(&poly, 3.0).execute().unwrap();
        assert!(walls.iter().all(|w| w.length().is_finite()));
        assert_relative_eq!(walls[0].length(), 1e300);
        assert_relative_eq!(walls[2].length(), 2.0_f64.sqrt() * 1e300, max_relative = 1e-12);
    }

    // ── Validation ─────────────────────────────────────────────

    #[test]
    fn edge_spanning_beyond_f64_range_rejected() {
        let poly = vec![p(-f64::MAX, 0.0), p(f64::MAX, 0.0), p(0.0, 1.0)];
        let err = DeriveWalls::new(&poly, 1.0).execute().unwrap_err();
        assert!(matches!(err, RoomgenError::Geometry(GeometryError::InvalidPolygon(_))));
    }

    #[test]
    fn two_points_is_invalid_polygon() {
        let err = DeriveWalls::new(&[p(0.0, 0.0), p(1.0, 0.0)], 1.0)
            .execute()
            .unwrap_err();
        assert!(matches!(err, RoomgenError::Geometry(GeometryError::InvalidPolygon(_))));
    }

    #[test]
    fn zero_and_negative_height_rejected() {
        for height in [0.0, -1.0, f64::NAN] {
            let err = DeriveWalls::new(&rect(1.0, 1.0), height).execute().unwrap_err();
            assert!(matches!(err, RoomgenError::Geometry(GeometryError::InvalidHeight(_))));
        }
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let poly = vec![p(0.0, 0.0), p(f64::INFINITY, 0.0), p(1.0, 1.0)];
        let err = DeriveWalls::new(&poly, 1.0).execute().unwrap_err();
        assert!(matches!(err, RoomgenError::Geometry(GeometryError::InvalidPolygon(_))));
    }

    // ── Degenerate edges ───────────────────────────────────────

    fn with_repeat() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(5.0, 0.0), p(5.0, 0.0), p(5.0, 4.0), p(0.0, 4.0)]
    }

    #[test]
    fn repeated_point_rejected_by_default() {
        let err = DeriveWalls::new(&with_repeat(), 3.0).execute().unwrap_err();
        assert!(matches!(
            err,
            RoomgenError::Geometry(GeometryError::DegenerateEdge { index: 1 })
        ));
    }

    #[test]
    fn repeated_point_skipped_emits_no_zero_length_wall() {
        let params = WallParams {
            degenerate_edges: DegenerateEdgePolicy::Skip,
            ..WallParams::default()
        };
        let walls = DeriveWalls::new(&with_repeat(), 3.0)
            .with_params(params)
            .execute()
            .unwrap();
        assert_eq!(walls.len(), 4);
        assert!(walls.iter().all(|w| w.length() > 0.0 && w.length().is_finite()));
        assert!(walls.iter().all(|w| w.rotation_y.is_finite()));
    }

    #[test]
    fn closing_edge_repeat_is_detected() {
        let poly = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)];
        let err = DeriveWalls::new(&poly, 1.0).execute().unwrap_err();
        assert!(matches!(
            err,
            RoomgenError::Geometry(GeometryError::DegenerateEdge { index: 3 })
        ));
    }

    #[test]
    fn skipping_below_three_walls_is_invalid() {
        let params = WallParams {
            degenerate_edges: DegenerateEdgePolicy::Skip,
            ..WallParams::default()
        };
        let poly = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0)];
        let err = DeriveWalls::new(&poly, 1.0)
            .with_params(params)
            .execute()
            .unwrap_err();
        assert!(matches!(err, RoomgenError::Geometry(GeometryError::InvalidPolygon(_))));
    }
}
