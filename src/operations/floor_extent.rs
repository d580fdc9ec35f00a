use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{all_finite, bounds};
use crate::math::{Point2, TOLERANCE};

/// Axis-aligned bounding rectangle of a room polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorExtent {
    /// Rectangle center; `y` maps to world Z.
    pub center: Point2,
    /// Extent along X.
    pub width: f64,
    /// Extent along Z.
    pub depth: f64,
}

/// Computes the floor rectangle that sizes and centers a room's floor plane.
pub struct ComputeFloorExtent<'a> {
    polygon: &'a [Point2],
}

impl<'a> ComputeFloorExtent<'a> {
    /// Creates a new `ComputeFloorExtent` query.
    #[must_use]
    pub fn new(polygon: &'a [Point2]) -> Self {
        Self { polygon }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPolygon`] if the polygon has fewer than
    /// 3 points, non-finite coordinates, or zero width or depth.
    pub fn execute(&self) -> Result<FloorExtent> {
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
        let Some((min, max)) = bounds(self.polygon) else {
            return Err(GeometryError::InvalidPolygon("empty polygon".to_owned()).into());
        };

        let width = max.x - min.x;
        let depth = max.y - min.y;
        if width < TOLERANCE || depth < TOLERANCE {
            return Err(GeometryError::InvalidPolygon(format!(
                "zero-area floor ({width} x {depth})"
            ))
            .into());
        }

        Ok(FloorExtent {
            center: Point2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0),
            width,
            depth,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::RoomgenError;

    fn p(x: f64, z: f64) -> Point2 {
        Point2::new(x, z)
    }

    #[test]
    fn rectangle_extent() {
        let poly = vec![p(0.0, 0.0), p(5.0, 0.0), p(5.0, 4.0), p(0.0, 4.0)];
        let extent = ComputeFloorExtent::new(&poly).execute().unwrap();
        assert_relative_eq!(extent.width, 5.0);
        assert_relative_eq!(extent.depth, 4.0);
        assert_relative_eq!(extent.center.x, 2.5);
        assert_relative_eq!(extent.center.y, 2.0);
    }

    #[test]
    fn offset_l_shape_uses_bounding_rectangle() {
        let poly = vec![
            p(-2.0, 1.0),
            p(2.0, 1.0),
            p(2.0, 3.0),
            p(0.0, 3.0),
            p(0.0, 5.0),
            p(-2.0, 5.0),
        ];
        let extent = ComputeFloorExtent::new(&poly).execute().unwrap();
        assert_relative_eq!(extent.width, 4.0);
        assert_relative_eq!(extent.depth, 4.0);
        assert_relative_eq!(extent.center.x, 0.0);
        assert_relative_eq!(extent.center.y, 3.0);
    }

    #[test]
    fn two_points_rejected() {
        let err = ComputeFloorExtent::new(&[p(0.0, 0.0), p(1.0, 1.0)])
            .execute()
            .unwrap_err();
        assert!(matches!(err, RoomgenError::Geometry(GeometryError::InvalidPolygon(_))));
    }

    #[test]
    fn collinear_points_rejected() {
        let poly = vec![p(0.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)];
        let err = ComputeFloorExtent::new(&poly).execute().unwrap_err();
        assert!(matches!(err, RoomgenError::Geometry(GeometryError::InvalidPolygon(_))));
    }

    #[test]
    fn nan_rejected() {
        let poly = vec![p(0.0, 0.0), p(1.0, f64::NAN), p(1.0, 1.0)];
        assert!(ComputeFloorExtent::new(&poly).execute().is_err());
    }
}
