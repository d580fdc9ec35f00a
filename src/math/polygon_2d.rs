use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Iterates the edges of an implicitly closed polygon as `(index, start, end)`.
///
/// The last edge connects the final point back to the first.
pub fn closed_edges(points: &[Point2]) -> impl Iterator<Item = (usize, Point2, Point2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (i, points[i], points[(i + 1) % n]))
}

/// Returns the `(min, max)` corners of the axis-aligned bounds, or `None` if empty.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in &points[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}

/// Returns `true` if every coordinate is finite.
#[must_use]
pub fn all_finite(points: &[Point2]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

/// Returns `true` if two points are closer than [`TOLERANCE`].
#[must_use]
pub fn coincident(a: &Point2, b: &Point2) -> bool {
    (b - a).norm() < TOLERANCE
}
