use crate::math::{Point, Real, Vector};

/// The index of the point of `points` furthest along `dir`.
///
/// The first one wins ties. Panics if `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    points
        .iter()
        .map(|pt| pt.coords.dot(dir))
        .enumerate()
        .fold((0, Real::MIN), |best, (i, dot)| {
            if dot > best.1 {
                (i, dot)
            } else {
                best
            }
        })
        .0
}

/// The point of `points` furthest along `dir`.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Point<Real> {
    points[point_cloud_support_point_id(dir, points)]
}
