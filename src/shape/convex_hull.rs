//! A convex shape defined implicitly by a cloud of points.

use alloc::vec::Vec;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;

/// The convex hull of a set of points.
///
/// The hull itself is never computed: its support function is evaluated by scanning the points,
/// which is all the contact queries need.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    points: Vec<Point<Real>>,
}

impl ConvexHull {
    /// Creates the convex hull of the given points.
    ///
    /// Returns `None` if `points` is empty.
    pub fn new(points: Vec<Point<Real>>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(ConvexHull { points })
        }
    }

    /// The points this hull was built from.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }
}
