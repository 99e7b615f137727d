use crate::math::{Isometry, Point, Real, UnitVector};
use crate::shape::SupportMap;

/// A point of the Minkowski difference `A - B`, also called the configuration-space obstacle
/// (CSO), remembering the shape points it comes from.
///
/// Keeping `orig1` and `orig2` around is what lets the EPA turn the face closest to the origin
/// into witness points on both shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CsoPoint {
    /// The point of `A - B`, equal to `orig1 - orig2`.
    pub point: Point<Real>,
    /// The point of `A`.
    pub orig1: Point<Real>,
    /// The point of `B`.
    pub orig2: Point<Real>,
}

impl CsoPoint {
    /// The CSO point `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        Self::new_with_point(Point::from(orig1 - orig2), orig1, orig2)
    }

    /// A CSO point with all its parts given. `point` is trusted to be `orig1 - orig2`.
    pub fn new_with_point(point: Point<Real>, orig1: Point<Real>, orig2: Point<Real>) -> Self {
        CsoPoint {
            point,
            orig1,
            orig2,
        }
    }

    /// The CSO point `point`, as if `B` were the origin.
    pub fn single_point(point: Point<Real>) -> Self {
        Self::new_with_point(point, point, Point::origin())
    }

    /// The CSO point of two coincident points at the origin.
    pub fn origin() -> Self {
        Self::single_point(Point::origin())
    }

    /// The support point toward `dir` of the Minkowski difference of `g1` placed at `pos1` and
    /// `g2` placed at `pos2`.
    pub fn from_shapes_toward<G1, G2>(
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
        dir: &UnitVector<Real>,
    ) -> Self
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        CsoPoint::new(
            g1.support_point_toward(pos1, dir),
            g2.support_point_toward(pos2, &-*dir),
        )
    }
}
