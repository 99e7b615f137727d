//! The support function of convex shapes.

use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use na::Unit;

/// A convex shape described by its support function.
///
/// The support point of a convex shape toward a direction is the point of the shape that
/// maximizes its dot product with that direction. This is all the GJK and EPA queries ever
/// ask from a shape, so any convex set can take part in them by implementing this trait.
pub trait SupportMap {
    /// The support point toward `dir`, expressed in the local frame of the shape.
    ///
    /// `dir` is not necessarily normalized and may be zero, in which case any point of the
    /// shape is a valid answer.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as [`Self::local_support_point`] for a unit direction.
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.local_support_point(dir)
    }

    /// The support point toward `dir` of this shape placed at `pos`, all in world space.
    fn support_point_toward(&self, pos: &Isometry<Real>, dir: &UnitVector<Real>) -> Point<Real> {
        let local_dir = Unit::new_unchecked(pos.inverse_transform_vector(dir));
        pos * self.local_support_point_toward(&local_dir)
    }
}

impl<S: ?Sized + SupportMap> SupportMap for &S {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).local_support_point(dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        (**self).local_support_point_toward(dir)
    }
}

/// `value` if `sign` is non-negative, `-value` otherwise.
#[inline]
pub(crate) fn signed(sign: Real, value: Real) -> Real {
    if sign < 0.0 {
        -value
    } else {
        value
    }
}
