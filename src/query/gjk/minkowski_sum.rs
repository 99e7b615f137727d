//! Support functions of Minkowski differences, static and swept.

use crate::math::{Isometry, Real, UnitVector, Vector};
use crate::query::gjk::CsoPoint;
use crate::shape::SupportMap;

/// The support function of the Minkowski difference `A - B` of two convex shapes.
///
/// This is the only capability the GJK and EPA algorithms need. Implementors must be true
/// convex support functions: `support(dir).point` maximizes `dot(p, dir)` over `A - B`.
pub trait MinkowskiSum {
    /// The point of `A - B` furthest along `dir`, with the shape points generating it.
    fn support(&self, dir: &UnitVector<Real>) -> CsoPoint;
}

impl<F> MinkowskiSum for F
where
    F: Fn(&UnitVector<Real>) -> CsoPoint,
{
    #[inline]
    fn support(&self, dir: &UnitVector<Real>) -> CsoPoint {
        self(dir)
    }
}

/// The support function of `A - B(t)` where the shape `A` is stationary and `B` translates
/// linearly by [`Self::sweep`] over `t ∈ [0, 1]`.
pub trait SweptMinkowskiSum {
    /// The support point of `A - B(t)` toward `dir`.
    fn support_at(&self, dir: &UnitVector<Real>, t: Real) -> CsoPoint;

    /// The displacement of `B` between `t = 0` and `t = 1`.
    fn sweep(&self) -> Vector<Real>;

    /// The support point toward `dir` of the Minkowski difference between `A` and the volume
    /// swept by `B` over the whole motion.
    ///
    /// The support of `A - B(t)` is affine in `t`, so the better of both endpoints is exact.
    fn hull_support(&self, dir: &UnitVector<Real>) -> CsoPoint {
        let start = self.support_at(dir, 0.0);
        let end = self.support_at(dir, 1.0);

        if end.point.coords.dot(dir) > start.point.coords.dot(dir) {
            end
        } else {
            start
        }
    }
}

/// Two convex shapes with their world-space poses, seen as the Minkowski difference `g1 - g2`.
#[derive(Copy, Clone, Debug)]
pub struct ShapePair<'a, G1: ?Sized, G2: ?Sized> {
    /// The pose of the first shape.
    pub pos1: Isometry<Real>,
    /// The first shape.
    pub g1: &'a G1,
    /// The pose of the second shape.
    pub pos2: Isometry<Real>,
    /// The second shape.
    pub g2: &'a G2,
}

impl<'a, G1: ?Sized, G2: ?Sized> ShapePair<'a, G1, G2> {
    /// Pairs `g1` at `pos1` with `g2` at `pos2`.
    pub fn new(pos1: &Isometry<Real>, g1: &'a G1, pos2: &Isometry<Real>, g2: &'a G2) -> Self {
        ShapePair {
            pos1: *pos1,
            g1,
            pos2: *pos2,
            g2,
        }
    }
}

impl<G1: ?Sized + SupportMap, G2: ?Sized + SupportMap> MinkowskiSum for ShapePair<'_, G1, G2> {
    #[inline]
    fn support(&self, dir: &UnitVector<Real>) -> CsoPoint {
        CsoPoint::from_shapes_toward(&self.pos1, self.g1, &self.pos2, self.g2, dir)
    }
}

/// A stationary shape `g1` and a shape `g2` translating from `pos2_start` by `sweep`.
#[derive(Copy, Clone, Debug)]
pub struct SweptShapePair<'a, G1: ?Sized, G2: ?Sized> {
    /// The pose of the stationary shape.
    pub pos1: Isometry<Real>,
    /// The stationary shape.
    pub g1: &'a G1,
    /// The pose of the moving shape at `t = 0`.
    pub pos2_start: Isometry<Real>,
    /// The translation applied to the moving shape between `t = 0` and `t = 1`.
    pub sweep: Vector<Real>,
    /// The moving shape.
    pub g2: &'a G2,
}

impl<'a, G1: ?Sized, G2: ?Sized> SweptShapePair<'a, G1, G2> {
    /// Pairs the stationary `g1` with `g2` translating from `pos2_start` to `pos2_end`.
    ///
    /// Only the translational part of the motion is used: `g2` keeps the orientation of
    /// `pos2_start` along the whole sweep.
    pub fn new(
        pos1: &Isometry<Real>,
        g1: &'a G1,
        pos2_start: &Isometry<Real>,
        pos2_end: &Isometry<Real>,
        g2: &'a G2,
    ) -> Self {
        SweptShapePair {
            pos1: *pos1,
            g1,
            pos2_start: *pos2_start,
            sweep: pos2_end.translation.vector - pos2_start.translation.vector,
            g2,
        }
    }
}

impl<G1: ?Sized + SupportMap, G2: ?Sized + SupportMap> SweptMinkowskiSum
    for SweptShapePair<'_, G1, G2>
{
    fn support_at(&self, dir: &UnitVector<Real>, t: Real) -> CsoPoint {
        let sp1 = self.g1.support_point_toward(&self.pos1, dir);
        let sp2 = self.g2.support_point_toward(&self.pos2_start, &-*dir) + self.sweep * t;

        CsoPoint::new(sp1, sp2)
    }

    #[inline]
    fn sweep(&self) -> Vector<Real> {
        self.sweep
    }
}

/// The Minkowski difference between the stationary shape and the whole volume swept by the
/// moving one.
#[derive(Copy, Clone, Debug)]
pub struct SweptHull<'a, S: ?Sized>(pub &'a S);

impl<S: ?Sized + SweptMinkowskiSum> MinkowskiSum for SweptHull<'_, S> {
    #[inline]
    fn support(&self, dir: &UnitVector<Real>) -> CsoPoint {
        self.0.hull_support(dir)
    }
}

/// A swept Minkowski difference frozen at a single time of its motion.
#[derive(Copy, Clone, Debug)]
pub struct SweptAt<'a, S: ?Sized> {
    /// The swept Minkowski difference.
    pub swept: &'a S,
    /// The time at which the motion is frozen.
    pub t: Real,
}

impl<'a, S: ?Sized> SweptAt<'a, S> {
    /// Freezes `swept` at time `t`.
    pub fn new(swept: &'a S, t: Real) -> Self {
        SweptAt { swept, t }
    }
}

impl<S: ?Sized + SweptMinkowskiSum> MinkowskiSum for SweptAt<'_, S> {
    #[inline]
    fn support(&self, dir: &UnitVector<Real>) -> CsoPoint {
        self.swept.support_at(dir, self.t)
    }
}
