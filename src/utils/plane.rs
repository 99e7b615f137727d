use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// An oriented plane `{ x | normal · x = offset }`.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The unit normal of the plane.
    pub normal: UnitVector<Real>,
    /// The signed distance of the plane from the origin, along `normal`.
    pub offset: Real,
}

impl Plane {
    /// Creates the plane with the given normal passing through `point`.
    #[inline]
    pub fn new(normal: UnitVector<Real>, point: &Point<Real>) -> Self {
        Plane {
            normal,
            offset: normal.dot(&point.coords),
        }
    }

    /// The signed distance from `pt` to this plane; positive on the side `normal` points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// Intersects the ray `origin + t * dir` with this plane.
    ///
    /// Returns the ray parameter `t` of the hit point, or `None` if the ray is parallel to the
    /// plane. The returned parameter may be negative.
    pub fn cast_ray(&self, origin: &Point<Real>, dir: &Vector<Real>) -> Option<Real> {
        let denom = self.normal.dot(dir);

        if denom.abs() <= DEFAULT_EPSILON {
            return None;
        }

        Some(-self.signed_distance(origin) / denom)
    }
}
