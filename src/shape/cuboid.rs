use crate::math::{Point, Real, Vector};
use crate::shape::support_map::signed;
use crate::shape::SupportMap;

/// A box centered at the origin of its local frame, with its edges along the local axes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// Half of the box extent along each axis. All must be non-negative.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a box from its half-extents.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        Point::from(dir.zip_map(&self.half_extents, signed))
    }
}
