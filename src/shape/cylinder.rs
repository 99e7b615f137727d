use crate::math::{Point, Real, Vector};
use crate::shape::support_map::signed;
use crate::shape::SupportMap;

/// A cylinder centered at the origin with its axis along `y`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// Half of the cylinder length along `y`.
    pub half_height: Real,
    /// The radius of both discs.
    pub radius: Real,
}

impl Cylinder {
    /// Creates a cylinder from its half-height and radius.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        Cylinder {
            half_height,
            radius,
        }
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let radial = Vector::new(dir.x, 0.0, dir.z)
            .try_normalize(0.0)
            .map_or_else(Vector::zeros, |n| n * self.radius);

        Point::new(radial.x, signed(dir.y, self.half_height), radial.z)
    }
}
