use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A cone centered at the origin with its axis along `y` and its apex toward `+y`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    /// Half of the distance between the base and the apex.
    pub half_height: Real,
    /// The radius of the base.
    pub radius: Real,
}

impl Cone {
    /// Creates a cone from its half-height and base radius.
    pub fn new(half_height: Real, radius: Real) -> Cone {
        Cone {
            half_height,
            radius,
        }
    }

    /// The tip of this cone.
    #[inline]
    pub fn apex(&self) -> Point<Real> {
        Point::new(0.0, self.half_height, 0.0)
    }
}

impl SupportMap for Cone {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // The furthest point of the base disc, its center if `dir` is vertical.
        let radial = Vector::new(dir.x, 0.0, dir.z)
            .try_normalize(0.0)
            .map_or_else(Vector::zeros, |n| n * self.radius);
        let rim = Point::new(radial.x, -self.half_height, radial.z);
        let apex = self.apex();

        if rim.coords.dot(dir) > apex.coords.dot(dir) {
            rim
        } else {
            apex
        }
    }
}
