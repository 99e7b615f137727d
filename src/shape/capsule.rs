use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{Segment, SupportMap};

/// The set of points at most `radius` away from a segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Capsule {
    /// The segment joining the centers of both caps.
    pub segment: Segment,
    /// The radius of the caps and of the cylindrical part.
    pub radius: Real,
}

impl Capsule {
    /// A capsule centered at the origin with its segment along the `x` axis.
    pub fn new_x(half_height: Real, radius: Real) -> Self {
        Self::centered(Vector::x() * half_height, radius)
    }

    /// A capsule centered at the origin with its segment along the `y` axis.
    pub fn new_y(half_height: Real, radius: Real) -> Self {
        Self::centered(Vector::y() * half_height, radius)
    }

    /// A capsule centered at the origin with its segment along the `z` axis.
    pub fn new_z(half_height: Real, radius: Real) -> Self {
        Self::centered(Vector::z() * half_height, radius)
    }

    /// The capsule around the segment `[a, b]`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        Capsule {
            segment: Segment::new(a, b),
            radius,
        }
    }

    fn centered(half_axis: Vector<Real>, radius: Real) -> Self {
        Self::new(Point::from(-half_axis), Point::from(half_axis), radius)
    }

    /// The distance between the centers of both caps.
    pub fn height(&self) -> Real {
        self.segment.length()
    }

    /// Half of [`Self::height`].
    pub fn half_height(&self) -> Real {
        self.height() / 2.0
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let center = self.segment.local_support_point(dir);

        match dir.try_normalize(0.0) {
            Some(n) => center + n * self.radius,
            None => center,
        }
    }

    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.segment.local_support_point(dir) + dir.into_inner() * self.radius
    }
}
