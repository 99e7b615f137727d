use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// The segment joining two points.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The first endpoint.
    pub a: Point<Real>,
    /// The second endpoint.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates the segment `[a, b]`.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The vector from `self.a` to `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }
}

impl SupportMap for Segment {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Ties go to `b`.
        if self.scaled_direction().dot(dir) < 0.0 {
            self.a
        } else {
            self.b
        }
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from([a, b]: [Point<Real>; 2]) -> Self {
        Segment::new(a, b)
    }
}
