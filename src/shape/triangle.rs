use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::SupportMap;
use crate::utils;

/// A flat triangle.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The first vertex.
    pub a: Point<Real>,
    /// The second vertex.
    pub b: Point<Real>,
    /// The third vertex.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates the triangle `(a, b, c)`.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The unit normal of this triangle, `None` if it is degenerate.
    ///
    /// Seen from the side the normal points to, the vertices are counter-clockwise.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        utils::ccw_face_normal([&self.a, &self.b, &self.c])
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.vertices())
    }
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from([a, b, c]: [Point<Real>; 3]) -> Self {
        Triangle::new(a, b, c)
    }
}
