use crate::query::gjk::CsoPoint;
use arrayvec::ArrayVec;

/// The terminal simplex of a GJK run: between one and four CSO points.
///
/// This is the hand-off from GJK to EPA. The EPA only reads it; when it has fewer than four
/// affinely independent points, the missing ones are recovered from the support function.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Simplex {
    points: ArrayVec<CsoPoint, 4>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Simplex {
            points: ArrayVec::new(),
        }
    }

    /// Creates a simplex from at most four points.
    ///
    /// Returns `None` if `points` is empty or has more than four elements.
    pub fn from_points(points: &[CsoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let points = ArrayVec::try_from(points).ok()?;
        Some(Simplex { points })
    }

    /// Appends a point, returning `false` if the simplex already has four points.
    pub fn push(&mut self, pt: CsoPoint) -> bool {
        self.points.try_push(pt).is_ok()
    }

    /// The points of this simplex, oldest first.
    #[inline]
    pub fn points(&self) -> &[CsoPoint] {
        &self.points
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this simplex empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recently added point.
    #[inline]
    pub fn last(&self) -> Option<&CsoPoint> {
        self.points.last()
    }

    pub(crate) fn set(&mut self, points: &[CsoPoint]) {
        self.points.clear();
        self.points.extend(points.iter().copied());
    }
}
