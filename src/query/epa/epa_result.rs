use crate::math::{Point, Real, UnitVector};

/// How an EPA run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum EpaStatus {
    /// The closest face is within tolerance of the Minkowski difference boundary.
    Converged,
    /// The iteration budget ran out. The result describes the best face found so far.
    IterationLimit,
    /// The polytope could not be expanded further because of numerical degeneracies. The
    /// result describes the best face found so far.
    Stalled,
}

/// The penetration of two convex shapes, as computed by the EPA.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaResult {
    /// The contact normal, pointing from the first shape toward the second.
    ///
    /// Translating the second shape by `depth * normal` separates both shapes.
    pub normal: UnitVector<Real>,
    /// The penetration depth, never negative.
    pub depth: Real,
    /// The deepest point of the first shape inside the second one.
    pub point_a: Point<Real>,
    /// The deepest point of the second shape inside the first one.
    pub point_b: Point<Real>,
    /// Whether the result is exact up to the tolerance or a best-effort approximation.
    pub status: EpaStatus,
}

impl EpaResult {
    /// Is this result exact up to the EPA tolerance?
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status == EpaStatus::Converged
    }

    /// The same contact seen with both shapes exchanged.
    #[inline]
    #[must_use]
    pub fn swapped(self) -> Self {
        EpaResult {
            normal: -self.normal,
            depth: self.depth,
            point_a: self.point_b,
            point_b: self.point_a,
            status: self.status,
        }
    }
}

/// Returns `result` with both shapes exchanged: the normal is negated and the witness points
/// are swapped.
pub fn epa_swap_result(result: &EpaResult) -> EpaResult {
    result.swapped()
}

/// The first contact of a shape translating toward a stationary one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SweptEpaResult {
    /// The contact at the time of impact.
    ///
    /// When the shapes only touch at that time the depth is zero and both witness points
    /// coincide. When they already overlap at the start of the motion, this is the static
    /// penetration at `time_of_impact = 0`.
    pub result: EpaResult,
    /// The fraction of the motion, in `[0, 1]`, at which the shapes first touch.
    pub time_of_impact: Real,
}
