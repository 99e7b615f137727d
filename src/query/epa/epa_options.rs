use crate::math::Real;

/// The maximum number of vertices of an [`ExpandingSimplex`](super::ExpandingSimplex).
pub const EPA_MAX_VERTICES: usize = 128;
/// The maximum number of faces of an [`ExpandingSimplex`](super::ExpandingSimplex).
pub const EPA_MAX_FACES: usize = 256;

/// Tunables of the Expanding Polytope Algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct EpaOptions {
    /// The expansion stops once a support point is less than `tolerance` beyond the closest
    /// face. Also used as the slack when checking that the origin lies inside the polytope.
    pub tolerance: Real,
    /// The maximum number of expansion steps.
    pub max_iterations: usize,
    /// The maximum number of live faces, clamped to [`EPA_MAX_FACES`].
    pub face_capacity: usize,
    /// A distance the swept query backs off from the first contact before converting it to a
    /// time of impact, so that rounding errors do not leave the shapes overlapping there.
    ///
    /// Zero by default. Values around `1.0e-3` suit objects measured in meters.
    pub swept_margin: Real,
}

impl Default for EpaOptions {
    fn default() -> Self {
        EpaOptions {
            tolerance: 1.0e-4,
            max_iterations: 64,
            face_capacity: EPA_MAX_FACES,
            swept_margin: 0.0,
        }
    }
}

impl EpaOptions {
    /// The default options with the given convergence tolerance.
    pub fn with_tolerance(tolerance: Real) -> Self {
        EpaOptions {
            tolerance,
            ..Default::default()
        }
    }
}
