/// Errors reported by the Expanding Polytope Algorithm.
///
/// Reaching the iteration budget is not an error: the best available face is still returned,
/// flagged with [`EpaStatus::IterationLimit`](crate::query::EpaStatus::IterationLimit).
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EpaError {
    /// The input simplex could not be grown into a tetrahedron enclosing the origin, the
    /// polytope horizon could not be extracted, or a swept ray ran parallel to its hit face.
    #[error("the simplex is degenerate or does not enclose the origin")]
    DegenerateSimplex,
    /// The polytope needed more vertices or faces than its arena can hold.
    #[error("the expanding polytope ran out of vertex or face slots")]
    ArenaExhausted,
}
