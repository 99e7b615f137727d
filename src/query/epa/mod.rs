//! The Expanding Polytope Algorithm.
//!
//! Once GJK has established that two convex shapes overlap, its terminal simplex encloses the
//! origin inside their Minkowski difference. The EPA grows that simplex into a convex polytope
//! whose faces get closer and closer to the boundary of the Minkowski difference. The face of
//! the boundary closest to the origin gives the penetration depth, the contact normal and,
//! through barycentric interpolation, the witness points on both shapes.
//!
//! A swept variant ([`epa_solve_swept`]) grows the polytope along the direction of motion of
//! one of the shapes instead, in order to compute when both shapes first touch.

pub use self::epa3::epa_solve;
pub use self::epa_options::{EpaOptions, EPA_MAX_FACES, EPA_MAX_VERTICES};
pub use self::epa_result::{epa_swap_result, EpaResult, EpaStatus, SweptEpaResult};
pub use self::expanding_simplex::{
    ExpandingSimplex, ExpandingSimplexFlags, ExpandingSimplexTriangle,
};
pub use self::swept_epa::{epa_solve_swept, epa_swept_find_face};

mod epa3;
mod epa_options;
mod epa_result;
mod expanding_simplex;
mod swept_epa;
