//! Non-persistent narrow-phase queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::contact()`](contact()) to compute the penetration depth, contact normal and witness
//!   points of two overlapping convex shapes.
//! * [`query::contact_swept()`](contact_swept()) to compute when a shape translating along a
//!   straight line first touches a stationary one.
//!
//! # Building blocks
//! Both queries chain the boolean [`gjk`] intersection test with the Expanding Polytope
//! Algorithm implemented in [`epa`]. Callers that already own a terminal GJK simplex can drive
//! [`epa::epa_solve`] and [`epa::epa_solve_swept`] directly with any implementor of
//! [`gjk::MinkowskiSum`] or [`gjk::SweptMinkowskiSum`].

pub use self::contact::{contact, contact_swept};
pub use self::epa::{EpaOptions, EpaResult, EpaStatus, SweptEpaResult};
pub use self::error::EpaError;
pub use self::gjk::GjkOptions;

mod contact;
pub mod epa;
mod error;
pub mod gjk;
