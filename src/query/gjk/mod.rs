//! The GJK intersection test and the support-function abstractions shared with the EPA.

pub use self::cso_point::CsoPoint;
pub use self::gjk::*;
pub use self::minkowski_sum::{
    MinkowskiSum, ShapePair, SweptAt, SweptHull, SweptMinkowskiSum, SweptShapePair,
};
pub use self::simplex::Simplex;

mod cso_point;
mod gjk;
mod minkowski_sum;
mod simplex;
