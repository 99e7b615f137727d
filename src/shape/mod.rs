//! Convex shapes exposing a support function.
//!
//! The contact queries never depend on these concrete types: anything implementing
//! [`SupportMap`] can take part in them.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_hull::ConvexHull;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;

mod ball;
mod capsule;
mod cone;
mod convex_hull;
mod cuboid;
mod cylinder;
mod segment;
mod support_map;
mod triangle;
