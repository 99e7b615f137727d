//! Various unsorted geometrical and logical operators.

pub use self::barycentric::{barycentric_coordinates, evaluate_barycentric};
pub use self::ccw_face_normal::ccw_face_normal;
pub use self::plane::Plane;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod barycentric;
mod ccw_face_normal;
mod plane;
mod point_cloud_support_point;
