use impact3d::math::{Isometry, Point, Vector};
use impact3d::query::{self, EpaOptions};
use impact3d::shape::{Ball, Cone, ConvexHull, Cuboid, Cylinder, Segment, Triangle};

#[test]
fn ball_resting_in_triangle() {
    let triangle = Triangle::new(
        Point::new(-1.0, 0.0, -1.0),
        Point::new(1.0, 0.0, -1.0),
        Point::new(0.0, 0.0, 1.0),
    );
    // The vertices are clockwise seen from above.
    assert_relative_eq!(*triangle.normal().unwrap(), -Vector::y());
    let ball = Ball::new(0.5);
    let m1 = Isometry::identity();
    let m2 = Isometry::translation(0.0, 0.3, 0.0);

    let res = query::contact(&m1, &triangle, &m2, &ball, &EpaOptions::default())
        .unwrap()
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(*res.normal, Vector::y(), epsilon = 1.0e-3);
    assert_relative_eq!(res.point_a.y, 0.0, epsilon = 1.0e-3);
    assert_relative_eq!(res.point_b.y, -0.2, epsilon = 1.0e-3);
}

#[test]
fn cylinder_under_cuboid() {
    let cylinder = Cylinder::new(1.0, 1.0);
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let m1 = Isometry::identity();
    let m2 = Isometry::translation(0.0, 1.5, 0.0);

    let res = query::contact(&m1, &cylinder, &m2, &cuboid, &EpaOptions::default())
        .unwrap()
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(*res.normal, Vector::y(), epsilon = 1.0e-3);
}

#[test]
fn cone_apex_in_cuboid() {
    let cone = Cone::new(1.0, 1.0);
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let m1 = Isometry::identity();
    let m2 = Isometry::translation(0.0, 1.8, 0.0);

    let res = query::contact(&m1, &cone, &m2, &cuboid, &EpaOptions::default())
        .unwrap()
        .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(*res.normal, Vector::y(), epsilon = 1.0e-3);
    assert_relative_eq!(res.point_a, Point::new(0.0, 1.0, 0.0), epsilon = 1.0e-3);
}

#[test]
fn segment_through_cuboid_top() {
    let cuboid = Cuboid::new(Vector::repeat(1.0));
    let segment = Segment::new(Point::new(0.0, 0.8, 0.0), Point::new(0.0, 3.0, 0.0));

    let res = query::contact(
        &Isometry::identity(),
        &cuboid,
        &Isometry::identity(),
        &segment,
        &EpaOptions::default(),
    )
    .unwrap()
    .expect("Penetration not found.");
    assert_relative_eq!(res.depth, 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(*res.normal, Vector::y(), epsilon = 1.0e-3);
    assert_relative_eq!(res.point_b, Point::new(0.0, 0.8, 0.0), epsilon = 1.0e-3);
}

#[test]
fn convex_hull_matches_cuboid() {
    let cuboid = Cuboid::new(Vector::new(1.0, 0.5, 0.5));
    let mut corners = Vec::new();

    for i in 0..8 {
        let sign = |bit: i32| if i & bit == 0 { -1.0 } else { 1.0 };
        corners.push(Point::from(
            cuboid.half_extents.component_mul(&Vector::new(sign(1), sign(2), sign(4))),
        ));
    }

    let hull = ConvexHull::new(corners).unwrap();
    let ball = Ball::new(0.4);
    let m1 = Isometry::new(Vector::zeros(), Vector::new(0.0, 0.3, 0.0));
    let m2 = Isometry::translation(1.1, 0.1, 0.0);

    let with_cuboid = query::contact(&m1, &cuboid, &m2, &ball, &EpaOptions::default())
        .unwrap()
        .expect("Penetration not found.");
    let with_hull = query::contact(&m1, &hull, &m2, &ball, &EpaOptions::default())
        .unwrap()
        .expect("Penetration not found.");

    assert_relative_eq!(with_cuboid.depth, with_hull.depth, epsilon = 1.0e-2);
    assert_relative_eq!(*with_cuboid.normal, *with_hull.normal, epsilon = 5.0e-2);
}
