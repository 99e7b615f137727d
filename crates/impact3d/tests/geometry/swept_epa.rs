use impact3d::math::{Isometry, Point, Vector};
use impact3d::na::Unit;
use impact3d::query::epa::{self, EpaOptions, EpaStatus, ExpandingSimplex, ExpandingSimplexFlags};
use impact3d::query::gjk::{self, GjkOptions, ShapePair};
use impact3d::query;
use impact3d::shape::{Ball, Capsule, Cuboid};

#[test]
fn cuboid_hits_cuboid() {
    let c = Cuboid::new(Vector::repeat(1.0));
    let m1 = Isometry::identity();
    let start = Isometry::translation(5.0, 0.0, 0.0);
    let end = Isometry::translation(-5.0, 0.0, 0.0);

    let res = query::contact_swept(&m1, &c, &start, &end, &c, &EpaOptions::default())
        .unwrap()
        .expect("Impact not found.");
    assert_eq!(res.result.status, EpaStatus::Converged);
    assert_relative_eq!(res.time_of_impact, 0.3, epsilon = 1.0e-4);
    assert_relative_eq!(*res.result.normal, Vector::x(), epsilon = 1.0e-4);
    assert_relative_eq!(res.result.point_a.x, 1.0, epsilon = 1.0e-4);
    assert_eq!(res.result.depth, 0.0);
}

#[test]
fn ball_hits_ball() {
    let b = Ball::new(1.0);
    let m1 = Isometry::identity();
    let start = Isometry::translation(5.0, 0.0, 0.0);
    let end = Isometry::translation(-5.0, 0.0, 0.0);

    let res = query::contact_swept(&m1, &b, &start, &end, &b, &EpaOptions::default())
        .unwrap()
        .expect("Impact not found.");
    assert_relative_eq!(res.time_of_impact, 0.3, epsilon = 1.0e-2);
    assert_relative_eq!(res.result.point_a, Point::new(1.0, 0.0, 0.0), epsilon = 1.0e-2);
}

#[test]
fn capsule_passing_above_misses() {
    let capsule = Capsule::new_x(1.0, 0.5);
    let c = Cuboid::new(Vector::repeat(1.0));
    let m1 = Isometry::identity();
    let start = Isometry::translation(5.0, 5.0, 0.0);
    let end = Isometry::translation(-5.0, 5.0, 0.0);

    let res = query::contact_swept(&m1, &c, &start, &end, &capsule, &EpaOptions::default());
    assert_eq!(res, Ok(None));
}

#[test]
fn overlap_at_start_has_zero_time_of_impact() {
    let c = Cuboid::new(Vector::repeat(1.0));
    let m1 = Isometry::identity();
    let start = Isometry::translation(1.0, 0.0, 0.0);
    let end = Isometry::translation(-5.0, 0.0, 0.0);

    let res = query::contact_swept(&m1, &c, &start, &end, &c, &EpaOptions::default())
        .unwrap()
        .expect("Impact not found.");
    assert_eq!(res.time_of_impact, 0.0);
    assert_relative_eq!(res.result.depth, 1.0, epsilon = 1.0e-4);
    assert_relative_eq!(*res.result.normal, Vector::x(), epsilon = 1.0e-4);
}

#[test]
fn zero_sweep_matches_static_contact() {
    let c = Cuboid::new(Vector::new(1.0, 0.5, 0.7));
    let m1 = Isometry::new(Vector::new(0.1, 0.0, 0.2), Vector::new(0.2, 0.4, 0.0));
    let m2 = Isometry::translation(0.9, 0.3, 0.0);

    let swept = query::contact_swept(&m1, &c, &m2, &m2, &c, &EpaOptions::default())
        .unwrap()
        .expect("Impact not found.");
    let fixed = query::contact(&m1, &c, &m2, &c, &EpaOptions::default())
        .unwrap()
        .expect("Penetration not found.");

    assert_eq!(swept.time_of_impact, 0.0);
    assert_eq!(swept.result.status, fixed.status);
    assert_relative_eq!(swept.result.depth, fixed.depth, epsilon = 1.0e-6);
    assert_relative_eq!(*swept.result.normal, *fixed.normal, epsilon = 1.0e-6);
    assert_relative_eq!(swept.result.point_a, fixed.point_a, epsilon = 1.0e-6);
    assert_relative_eq!(swept.result.point_b, fixed.point_b, epsilon = 1.0e-6);
}

#[test]
fn face_walk_reaches_the_pierced_face() {
    let b = Ball::new(1.0);
    let m1 = Isometry::identity();
    let m2 = Isometry::translation(0.3, 0.1, 0.0);
    let pair = ShapePair::new(&m1, &b, &m2, &b);
    let simplex =
        gjk::intersection_simplex(&pair, &Vector::x(), &GjkOptions::default()).unwrap();
    let polytope = ExpandingSimplex::new(
        &simplex,
        &pair,
        &EpaOptions::default(),
        ExpandingSimplexFlags::SKIP_DISTANCE,
    )
    .unwrap();

    let dirs = [
        Vector::x(),
        -Vector::y(),
        Vector::new(1.0, 2.0, -3.0),
        Vector::new(-0.3, 0.1, 0.9),
    ];

    for dir in dirs {
        let dir = Unit::new_normalize(dir);

        for (start, _) in polytope.faces() {
            let (face_id, _) = epa::epa_swept_find_face(&polytope, &dir, start, 0);
            let pts = polytope.face(face_id).pts();

            for i in 0..3 {
                let p0 = polytope.vertices()[pts[i]].point;
                let p1 = polytope.vertices()[pts[(i + 1) % 3]].point;
                assert!(p0.coords.cross(&p1.coords).dot(&dir) >= -1.0e-6);
            }
        }
    }
}

#[test]
fn cuboid_sliding_along_a_face_is_not_an_error() {
    // The moving cuboid slides on the top face of the other one and hits nothing but an edge.
    let c = Cuboid::new(Vector::repeat(1.0));
    let m1 = Isometry::identity();
    let start = Isometry::translation(5.0, 2.0, 0.0);
    let end = Isometry::translation(-5.0, 2.0, 0.0);

    let res = query::contact_swept(&m1, &c, &start, &end, &c, &EpaOptions::default())
        .unwrap()
        .expect("Impact not found.");
    assert_relative_eq!(res.time_of_impact, 0.3, epsilon = 1.0e-3);
    assert!(res.result.depth <= 1.0e-3, "depth: {}", res.result.depth);
    assert_relative_eq!(res.result.normal.norm(), 1.0, epsilon = 1.0e-5);
}

#[test]
fn stalled_expansion_still_reports_the_impact() {
    // With a zero tolerance, the final face lies exactly on the hull and its support point
    // cannot expand the polytope any further.
    let c = Cuboid::new(Vector::repeat(1.0));
    let m1 = Isometry::identity();
    let start = Isometry::translation(5.0, 0.0, 0.0);
    let end = Isometry::translation(-5.0, 0.0, 0.0);
    let options = EpaOptions::with_tolerance(0.0);

    let res = query::contact_swept(&m1, &c, &start, &end, &c, &options)
        .unwrap()
        .expect("Impact not found.");
    assert_eq!(res.result.status, EpaStatus::Stalled);
    assert!((0.0..=1.0).contains(&res.time_of_impact));
    assert_relative_eq!(res.time_of_impact, 0.3, epsilon = 1.0e-4);
    assert_relative_eq!(res.result.normal.norm(), 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(*res.result.normal, Vector::x(), epsilon = 1.0e-4);
    assert!(res.result.depth >= 0.0);
}

#[test]
fn swept_margin_backs_off_from_the_contact() {
    let c = Cuboid::new(Vector::repeat(1.0));
    let m1 = Isometry::identity();
    let start = Isometry::translation(5.0, 0.0, 0.0);
    let end = Isometry::translation(-5.0, 0.0, 0.0);
    let options = EpaOptions {
        swept_margin: 0.5,
        ..EpaOptions::default()
    };

    let res = query::contact_swept(&m1, &c, &start, &end, &c, &options)
        .unwrap()
        .expect("Impact not found.");
    assert_relative_eq!(res.time_of_impact, 0.25, epsilon = 1.0e-4);
    assert_relative_eq!(*res.result.normal, Vector::x(), epsilon = 1.0e-4);

    // The margin never pushes the time of impact below zero.
    let options = EpaOptions {
        swept_margin: 100.0,
        ..EpaOptions::default()
    };
    let res = query::contact_swept(&m1, &c, &start, &end, &c, &options)
        .unwrap()
        .expect("Impact not found.");
    assert_eq!(res.time_of_impact, 0.0);
}
