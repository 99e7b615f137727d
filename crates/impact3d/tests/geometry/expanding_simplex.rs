use impact3d::math::{Isometry, Real, Vector};
use impact3d::query::epa::{EpaOptions, ExpandingSimplex, ExpandingSimplexFlags};
use impact3d::query::gjk::{self, GjkOptions, MinkowskiSum, ShapePair};
use impact3d::shape::{Ball, Capsule, Cuboid, Cylinder, SupportMap};
use rand::{Rng, SeedableRng};

fn check_polytope(polytope: &ExpandingSimplex) {
    assert!(polytope.validate_topology());
    assert!(polytope.validate_heap());

    let closest = polytope.closest_face().expect("empty heap");
    let min_dist = polytope
        .faces()
        .map(|(_, face)| face.distance())
        .fold(Real::MAX, Real::min);
    assert_eq!(polytope.face(closest).distance(), min_dist);

    let vertices = polytope.vertices();
    let centroid = vertices
        .iter()
        .fold(Vector::zeros(), |acc, v| acc + v.point.coords)
        / vertices.len() as Real;

    for (id, face) in polytope.faces() {
        if face.is_degenerate() {
            continue;
        }

        let v0 = vertices[face.pts()[0]].point;
        assert!(
            face.normal().dot(&(centroid - v0.coords)) < 1.0e-4,
            "inward normal on face {}",
            id
        );
        assert!(face.plane_distance() > -1.0e-4, "origin outside face {}", id);
    }
}

fn run_expansion<G1: SupportMap, G2: SupportMap>(
    m1: &Isometry<Real>,
    g1: &G1,
    m2: &Isometry<Real>,
    g2: &G2,
) {
    let pair = ShapePair::new(m1, g1, m2, g2);
    let Some(simplex) = gjk::intersection_simplex(&pair, &Vector::x(), &GjkOptions::default())
    else {
        return;
    };

    let mut polytope = ExpandingSimplex::new(
        &simplex,
        &pair,
        &EpaOptions::default(),
        ExpandingSimplexFlags::empty(),
    )
    .unwrap();
    check_polytope(&polytope);

    for _ in 0..40 {
        let closest = polytope.closest_face().unwrap();
        let face = *polytope.face(closest);
        let support = pair.support(&face.normal());

        if support.point.coords.dot(&face.normal()) - face.plane_distance() < 1.0e-3 {
            break;
        }

        let Ok(first) = polytope.add_point(support, closest) else {
            break;
        };

        assert!(polytope.is_live(first));
        assert_eq!(polytope.find_heap_index(polytope.closest_face().unwrap()), Some(0));
        check_polytope(&polytope);
    }
}

#[test]
fn heap_and_normals_stay_valid_during_expansion() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let cuboid = Cuboid::new(Vector::new(0.8, 0.5, 0.6));
    let ball = Ball::new(0.7);
    let capsule = Capsule::new_x(0.5, 0.4);
    let cylinder = Cylinder::new(0.6, 0.5);

    for _ in 0..20 {
        let m1 = Isometry::new(
            Vector::new(
                rng.gen_range(-0.4..0.4),
                rng.gen_range(-0.4..0.4),
                rng.gen_range(-0.4..0.4),
            ),
            Vector::new(
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
                rng.gen_range(-3.0..3.0),
            ),
        );
        let m2 = Isometry::identity();

        run_expansion(&m1, &cuboid, &m2, &ball);
        run_expansion(&m1, &capsule, &m2, &cuboid);
        run_expansion(&m1, &cylinder, &m2, &capsule);
    }
}
