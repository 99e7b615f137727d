//! The boolean Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK builds a simplex inside the Minkowski difference `A - B` of two convex shapes, moving it
//! toward the origin with support queries. The shapes intersect if and only if the origin ends
//! up enclosed (or touched) by the simplex. The terminal simplex is exactly what the Expanding
//! Polytope Algorithm needs to start computing the penetration depth.

use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CsoPoint, MinkowskiSum, Simplex};
use na::Unit;

#[cfg(not(feature = "std"))]
use na::ComplexField; // for .abs(), .powi()

/// Tunables of the boolean GJK.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkOptions {
    /// The maximum number of support points added before giving up.
    pub max_iterations: usize,
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions { max_iterations: 64 }
    }
}

/// The absolute tolerance of the GJK touching test and of the EPA visibility tests.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 100.0
}

enum Reduction {
    Enclosed,
    Search(Vector<Real>),
}

/// Runs the boolean GJK on `minkowski`, starting with the support point toward `init_dir`.
///
/// Returns the terminal simplex if the origin lies inside or on the boundary of the Minkowski
/// difference, and `None` if a separating direction was found or if the iteration budget
/// ran out. A zero `init_dir` is replaced by the `x` axis.
pub fn intersection_simplex<M: ?Sized + MinkowskiSum>(
    minkowski: &M,
    init_dir: &Vector<Real>,
    options: &GjkOptions,
) -> Option<Simplex> {
    let dir = Unit::try_new(*init_dir, DEFAULT_EPSILON).unwrap_or_else(Vector::x_axis);
    let first = minkowski.support(&dir);

    let mut simplex = Simplex::new();
    let _ = simplex.push(first);
    let mut search = -first.point.coords;

    for _ in 0..options.max_iterations {
        // The origin coincides with the simplex.
        let Some(dir) = Unit::try_new(search, DEFAULT_EPSILON) else {
            return Some(simplex);
        };

        let support = minkowski.support(&dir);

        if support.point.coords.dot(&dir) < 0.0 {
            return None;
        }

        let _ = simplex.push(support);

        match reduce(&mut simplex) {
            Reduction::Enclosed => return Some(simplex),
            Reduction::Search(new_search) => search = new_search,
        }
    }

    log::debug!("GJK did not converge after {} iterations.", options.max_iterations);
    None
}

// (a × b) × c
fn triple(a: &Vector<Real>, b: &Vector<Real>, c: &Vector<Real>) -> Vector<Real> {
    a.cross(b).cross(c)
}

fn reduce(simplex: &mut Simplex) -> Reduction {
    match simplex.len() {
        2 => {
            let [b, a] = [simplex.points()[0], simplex.points()[1]];
            reduce_segment(simplex, b, a)
        }
        3 => {
            let [c, b, a] = [
                simplex.points()[0],
                simplex.points()[1],
                simplex.points()[2],
            ];
            reduce_triangle(simplex, c, b, a)
        }
        4 => {
            let [d, c, b, a] = [
                simplex.points()[0],
                simplex.points()[1],
                simplex.points()[2],
                simplex.points()[3],
            ];
            reduce_tetrahedron(simplex, d, c, b, a)
        }
        _ => Reduction::Search(-simplex.points()[0].point.coords),
    }
}

// `a` is the newest point.
fn reduce_segment(simplex: &mut Simplex, b: CsoPoint, a: CsoPoint) -> Reduction {
    let ab = b.point - a.point;
    let ao = -a.point.coords;

    if ab.dot(&ao) > 0.0 {
        let search = triple(&ab, &ao, &ab);

        // The origin lies on the segment.
        if search.norm_squared() <= (eps_tol() * ab.norm_squared()).powi(2) {
            return Reduction::Enclosed;
        }

        simplex.set(&[b, a]);
        Reduction::Search(search)
    } else {
        simplex.set(&[a]);
        Reduction::Search(ao)
    }
}

fn reduce_triangle(simplex: &mut Simplex, c: CsoPoint, b: CsoPoint, a: CsoPoint) -> Reduction {
    let ab = b.point - a.point;
    let ac = c.point - a.point;
    let ao = -a.point.coords;
    let abc = ab.cross(&ac);

    if abc.cross(&ac).dot(&ao) > 0.0 {
        if ac.dot(&ao) > 0.0 {
            simplex.set(&[c, a]);
            return Reduction::Search(triple(&ac, &ao, &ac));
        }

        return reduce_segment(simplex, b, a);
    }

    if ab.cross(&abc).dot(&ao) > 0.0 {
        return reduce_segment(simplex, b, a);
    }

    let side = abc.dot(&ao);

    // The origin lies on the triangle.
    if side.abs() <= eps_tol() * abc.norm() {
        simplex.set(&[c, b, a]);
        return Reduction::Enclosed;
    }

    if side > 0.0 {
        simplex.set(&[c, b, a]);
        Reduction::Search(abc)
    } else {
        simplex.set(&[b, c, a]);
        Reduction::Search(-abc)
    }
}

// The base triangle `d, c, b` is wound so that `a` lies on the side of its normal, which makes
// the normals of the three faces incident to `a` point outward.
fn reduce_tetrahedron(
    simplex: &mut Simplex,
    d: CsoPoint,
    c: CsoPoint,
    b: CsoPoint,
    a: CsoPoint,
) -> Reduction {
    let ab = b.point - a.point;
    let ac = c.point - a.point;
    let ad = d.point - a.point;
    let ao = -a.point.coords;

    let abc = ab.cross(&ac);
    let acd = ac.cross(&ad);
    let adb = ad.cross(&ab);

    if abc.dot(&ao) > eps_tol() * abc.norm() {
        return reduce_triangle(simplex, c, b, a);
    }

    if acd.dot(&ao) > eps_tol() * acd.norm() {
        return reduce_triangle(simplex, d, c, a);
    }

    if adb.dot(&ao) > eps_tol() * adb.norm() {
        return reduce_triangle(simplex, b, d, a);
    }

    Reduction::Enclosed
}
