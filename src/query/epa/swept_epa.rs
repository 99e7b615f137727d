//! Time of impact of a shape translating toward a stationary one.
//!
//! Let `A` be the stationary shape and `B` translate by `sweep` over `t ∈ [0, 1]`. The polytope
//! is grown inside the Minkowski difference `H` between `A` and the volume swept by `B`, but
//! only around the ray starting at the origin and going along `-sweep`: the point where that
//! ray leaves `H`, at distance `D`, is the configuration where `B` has just touched `A` after
//! moving by `|sweep| - D`.

use crate::math::{Point, Real, UnitVector, DEFAULT_EPSILON};
use crate::query::epa::{
    epa_solve, EpaOptions, EpaResult, EpaStatus, ExpandingSimplex, ExpandingSimplexFlags,
    SweptEpaResult, EPA_MAX_FACES,
};
use crate::query::gjk::{
    self, CsoPoint, GjkOptions, MinkowskiSum, Simplex, SweptAt, SweptHull, SweptMinkowskiSum,
};
use crate::query::EpaError;
use crate::utils::{self, Plane};
use na::Unit;

/// Computes when and where the moving shape of `swept` first touches the stationary one.
///
/// The `simplex` must contain the origin in the Minkowski difference between the stationary
/// shape and the volume swept by the moving shape, e.g., the result of
/// [`gjk::intersection_simplex`] on [`SweptHull`]. If the sweep is (almost) zero, or if the
/// shapes already overlap at `t = 0`, the static penetration at `t = 0` is returned.
pub fn epa_solve_swept<S: ?Sized + SweptMinkowskiSum>(
    simplex: &Simplex,
    swept: &S,
    options: &EpaOptions,
) -> Result<SweptEpaResult, EpaError> {
    let sweep = swept.sweep();
    let sweep_len = sweep.norm();

    if relative_eq!(sweep_len, 0.0, epsilon = options.tolerance) {
        let result = epa_solve(simplex, &SweptAt::new(swept, 0.0), options)?;
        return Ok(SweptEpaResult {
            result,
            time_of_impact: 0.0,
        });
    }

    let hull = SweptHull(swept);
    let ray_dir = Unit::new_unchecked(-sweep / sweep_len);
    let mut polytope =
        ExpandingSimplex::new(simplex, &hull, options, ExpandingSimplexFlags::SKIP_DISTANCE)?;
    let (mut face_id, _) = polytope.faces().next().ok_or(EpaError::DegenerateSimplex)?;
    let mut start_edge = 0;
    let mut status = EpaStatus::IterationLimit;
    let mut face = *polytope.face(face_id);

    for _ in 0..options.max_iterations {
        (face_id, start_edge) = epa_swept_find_face(&polytope, &ray_dir, face_id, start_edge);
        face = *polytope.face(face_id);
        let support = hull.support(&face.normal());
        let support_dist = support.point.coords.dot(&face.normal());

        if support_dist - face.plane_distance() < options.tolerance {
            status = EpaStatus::Converged;
            break;
        }

        match polytope.add_point(support, face_id) {
            Ok(first_new_face) => {
                face_id = first_new_face;
                start_edge = 0;
            }
            Err(EpaError::DegenerateSimplex) => {
                log::debug!("Swept EPA: expansion stalled, using the current face.");
                status = EpaStatus::Stalled;
                break;
            }
            Err(err) => return Err(err),
        }
    }

    if status == EpaStatus::IterationLimit {
        (face_id, _) = epa_swept_find_face(&polytope, &ray_dir, face_id, start_edge);
        face = *polytope.face(face_id);
        log::debug!(
            "Swept EPA: no convergence after {} iterations.",
            options.max_iterations
        );
    }

    // Vertices are never removed, so `face` is valid even if the last expansion failed.
    let [a, b, c] = face.pts().map(|i| polytope.vertices()[i]);
    let cast = Plane::new(face.normal(), &a.point).cast_ray(&Point::origin(), &ray_dir);
    let grazing = cast.is_none() || face.plane_distance() <= options.tolerance;
    let backoff = match cast {
        Some(backoff) if !grazing => backoff,
        _ => {
            log::debug!("Swept EPA: the motion grazes the hit face, bisecting along the ray.");
            ray_exit_distance(&hull, &ray_dir, &face.normal(), sweep_len, options)
        }
    };

    if backoff >= sweep_len {
        if let Some(result) = overlap_at(swept, 0.0, options)? {
            return Ok(result);
        }
    }

    // The shapes only touch at the start of the motion if `backoff` still exceeds the sweep.
    let backoff = backoff.min(sweep_len);
    let time_of_impact = (1.0 - backoff / sweep_len).clamp(0.0, 1.0);
    let with_margin =
        (1.0 - (backoff + options.swept_margin) / sweep_len).clamp(0.0, time_of_impact);

    if grazing && backoff < sweep_len {
        match overlap_at(swept, time_of_impact, options) {
            Ok(Some(mut result)) => {
                result.time_of_impact = with_margin;
                return Ok(result);
            }
            // Touching only: fall back to the face hit by the ray.
            Ok(None) | Err(EpaError::DegenerateSimplex) => {}
            Err(err) => return Err(err),
        }
    }

    let hit = Point::from(*ray_dir * backoff);
    let bcoords = utils::barycentric_coordinates(&a.point, &b.point, &c.point, &hit)
        .unwrap_or_else(|| face.bcoords());
    let point_a = utils::evaluate_barycentric(&a.orig1, &b.orig1, &c.orig1, &bcoords);

    Ok(SweptEpaResult {
        result: EpaResult {
            normal: face.normal(),
            depth: 0.0,
            point_a,
            point_b: point_a,
            status,
        },
        time_of_impact: with_margin,
    })
}

/// Walks the faces of `polytope` from the edge `start_edge` of the face `start_face` toward the
/// face pierced by the ray starting at the origin with direction `dir`.
///
/// Returns that face and the edge the walk stopped at, from which the next walk can resume.
/// The polytope must contain the origin and its faces must be wound counter-clockwise when
/// seen from outside.
pub fn epa_swept_find_face(
    polytope: &ExpandingSimplex,
    dir: &UnitVector<Real>,
    start_face: usize,
    start_edge: usize,
) -> (usize, usize) {
    let mut face_id = start_face;
    let mut edge = start_edge % 3;
    let mut edges_left = 3;

    for _ in 0..EPA_MAX_FACES * 3 {
        if edges_left == 0 {
            break;
        }

        let face = polytope.face(face_id);
        let p0 = polytope.vertices()[face.pts()[edge]].point;
        let p1 = polytope.vertices()[face.pts()[(edge + 1) % 3]].point;

        // The ray leaves the cone spanned by the face through this edge.
        if p0.coords.cross(&p1.coords).dot(dir) < 0.0 {
            let next = face.adj()[edge];
            let entry = (0..3).find(|&j| {
                let pts = polytope.face(next).pts();
                pts[j] == face.pts()[(edge + 1) % 3] && pts[(j + 1) % 3] == face.pts()[edge]
            });

            let Some(entry) = entry else {
                log::debug!("Swept EPA: inconsistent adjacency during the face walk.");
                break;
            };

            face_id = next;
            edge = (entry + 1) % 3;
            edges_left = 2;
        } else {
            edge = (edge + 1) % 3;
            edges_left -= 1;
        }
    }

    (face_id, edge)
}

// Static penetration at time `t`, or `None` if the shapes do not overlap there.
fn overlap_at<S: ?Sized + SweptMinkowskiSum>(
    swept: &S,
    t: Real,
    options: &EpaOptions,
) -> Result<Option<SweptEpaResult>, EpaError> {
    let frozen = SweptAt::new(swept, t);
    let init_dir = swept.sweep();

    let Some(simplex) = gjk::intersection_simplex(&frozen, &init_dir, &GjkOptions::default())
    else {
        return Ok(None);
    };

    Ok(Some(SweptEpaResult {
        result: epa_solve(&simplex, &frozen, options)?,
        time_of_impact: t,
    }))
}

// The distance along `dir`, at most `max_dist`, at which the ray from the origin leaves `hull`.
//
// Used when the ray runs inside the plane of the face it should leave through. Each step tests
// whether the point at the bisected distance lies inside `hull`, with GJK on `hull` translated
// so that this point becomes the origin. The tested point is moved slightly against
// `face_normal` so that it never lies on the grazed face itself.
fn ray_exit_distance<S: ?Sized + SweptMinkowskiSum>(
    hull: &SweptHull<S>,
    dir: &UnitVector<Real>,
    face_normal: &UnitVector<Real>,
    max_dist: Real,
    options: &EpaOptions,
) -> Real {
    let nudge = **face_normal * options.tolerance.max(gjk::eps_tol());
    let contains = |dist: Real| {
        let shift = **dir * dist - nudge;
        let shifted = |d: &UnitVector<Real>| {
            let pt = hull.support(d);
            CsoPoint::new_with_point(pt.point - shift, pt.orig1, pt.orig2 + shift)
        };

        gjk::intersection_simplex(&shifted, dir, &GjkOptions::default()).is_some()
    };

    if contains(max_dist) {
        return max_dist;
    }

    let resolution = options.tolerance.max(DEFAULT_EPSILON * max_dist);
    let (mut inside, mut outside) = (0.0, max_dist);

    for _ in 0..64 {
        if outside - inside <= resolution {
            break;
        }

        let mid = (inside + outside) / 2.0;

        if contains(mid) {
            inside = mid;
        } else {
            outside = mid;
        }
    }

    inside
}
