//! Penetration depth of two overlapping convex shapes.

use crate::query::epa::{
    EpaOptions, EpaResult, EpaStatus, ExpandingSimplex, ExpandingSimplexFlags,
};
use crate::query::gjk::{MinkowskiSum, Simplex};
use crate::query::EpaError;

/// Computes the penetration depth, contact normal and witness points of the shapes whose
/// Minkowski difference is `minkowski`.
///
/// The `simplex` must contain the origin (or touch it), as returned by
/// [`gjk::intersection_simplex`](crate::query::gjk::intersection_simplex). The polytope built
/// from it is repeatedly expanded toward its face closest to the origin until the support point
/// along that face's normal is less than `options.tolerance` away from it.
///
/// If the iteration budget runs out, or if numerical degeneracies prevent further expansion,
/// the best face found so far is still returned with a status other than
/// [`EpaStatus::Converged`].
pub fn epa_solve<M: ?Sized + MinkowskiSum>(
    simplex: &Simplex,
    minkowski: &M,
    options: &EpaOptions,
) -> Result<EpaResult, EpaError> {
    let mut polytope =
        ExpandingSimplex::new(simplex, minkowski, options, ExpandingSimplexFlags::empty())?;
    let mut status = EpaStatus::IterationLimit;
    let mut best = closest_face_result(
        &polytope,
        polytope
            .closest_face()
            .ok_or(EpaError::DegenerateSimplex)?,
    );

    for _ in 0..options.max_iterations {
        let face_id = polytope
            .closest_face()
            .ok_or(EpaError::DegenerateSimplex)?;
        let face = *polytope.face(face_id);
        let support = minkowski.support(&face.normal());
        let support_dist = support.point.coords.dot(&face.normal());

        best = closest_face_result(&polytope, face_id);

        let known_vertex = face
            .pts()
            .iter()
            .any(|&i| relative_eq!(polytope.vertices()[i].point, support.point));

        if support_dist - face.plane_distance() < options.tolerance || known_vertex {
            status = EpaStatus::Converged;
            break;
        }

        match polytope.add_point(support, face_id) {
            Ok(_) => {}
            Err(EpaError::DegenerateSimplex) => {
                log::debug!("EPA: expansion stalled, returning the best face found so far.");
                status = EpaStatus::Stalled;
                break;
            }
            Err(err) => return Err(err),
        }
    }

    if status == EpaStatus::IterationLimit {
        // The last expansion may have produced a closer face.
        if let Some(face_id) = polytope.closest_face() {
            best = closest_face_result(&polytope, face_id);
        }

        log::debug!(
            "EPA: no convergence after {} iterations.",
            options.max_iterations
        );
    }

    best.status = status;
    Ok(best)
}

/// Converts the face `id` of `polytope` into a contact.
fn closest_face_result(polytope: &ExpandingSimplex, id: usize) -> EpaResult {
    let face = polytope.face(id);
    let (point_a, point_b) = polytope.blend_origins(id, &face.bcoords());

    EpaResult {
        normal: face.normal(),
        depth: face.plane_distance().max(0.0),
        point_a,
        point_b,
        status: EpaStatus::Converged,
    }
}
