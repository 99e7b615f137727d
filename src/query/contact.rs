use crate::math::{Isometry, Real};
use crate::query::epa::{self, EpaOptions, EpaResult, SweptEpaResult};
use crate::query::gjk::{self, GjkOptions, ShapePair, SweptHull, SweptShapePair};
use crate::query::EpaError;
use crate::shape::SupportMap;

/// Computes the penetration of two convex shapes.
///
/// Returns `Ok(None)` if the shapes do not overlap. Otherwise, the returned normal points from
/// `g1` toward `g2`, and translating `g2` by `depth * normal` separates them.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use impact3d::math::Isometry;
/// use impact3d::na::Vector3;
/// use impact3d::query::{self, EpaOptions};
/// use impact3d::shape::Cuboid;
///
/// let cube = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
/// let pos1 = Isometry::identity();
/// let pos2 = Isometry::translation(1.5, 0.0, 0.0);
///
/// let contact = query::contact(&pos1, &cube, &pos2, &cube, &EpaOptions::default())
///     .unwrap()
///     .expect("the cubes overlap");
/// assert!((contact.depth - 0.5).abs() < 1.0e-3);
/// assert!(contact.normal.x > 0.999);
/// # }
/// ```
pub fn contact<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
    options: &EpaOptions,
) -> Result<Option<EpaResult>, EpaError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pair = ShapePair::new(pos1, g1, pos2, g2);
    let init_dir = pos2.translation.vector - pos1.translation.vector;

    match gjk::intersection_simplex(&pair, &init_dir, &GjkOptions::default()) {
        Some(simplex) => epa::epa_solve(&simplex, &pair, options).map(Some),
        None => Ok(None),
    }
}

/// Computes when `g2`, translating from `pos2_start` to `pos2_end`, first touches `g1`.
///
/// Returns `Ok(None)` if the shapes never touch during the motion. The moving shape keeps the
/// orientation of `pos2_start`. If both shapes already overlap at the start of the motion,
/// the static penetration is returned with a time of impact of zero.
pub fn contact_swept<G1, G2>(
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2_start: &Isometry<Real>,
    pos2_end: &Isometry<Real>,
    g2: &G2,
    options: &EpaOptions,
) -> Result<Option<SweptEpaResult>, EpaError>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let swept = SweptShapePair::new(pos1, g1, pos2_start, pos2_end, g2);
    let init_dir = pos2_start.translation.vector - pos1.translation.vector;

    match gjk::intersection_simplex(&SweptHull(&swept), &init_dir, &GjkOptions::default()) {
        Some(simplex) => epa::epa_solve_swept(&simplex, &swept, options).map(Some),
        None => Ok(None),
    }
}
