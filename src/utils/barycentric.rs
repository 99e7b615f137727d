use crate::math::{Point, Real, DEFAULT_EPSILON};

/// Computes the barycentric coordinates of `pt` with respect to the triangle `a, b, c`.
///
/// The point is implicitly projected onto the triangle's plane first. Returns `None` if the
/// triangle is degenerate.
pub fn barycentric_coordinates(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    pt: &Point<Real>,
) -> Option<[Real; 3]> {
    let ab = b - a;
    let ac = c - a;
    let ap = pt - a;

    let d00 = ab.norm_squared();
    let d01 = ab.dot(&ac);
    let d11 = ac.norm_squared();
    let d20 = ap.dot(&ab);
    let d21 = ap.dot(&ac);

    let denom = d00 * d11 - d01 * d01;

    if denom <= DEFAULT_EPSILON * d00 * d11 {
        return None;
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;

    Some([1.0 - v - w, v, w])
}

/// Evaluates the point with barycentric coordinates `bcoords` on the triangle `a, b, c`.
#[inline]
pub fn evaluate_barycentric(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    bcoords: &[Real; 3],
) -> Point<Real> {
    a * bcoords[0] + b.coords * bcoords[1] + c.coords * bcoords[2]
}
