use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("Cannot measure an angle with a zero-length arm (|AB| = {ab}, |BC| = {bc})")]
    ZeroLengthVector { ab: f64, bc: f64 },
}

/// Euclidean distance between two points.
pub fn calculate_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Angle at `vertex` formed by the segments to `a` and to `c`.
///
/// Returns radians in `[0, π]`, or degrees in `[0, 180]` when `degrees` is set.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroLengthVector`] if `a` or `c` coincides with the vertex,
/// since the angle is undefined there.
pub fn calculate_angle(
    a: &Point3<f64>,
    vertex: &Point3<f64>,
    c: &Point3<f64>,
    degrees: bool,
) -> Result<f64, GeometryError> {
    let ab = vertex - a;
    let bc = vertex - c;

    let ab_norm = ab.norm();
    let bc_norm = bc.norm();
    if ab_norm < f64::EPSILON || bc_norm < f64::EPSILON {
        return Err(GeometryError::ZeroLengthVector {
            ab: ab_norm,
            bc: bc_norm,
        });
    }

    // Rounding can push the cosine just past ±1.
    let cos_theta = (ab.dot(&bc) / (ab_norm * bc_norm)).clamp(-1.0, 1.0);
    let theta = cos_theta.acos();

    if degrees {
        Ok(theta.to_degrees())
    } else {
        Ok(theta)
    }
}
