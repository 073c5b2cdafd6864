//! Common

#![allow(dead_code)]
use crate::geometry::*;
use crate::pbrt::*;

/// Returns the cosine of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

/// Returns the square of the cosine of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_2_theta(w: &Vector3f) -> Float {
    w.z * w.z
}

/// Returns the absolute value of the cosine of the angle θ measured from the
/// given direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    abs(w.z)
}

/// Returns the square of the sine of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_2_theta(w: &Vector3f) -> Float {
    max(0.0, 1.0 - cos_2_theta(w))
}

/// Returns the sine of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn sin_theta(w: &Vector3f) -> Float {
    sin_2_theta(w).sqrt()
}

/// Returns the tangent of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn tan_theta(w: &Vector3f) -> Float {
    sin_theta(w) / cos_theta(w)
}

/// Returns the square of the tangent of the angle θ measured from the given
/// direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn tan_2_theta(w: &Vector3f) -> Float {
    sin_2_theta(w) / cos_2_theta(w)
}

/// Returns the squares of the cosine and sine of the azimuth Φ of the given
/// direction. Directions along the z-axis return (1, 0).
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_sin_2_phi(w: &Vector3f) -> (Float, Float) {
    let s2 = sin_2_theta(w);
    if s2 == 0.0 {
        (1.0, 0.0)
    } else {
        let inv = 1.0 / s2;
        (clamp(w.x * w.x * inv, 0.0, 1.0), clamp(w.y * w.y * inv, 0.0, 1.0))
    }
}

/// Mirrors a direction about a microsurface normal.
///
/// * `wi` - The direction to reflect.
/// * `m`  - The microsurface normal.
#[inline]
pub fn reflect(wi: &Vector3f, m: &Vector3f) -> Vector3f {
    2.0 * wi.dot(m) * *m - *wi
}

/// Refracts a direction through a microsurface with normal `m`. Returns `None`
/// on total internal reflection.
///
/// The transmitted direction ends up on the opposite side of the surface from
/// `wi` regardless of which hemisphere `wi` is in.
///
/// * `wi`    - The direction to refract.
/// * `m`     - The microsurface normal.
/// * `eta_i` - Index of refraction on the side of `wi`.
/// * `eta_t` - Index of refraction on the transmitted side.
pub fn refract(wi: &Vector3f, m: &Vector3f, eta_i: Float, eta_t: Float) -> Option<Vector3f> {
    let eta = eta_i / eta_t;
    let c = wi.dot(m);

    // Snell's law for the squared cosine of the transmitted angle.
    let cos_2_theta_t = 1.0 + eta * eta * (c * c - 1.0);
    if cos_2_theta_t < 0.0 {
        return None;
    }

    Some(*m * (eta * c - signum(wi.z) * cos_2_theta_t.sqrt()) - *wi * eta)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
