//! Ashikhmin-Shirley Distribution

use super::phong;
use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

/// Returns the exponent of the anisotropic Phong lobe in the azimuth of `m`.
fn lobe_exponent(m: &Vector3f, exponent_u: Float, exponent_v: Float) -> Float {
    let ds = 1.0 - m.z * m.z;
    if ds <= 0.0 {
        0.0
    } else {
        (exponent_u * m.x * m.x + exponent_v * m.y * m.y) / ds
    }
}

/// Returns the anisotropic Phong density of microfacets with normal `m`.
///
/// * `m`          - Microsurface normal.
/// * `exponent_u` - Exponent along the tangent.
/// * `exponent_v` - Exponent along the bitangent.
pub fn d(m: &Vector3f, exponent_u: Float, exponent_v: Float) -> Float {
    let exponent = lobe_exponent(m, exponent_u, exponent_v);
    ((exponent_u + 2.0) * (exponent_v + 2.0)).sqrt() * INV_TWO_PI * m.z.powf(exponent)
}

/// Returns the density with which `sample` generates `m`.
///
/// * `m`          - Microsurface normal.
/// * `exponent_u` - Exponent along the tangent.
/// * `exponent_v` - Exponent along the bitangent.
pub fn pdf(m: &Vector3f, exponent_u: Float, exponent_v: Float) -> Float {
    let exponent = lobe_exponent(m, exponent_u, exponent_v);
    ((exponent_u + 1.0) * (exponent_v + 1.0)).sqrt() * INV_TWO_PI * m.z.powf(exponent)
}

/// Samples azimuth and cos(θ) in the first quadrant.
fn sample_first_quadrant(u1: Float, u2: Float, exponent_u: Float, exponent_v: Float) -> (Float, Float) {
    let phi = if exponent_u == exponent_v {
        PI * u1 * 0.5
    } else {
        (((exponent_u + 1.0) / (exponent_v + 1.0)).sqrt() * (PI * u1 * 0.5).tan()).atan()
    };
    let cos_phi = phi.cos();
    let sin_phi = phi.sin();
    let cos_theta = u2.powf(1.0 / (exponent_u * cos_phi * cos_phi + exponent_v * sin_phi * sin_phi + 1.0));
    (phi, cos_theta)
}

/// Samples a microsurface normal by mirroring a first quadrant sample into
/// the quadrant selected by `u.x`.
///
/// * `u`          - Uniform sample in [0, 1)².
/// * `exponent_u` - Exponent along the tangent.
/// * `exponent_v` - Exponent along the bitangent.
pub fn sample(u: &Point2f, exponent_u: Float, exponent_v: Float) -> Vector3f {
    let (phi, cos_theta) = if u.x < 0.25 {
        sample_first_quadrant(4.0 * u.x, u.y, exponent_u, exponent_v)
    } else if u.x < 0.5 {
        let (phi, cos_theta) = sample_first_quadrant(4.0 * (0.5 - u.x), u.y, exponent_u, exponent_v);
        (PI - phi, cos_theta)
    } else if u.x < 0.75 {
        let (phi, cos_theta) = sample_first_quadrant(4.0 * (u.x - 0.5), u.y, exponent_u, exponent_v);
        (phi + PI, cos_theta)
    } else {
        let (phi, cos_theta) = sample_first_quadrant(4.0 * (1.0 - u.x), u.y, exponent_u, exponent_v);
        (TWO_PI - phi, cos_theta)
    };

    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    spherical_direction(sin_theta, cos_theta, phi)
}

/// Smith's shadowing term using the Phong approximation with the exponent
/// interpolated in the azimuth of `v`.
///
/// * `v`          - The direction.
/// * `tan_theta`  - Absolute tangent of `v`.
/// * `exponent_u` - Exponent along the tangent.
/// * `exponent_v` - Exponent along the bitangent.
pub fn smith_g1(v: &Vector3f, tan_theta: Float, exponent_u: Float, exponent_v: Float) -> Float {
    let (cos_2_phi, sin_2_phi) = cos_sin_2_phi(v);
    phong::smith_g1(tan_theta, exponent_u * cos_2_phi + exponent_v * sin_2_phi)
}
