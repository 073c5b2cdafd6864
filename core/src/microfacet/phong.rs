//! Phong Distribution

use super::beckmann;
use crate::geometry::*;
use crate::pbrt::*;

/// Returns the normalized Phong density of microfacets with normal `m`.
///
/// * `m`        - Microsurface normal.
/// * `exponent` - Phong exponent.
pub fn d(m: &Vector3f, exponent: Float) -> Float {
    (exponent + 2.0) * INV_TWO_PI * m.z.powf(exponent)
}

/// Samples a microsurface normal proportional to `d(m) cos(θm)`.
///
/// * `u`        - Uniform sample in [0, 1)².
/// * `exponent` - Phong exponent.
pub fn sample(u: &Point2f, exponent: Float) -> Vector3f {
    let cos_theta = u.x.powf(1.0 / (exponent + 2.0));
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    spherical_direction(sin_theta, cos_theta, TWO_PI * u.y)
}

/// Smith's shadowing term for one direction using the Beckmann
/// approximation with an equivalent roughness.
///
/// * `tan_theta` - Absolute tangent of the direction.
/// * `exponent`  - Phong exponent.
pub fn smith_g1(tan_theta: Float, exponent: Float) -> Float {
    beckmann::rational_g1((0.5 * exponent + 1.0).sqrt() / tan_theta)
}
