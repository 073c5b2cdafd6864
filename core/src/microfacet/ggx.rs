//! GGX Distribution

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

/// Returns the GGX density of microfacets with normal `m`. The caller
/// guarantees `m` lies in the upper hemisphere.
///
/// * `m`     - Microsurface normal.
/// * `alpha` - Roughness.
pub fn d(m: &Vector3f, alpha: Float) -> Float {
    let alpha_2 = alpha * alpha;
    let cos_2_theta = cos_2_theta(m);
    let root = alpha_2 + tan_2_theta(m);
    alpha_2 / (PI * cos_2_theta * cos_2_theta * root * root)
}

/// Samples a microsurface normal proportional to `d(m) cos(θm)`.
///
/// * `u`     - Uniform sample in [0, 1)².
/// * `alpha` - Roughness.
pub fn sample(u: &Point2f, alpha: Float) -> Vector3f {
    let tan_2_theta = alpha * alpha * u.x / (1.0 - u.x);
    let cos_theta = 1.0 / (1.0 + tan_2_theta).sqrt();
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    spherical_direction(sin_theta, cos_theta, TWO_PI * u.y)
}

/// Smith's shadowing term for one direction. Exact for GGX.
///
/// * `tan_theta` - Absolute tangent of the direction.
/// * `alpha`     - Roughness.
pub fn smith_g1(tan_theta: Float, alpha: Float) -> Float {
    let root = alpha * tan_theta;
    2.0 / (1.0 + (1.0 + root * root).sqrt())
}
