//! Beckmann Distribution

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;

/// Returns the Beckmann density of microfacets with normal `m`. The caller
/// guarantees `m` lies in the upper hemisphere.
///
/// * `m`     - Microsurface normal.
/// * `alpha` - RMS slope of the microfacets.
pub fn d(m: &Vector3f, alpha: Float) -> Float {
    let alpha_2 = alpha * alpha;
    let cos_2_theta = cos_2_theta(m);
    (-tan_2_theta(m) / alpha_2).exp() / (PI * alpha_2 * cos_2_theta * cos_2_theta)
}

/// Samples a microsurface normal proportional to `d(m) cos(θm)`.
///
/// * `u`     - Uniform sample in [0, 1)².
/// * `alpha` - RMS slope of the microfacets.
pub fn sample(u: &Point2f, alpha: Float) -> Vector3f {
    let tan_2_theta = -alpha * alpha * (1.0 - u.x).ln();
    let cos_theta = 1.0 / (1.0 + tan_2_theta).sqrt();
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    spherical_direction(sin_theta, cos_theta, TWO_PI * u.y)
}

/// Rational approximation of the Beckmann Smith shadowing term in terms of
/// `a = 1 / (α tan(θ))`.
///
/// * `a` - Shadowing parameter.
#[rustfmt::skip]
pub fn rational_g1(a: Float) -> Float {
    if a >= 1.6 {
        1.0
    } else {
        let a_2 = a * a;
        (3.535 * a + 2.181 * a_2) /
        (1.0 + 2.276 * a + 2.577 * a_2)
    }
}

/// Smith's shadowing term for one direction. `tan_theta` is |tan(θv)| and is
/// non-zero.
///
/// * `tan_theta` - Absolute tangent of the direction.
/// * `alpha`     - RMS slope of the microfacets.
pub fn smith_g1(tan_theta: Float, alpha: Float) -> Float {
    rational_g1(1.0 / (alpha * tan_theta))
}
