//! Fresnel Dielectrics

use crate::pbrt::*;
use std::mem::swap;

/// Returns the Fresnel reflectance at a smooth dielectric boundary for
/// unpolarized light.
///
/// * `cos_theta_i` - cos(θi) between the incident direction and the normal
///                   pointing into the exterior medium. Negative values mean
///                   the direction arrives from the interior.
/// * `eta_i`       - Index of refraction of the exterior medium.
/// * `eta_t`       - Index of refraction of the interior medium.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;

    // Potentially swap indices of refraction.
    let entering = cos_theta_i > 0.0;
    if !entering {
        swap(&mut eta_i, &mut eta_t);
        cos_theta_i = abs(cos_theta_i);
    }

    // Compute cos(θt) using Snell's law.
    let sin_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Handle total internal reflection.
    if sin_theta_t >= 1.0 {
        1.0
    } else {
        let cos_theta_t = max(0.0, 1.0 - sin_theta_t * sin_theta_t).sqrt();
        let r_parl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
            / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
        let r_perp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
            / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
        (r_parl * r_parl + r_perp * r_perp) / 2.0
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    #[test]
    fn normal_incidence() {
        let r = (0.5 / 2.5) * (0.5 / 2.5);
        assert!(approx_eq!(f32, fr_dielectric(1.0, 1.0, 1.5), r, epsilon = 1e-6));
        assert!(approx_eq!(f32, fr_dielectric(-1.0, 1.0, 1.5), r, epsilon = 1e-6));
    }

    #[test]
    fn total_internal_reflection() {
        // 60 degrees inside glass is past the critical angle of ~41.8 degrees.
        let cos_theta = -(60.0_f32.to_radians().cos());
        assert_eq!(fr_dielectric(cos_theta, 1.0, 1.5), 1.0);
    }

    #[test]
    fn grazing_incidence() {
        assert!(approx_eq!(f32, fr_dielectric(0.0001, 1.0, 1.5), 1.0, epsilon = 1e-3));
    }

    proptest! {
        #[test]
        fn reflectance_in_unit_interval(cos_theta in -1.0..1.0f32, eta in 1.01..3.0f32) {
            let f = fr_dielectric(cos_theta, 1.0, eta);
            prop_assert!((0.0..=1.0).contains(&f));
        }

        #[test]
        fn matched_media_do_not_reflect(cos_theta in 0.01..1.0f32) {
            prop_assert!(approx_eq!(f32, fr_dielectric(cos_theta, 1.5, 1.5), 0.0, epsilon = 1e-6));
        }
    }
}
