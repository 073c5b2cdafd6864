//! Rough Dielectric BSDF

use super::*;
use std::mem::swap;

/// Widens the roughness used for sampling so that importance weights stay
/// bounded near grazing incidence. `pdf()` applies the identical factor.
///
/// * `wi`      - Incident direction.
/// * `alpha_u` - Roughness along the tangent.
/// * `alpha_v` - Roughness along the bitangent.
fn widened_roughness(wi: &Vector3f, alpha_u: Float, alpha_v: Float) -> (Float, Float) {
    let factor = 1.2 - 0.2 * abs_cos_theta(wi).sqrt();
    (alpha_u * factor, alpha_v * factor)
}

/// Outcome of sampling a microfacet normal and a lobe.
struct LobeSample {
    /// The sampled microsurface normal.
    m: Vector3f,

    /// Roughness along the tangent.
    alpha_u: Float,

    /// Roughness along the bitangent.
    alpha_v: Float,

    /// Widened roughness along the tangent.
    sample_alpha_u: Float,

    /// Widened roughness along the bitangent.
    sample_alpha_v: Float,

    /// True if the reflection lobe was chosen.
    reflected: bool,

    /// Index of refraction on the incident side.
    eta_i: Float,

    /// Index of refraction on the transmitted side.
    eta_t: Float,
}

impl RoughDielectric {
    /// Returns the distribution's roughness parameters at a surface point.
    fn roughness_at(&self, si: &SurfaceInteraction) -> (Float, Float) {
        (
            self.distribution.transform_roughness(self.alpha_u.evaluate(si).average()),
            self.distribution.transform_roughness(self.alpha_v.evaluate(si).average()),
        )
    }

    /// Returns the indices of refraction on the incident and transmitted
    /// sides of the interface.
    fn eta_pair(&self, wi: &Vector3f) -> (Float, Float) {
        let mut eta_i = self.ext_ior;
        let mut eta_t = self.int_ior;
        if cos_theta(wi) < 0.0 {
            swap(&mut eta_i, &mut eta_t);
        }
        (eta_i, eta_t)
    }

    /// Returns whether the reflection and transmission lobes are admitted by
    /// the query.
    fn admissible_lobes(&self, rec: &BSDFQueryRecord) -> (bool, bool) {
        (
            rec.admits(REFLECTION_COMPONENT, BxDFType::GLOSSY_REFLECTION),
            rec.admits(TRANSMISSION_COMPONENT, BxDFType::GLOSSY_TRANSMISSION),
        )
    }

    /// Returns the half-vector of a reflection pair, flipped into the
    /// hemisphere around the normal.
    fn reflection_half_vector(wi: &Vector3f, wo: &Vector3f) -> Vector3f {
        (*wo + *wi).normalize() * signum(cos_theta(wo))
    }

    /// Returns the half-vector of a transmission pair. It is flipped when
    /// the exterior is the denser medium.
    fn transmission_half_vector(&self, wi: &Vector3f, wo: &Vector3f, eta_i: Float, eta_t: Float) -> Vector3f {
        let sign = if self.ext_ior > self.int_ior { 1.0 } else { -1.0 };
        (*wi * eta_i + *wo * eta_t).normalize() * sign
    }

    /// Samples a microsurface normal, chooses a lobe and writes the outgoing
    /// direction to the query record. Returns `None` if the attempt produced
    /// no valid direction.
    fn sample_lobe(&self, rec: &mut BSDFQueryRecord, u: &Point2f) -> Option<LobeSample> {
        let (has_reflection, has_transmission) = self.admissible_lobes(rec);
        if !has_reflection && !has_transmission {
            return None;
        }

        let (alpha_u, alpha_v) = self.roughness_at(rec.si);
        let (sample_alpha_u, sample_alpha_v) = widened_roughness(&rec.wi, alpha_u, alpha_v);

        let m = self.distribution.sample(u, sample_alpha_u, sample_alpha_v);

        // Choose the lobe in proportion to the Fresnel reflectance.
        let mut reflected = has_reflection;
        if has_reflection && has_transmission {
            let f = fr_dielectric(rec.wi.dot(&m), self.ext_ior, self.int_ior);
            if rec.sampler.get_1d() > f {
                reflected = false;
            }
        }

        let (eta_i, eta_t) = self.eta_pair(&rec.wi);
        if reflected {
            rec.wo = reflect(&rec.wi, &m);
            rec.sampled_component = Some(REFLECTION_COMPONENT);
            rec.sampled_type = BxDFType::GLOSSY_REFLECTION;

            // Side check.
            if cos_theta(&rec.wi) * cos_theta(&rec.wo) <= 0.0 {
                return None;
            }
        } else {
            rec.wo = refract(&rec.wi, &m, eta_i, eta_t)?;
            rec.sampled_component = Some(TRANSMISSION_COMPONENT);
            rec.sampled_type = BxDFType::GLOSSY_TRANSMISSION;

            // Side check.
            if cos_theta(&rec.wi) * cos_theta(&rec.wo) >= 0.0 {
                return None;
            }
        }

        Some(LobeSample {
            m,
            alpha_u,
            alpha_v,
            sample_alpha_u,
            sample_alpha_v,
            reflected,
            eta_i,
            eta_t,
        })
    }
}

impl BSDF for RoughDielectric {
    /// Evaluates the scattered density for the pair of directions in the
    /// query, including the foreshortening of the outgoing direction.
    ///
    /// * `rec`     - The query record.
    /// * `measure` - Only `Measure::SolidAngle` produces non-zero values.
    fn eval(&self, rec: &BSDFQueryRecord, measure: Measure) -> Spectrum {
        if measure != Measure::SolidAngle {
            return Spectrum::ZERO;
        }

        let cos_theta_i = cos_theta(&rec.wi);
        let reflected = cos_theta_i * cos_theta(&rec.wo) > 0.0;
        let (eta_i, eta_t) = self.eta_pair(&rec.wi);

        let h = if reflected {
            if !rec.admits(REFLECTION_COMPONENT, BxDFType::GLOSSY_REFLECTION) {
                return Spectrum::ZERO;
            }
            Self::reflection_half_vector(&rec.wi, &rec.wo)
        } else {
            if !rec.admits(TRANSMISSION_COMPONENT, BxDFType::GLOSSY_TRANSMISSION) {
                return Spectrum::ZERO;
            }
            self.transmission_half_vector(&rec.wi, &rec.wo, eta_i, eta_t)
        };

        let (alpha_u, alpha_v) = self.roughness_at(rec.si);

        let d = self.distribution.eval(&h, alpha_u, alpha_v);
        if d == 0.0 {
            return Spectrum::ZERO;
        }

        let f = fr_dielectric(rec.wi.dot(&h), self.ext_ior, self.int_ior);
        let g = self.distribution.g(&rec.wi, &rec.wo, &h, alpha_u, alpha_v);

        if reflected {
            let value = f * d * g / (4.0 * abs(cos_theta_i));
            self.specular_reflectance.evaluate(rec.si) * value
        } else {
            let wi_dot_h = rec.wi.dot(&h);
            let wo_dot_h = rec.wo.dot(&h);
            let sqrt_denom = eta_i * wi_dot_h + eta_t * wo_dot_h;
            let mut value = ((1.0 - f) * d * g * eta_t * eta_t * wi_dot_h * wo_dot_h)
                / (cos_theta_i * sqrt_denom * sqrt_denom);

            // Solid angle compression when tracing radiance.
            if rec.mode == TransportMode::Radiance {
                value *= (eta_i * eta_i) / (eta_t * eta_t);
            }

            self.specular_transmittance.evaluate(rec.si) * abs(value)
        }
    }

    /// Returns the density with which `sample()` produces the outgoing
    /// direction of the query.
    ///
    /// * `rec`     - The query record.
    /// * `measure` - Only `Measure::SolidAngle` produces non-zero values.
    fn pdf(&self, rec: &BSDFQueryRecord, measure: Measure) -> Float {
        if measure != Measure::SolidAngle {
            return 0.0;
        }

        let (has_reflection, has_transmission) = self.admissible_lobes(rec);
        let reflected = cos_theta(&rec.wi) * cos_theta(&rec.wo) > 0.0;
        let (eta_i, eta_t) = self.eta_pair(&rec.wi);

        let (h, dwh_dwo) = if reflected {
            if !has_reflection {
                return 0.0;
            }
            let h = Self::reflection_half_vector(&rec.wi, &rec.wo);
            (h, 1.0 / (4.0 * rec.wo.dot(&h)))
        } else {
            if !has_transmission {
                return 0.0;
            }
            let h = self.transmission_half_vector(&rec.wi, &rec.wo, eta_i, eta_t);
            let wo_dot_h = rec.wo.dot(&h);
            let sqrt_denom = eta_i * rec.wi.dot(&h) + eta_t * wo_dot_h;
            (h, (eta_t * eta_t * wo_dot_h) / (sqrt_denom * sqrt_denom))
        };

        let (alpha_u, alpha_v) = self.roughness_at(rec.si);
        let (alpha_u, alpha_v) = widened_roughness(&rec.wi, alpha_u, alpha_v);

        let mut prob = self.distribution.pdf(&h, alpha_u, alpha_v);
        if has_reflection && has_transmission {
            let f = fr_dielectric(rec.wi.dot(&h), self.ext_ior, self.int_ior);
            prob *= if reflected { f } else { 1.0 - f };
        }

        abs(prob * dwh_dwo)
    }

    /// Samples an outgoing direction and returns the sample weight computed
    /// analytically.
    ///
    /// * `rec` - The query record. Receives the outgoing direction.
    /// * `u`   - Sample used to draw the microsurface normal.
    fn sample(&self, rec: &mut BSDFQueryRecord, u: &Point2f) -> Spectrum {
        let s = match self.sample_lobe(rec, u) {
            Some(s) => s,
            None => return Spectrum::ZERO,
        };

        let result = if s.reflected {
            self.specular_reflectance.evaluate(rec.si)
        } else if rec.mode == TransportMode::Radiance {
            self.specular_transmittance.evaluate(rec.si) * ((s.eta_i * s.eta_i) / (s.eta_t * s.eta_t))
        } else {
            self.specular_transmittance.evaluate(rec.si)
        };

        // Horizontal microfacet normals carry no density.
        let d = self.distribution.eval(&s.m, s.alpha_u, s.alpha_v);
        let denominator = self.distribution.pdf(&s.m, s.sample_alpha_u, s.sample_alpha_v) * cos_theta(&rec.wi);
        if d == 0.0 || denominator == 0.0 {
            return Spectrum::ZERO;
        }

        let numerator = d * self.distribution.g(&rec.wi, &rec.wo, &s.m, s.alpha_u, s.alpha_v) * rec.wi.dot(&s.m);
        result * abs(numerator / denominator)
    }

    /// Samples an outgoing direction and returns the weight `eval / pdf`
    /// together with the density, both re-evaluated on the sampled
    /// direction.
    ///
    /// * `rec` - The query record. Receives the outgoing direction.
    /// * `u`   - Sample used to draw the microsurface normal.
    fn sample_with_pdf(&self, rec: &mut BSDFQueryRecord, u: &Point2f) -> BSDFSample {
        if self.sample_lobe(rec, u).is_none() {
            return BSDFSample::default();
        }

        // Guard against numerical imprecisions.
        let pdf = self.pdf(rec, Measure::SolidAngle);
        if pdf == 0.0 {
            return BSDFSample::default();
        }

        BSDFSample::new(self.eval(rec, Measure::SolidAngle) / pdf, pdf)
    }

    fn component_count(&self) -> usize {
        self.components.len()
    }

    fn get_type(&self, component: usize) -> BxDFType {
        self.components[component]
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn glass(distribution: MicrofacetDistribution, alpha: Float) -> RoughDielectric {
        RoughDielectricBuilder::new()
            .distribution(distribution)
            .roughness(alpha, alpha)
            .ior(1.5, 1.0)
            .configure()
            .unwrap()
    }

    fn direction(theta_degrees: Float, phi: Float) -> Vector3f {
        let theta = theta_degrees.to_radians();
        spherical_direction(theta.sin(), theta.cos(), phi)
    }

    #[test]
    fn other_measures_are_zero() {
        let material = glass(MicrofacetDistribution::Beckmann, 0.1);
        let si = SurfaceInteraction::default();
        let mut sampler = RandomSampler::new(Some(1));
        let wi = direction(30.0, 0.0);
        let wo = direction(30.0, PI);
        let rec = BSDFQueryRecord::with_directions(&si, wi, wo, &mut sampler);

        assert!(!material.eval(&rec, Measure::SolidAngle).is_black());
        assert!(material.pdf(&rec, Measure::SolidAngle) > 0.0);
        for measure in [Measure::Length, Measure::Discrete] {
            assert!(material.eval(&rec, measure).is_black());
            assert_eq!(material.pdf(&rec, measure), 0.0);
        }
    }

    #[test]
    fn excluded_components_are_zero() {
        let material = glass(MicrofacetDistribution::GGX, 0.3);
        let si = SurfaceInteraction::default();
        let mut sampler = RandomSampler::new(Some(1));
        let wi = direction(30.0, 0.0);
        let wo_reflected = direction(30.0, PI);

        let mut rec = BSDFQueryRecord::with_directions(&si, wi, wo_reflected, &mut sampler);
        rec.component = Some(TRANSMISSION_COMPONENT);
        assert!(material.eval(&rec, Measure::SolidAngle).is_black());
        assert_eq!(material.pdf(&rec, Measure::SolidAngle), 0.0);

        rec.component = None;
        rec.type_mask = BxDFType::GLOSSY_TRANSMISSION;
        assert!(material.eval(&rec, Measure::SolidAngle).is_black());
        assert_eq!(material.pdf(&rec, Measure::SolidAngle), 0.0);

        rec.type_mask = BxDFType::DIFFUSE_REFLECTION | BxDFType::DIFFUSE_TRANSMISSION;
        assert!(material.sample(&mut rec, &Point2f::new(0.3, 0.6)).is_black());
    }

    #[test]
    fn scenario_reflection_pdf_is_positive_at_thirty_degrees() {
        let material = RoughDielectricBuilder::new()
            .distribution(MicrofacetDistribution::Beckmann)
            .roughness(0.1, 0.1)
            .ior(1.5, 1.0)
            .configure()
            .unwrap();
        let si = SurfaceInteraction::default();
        let mut sampler = RandomSampler::new(Some(3));
        let wi = direction(30.0, 0.0);
        let mut rec = BSDFQueryRecord::with_directions(&si, wi, direction(30.0, PI), &mut sampler);
        rec.component = Some(REFLECTION_COMPONENT);

        let pdf = material.pdf(&rec, Measure::SolidAngle);
        assert!(pdf > 0.0 && pdf.is_finite(), "pdf = {}", pdf);
    }

    #[test]
    fn transmission_weight_depends_on_transport_mode() {
        let material = glass(MicrofacetDistribution::Beckmann, 0.2);
        let si = SurfaceInteraction::default();
        let wi = direction(20.0, 0.0);
        let wo = -direction(10.0, 0.0);

        let mut sampler = RandomSampler::new(Some(1));
        let mut rec = BSDFQueryRecord::with_directions(&si, wi, wo, &mut sampler);
        rec.mode = TransportMode::Importance;
        let importance = material.eval(&rec, Measure::SolidAngle);
        rec.mode = TransportMode::Radiance;
        let radiance = material.eval(&rec, Measure::SolidAngle);

        assert!(!importance.is_black());
        let ratio = radiance[0] / importance[0];
        assert!((ratio - 1.0 / 2.25).abs() < 1e-4, "ratio = {}", ratio);
    }

    #[test]
    fn horizontal_microfacets_have_zero_weight() {
        let si = SurfaceInteraction::default();
        let wi = direction(30.0, 0.0);
        for (distribution, u) in [
            (MicrofacetDistribution::Phong, Point2f::new(0.0, 0.3)),
            (MicrofacetDistribution::AshikhminShirley, Point2f::new(0.1, 0.0)),
        ] {
            let material = glass(distribution, 0.3);
            let mut sampler = RandomSampler::new(Some(7));
            let mut rec = BSDFQueryRecord::new(&si, wi, &mut sampler);
            rec.component = Some(TRANSMISSION_COMPONENT);

            let weight = material.sample(&mut rec, &u);
            assert!(!weight.has_nans(), "{}: weight = {:?}", distribution, weight);
            assert!(weight.is_black(), "{}: weight = {:?}", distribution, weight);

            let mut sampler = RandomSampler::new(Some(7));
            let mut rec = BSDFQueryRecord::new(&si, wi, &mut sampler);
            rec.component = Some(TRANSMISSION_COMPONENT);
            let sample = material.sample_with_pdf(&mut rec, &u);
            assert!(!sample.weight.has_nans(), "{}: weight = {:?}", distribution, sample.weight);
        }
    }

    prop_compose! {
        fn upper_direction()(
            v in (-1.0..1.0f32, -1.0..1.0f32, 0.05..1.0f32)
                .prop_filter("non-degenerate", |(x, y, z)| x * x + y * y + z * z > 0.01)
        ) -> Vector3f {
            Vector3f::new(v.0, v.1, v.2).normalize()
        }
    }

    proptest! {
        #[test]
        fn reflection_is_reciprocal(
            wi in upper_direction(),
            wo in upper_direction(),
            alpha in 0.05..0.8f32,
        ) {
            let material = glass(MicrofacetDistribution::Beckmann, alpha);
            let si = SurfaceInteraction::default();
            let mut sampler = RandomSampler::new(Some(1));
            let mut rec = BSDFQueryRecord::with_directions(&si, wi, wo, &mut sampler);

            let forward = material.eval(&rec, Measure::SolidAngle)[0] / abs_cos_theta(&wo);
            rec.reverse();
            let backward = material.eval(&rec, Measure::SolidAngle)[0] / abs_cos_theta(&wi);

            prop_assert!(
                abs(forward - backward) <= 1e-3 * max(forward, backward) + 1e-6,
                "forward = {}, backward = {}", forward, backward
            );
        }

        #[test]
        fn samples_land_on_the_right_side(
            wi in upper_direction(),
            flip in proptest::bool::ANY,
            ux in 0.0..1.0f32,
            uy in 0.0..1.0f32,
            seed in 0..1000u64,
        ) {
            let material = glass(MicrofacetDistribution::GGX, 0.4);
            let wi = if flip { -wi } else { wi };
            let si = SurfaceInteraction::default();
            let mut sampler = RandomSampler::new(Some(seed));
            let mut rec = BSDFQueryRecord::new(&si, wi, &mut sampler);

            let weight = material.sample(&mut rec, &Point2f::new(ux, uy));
            if !weight.is_black() {
                let side = cos_theta(&rec.wi) * cos_theta(&rec.wo);
                match rec.sampled_component {
                    Some(REFLECTION_COMPONENT) => {
                        prop_assert!(side > 0.0);
                        prop_assert_eq!(rec.sampled_type, BxDFType::GLOSSY_REFLECTION);
                    }
                    Some(TRANSMISSION_COMPONENT) => {
                        prop_assert!(side < 0.0);
                        prop_assert_eq!(rec.sampled_type, BxDFType::GLOSSY_TRANSMISSION);
                    }
                    c => prop_assert!(false, "unexpected component {:?}", c),
                }
            }
        }
    }
}
