//! BSDF

use super::*;
use crate::interaction::*;
use crate::sampler::*;

/// Interface for surface scattering models evaluated in the local shading
/// frame. Values returned by `eval` include the cosine foreshortening of the
/// outgoing direction.
pub trait BSDF {
    /// Returns the scattered value for the query's direction pair.
    ///
    /// * `rec`     - The query record.
    /// * `measure` - Measure of the requested density.
    fn eval(&self, rec: &BSDFQueryRecord, measure: Measure) -> Spectrum;

    /// Returns the density with which `sample` would generate the query's
    /// outgoing direction.
    ///
    /// * `rec`     - The query record.
    /// * `measure` - Measure of the requested density.
    fn pdf(&self, rec: &BSDFQueryRecord, measure: Measure) -> Float;

    /// Samples an outgoing direction and returns the sample weight. A zero
    /// weight means the attempt produced no direction.
    ///
    /// * `rec` - The query record. `wo` and the sampled fields are written.
    /// * `u`   - Uniform sample in [0, 1)².
    fn sample(&self, rec: &mut BSDFQueryRecord, u: &Point2f) -> Spectrum;

    /// Samples an outgoing direction and returns the sample weight together
    /// with its density.
    ///
    /// * `rec` - The query record. `wo` and the sampled fields are written.
    /// * `u`   - Uniform sample in [0, 1)².
    fn sample_with_pdf(&self, rec: &mut BSDFQueryRecord, u: &Point2f) -> BSDFSample;

    /// Returns the number of components.
    fn component_count(&self) -> usize;

    /// Returns the flags of a component.
    ///
    /// * `component` - Component index.
    fn get_type(&self, component: usize) -> BxDFType;

    /// Returns the union of the flags of all components.
    fn combined_type(&self) -> BxDFType {
        (0..self.component_count()).fold(BxDFType::empty(), |t, c| t | self.get_type(c))
    }
}

/// Directional albedo split by the component that was sampled.
#[derive(Copy, Clone, Debug, Default)]
pub struct Albedo {
    /// Energy scattered by the reflection component.
    pub reflected: Spectrum,

    /// Energy scattered by the transmission component.
    pub transmitted: Spectrum,
}

impl Albedo {
    /// Returns the total scattered energy.
    pub fn total(&self) -> Spectrum {
        self.reflected + self.transmitted
    }
}

/// Estimates the directional albedo for an incident direction by averaging
/// sample weights.
///
/// * `bsdf`      - The scattering model.
/// * `si`        - Surface point.
/// * `wi`        - Incident direction.
/// * `mode`      - Transported quantity.
/// * `n_samples` - Number of samples.
/// * `sampler`   - Random source.
pub fn estimate_albedo(
    bsdf: &dyn BSDF,
    si: &SurfaceInteraction,
    wi: &Vector3f,
    mode: TransportMode,
    n_samples: usize,
    sampler: &mut dyn Sampler,
) -> Albedo {
    let mut albedo = Albedo::default();
    if n_samples == 0 {
        return albedo;
    }

    for _ in 0..n_samples {
        let u = sampler.get_2d();
        let mut rec = BSDFQueryRecord::new(si, *wi, &mut *sampler);
        rec.mode = mode;

        let weight = bsdf.sample(&mut rec, &u);
        if weight.is_black() {
            continue;
        }

        if rec.sampled_type.matches(BxDFType::TRANSMISSION) {
            albedo.transmitted += weight;
        } else {
            albedo.reflected += weight;
        }
    }

    let inv_n = 1.0 / n_samples as Float;
    albedo.reflected *= inv_n;
    albedo.transmitted *= inv_n;
    albedo
}
