//! BSDF Query Record

use super::*;
use crate::interaction::*;
use crate::sampler::*;
use std::fmt;

/// Index of the reflection component of a two-lobe dielectric.
pub const REFLECTION_COMPONENT: usize = 0;

/// Index of the transmission component of a two-lobe dielectric.
pub const TRANSMISSION_COMPONENT: usize = 1;

/// Arguments and results of a scattering query. Directions are expressed in
/// the local shading frame where the surface normal is the +z axis.
///
/// The lifetime specifiers:
/// * `'a` - Borrow of the surface record and the caller's sampler for the
///          duration of one query.
pub struct BSDFQueryRecord<'a> {
    /// Surface point used for texture lookups.
    pub si: &'a SurfaceInteraction,

    /// Incident direction.
    pub wi: Vector3f,

    /// Outgoing direction. Input to `eval`/`pdf`, output of `sample`.
    pub wo: Vector3f,

    /// Restricts the query to one component. `None` considers all of them.
    pub component: Option<usize>,

    /// Restricts the query to the given scattering types.
    pub type_mask: BxDFType,

    /// The transported quantity.
    pub mode: TransportMode,

    /// Random source owned by the calling thread.
    pub sampler: &'a mut dyn Sampler,

    /// Component chosen by the last sampling call.
    pub sampled_component: Option<usize>,

    /// Type of the component chosen by the last sampling call.
    pub sampled_type: BxDFType,
}

impl<'a> BSDFQueryRecord<'a> {
    /// Create a new query record for sampling. The outgoing direction is
    /// filled in by the sampling routine.
    ///
    /// * `si`      - Surface point.
    /// * `wi`      - Incident direction.
    /// * `sampler` - Random source.
    pub fn new(si: &'a SurfaceInteraction, wi: Vector3f, sampler: &'a mut dyn Sampler) -> Self {
        Self {
            si,
            wi,
            wo: Vector3f::zero(),
            component: None,
            type_mask: BxDFType::ALL,
            mode: TransportMode::Radiance,
            sampler,
            sampled_component: None,
            sampled_type: BxDFType::empty(),
        }
    }

    /// Create a new query record for evaluating a direction pair.
    ///
    /// * `si`      - Surface point.
    /// * `wi`      - Incident direction.
    /// * `wo`      - Outgoing direction.
    /// * `sampler` - Random source.
    pub fn with_directions(
        si: &'a SurfaceInteraction,
        wi: Vector3f,
        wo: Vector3f,
        sampler: &'a mut dyn Sampler,
    ) -> Self {
        let mut rec = Self::new(si, wi, sampler);
        rec.wo = wo;
        rec
    }

    /// Returns true if the component selector and type mask admit the given
    /// component.
    ///
    /// * `component`      - Component index.
    /// * `component_type` - Scattering type of the component.
    pub fn admits(&self, component: usize, component_type: BxDFType) -> bool {
        self.component.map_or(true, |c| c == component) && self.type_mask.matches(component_type)
    }

    /// Swaps the incident and outgoing directions.
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.wi, &mut self.wo);
        self.mode = match self.mode {
            TransportMode::Radiance => TransportMode::Importance,
            TransportMode::Importance => TransportMode::Radiance,
        };
    }
}

impl<'a> fmt::Display for BSDFQueryRecord<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BSDFQueryRecord[ wi = {:?}, wo = {:?}, component = {:?}, type_mask = {:?}, mode = {:?}, \
            sampled_component = {:?}, sampled_type = {:?} ]",
            self.wi, self.wo, self.component, self.type_mask, self.mode, self.sampled_component, self.sampled_type
        )
    }
}
