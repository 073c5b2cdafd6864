//! BSDF Sample

use crate::pbrt::*;
use crate::spectrum::*;

/// Result of importance sampling an outgoing direction. The direction itself
/// is written to the query record.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BSDFSample {
    /// The sample weight (value divided by density).
    pub weight: Spectrum,

    /// The density of the sampled direction with respect to solid angle.
    pub pdf: Float,
}

impl BSDFSample {
    /// Create a new `BSDFSample`.
    ///
    /// * `weight` - The sample weight.
    /// * `pdf`    - The density of the sampled direction.
    pub fn new(weight: Spectrum, pdf: Float) -> Self {
        Self { weight, pdf }
    }

    /// Returns true if the sampling attempt produced no usable direction.
    pub fn is_zero(&self) -> bool {
        self.pdf == 0.0 || self.weight.is_black()
    }
}
