//! Reflection and surface scattering models

#![allow(dead_code)]
use crate::geometry::*;
use crate::pbrt::*;
use crate::spectrum::*;

mod bsdf;
mod bsdf_query_record;
mod bxdf_sample;
mod bxdf_type;
mod common;
mod fresnel;

// Re-export
pub use bsdf::*;
pub use bsdf_query_record::*;
pub use bxdf_sample::*;
pub use bxdf_type::*;
pub use common::*;
pub use fresnel::*;

/// Distinguishes the two dual quantities carried across a refractive
/// boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransportMode {
    /// Indicates the path started at the camera.
    Radiance,

    /// Indicates the path started at a light source.
    Importance,
}

/// Measure with respect to which densities are expressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Measure {
    /// Solid angle.
    SolidAngle,

    /// Length, used by one-dimensional delta components.
    Length,

    /// Discrete probability, used by delta components.
    Discrete,
}
