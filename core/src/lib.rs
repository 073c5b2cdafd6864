//! Core

extern crate bitflags;
#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

#[macro_use]
pub mod geometry;

pub mod interaction;
pub mod ior;
pub mod microfacet;
pub mod paramset;
pub mod pbrt;
pub mod reflection;
pub mod rng;
pub mod sampler;
pub mod serialization;
pub mod spectrum;
pub mod texture;
