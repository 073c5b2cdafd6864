//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Use `RGBSpectrum` for all scattering computations.
pub type Spectrum = RGBSpectrum;
