//! Materials

#[macro_use]
extern crate log;

mod energy;
mod preview;
mod rough_dielectric;

// Re-export
pub use energy::*;
pub use preview::*;
pub use rough_dielectric::*;
