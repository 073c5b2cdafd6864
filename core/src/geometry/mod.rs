//! Geometry

#![allow(dead_code)]
use crate::pbrt::*;

#[cfg(test)]
#[macro_export]
macro_rules! prop_range {
    ($name: ident, $t: ty, $r: expr) => {
        prop_compose! {
            fn $name()(f in $r) -> $t {
                f
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_point2 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr) -> Point2<$t> {
                Point2 { x, y }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_vector3 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr, $zr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr, z in $zr) -> Vector3<$t> {
                Vector3 { x, y, z }
            }
        }
    };
}

/// Generates a strategy producing unit vectors. Vectors that are too short to
/// normalize reliably are rejected.
#[cfg(test)]
#[macro_export]
macro_rules! prop_unit_vector3 {
    ($name: ident, $zr: expr) => {
        prop_compose! {
            fn $name()(
                v in (-1.0..1.0f32, -1.0..1.0f32, $zr)
                    .prop_filter("non-degenerate", |(x, y, z)| x * x + y * y + z * z > 0.01)
            ) -> Vector3f {
                Vector3f::new(v.0, v.1, v.2).normalize()
            }
        }
    };
}

mod common;
mod point2;
mod vector3;

// Re-export
pub use common::*;
pub use point2::*;
pub use vector3::*;

/// Returns a unit vector from spherical coordinates.
///
/// * `sin_theta` - sin(θ).
/// * `cos_theta` - cos(θ).
/// * `phi`       - Azimuth φ.
#[inline]
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}
