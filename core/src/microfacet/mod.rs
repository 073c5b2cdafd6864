//! Microfacet Distribution Models

use crate::geometry::*;
use crate::pbrt::*;
use crate::reflection::*;
use std::convert::TryFrom;
use std::fmt;

pub mod ashikhmin_shirley;
pub mod beckmann;
pub mod ggx;
pub mod phong;

/// Roughness floor applied before any conversion.
pub const MIN_ROUGHNESS: Float = 1e-5;

/// Densities below this, after the cosine factor, are flushed to zero.
const DENSITY_EPSILON: Float = 1e-20;

/// Microfacet normal distributions supported by the rough dielectric model.
///
/// Roughness parameters passed to the methods below are in the
/// distribution's native units, i.e. after `transform_roughness()`. Only
/// `AshikhminShirley` distinguishes between `alpha_u` and `alpha_v`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MicrofacetDistribution {
    /// Beckmann distribution derived from Gaussian random surfaces.
    Beckmann,

    /// GGX distribution (Walter et al.) with exact Smith shadowing.
    GGX,

    /// Normalized Phong distribution.
    Phong,

    /// Anisotropic Phong distribution by Ashikhmin and Shirley.
    AshikhminShirley,
}

impl MicrofacetDistribution {
    /// Returns the name used in scene descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beckmann => "beckmann",
            Self::GGX => "ggx",
            Self::Phong => "phong",
            Self::AshikhminShirley => "as",
        }
    }

    /// Returns true if the distribution accepts different roughness values
    /// along the tangent and bitangent.
    pub fn is_anisotropic(&self) -> bool {
        *self == Self::AshikhminShirley
    }

    /// Converts a user facing roughness value to the distribution's native
    /// parameter. Phong based models map the Beckmann style roughness to an
    /// exponent.
    ///
    /// * `alpha` - Roughness.
    pub fn transform_roughness(&self, alpha: Float) -> Float {
        let alpha = max(alpha, MIN_ROUGHNESS);
        match self {
            Self::Phong | Self::AshikhminShirley => max(2.0 / (alpha * alpha) - 2.0, 0.1),
            _ => alpha,
        }
    }

    /// Returns the density of microfacets with normal `m` projected so that
    /// `∫ D(m) cos(θm) dω = 1`. Zero for normals in the lower hemisphere.
    ///
    /// * `m`       - Microsurface normal.
    /// * `alpha_u` - Roughness along the tangent.
    /// * `alpha_v` - Roughness along the bitangent.
    pub fn eval(&self, m: &Vector3f, alpha_u: Float, alpha_v: Float) -> Float {
        if m.z <= 0.0 {
            return 0.0;
        }

        let result = match self {
            Self::Beckmann => beckmann::d(m, alpha_u),
            Self::GGX => ggx::d(m, alpha_u),
            Self::Phong => phong::d(m, alpha_u),
            Self::AshikhminShirley => ashikhmin_shirley::d(m, alpha_u, alpha_v),
        };

        if result * m.z < DENSITY_EPSILON {
            0.0
        } else {
            result
        }
    }

    /// Returns the density with which `sample()` generates `m`.
    ///
    /// * `m`       - Microsurface normal.
    /// * `alpha_u` - Roughness along the tangent.
    /// * `alpha_v` - Roughness along the bitangent.
    pub fn pdf(&self, m: &Vector3f, alpha_u: Float, alpha_v: Float) -> Float {
        match self {
            Self::AshikhminShirley => {
                if m.z <= 0.0 {
                    0.0
                } else {
                    ashikhmin_shirley::pdf(m, alpha_u, alpha_v)
                }
            }
            _ => self.eval(m, alpha_u, alpha_v) * m.z,
        }
    }

    /// Samples a microsurface normal in the upper hemisphere.
    ///
    /// * `u`       - Uniform sample in [0, 1)².
    /// * `alpha_u` - Roughness along the tangent.
    /// * `alpha_v` - Roughness along the bitangent.
    pub fn sample(&self, u: &Point2f, alpha_u: Float, alpha_v: Float) -> Vector3f {
        match self {
            Self::Beckmann => beckmann::sample(u, alpha_u),
            Self::GGX => ggx::sample(u, alpha_u),
            Self::Phong => phong::sample(u, alpha_u),
            Self::AshikhminShirley => ashikhmin_shirley::sample(u, alpha_u, alpha_v),
        }
    }

    /// Smith's shadowing-masking term for a single direction `v` with
    /// respect to microsurface normal `m`.
    ///
    /// * `v`       - The direction.
    /// * `m`       - Microsurface normal.
    /// * `alpha_u` - Roughness along the tangent.
    /// * `alpha_v` - Roughness along the bitangent.
    pub fn smith_g1(&self, v: &Vector3f, m: &Vector3f, alpha_u: Float, alpha_v: Float) -> Float {
        // Back side of the microfacet.
        if v.dot(m) * cos_theta(v) <= 0.0 {
            return 0.0;
        }

        let tan_theta = abs(tan_theta(v));
        if tan_theta == 0.0 {
            return 1.0;
        }

        match self {
            Self::Beckmann => beckmann::smith_g1(tan_theta, alpha_u),
            Self::GGX => ggx::smith_g1(tan_theta, alpha_u),
            Self::Phong => phong::smith_g1(tan_theta, alpha_u),
            Self::AshikhminShirley => ashikhmin_shirley::smith_g1(v, tan_theta, alpha_u, alpha_v),
        }
    }

    /// Returns the shadowing-masking term for a pair of directions.
    ///
    /// * `wi`      - Incident direction.
    /// * `wo`      - Outgoing direction.
    /// * `m`       - Microsurface normal.
    /// * `alpha_u` - Roughness along the tangent.
    /// * `alpha_v` - Roughness along the bitangent.
    pub fn g(&self, wi: &Vector3f, wo: &Vector3f, m: &Vector3f, alpha_u: Float, alpha_v: Float) -> Float {
        self.smith_g1(wi, m, alpha_u, alpha_v) * self.smith_g1(wo, m, alpha_u, alpha_v)
    }
}

impl Default for MicrofacetDistribution {
    fn default() -> Self {
        Self::Beckmann
    }
}

impl TryFrom<&str> for MicrofacetDistribution {
    type Error = String;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name.to_lowercase().as_str() {
            "beckmann" => Ok(Self::Beckmann),
            "ggx" => Ok(Self::GGX),
            "phong" => Ok(Self::Phong),
            "as" => Ok(Self::AshikhminShirley),
            _ => Err(format!(
                "Specified an invalid distribution '{}', must be 'beckmann', 'ggx', 'phong' or 'as'.",
                name
            )),
        }
    }
}

impl TryFrom<u32> for MicrofacetDistribution {
    type Error = String;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Beckmann),
            1 => Ok(Self::GGX),
            2 => Ok(Self::Phong),
            3 => Ok(Self::AshikhminShirley),
            _ => Err(format!("Invalid microfacet distribution tag {}.", tag)),
        }
    }
}

impl From<MicrofacetDistribution> for u32 {
    fn from(distribution: MicrofacetDistribution) -> Self {
        match distribution {
            MicrofacetDistribution::Beckmann => 0,
            MicrofacetDistribution::GGX => 1,
            MicrofacetDistribution::Phong => 2,
            MicrofacetDistribution::AshikhminShirley => 3,
        }
    }
}

impl fmt::Display for MicrofacetDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
