//! Rough Dielectric Material

use crate::energy::*;
use microglass_core::geometry::*;
use microglass_core::interaction::*;
use microglass_core::ior::*;
use microglass_core::microfacet::*;
use microglass_core::paramset::*;
use microglass_core::pbrt::*;
use microglass_core::reflection::*;
use microglass_core::sampler::*;
use microglass_core::spectrum::*;
use microglass_core::texture::*;
use microglass_textures::*;
use std::convert::TryFrom;
use std::fmt;
use std::sync::Arc;

mod bsdf;
mod serialize;
mod shader;

// Re-export
pub use shader::*;

/// Name given to materials that were not named explicitly.
pub const UNNAMED: &str = "unnamed";

/// Default roughness.
pub const DEFAULT_ALPHA: Float = 0.1;

/// Default interior medium.
pub const DEFAULT_INT_IOR: &str = "bk7";

/// Default exterior medium.
pub const DEFAULT_EXT_IOR: &str = "air";

/// Collects the parameters of a rough dielectric interface. Textures can be
/// attached by name until `configure()` validates everything and produces
/// the immutable `RoughDielectric`.
#[derive(Clone)]
pub struct RoughDielectricBuilder {
    /// Material name.
    name: String,

    /// Microfacet normal distribution.
    distribution: MicrofacetDistribution,

    /// Roughness along the tangent.
    alpha_u: ArcTexture<Spectrum>,

    /// Roughness along the bitangent. Refers to the same instance as
    /// `alpha_u` when the surface is isotropic.
    alpha_v: ArcTexture<Spectrum>,

    /// Modulates the reflected component.
    specular_reflectance: ArcTexture<Spectrum>,

    /// Modulates the transmitted component.
    specular_transmittance: ArcTexture<Spectrum>,

    /// Index of refraction of the interior medium.
    int_ior: Float,

    /// Index of refraction of the exterior medium.
    ext_ior: Float,

    /// Whether modulation textures above 1 are scaled down.
    ensure_energy_conservation: bool,
}

/// Returns a constant spectrum texture.
fn constant(v: Float) -> ArcTexture<Spectrum> {
    Arc::new(ConstantTexture::new(Spectrum::new(v)))
}

impl Default for RoughDielectricBuilder {
    fn default() -> Self {
        let alpha = constant(DEFAULT_ALPHA);
        Self {
            name: String::from(UNNAMED),
            distribution: MicrofacetDistribution::Beckmann,
            alpha_u: Arc::clone(&alpha),
            alpha_v: alpha,
            specular_reflectance: constant(1.0),
            specular_transmittance: constant(1.0),
            int_ior: 1.5046,
            ext_ior: 1.000277,
            ensure_energy_conservation: true,
        }
    }
}

impl RoughDielectricBuilder {
    /// Create a new `RoughDielectricBuilder` with default parameters: a
    /// Beckmann surface with roughness 0.1 separating BK7 glass from air.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the material name.
    ///
    /// * `name` - The name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = String::from(name);
        self
    }

    /// Sets the microfacet distribution.
    ///
    /// * `distribution` - The distribution.
    pub fn distribution(mut self, distribution: MicrofacetDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Sets constant roughness values. Equal values share one texture
    /// instance, so the surface is treated as isotropic.
    ///
    /// * `alpha_u` - Roughness along the tangent.
    /// * `alpha_v` - Roughness along the bitangent.
    pub fn roughness(mut self, alpha_u: Float, alpha_v: Float) -> Self {
        self.alpha_u = constant(alpha_u);
        self.alpha_v = if alpha_u == alpha_v {
            Arc::clone(&self.alpha_u)
        } else {
            constant(alpha_v)
        };
        self
    }

    /// Sets the indices of refraction.
    ///
    /// * `int_ior` - Interior medium.
    /// * `ext_ior` - Exterior medium.
    pub fn ior(mut self, int_ior: Float, ext_ior: Float) -> Self {
        self.int_ior = int_ior;
        self.ext_ior = ext_ior;
        self
    }

    /// Enables or disables scaling of modulation textures above 1.
    ///
    /// * `enabled` - The flag.
    pub fn ensure_energy_conservation(mut self, enabled: bool) -> Self {
        self.ensure_energy_conservation = enabled;
        self
    }

    /// Attaches a texture under one of the names `alpha`, `alphaU`,
    /// `alphaV`, `specularReflectance` or `specularTransmittance`. `alpha`
    /// binds both roughness handles to the same instance.
    ///
    /// * `name`    - Attachment name.
    /// * `texture` - The texture.
    pub fn add_child(&mut self, name: &str, texture: ArcTexture<Spectrum>) -> Result<(), String> {
        match name {
            "alpha" => {
                self.alpha_u = Arc::clone(&texture);
                self.alpha_v = texture;
            }
            "alphaU" => self.alpha_u = texture,
            "alphaV" => self.alpha_v = texture,
            "specularReflectance" => self.specular_reflectance = texture,
            "specularTransmittance" => self.specular_transmittance = texture,
            _ => {
                let err = format!("RoughDielectric \"{}\": unsupported child '{}'.", self.name, name);
                error!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Validates the parameters and returns the configured material.
    pub fn configure(self) -> Result<RoughDielectric, String> {
        if !(self.int_ior > 0.0 && self.ext_ior > 0.0) || self.int_ior == self.ext_ior {
            let err = format!(
                "RoughDielectric \"{}\": the interior and exterior indices of refraction must be positive and differ \
                (intIOR = {}, extIOR = {}).",
                self.name, self.int_ior, self.ext_ior
            );
            error!("{}", err);
            return Err(err);
        }

        let mut extra_flags = BxDFType::empty();
        if !same_instance(&self.alpha_u, &self.alpha_v) {
            extra_flags |= BxDFType::ANISOTROPIC;
            if !self.distribution.is_anisotropic() {
                let err = format!(
                    "RoughDielectric \"{}\": different roughness values along the tangent and bitangent directions \
                    are only supported when using the anisotropic Ashikhmin-Shirley microfacet distribution \
                    (named \"as\").",
                    self.name
                );
                error!("{}", err);
                return Err(err);
            }
        }

        if !self.alpha_u.is_constant() || !self.alpha_v.is_constant() {
            extra_flags |= BxDFType::SPATIALLY_VARYING;
        }

        let varying = |tex: &ArcTexture<Spectrum>| {
            if tex.is_constant() {
                BxDFType::empty()
            } else {
                BxDFType::SPATIALLY_VARYING
            }
        };
        let base = BxDFType::FRONT_SIDE | BxDFType::BACK_SIDE | BxDFType::CAN_USE_SAMPLER | extra_flags;
        let components = [
            BxDFType::GLOSSY_REFLECTION | base | varying(&self.specular_reflectance),
            BxDFType::GLOSSY_TRANSMISSION | base | varying(&self.specular_transmittance),
        ];

        let (specular_reflectance, specular_transmittance) = if self.ensure_energy_conservation {
            (
                ensure_energy_conservation(self.specular_reflectance, "specularReflectance", &self.name, 1.0),
                ensure_energy_conservation(self.specular_transmittance, "specularTransmittance", &self.name, 1.0),
            )
        } else {
            (self.specular_reflectance, self.specular_transmittance)
        };

        debug!(
            "Configured RoughDielectric \"{}\": distribution = {}, intIOR = {}, extIOR = {}, flags = {:?}",
            self.name, self.distribution, self.int_ior, self.ext_ior, components
        );

        Ok(RoughDielectric {
            name: self.name,
            distribution: self.distribution,
            alpha_u: self.alpha_u,
            alpha_v: self.alpha_v,
            specular_reflectance,
            specular_transmittance,
            int_ior: self.int_ior,
            ext_ior: self.ext_ior,
            components,
        })
    }
}

impl TryFrom<&TextureParams> for RoughDielectricBuilder {
    type Error = String;

    /// Create a rough dielectric builder from given parameter set.
    ///
    /// * `tp` - Texture parameter set.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let name = tp.find_string("name", String::from(UNNAMED));
        let result = build_from_params(tp, &name);
        if let Err(err) = &result {
            error!("RoughDielectric \"{}\": {}", name, err);
        }
        result
    }
}

fn build_from_params(tp: &TextureParams, name: &str) -> Result<RoughDielectricBuilder, String> {
    let distribution =
        MicrofacetDistribution::try_from(tp.find_string("distribution", String::from("beckmann")).as_str())?;

    let int_ior = lookup_ior(&tp.params, "intIOR", DEFAULT_INT_IOR)?;
    let ext_ior = lookup_ior(&tp.params, "extIOR", DEFAULT_EXT_IOR)?;

    let alpha = tp.find_float("alpha", DEFAULT_ALPHA);
    let alpha_u = tp.find_float("alphaU", alpha);
    let alpha_v = tp.find_float("alphaV", alpha);

    let mut builder = RoughDielectricBuilder::new()
        .name(name)
        .distribution(distribution)
        .roughness(alpha_u, alpha_v)
        .ior(int_ior, ext_ior)
        .ensure_energy_conservation(tp.find_bool("ensureEnergyConservation", true));

    // Roughness given as named textures.
    for child in ["alpha", "alphaU", "alphaV"] {
        let tex_name = tp.params.find_one_texture(child, String::new());
        if !tex_name.is_empty() {
            let tex = tp
                .get_spectrum_texture(&tex_name)
                .ok_or_else(|| format!("parameter '{}' refers to unknown texture '{}'.", child, tex_name))?;
            builder.add_child(child, tex)?;
        }
    }

    let specular_reflectance = tp.get_spectrum_texture_or_else("specularReflectance", Spectrum::ONE, |v| {
        Arc::new(ConstantTexture::new(v))
    })?;
    builder.add_child("specularReflectance", specular_reflectance)?;

    let specular_transmittance = tp.get_spectrum_texture_or_else("specularTransmittance", Spectrum::ONE, |v| {
        Arc::new(ConstantTexture::new(v))
    })?;
    builder.add_child("specularTransmittance", specular_transmittance)?;

    Ok(builder)
}

/// Models scattering at a rough interface between two dielectric media using
/// a microfacet model with Fresnel weighted reflection and transmission
/// lobes. The interface is infinitely thin.
pub struct RoughDielectric {
    /// Material name.
    name: String,

    /// Microfacet normal distribution.
    distribution: MicrofacetDistribution,

    /// Roughness along the tangent.
    alpha_u: ArcTexture<Spectrum>,

    /// Roughness along the bitangent.
    alpha_v: ArcTexture<Spectrum>,

    /// Modulates the reflected component.
    specular_reflectance: ArcTexture<Spectrum>,

    /// Modulates the transmitted component.
    specular_transmittance: ArcTexture<Spectrum>,

    /// Index of refraction of the interior medium.
    int_ior: Float,

    /// Index of refraction of the exterior medium.
    ext_ior: Float,

    /// Capability flags of the reflection and transmission components.
    components: [BxDFType; 2],
}

impl RoughDielectric {
    /// Returns the material name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the microfacet distribution.
    pub fn distribution(&self) -> MicrofacetDistribution {
        self.distribution
    }

    /// Returns the roughness textures along the tangent and bitangent.
    pub fn alpha(&self) -> (&ArcTexture<Spectrum>, &ArcTexture<Spectrum>) {
        (&self.alpha_u, &self.alpha_v)
    }

    /// Returns the reflectance modulation texture.
    pub fn specular_reflectance(&self) -> &ArcTexture<Spectrum> {
        &self.specular_reflectance
    }

    /// Returns the transmittance modulation texture.
    pub fn specular_transmittance(&self) -> &ArcTexture<Spectrum> {
        &self.specular_transmittance
    }

    /// Returns the index of refraction of the interior medium.
    pub fn int_ior(&self) -> Float {
        self.int_ior
    }

    /// Returns the index of refraction of the exterior medium.
    pub fn ext_ior(&self) -> Float {
        self.ext_ior
    }

    /// Returns the mean roughness at a surface point.
    ///
    /// * `si` - Surface interaction.
    pub fn roughness(&self, si: &SurfaceInteraction) -> Float {
        0.5 * (self.alpha_u.evaluate(si) + self.alpha_v.evaluate(si)).average()
    }

    /// Estimates the directional albedo for an incident direction by
    /// averaging sample weights.
    ///
    /// * `si`        - Surface interaction.
    /// * `wi`        - Incident direction in the local frame.
    /// * `mode`      - Transport mode.
    /// * `n_samples` - Number of samples.
    /// * `sampler`   - The sampler.
    pub fn albedo(
        &self,
        si: &SurfaceInteraction,
        wi: &Vector3f,
        mode: TransportMode,
        n_samples: usize,
        sampler: &mut dyn Sampler,
    ) -> Albedo {
        estimate_albedo(self, si, wi, mode, n_samples, sampler)
    }
}

/// Indents continuation lines of a nested description.
fn indent(s: String) -> String {
    s.replace('\n', "\n  ")
}

impl fmt::Display for RoughDielectric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RoughDielectric[")?;
        writeln!(f, "  name = \"{}\",", self.name)?;
        writeln!(f, "  distribution = {},", self.distribution)?;
        writeln!(f, "  alphaU = {},", indent(self.alpha_u.to_string()))?;
        writeln!(f, "  alphaV = {},", indent(self.alpha_v.to_string()))?;
        writeln!(
            f,
            "  specularReflectance = {},",
            indent(self.specular_reflectance.to_string())
        )?;
        writeln!(
            f,
            "  specularTransmittance = {},",
            indent(self.specular_transmittance.to_string())
        )?;
        writeln!(f, "  intIOR = {},", self.int_ior)?;
        writeln!(f, "  extIOR = {}", self.ext_ior)?;
        write!(f, "]")
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use microglass_core::geometry::Point2f;

    fn checkerboard(a: Float, b: Float) -> ArcTexture<Spectrum> {
        Arc::new(CheckerboardTexture2D::new(constant(a), constant(b), 4.0, 4.0, 0.0, 0.0))
    }

    #[test]
    fn rejects_invalid_ior() {
        for (int_ior, ext_ior) in [(1.5, 1.5), (1.0, 1.0), (0.0, 1.0), (1.5, 0.0), (-1.5, 1.0), (1.5, -1.0)] {
            let result = RoughDielectricBuilder::new().ior(int_ior, ext_ior).configure();
            assert!(result.is_err(), "accepted intIOR = {}, extIOR = {}", int_ior, ext_ior);
        }
        assert!(RoughDielectricBuilder::new().ior(1.0, 1.5).configure().is_ok());
    }

    #[test]
    fn anisotropy_requires_ashikhmin_shirley() {
        for distribution in [
            MicrofacetDistribution::Beckmann,
            MicrofacetDistribution::GGX,
            MicrofacetDistribution::Phong,
        ] {
            let result = RoughDielectricBuilder::new()
                .distribution(distribution)
                .roughness(0.1, 0.3)
                .configure();
            assert!(result.is_err(), "{} accepted anisotropic roughness", distribution);
        }

        let material = RoughDielectricBuilder::new()
            .distribution(MicrofacetDistribution::AshikhminShirley)
            .roughness(0.1, 0.3)
            .configure()
            .unwrap();
        assert!(material.get_type(0).contains(BxDFType::ANISOTROPIC));
        assert!(material.get_type(1).contains(BxDFType::ANISOTROPIC));
    }

    #[test]
    fn equal_roughness_textures_that_are_distinct_instances_are_anisotropic() {
        let mut builder = RoughDielectricBuilder::new();
        builder.add_child("alphaU", constant(0.2)).unwrap();
        builder.add_child("alphaV", constant(0.2)).unwrap();
        assert!(builder.configure().is_err());
    }

    #[test]
    fn alpha_binds_both_handles() {
        let mut builder = RoughDielectricBuilder::new().roughness(0.1, 0.3);
        builder.add_child("alpha", constant(0.2)).unwrap();
        let material = builder.configure().unwrap();
        let (alpha_u, alpha_v) = material.alpha();
        assert!(same_instance(alpha_u, alpha_v));
        assert!(!material.get_type(0).contains(BxDFType::ANISOTROPIC));
    }

    #[test]
    fn unknown_child_is_an_error() {
        let mut builder = RoughDielectricBuilder::new();
        assert!(builder.add_child("diffuseReflectance", constant(0.5)).is_err());
    }

    #[test]
    fn component_flags() {
        let material = RoughDielectricBuilder::new().configure().unwrap();
        assert_eq!(material.component_count(), 2);
        let common = BxDFType::FRONT_SIDE | BxDFType::BACK_SIDE | BxDFType::CAN_USE_SAMPLER;
        assert_eq!(material.get_type(0), BxDFType::GLOSSY_REFLECTION | common);
        assert_eq!(material.get_type(1), BxDFType::GLOSSY_TRANSMISSION | common);
        assert_eq!(material.combined_type(), BxDFType::GLOSSY | common);
    }

    #[test]
    fn spatially_varying_flags() {
        let mut builder = RoughDielectricBuilder::new();
        builder.add_child("specularTransmittance", checkerboard(0.2, 0.8)).unwrap();
        let material = builder.configure().unwrap();
        assert!(!material.get_type(0).contains(BxDFType::SPATIALLY_VARYING));
        assert!(material.get_type(1).contains(BxDFType::SPATIALLY_VARYING));

        let mut builder = RoughDielectricBuilder::new();
        builder.add_child("alpha", checkerboard(0.05, 0.3)).unwrap();
        let material = builder.configure().unwrap();
        assert!(material.get_type(0).contains(BxDFType::SPATIALLY_VARYING));
        assert!(material.get_type(1).contains(BxDFType::SPATIALLY_VARYING));

        let si = SurfaceInteraction::new(Point2f::new(0.1, 0.1));
        assert!(approx_eq!(f32, material.roughness(&si), 0.05, epsilon = 1e-6));
    }

    #[test]
    fn modulation_is_clamped_for_energy_conservation() {
        let mut builder = RoughDielectricBuilder::new();
        builder.add_child("specularReflectance", constant(2.0)).unwrap();
        let material = builder.configure().unwrap();
        let max = material.specular_reflectance().maximum().max_component_value();
        assert!(approx_eq!(f32, max, 0.99, epsilon = 1e-6));
        assert_eq!(material.specular_transmittance().maximum(), Spectrum::ONE);

        let mut builder = RoughDielectricBuilder::new().ensure_energy_conservation(false);
        builder.add_child("specularReflectance", constant(2.0)).unwrap();
        let material = builder.configure().unwrap();
        assert_eq!(material.specular_reflectance().maximum(), Spectrum::new(2.0));
    }

    #[test]
    fn defaults_from_empty_params() {
        let tp = TextureParams::default();
        let material = RoughDielectricBuilder::try_from(&tp).unwrap().configure().unwrap();
        assert_eq!(material.distribution(), MicrofacetDistribution::Beckmann);
        assert_eq!(material.int_ior(), 1.5046);
        assert_eq!(material.ext_ior(), 1.000277);
        assert_eq!(material.name(), UNNAMED);
        let (alpha_u, alpha_v) = material.alpha();
        assert!(same_instance(alpha_u, alpha_v));
        assert_eq!(alpha_u.maximum(), Spectrum::new(0.1));
    }

    #[test]
    fn params_select_distribution_and_media() {
        let mut params = ParamSet::new();
        params.add_string("distribution", &[String::from("as")]);
        params.add_float("alphaU", &[0.05]);
        params.add_float("alphaV", &[0.3]);
        params.add_string("intIOR", &[String::from("water")]);
        params.add_float("extIOR", &[1.0]);
        params.add_string("name", &[String::from("frosted")]);
        let tp = TextureParams::new(params, Default::default());

        let material = RoughDielectricBuilder::try_from(&tp).unwrap().configure().unwrap();
        assert_eq!(material.distribution(), MicrofacetDistribution::AshikhminShirley);
        assert_eq!(material.int_ior(), 1.333);
        assert_eq!(material.ext_ior(), 1.0);
        assert_eq!(material.name(), "frosted");
        assert!(material.get_type(0).contains(BxDFType::ANISOTROPIC));
    }

    #[test]
    fn params_refer_to_named_textures() {
        let mut textures = SpectrumTextureMap::new();
        textures.insert(String::from("rough"), checkerboard(0.05, 0.3));
        let mut params = ParamSet::new();
        params.add_texture("alpha", &[String::from("rough")]);
        params.add_texture("specularTransmittance", &[String::from("rough")]);
        let tp = TextureParams::new(params, textures);

        let material = RoughDielectricBuilder::try_from(&tp).unwrap().configure().unwrap();
        let (alpha_u, alpha_v) = material.alpha();
        assert!(same_instance(alpha_u, alpha_v));
        assert!(same_instance(alpha_u, material.specular_transmittance()));
        assert!(material.get_type(0).contains(BxDFType::SPATIALLY_VARYING));

        let mut params = ParamSet::new();
        params.add_texture("alphaU", &[String::from("missing")]);
        let tp = TextureParams::new(params, SpectrumTextureMap::new());
        assert!(RoughDielectricBuilder::try_from(&tp).is_err());
    }

    #[test]
    fn invalid_params_are_errors() {
        let mut params = ParamSet::new();
        params.add_string("distribution", &[String::from("cosine")]);
        assert!(RoughDielectricBuilder::try_from(&TextureParams::new(params, Default::default())).is_err());

        let mut params = ParamSet::new();
        params.add_string("intIOR", &[String::from("mithril")]);
        assert!(RoughDielectricBuilder::try_from(&TextureParams::new(params, Default::default())).is_err());
    }

    #[test]
    fn description_lists_parameters() {
        let material = RoughDielectricBuilder::new()
            .name("frosted")
            .distribution(MicrofacetDistribution::GGX)
            .ior(1.5, 1.0)
            .configure()
            .unwrap();
        let s = material.to_string();
        assert!(s.starts_with("RoughDielectric[\n  name = \"frosted\",\n  distribution = ggx,\n"));
        assert!(s.contains("  alphaU = ConstantTexture[value = [0.1, 0.1, 0.1]],\n"));
        assert!(s.ends_with("  intIOR = 1.5,\n  extIOR = 1\n]"));
    }
}
