//! Application related stuff

use clap::Parser;
use microglass_core::paramset::*;
use microglass_core::pbrt::Float;
use microglass_core::reflection::TransportMode;
use microglass_core::spectrum::Spectrum;
use microglass_core::texture::ArcTexture;
use microglass_textures::create_spectrum_texture;
use std::thread;

/// Name of the texture created by `--checker`.
const CHECKER_TEXTURE: &str = "checker";

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Options {
    /// Material name.
    #[clap(long, value_name = "NAME", default_value = "unnamed", help = "Name of the material.")]
    pub name: String,

    /// Microfacet distribution.
    #[clap(
        long,
        short = 'd',
        value_name = "NAME",
        default_value = "beckmann",
        help = "Microfacet distribution (beckmann, ggx, phong, as)."
    )]
    pub distribution: String,

    /// Isotropic roughness.
    #[clap(long, short = 'a', value_name = "FLOAT", help = "Roughness along both tangent directions.")]
    pub alpha: Option<Float>,

    /// Roughness along the tangent.
    #[clap(long = "alpha-u", value_name = "FLOAT", help = "Roughness along the tangent.")]
    pub alpha_u: Option<Float>,

    /// Roughness along the bitangent.
    #[clap(long = "alpha-v", value_name = "FLOAT", help = "Roughness along the bitangent.")]
    pub alpha_v: Option<Float>,

    /// Checkerboard roughness.
    #[clap(
        long,
        value_name = "FLOAT",
        num_args = 2,
        help = "Use a checkerboard alternating between two roughness values."
    )]
    pub checker: Vec<Float>,

    /// Interior index of refraction.
    #[clap(
        long = "int-ior",
        value_name = "IOR",
        default_value = "bk7",
        help = "Interior index of refraction, as a number or a material name."
    )]
    pub int_ior: String,

    /// Exterior index of refraction.
    #[clap(
        long = "ext-ior",
        value_name = "IOR",
        default_value = "air",
        help = "Exterior index of refraction, as a number or a material name."
    )]
    pub ext_ior: String,

    /// Disable rescaling of modulation textures brighter than 1.
    #[clap(long = "no-energy-conservation", help = "Keep modulation textures brighter than 1.")]
    pub no_energy_conservation: bool,

    /// Number of samples per incident angle.
    #[clap(
        long,
        short = 'n',
        value_name = "NUM",
        default_value_t = 100000,
        help = "Number of samples used for each albedo estimate."
    )]
    pub samples: usize,

    /// Incident angles in degrees.
    #[clap(
        long,
        value_name = "DEGREES",
        num_args = 1..,
        allow_negative_numbers = true,
        default_values_t = [0.0, 30.0, 60.0, 85.0],
        help = "Incident angles, in degrees from the normal. Negative angles arrive from inside."
    )]
    pub angles: Vec<Float>,

    /// Transport adjoint radiance instead of radiance.
    #[clap(long, help = "Estimate albedo for importance transport.")]
    pub importance: bool,

    /// Random seed.
    #[clap(long, short = 's', value_name = "NUM", default_value_t = 0, help = "Seed for the random sampler.")]
    pub seed: u64,

    /// Number of threads.
    #[clap(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 1,
        help = "Use specified number of threads for albedo estimates."
    )]
    n_threads: usize,

    /// Path to the serialized material.
    #[clap(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        help = "Write the serialized material to the given filename."
    )]
    pub outfile: Option<String>,

    /// Print the preview shader.
    #[clap(long, help = "Print the preview shader source.")]
    pub shader: bool,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = thread::available_parallelism().map_or(1, |n| n.get());
        match self.n_threads {
            0 => {
                warn!("Invalid nthreads");
                1
            }
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }

    /// Returns the transport mode for albedo estimates.
    pub fn mode(&self) -> TransportMode {
        if self.importance {
            TransportMode::Importance
        } else {
            TransportMode::Radiance
        }
    }

    /// Returns the material parameters described by the options along with
    /// the named textures they refer to.
    pub fn texture_params(&self) -> Result<TextureParams, String> {
        let mut params = ParamSet::default();
        params.add_string("name", &[self.name.clone()]);
        params.add_string("distribution", &[self.distribution.clone()]);
        add_ior(&mut params, "intIOR", &self.int_ior);
        add_ior(&mut params, "extIOR", &self.ext_ior);
        params.add_bool("ensureEnergyConservation", &[!self.no_energy_conservation]);

        if let Some(alpha) = self.alpha {
            params.add_float("alpha", &[alpha]);
        }
        if let Some(alpha_u) = self.alpha_u {
            params.add_float("alphaU", &[alpha_u]);
        }
        if let Some(alpha_v) = self.alpha_v {
            params.add_float("alphaV", &[alpha_v]);
        }

        let mut textures = SpectrumTextureMap::new();
        if let [a, b] = self.checker.as_slice() {
            textures.insert(String::from(CHECKER_TEXTURE), checkerboard(*a, *b)?);
            params.add_texture("alpha", &[String::from(CHECKER_TEXTURE)]);
        }

        Ok(TextureParams::new(params, textures))
    }
}

/// Adds an index of refraction given either as a number or a material name.
///
/// * `params` - Parameter set.
/// * `name`   - Parameter name.
/// * `value`  - Command line value.
fn add_ior(params: &mut ParamSet, name: &str, value: &str) {
    match value.parse::<Float>() {
        Ok(ior) => params.add_float(name, &[ior]),
        Err(_) => params.add_string(name, &[String::from(value)]),
    }
}

/// Creates a checkerboard roughness texture with 8 checks per unit.
///
/// * `a` - Roughness of the first check.
/// * `b` - Roughness of the second check.
fn checkerboard(a: Float, b: Float) -> Result<ArcTexture<Spectrum>, String> {
    let mut params = ParamSet::default();
    params.add_float("tex1", &[a]);
    params.add_float("tex2", &[b]);
    params.add_float("uscale", &[8.0]);
    params.add_float("vscale", &[8.0]);
    create_spectrum_texture("checkerboard", &TextureParams::new(params, SpectrumTextureMap::new()))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_bk7_in_air() {
        let options = Options::parse_from(["microglass"]);
        assert_eq!(options.angles, vec![0.0, 30.0, 60.0, 85.0]);
        assert_eq!(options.threads(), 1);

        let tp = options.texture_params().unwrap();
        assert_eq!(tp.find_string("distribution", String::new()), "beckmann");
        assert_eq!(tp.params.find_one_string("intIOR", String::new()), "bk7");
        assert!(tp.find_bool("ensureEnergyConservation", false));
        assert!(!tp.params.contains("alpha"));
    }

    #[test]
    fn numeric_ior_is_a_float() {
        let options = Options::parse_from(["microglass", "--int-ior", "1.33", "--ext-ior", "water"]);
        let tp = options.texture_params().unwrap();
        assert_eq!(tp.find_float("intIOR", 0.0), 1.33);
        assert_eq!(tp.params.find_one_string("extIOR", String::new()), "water");
    }

    #[test]
    fn checker_binds_a_named_texture() {
        let options = Options::parse_from(["microglass", "--checker", "0.05", "0.3"]);
        let tp = options.texture_params().unwrap();
        assert_eq!(tp.params.find_one_texture("alpha", String::new()), CHECKER_TEXTURE);

        let tex = tp.get_spectrum_texture(CHECKER_TEXTURE).unwrap();
        assert!(!tex.is_constant());
        assert_eq!(tex.maximum()[0], 0.3);
    }
}
