//! Texture Parameters

use super::*;
use crate::texture::*;
use std::sync::Arc;

/// Named spectrum textures available to materials.
pub type SpectrumTextureMap = HashMap<String, ArcTexture<Spectrum>>;

/// Material parameters together with the textures they may refer to.
#[derive(Clone, Default)]
pub struct TextureParams {
    /// Spectrum textures.
    spectrum_textures: SpectrumTextureMap,

    /// Material parameters.
    pub params: ParamSet,
}

/// Define a macro that can be used to generate a function for finding
/// a single valued parameter.
macro_rules! texture_params_find {
    ($func: ident, $t: ty, $paramset_func: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            self.params.$paramset_func(name, default)
        }
    };
}

impl TextureParams {
    /// Create a new `TextureParams`.
    ///
    /// * `params`            - Material parameters.
    /// * `spectrum_textures` - Spectrum textures.
    pub fn new(params: ParamSet, spectrum_textures: SpectrumTextureMap) -> Self {
        Self {
            spectrum_textures,
            params,
        }
    }

    /// Returns a spectrum texture.
    ///
    /// * `name` - Texture name.
    pub fn get_spectrum_texture(&self, name: &str) -> Option<ArcTexture<Spectrum>> {
        self.spectrum_textures.get(name).map(Arc::clone)
    }

    /// Returns a spectrum texture for a parameter. The parameter may name a
    /// texture, hold a spectrum or hold a single float. Missing parameters
    /// produce a constant texture with the default value.
    ///
    /// * `name`            - Parameter name.
    /// * `default`         - Default spectrum value.
    /// * `constant_tex_fn` - Function that will generate specific texture given
    ///                       a spectrum value.
    pub fn get_spectrum_texture_or_else<F>(
        &self,
        name: &str,
        default: Spectrum,
        constant_tex_fn: F,
    ) -> Result<ArcTexture<Spectrum>, String>
    where
        F: Fn(Spectrum) -> ArcTexture<Spectrum>,
    {
        let tex_name = self.params.find_one_texture(name, String::new());
        if !tex_name.is_empty() {
            return self
                .get_spectrum_texture(&tex_name)
                .ok_or_else(|| format!("Parameter '{}' refers to unknown texture '{}'.", name, tex_name));
        }

        let s = self.params.find_spectrum(name);
        if s.len() > 1 {
            warn!("Ignoring excess values provided with parameter '{}'", name);
        }
        if !s.is_empty() {
            return Ok(constant_tex_fn(s[0]));
        }

        let f = self.params.find_float(name);
        if f.len() > 1 {
            warn!("Ignoring excess values provided with parameter '{}'", name);
        }
        if !f.is_empty() {
            return Ok(constant_tex_fn(Spectrum::new(f[0])));
        }

        Ok(constant_tex_fn(default))
    }

    /// Returns true if the parameter is given in any form.
    ///
    /// * `name` - Parameter name.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains(name)
    }

    texture_params_find!(find_float, Float, find_one_float);
    texture_params_find!(find_string, String, find_one_string);
    texture_params_find!(find_bool, bool, find_one_bool);
}
