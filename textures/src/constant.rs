//! Constant Texture

use microglass_core::interaction::*;
use microglass_core::paramset::*;
use microglass_core::serialization::*;
use microglass_core::spectrum::*;
use microglass_core::texture::*;
use std::fmt;
use std::io::{Read, Write};

/// Class identifier of `ConstantTexture` in serialized streams.
pub const CONSTANT_TEXTURE_CLASS_ID: u32 = 1;

/// Implements a texture that returns the same value everywhere.
#[derive(Clone)]
pub struct ConstantTexture<T> {
    /// The texture value.
    value: T,
}

impl<T> ConstantTexture<T> {
    /// Create a new `ConstantTexture<T>`.
    ///
    /// * `value` - The texture value.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: TextureValue> ConstantTexture<T> {
    /// Reads the texture payload.
    ///
    /// * `stream` - The input stream.
    pub fn deserialize(stream: &mut dyn Read) -> Result<Self, String> {
        Ok(Self::new(T::read_value(stream)?))
    }
}

impl<T: TextureValue> Texture<T> for ConstantTexture<T> {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `_si` - Surface interaction.
    fn evaluate(&self, _si: &SurfaceInteraction) -> T {
        self.value
    }

    fn maximum(&self) -> T {
        self.value
    }

    fn average(&self) -> T {
        self.value
    }

    fn is_constant(&self) -> bool {
        true
    }

    fn class_id(&self) -> u32 {
        CONSTANT_TEXTURE_CLASS_ID
    }

    fn serialize(&self, stream: &mut dyn Write, _manager: &mut InstanceManager<T>) -> Result<(), String> {
        self.value.write_value(stream)
    }
}

impl<T: fmt::Display> fmt::Display for ConstantTexture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstantTexture[value = {}]", self.value)
    }
}

impl From<&TextureParams> for ConstantTexture<Spectrum> {
    /// Create a `ConstantTexture<Spectrum>` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn from(tp: &TextureParams) -> Self {
        let value = tp.params.find_one_spectrum("value", Spectrum::new(tp.find_float("value", 1.0)));
        Self::new(value)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
