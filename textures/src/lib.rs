//! Textures

use microglass_core::paramset::TextureParams;
use microglass_core::serialization::InstanceManager;
use microglass_core::spectrum::Spectrum;
use microglass_core::texture::*;
use std::io::Read;
use std::sync::Arc;

#[macro_use]
extern crate log;

mod checkerboard_2d;
mod constant;
mod scale;

// Re-export
pub use checkerboard_2d::*;
pub use constant::*;
pub use scale::*;

/// Reconstructs a serialized texture from its class identifier and payload.
/// Nested textures are resolved through the instance manager.
///
/// * `class_id` - Texture class identifier.
/// * `stream`   - The input stream positioned at the payload.
/// * `manager`  - Tracks instances already read from the stream.
pub fn decode_texture<T: TextureValue>(
    class_id: u32,
    stream: &mut dyn Read,
    manager: &mut InstanceManager<T>,
) -> Result<ArcTexture<T>, String> {
    match class_id {
        CONSTANT_TEXTURE_CLASS_ID => Ok(Arc::new(ConstantTexture::<T>::deserialize(stream)?)),
        SCALE_TEXTURE_CLASS_ID => Ok(Arc::new(ScaleTexture::<T>::deserialize(stream, manager)?)),
        CHECKERBOARD_TEXTURE_CLASS_ID => Ok(Arc::new(CheckerboardTexture2D::<T>::deserialize(stream, manager)?)),
        id => Err(format!("Unknown texture class id {} in stream.", id)),
    }
}

/// Creates a named spectrum texture from a texture type name and its
/// parameters.
///
/// * `tex_type` - Texture type name.
/// * `tp`       - Texture parameters.
pub fn create_spectrum_texture(tex_type: &str, tp: &TextureParams) -> Result<ArcTexture<Spectrum>, String> {
    match tex_type {
        "constant" => Ok(Arc::new(ConstantTexture::from(tp))),
        "scale" => Ok(Arc::new(ScaleTexture::try_from(tp)?)),
        "checkerboard" => Ok(Arc::new(CheckerboardTexture2D::try_from(tp)?)),
        t => {
            warn!("Texture '{}' unknown.", t);
            Err(format!("Texture '{}' unknown.", t))
        }
    }
}
