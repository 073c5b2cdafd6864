//! Scale Texture

use super::*;
use microglass_core::interaction::*;
use std::convert::TryFrom;
use std::fmt;
use std::io::Write;

/// Class identifier of `ScaleTexture` in serialized streams.
pub const SCALE_TEXTURE_CLASS_ID: u32 = 2;

/// Implements a texture that returns the product of 2 textures.
#[derive(Clone)]
pub struct ScaleTexture<T: Copy> {
    /// First texture.
    tex1: ArcTexture<T>,

    /// Second texture.
    tex2: ArcTexture<T>,
}

impl<T: TextureValue> ScaleTexture<T> {
    /// Create a new `ScaleTexture`.
    ///
    /// * `tex1` - The first texture.
    /// * `tex2` - The second texture.
    pub fn new(tex1: ArcTexture<T>, tex2: ArcTexture<T>) -> Self {
        Self { tex1, tex2 }
    }

    /// Reads the texture payload.
    ///
    /// * `stream`  - The input stream.
    /// * `manager` - Tracks instances already read from the stream.
    pub fn deserialize(stream: &mut dyn Read, manager: &mut InstanceManager<T>) -> Result<Self, String> {
        let tex1 = manager.get_instance(stream, decode_texture::<T>)?;
        let tex2 = manager.get_instance(stream, decode_texture::<T>)?;
        Ok(Self::new(tex1, tex2))
    }

    /// Returns the scaled texture.
    pub fn texture(&self) -> &ArcTexture<T> {
        &self.tex1
    }

    /// Returns the scale factor texture.
    pub fn scale(&self) -> &ArcTexture<T> {
        &self.tex2
    }
}

impl<T: TextureValue> Texture<T> for ScaleTexture<T> {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si` - Surface interaction.
    fn evaluate(&self, si: &SurfaceInteraction) -> T {
        self.tex1.evaluate(si) * self.tex2.evaluate(si)
    }

    fn maximum(&self) -> T {
        self.tex1.maximum() * self.tex2.maximum()
    }

    fn average(&self) -> T {
        self.tex1.average() * self.tex2.average()
    }

    fn is_constant(&self) -> bool {
        self.tex1.is_constant() && self.tex2.is_constant()
    }

    fn class_id(&self) -> u32 {
        SCALE_TEXTURE_CLASS_ID
    }

    fn serialize(&self, stream: &mut dyn Write, manager: &mut InstanceManager<T>) -> Result<(), String> {
        manager.serialize(stream, &self.tex1)?;
        manager.serialize(stream, &self.tex2)
    }
}

impl<T: Copy> fmt::Display for ScaleTexture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScaleTexture[tex1 = {}, tex2 = {}]", self.tex1, self.tex2)
    }
}

impl TryFrom<&TextureParams> for ScaleTexture<Spectrum> {
    type Error = String;

    /// Create a `ScaleTexture<Spectrum>` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let tex1 = tp.get_spectrum_texture_or_else("tex1", Spectrum::ONE, |v| Arc::new(ConstantTexture::new(v)))?;
        let tex2 = tp.get_spectrum_texture_or_else("tex2", Spectrum::ONE, |v| Arc::new(ConstantTexture::new(v)))?;
        Ok(Self::new(tex1, tex2))
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
    use microglass_core::pbrt::Float;
    use std::io::Cursor;

    fn constant(v: Float) -> ArcTexture<Float> {
        Arc::new(ConstantTexture::new(v))
    }

    #[test]
    fn product_of_textures() {
        let tex = ScaleTexture::new(constant(0.5), constant(3.0));
        let si = SurfaceInteraction::new(Point2f::new(0.2, 0.7));
        assert!(approx_eq!(f32, tex.evaluate(&si), 1.5, epsilon = 1e-6));
        assert!(approx_eq!(f32, tex.maximum(), 1.5, epsilon = 1e-6));
        assert!(tex.is_constant());
    }

    #[test]
    fn varying_factor_is_not_constant() {
        let checker: ArcTexture<Float> = Arc::new(CheckerboardTexture2D::new(
            constant(0.0),
            constant(1.0),
            1.0,
            1.0,
            0.0,
            0.0,
        ));
        let tex = ScaleTexture::new(constant(0.5), checker);
        assert!(!tex.is_constant());
        assert!(approx_eq!(f32, tex.maximum(), 0.5, epsilon = 1e-6));
    }

    #[test]
    fn serialized_factors_are_restored() {
        let tex: ArcTexture<Float> = Arc::new(ScaleTexture::new(constant(2.0), constant(0.25)));

        let mut buf: Vec<u8> = vec![];
        InstanceManager::new().serialize(&mut buf, &tex).unwrap();

        let mut reader = InstanceManager::new();
        let restored = reader.get_instance(&mut Cursor::new(buf), decode_texture::<Float>).unwrap();
        assert_eq!(restored.class_id(), SCALE_TEXTURE_CLASS_ID);
        assert!(approx_eq!(f32, restored.maximum(), 0.5, epsilon = 1e-6));
    }
}
