//! 2D Checkerboard

use super::*;
use microglass_core::interaction::*;
use microglass_core::pbrt::*;
use microglass_core::serialization::*;
use std::convert::TryFrom;
use std::fmt;
use std::io::Write;

/// Class identifier of `CheckerboardTexture2D` in serialized streams.
pub const CHECKERBOARD_TEXTURE_CLASS_ID: u32 = 3;

/// Implements a point sampled checkerboard texture over the (u, v)
/// parameterization.
#[derive(Clone)]
pub struct CheckerboardTexture2D<T: Copy> {
    /// First texture.
    tex1: ArcTexture<T>,

    /// Second texture.
    tex2: ArcTexture<T>,

    /// Scale for u-coordinate.
    su: Float,

    /// Scale for v-coordinate.
    sv: Float,

    /// Offset for u-coordinate.
    du: Float,

    /// Offset for v-coordinate.
    dv: Float,
}

impl<T: TextureValue> CheckerboardTexture2D<T> {
    /// Create a new `CheckerboardTexture2D<T>`.
    ///
    /// * `tex1` - The first texture.
    /// * `tex2` - The second texture.
    /// * `su`   - Scale for u-coordinate.
    /// * `sv`   - Scale for v-coordinate.
    /// * `du`   - Offset for u-coordinate.
    /// * `dv`   - Offset for v-coordinate.
    pub fn new(tex1: ArcTexture<T>, tex2: ArcTexture<T>, su: Float, sv: Float, du: Float, dv: Float) -> Self {
        Self {
            tex1,
            tex2,
            su,
            sv,
            du,
            dv,
        }
    }

    /// Reads the texture payload.
    ///
    /// * `stream`  - The input stream.
    /// * `manager` - Tracks instances already read from the stream.
    pub fn deserialize(stream: &mut dyn Read, manager: &mut InstanceManager<T>) -> Result<Self, String> {
        let su = read_f32(stream)?;
        let sv = read_f32(stream)?;
        let du = read_f32(stream)?;
        let dv = read_f32(stream)?;
        let tex1 = manager.get_instance(stream, decode_texture::<T>)?;
        let tex2 = manager.get_instance(stream, decode_texture::<T>)?;
        Ok(Self::new(tex1, tex2, su, sv, du, dv))
    }
}

impl<T: TextureValue> Texture<T> for CheckerboardTexture2D<T> {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si` - Surface interaction.
    fn evaluate(&self, si: &SurfaceInteraction) -> T {
        let s = self.su * si.uv[0] + self.du;
        let t = self.sv * si.uv[1] + self.dv;
        if (s.floor() as Int + t.floor() as Int) % 2 == 0 {
            self.tex1.evaluate(si)
        } else {
            self.tex2.evaluate(si)
        }
    }

    fn maximum(&self) -> T {
        self.tex1.maximum().component_max(&self.tex2.maximum())
    }

    fn average(&self) -> T {
        (self.tex1.average() + self.tex2.average()) * 0.5
    }

    fn is_constant(&self) -> bool {
        false
    }

    fn class_id(&self) -> u32 {
        CHECKERBOARD_TEXTURE_CLASS_ID
    }

    fn serialize(&self, stream: &mut dyn Write, manager: &mut InstanceManager<T>) -> Result<(), String> {
        write_f32(stream, self.su)?;
        write_f32(stream, self.sv)?;
        write_f32(stream, self.du)?;
        write_f32(stream, self.dv)?;
        manager.serialize(stream, &self.tex1)?;
        manager.serialize(stream, &self.tex2)
    }
}

impl<T: Copy> fmt::Display for CheckerboardTexture2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CheckerboardTexture2D[tex1 = {}, tex2 = {}, uscale = {}, vscale = {}, udelta = {}, vdelta = {}]",
            self.tex1, self.tex2, self.su, self.sv, self.du, self.dv
        )
    }
}

impl TryFrom<&TextureParams> for CheckerboardTexture2D<Spectrum> {
    type Error = String;

    /// Create a `CheckerboardTexture2D<Spectrum>` from given parameter set.
    ///
    /// * `tp` - Texture parameters.
    fn try_from(tp: &TextureParams) -> Result<Self, Self::Error> {
        let tex1 = tp.get_spectrum_texture_or_else("tex1", Spectrum::ONE, |v| Arc::new(ConstantTexture::new(v)))?;
        let tex2 = tp.get_spectrum_texture_or_else("tex2", Spectrum::ZERO, |v| Arc::new(ConstantTexture::new(v)))?;
        Ok(Self::new(
            tex1,
            tex2,
            tp.find_float("uscale", 1.0),
            tp.find_float("vscale", 1.0),
            tp.find_float("udelta", 0.0),
            tp.find_float("vdelta", 0.0),
        ))
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
    use std::io::Cursor;

    fn checker(su: Float, sv: Float) -> CheckerboardTexture2D<Float> {
        CheckerboardTexture2D::new(
            Arc::new(ConstantTexture::new(0.2)),
            Arc::new(ConstantTexture::new(0.8)),
            su,
            sv,
            0.0,
            0.0,
        )
    }

    #[test]
    fn alternates_between_checks() {
        let tex = checker(2.0, 2.0);
        let at = |u, v| tex.evaluate(&SurfaceInteraction::new(Point2f::new(u, v)));
        assert_eq!(at(0.25, 0.25), 0.2);
        assert_eq!(at(0.75, 0.25), 0.8);
        assert_eq!(at(0.25, 0.75), 0.8);
        assert_eq!(at(0.75, 0.75), 0.2);
    }

    #[test]
    fn summary_statistics() {
        let tex = checker(4.0, 4.0);
        assert_eq!(tex.maximum(), 0.8);
        assert!(approx_eq!(f32, tex.average(), 0.5, epsilon = 1e-6));
        assert!(!tex.is_constant());
    }

    #[test]
    fn shared_checks_are_written_once() {
        let check: ArcTexture<Float> = Arc::new(ConstantTexture::new(0.5));
        let tex: ArcTexture<Float> = Arc::new(CheckerboardTexture2D::new(
            Arc::clone(&check),
            Arc::clone(&check),
            3.0,
            3.0,
            0.5,
            0.0,
        ));

        let mut buf: Vec<u8> = vec![];
        InstanceManager::new().serialize(&mut buf, &tex).unwrap();
        // header, 4 floats, first check with header and value, second check id only
        assert_eq!(buf.len(), 8 + 16 + 12 + 4);

        let restored = InstanceManager::new()
            .get_instance(&mut Cursor::new(buf), decode_texture::<Float>)
            .unwrap();
        assert_eq!(restored.class_id(), CHECKERBOARD_TEXTURE_CLASS_ID);
        assert_eq!(restored.maximum(), 0.5);
    }
}
