//! Textures

#![allow(dead_code)]
use crate::interaction::SurfaceInteraction;
use crate::pbrt::*;
use crate::serialization::*;
use crate::spectrum::Spectrum;
use std::fmt;
use std::io::{Read, Write};
use std::ops::{Add, Mul};
use std::sync::Arc;

/// Values that textures can produce.
pub trait TextureValue:
    Copy + Add<Output = Self> + Mul<Output = Self> + Mul<Float, Output = Self> + fmt::Display + Send + Sync + 'static
{
    /// Returns the component-wise maximum with another value.
    ///
    /// * `other` - The other value.
    fn component_max(&self, other: &Self) -> Self;

    /// Writes the value to a stream.
    ///
    /// * `stream` - The output stream.
    fn write_value(&self, stream: &mut dyn Write) -> Result<(), String>;

    /// Reads a value from a stream.
    ///
    /// * `stream` - The input stream.
    fn read_value(stream: &mut dyn Read) -> Result<Self, String>;
}

impl TextureValue for Float {
    fn component_max(&self, other: &Self) -> Self {
        max(*self, *other)
    }

    fn write_value(&self, stream: &mut dyn Write) -> Result<(), String> {
        write_f32(stream, *self)
    }

    fn read_value(stream: &mut dyn Read) -> Result<Self, String> {
        read_f32(stream)
    }
}

impl TextureValue for Spectrum {
    fn component_max(&self, other: &Self) -> Self {
        Spectrum::component_max(self, other)
    }

    fn write_value(&self, stream: &mut dyn Write) -> Result<(), String> {
        for c in self.to_rgb() {
            write_f32(stream, c)?;
        }
        Ok(())
    }

    fn read_value(stream: &mut dyn Read) -> Result<Self, String> {
        let r = read_f32(stream)?;
        let g = read_f32(stream)?;
        let b = read_f32(stream)?;
        Ok(Spectrum::from_rgb(&[r, g, b]))
    }
}

/// Texture interface.
pub trait Texture<T: Copy>: fmt::Display {
    /// Evaluate the texture at surface interaction.
    ///
    /// * `si` - Surface interaction.
    fn evaluate(&self, si: &SurfaceInteraction) -> T;

    /// Returns the component-wise maximum over the whole texture.
    fn maximum(&self) -> T;

    /// Returns the mean value over the parametric domain.
    fn average(&self) -> T;

    /// Returns true if the texture has the same value everywhere.
    fn is_constant(&self) -> bool;

    /// Returns the identifier written ahead of the texture payload when
    /// serializing.
    fn class_id(&self) -> u32;

    /// Writes the texture payload. Nested textures are written through the
    /// instance manager so shared instances stay shared.
    ///
    /// * `stream`  - The output stream.
    /// * `manager` - Tracks instances already written to the stream.
    fn serialize(&self, stream: &mut dyn Write, manager: &mut InstanceManager<T>) -> Result<(), String>;
}

/// Atomic reference counted `Texture`.
pub type ArcTexture<T> = Arc<dyn Texture<T> + Send + Sync>;

/// Returns true if two texture handles refer to the same instance.
///
/// * `a` - First texture.
/// * `b` - Second texture.
pub fn same_instance<T: Copy>(a: &ArcTexture<T>, b: &ArcTexture<T>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}
