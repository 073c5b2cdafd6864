//! Instance Manager

use super::stream::*;
use crate::texture::*;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::Arc;

/// Reconstructs a texture from its class identifier and payload.
pub type TextureDecoder<T> =
    fn(class_id: u32, stream: &mut dyn Read, manager: &mut InstanceManager<T>) -> Result<ArcTexture<T>, String>;

/// Assigns stable identifiers to texture instances so that a handle shared
/// by several owners is written once and read back as a single shared
/// instance.
///
/// Stream layout for each reference: `u32` instance id. The first time an
/// id appears it is followed by the `u32` class id and the texture payload.
pub struct InstanceManager<T: Copy> {
    /// Ids of instances already written, keyed by instance address.
    ids: HashMap<*const (), u32>,

    /// Keeps written instances alive so their addresses stay unique.
    retained: Vec<ArcTexture<T>>,

    /// Instances already read, keyed by id.
    instances: HashMap<u32, ArcTexture<T>>,
}

impl<T: Copy> Default for InstanceManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> InstanceManager<T> {
    /// Create a new `InstanceManager` for one stream.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            retained: vec![],
            instances: HashMap::new(),
        }
    }

    /// Writes a reference to a texture, followed by its payload if the
    /// instance has not been written before.
    ///
    /// * `stream`  - The output stream.
    /// * `texture` - The texture.
    pub fn serialize(&mut self, stream: &mut dyn Write, texture: &ArcTexture<T>) -> Result<(), String> {
        let key = Arc::as_ptr(texture) as *const ();
        if let Some(id) = self.ids.get(&key) {
            return write_u32(stream, *id);
        }

        let id = self.retained.len() as u32 + 1;
        self.ids.insert(key, id);
        self.retained.push(Arc::clone(texture));

        write_u32(stream, id)?;
        write_u32(stream, texture.class_id())?;
        texture.serialize(stream, self)
    }

    /// Reads a texture reference. Previously seen ids return the instance
    /// already reconstructed.
    ///
    /// * `stream`  - The input stream.
    /// * `decoder` - Reconstructs textures from their class id and payload.
    pub fn get_instance(&mut self, stream: &mut dyn Read, decoder: TextureDecoder<T>) -> Result<ArcTexture<T>, String> {
        let id = read_u32(stream)?;
        if id == 0 {
            return Err(String::from("Invalid instance id 0 in stream."));
        }
        if let Some(texture) = self.instances.get(&id) {
            return Ok(Arc::clone(texture));
        }

        let class_id = read_u32(stream)?;
        let texture = decoder(class_id, stream, self)?;
        self.instances.insert(id, Arc::clone(&texture));
        Ok(texture)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::SurfaceInteraction;
    use crate::pbrt::Float;
    use std::fmt;
    use std::io::Cursor;

    struct Fixed(Float);

    impl fmt::Display for Fixed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Fixed[{}]", self.0)
        }
    }

    impl Texture<Float> for Fixed {
        fn evaluate(&self, _si: &SurfaceInteraction) -> Float {
            self.0
        }

        fn maximum(&self) -> Float {
            self.0
        }

        fn average(&self) -> Float {
            self.0
        }

        fn is_constant(&self) -> bool {
            true
        }

        fn class_id(&self) -> u32 {
            7
        }

        fn serialize(&self, stream: &mut dyn Write, _manager: &mut InstanceManager<Float>) -> Result<(), String> {
            self.0.write_value(stream)
        }
    }

    fn decode(class_id: u32, stream: &mut dyn Read, _manager: &mut InstanceManager<Float>) -> Result<ArcTexture<Float>, String> {
        match class_id {
            7 => Ok(Arc::new(Fixed(Float::read_value(stream)?))),
            id => Err(format!("Unknown class id {}", id)),
        }
    }

    #[test]
    fn shared_instances_stay_shared() {
        let a: ArcTexture<Float> = Arc::new(Fixed(0.25));
        let b: ArcTexture<Float> = Arc::new(Fixed(0.5));

        let mut buf: Vec<u8> = vec![];
        let mut writer = InstanceManager::new();
        writer.serialize(&mut buf, &a).unwrap();
        writer.serialize(&mut buf, &a).unwrap();
        writer.serialize(&mut buf, &b).unwrap();

        // id + class + payload, id, id + class + payload
        assert_eq!(buf.len(), 12 + 4 + 12);

        let mut cursor = Cursor::new(buf);
        let mut reader = InstanceManager::new();
        let ra = reader.get_instance(&mut cursor, decode).unwrap();
        let ra2 = reader.get_instance(&mut cursor, decode).unwrap();
        let rb = reader.get_instance(&mut cursor, decode).unwrap();

        assert!(same_instance(&ra, &ra2));
        assert!(!same_instance(&ra, &rb));
        assert_eq!(ra.maximum(), 0.25);
        assert_eq!(rb.maximum(), 0.5);
    }

    #[test]
    fn unknown_class_is_an_error() {
        let mut buf: Vec<u8> = vec![];
        write_u32(&mut buf, 1).unwrap();
        write_u32(&mut buf, 99).unwrap();

        let mut reader = InstanceManager::<Float>::new();
        assert!(reader.get_instance(&mut Cursor::new(buf), decode).is_err());
    }

    #[test]
    fn zero_id_is_an_error() {
        let mut buf: Vec<u8> = vec![];
        write_u32(&mut buf, 0).unwrap();

        let mut reader = InstanceManager::<Float>::new();
        assert!(reader.get_instance(&mut Cursor::new(buf), decode).is_err());
    }
}
