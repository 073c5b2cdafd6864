//! Stream helpers

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// Writes one 32-bit unsigned value.
///
/// * `stream` - The output stream.
/// * `v`      - The value.
pub fn write_u32(stream: &mut dyn Write, v: u32) -> Result<(), String> {
    match stream.write_u32::<LittleEndian>(v) {
        Ok(()) => Ok(()),
        Err(err) => Err(format!("Error writing one u32. {:}.", err)),
    }
}

/// Writes one 32-bit floating point value.
///
/// * `stream` - The output stream.
/// * `v`      - The value.
pub fn write_f32(stream: &mut dyn Write, v: f32) -> Result<(), String> {
    match stream.write_f32::<LittleEndian>(v) {
        Ok(()) => Ok(()),
        Err(err) => Err(format!("Error writing one f32. {:}.", err)),
    }
}

/// Reads one 32-bit unsigned value.
///
/// * `stream` - The input stream.
pub fn read_u32(stream: &mut dyn Read) -> Result<u32, String> {
    match stream.read_u32::<LittleEndian>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Error reading one u32. {:}.", err)),
    }
}

/// Reads one 32-bit floating point value.
///
/// * `stream` - The input stream.
pub fn read_f32(stream: &mut dyn Read) -> Result<f32, String> {
    match stream.read_f32::<LittleEndian>() {
        Ok(v) => Ok(v),
        Err(err) => Err(format!("Error reading one f32. {:}.", err)),
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn little_endian_layout() {
        let mut buf: Vec<u8> = vec![];
        write_u32(&mut buf, 0x01020304).unwrap();
        assert_eq!(buf, vec![4, 3, 2, 1]);
    }

    #[test]
    fn truncated_stream_is_an_error() {
        let mut cursor = Cursor::new(vec![1_u8, 2]);
        assert!(read_f32(&mut cursor).is_err());
    }
}
