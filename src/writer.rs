use std::ffi::CStr;

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::Encode;
use crate::utils::NetworkOrder;

/// Writer config
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Bytes reserved up front, the buffer still grows on demand
    capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self { capacity: 64 }
    }

    /// Set the initial capacity of the buffer
    /// The default value is 64
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Appends typed values to an owned buffer in network byte order.
///
/// Fields are written back to back with no tags, padding or length prefixes, so the reading side
/// must know the field order in advance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    buf: BytesMut,
}

impl Writer {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::new().capacity(capacity))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            buf: BytesMut::with_capacity(config.capacity),
        }
    }

    pub fn write_bool(&mut self, v: bool) -> &mut Self {
        self.buf.put_u8(u8::from(v));
        self
    }

    pub fn write_i8(&mut self, v: i8) -> &mut Self {
        self.buf.put_i8(v);
        self
    }

    pub fn write_u8(&mut self, v: u8) -> &mut Self {
        self.buf.put_u8(v);
        self
    }

    pub fn write_i16(&mut self, v: i16) -> &mut Self {
        self.write_u16(v as u16)
    }

    pub fn write_u16(&mut self, v: u16) -> &mut Self {
        self.buf.put_u16_ne(v.to_network());
        self
    }

    pub fn write_i32(&mut self, v: i32) -> &mut Self {
        self.write_u32(v as u32)
    }

    pub fn write_u32(&mut self, v: u32) -> &mut Self {
        self.buf.put_u32_ne(v.to_network());
        self
    }

    pub fn write_i64(&mut self, v: i64) -> &mut Self {
        self.write_u64(v as u64)
    }

    pub fn write_u64(&mut self, v: u64) -> &mut Self {
        self.buf.put_u64_ne(v.to_network());
        self
    }

    /// The IEEE-754 bits are written as they are, NaN payloads and signed zeros included.
    pub fn write_f32(&mut self, v: f32) -> &mut Self {
        self.write_u32(v.to_bits())
    }

    /// See [`Writer::write_f32`].
    pub fn write_f64(&mut self, v: f64) -> &mut Self {
        self.write_u64(v.to_bits())
    }

    /// Append the bytes of `v` followed by a single `0x00`.
    ///
    /// An embedded zero byte is written as is and ends the value early on the reading side.
    pub fn write_string(&mut self, v: impl AsRef<[u8]>) -> &mut Self {
        self.buf.put_slice(v.as_ref());
        self.buf.put_u8(0);
        self
    }

    pub fn write_cstr(&mut self, v: &CStr) -> &mut Self {
        self.buf.put_slice(v.to_bytes_with_nul());
        self
    }

    /// Append raw bytes without any framing, the reader has to know the length.
    pub fn write_bytes(&mut self, v: &[u8]) -> &mut Self {
        self.buf.put_slice(v);
        self
    }

    /// Append any [`Encode`] value, same bytes as the matching `write_*` call.
    pub fn write<T: Encode + ?Sized>(&mut self, v: &T) -> &mut Self {
        v.encode(self);
        self
    }

    /// The encoded message
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    pub fn into_inner(self) -> BytesMut {
        self.buf
    }
}

impl AsRef<[u8]> for Writer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Writer> for Bytes {
    fn from(writer: Writer) -> Self {
        writer.freeze()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fixed_width_layout() {
        let mut writer = Writer::new();
        writer
            .write_bool(true)
            .write_bool(false)
            .write_i8(-2)
            .write_u8(0xAB)
            .write_u16(0x0102)
            .write_i16(-2)
            .write_u32(0x0102_0304)
            .write_u64(0x0102_0304_0506_0708);
        assert_eq!(
            writer.as_bytes(),
            [
                0x01, 0x00, 0xFE, 0xAB, 0x01, 0x02, 0xFF, 0xFE, 0x01, 0x02, 0x03, 0x04, 0x01, 0x02,
                0x03, 0x04, 0x05, 0x06, 0x07, 0x08
            ]
        );
    }

    #[test]
    fn test_signed_uses_raw_bits() {
        let mut writer = Writer::new();
        writer.write_i32(i32::MIN).write_i64(-1);
        assert_eq!(
            writer.as_bytes(),
            [0x80, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_float_bits_are_kept() {
        let mut writer = Writer::new();
        writer
            .write_f32(-0.0)
            .write_f32(f32::from_bits(0x7FC0_0001))
            .write_f64(1.0);
        assert_eq!(
            writer.as_bytes(),
            [
                0x80, 0, 0, 0, 0x7F, 0xC0, 0x00, 0x01, 0x3F, 0xF0, 0, 0, 0, 0, 0, 0
            ]
        );
    }

    #[test]
    fn test_strings_and_bytes() {
        let mut writer = Writer::new();
        writer
            .write_string("")
            .write_string("ok")
            .write_cstr(CStr::from_bytes_with_nul(b"hi\0").unwrap())
            .write_bytes(&[9, 8, 7]);
        assert_eq!(writer.as_bytes(), b"\0ok\0hi\0\x09\x08\x07");
    }

    #[test]
    fn test_embedded_nul_is_written_verbatim() {
        let mut writer = Writer::new();
        writer.write_string("a\0b");
        assert_eq!(writer.as_bytes(), b"a\0b\0");
    }

    #[test]
    fn test_length_never_decreases() {
        let mut writer = Writer::with_config(Config::new().capacity(2));
        assert!(writer.is_empty());
        let mut last = 0;
        for i in 0..100_u32 {
            writer.write_u32(i).write_string("x");
            assert!(writer.len() > last);
            last = writer.len();
        }
        assert_eq!(writer.len(), 100 * 6);
        assert_eq!(Bytes::from(writer).len(), 600);
    }
}
