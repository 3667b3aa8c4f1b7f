use std::ffi::CStr;

use bytes::Buf;
use log::debug;

use crate::codec::Decode;
use crate::errors::{CodecError, Result};
use crate::utils::NetworkOrder;

/// Fail with `BufferUnderrun` unless `$len` bytes are left, otherwise evaluate `$exp`.
macro_rules! read_buf {
    ($reader:expr, $len:expr, $exp:expr) => {{
        $reader.ensure($len)?;
        $exp
    }};
}

/// Decodes values from a borrowed byte view with a forward-only cursor.
///
/// Every read checks the remaining length first. A failed read leaves the cursor where it was.
#[derive(Debug, Clone, Default)]
pub struct Reader<'a> {
    /// The part of the view not read yet
    rest: &'a [u8],
    size: usize,
}

impl<'a> Reader<'a> {
    pub fn new(view: &'a [u8]) -> Self {
        Self {
            rest: view,
            size: view.len(),
        }
    }

    fn ensure(&self, needed: usize) -> Result<()> {
        if self.rest.remaining() < needed {
            return Err(self.underrun(needed));
        }
        Ok(())
    }

    fn underrun(&self, needed: usize) -> CodecError {
        let remaining = self.rest.remaining();
        debug!(
            "[reader] buffer underrun at {}: need {needed} bytes, {remaining} remaining",
            self.position()
        );
        CodecError::BufferUnderrun { needed, remaining }
    }

    /// Any non-zero byte decodes as `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(read_buf!(self, 1, self.rest.get_i8()))
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(read_buf!(self, 1, self.rest.get_u8()))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(read_buf!(self, 2, self.rest.get_u16_ne().to_host()))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(read_buf!(self, 4, self.rest.get_u32_ne().to_host()))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_u64()? as i64)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(read_buf!(self, 8, self.rest.get_u64_ne().to_host()))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_u32().map(f32::from_bits)
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_u64().map(f64::from_bits)
    }

    /// Read up to and including the next zero byte, the terminator is not part of the value.
    ///
    /// Without a terminator before the end of the view this fails with `BufferUnderrun`, the
    /// cursor stays put and nothing partial is returned.
    pub fn read_string(&mut self) -> Result<&'a CStr> {
        let rest = self.rest;
        let Ok(value) = CStr::from_bytes_until_nul(rest) else {
            // one more byte than what is left: the terminator that never came
            return Err(self.underrun(rest.len() + 1));
        };
        self.rest = &rest[value.to_bytes_with_nul().len()..];
        Ok(value)
    }

    /// Fill `dest` with the next `dest.len()` bytes.
    pub fn read_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        read_buf!(self, dest.len(), self.rest.copy_to_slice(dest));
        Ok(())
    }

    /// Borrow the next `len` bytes of the view without copying.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        Ok(head)
    }

    /// Read any [`Decode`] value, same bytes as the matching `read_*` call.
    pub fn read<T: Decode<'a>>(&mut self) -> Result<T> {
        T::decode(self)
    }

    /// Whether at least one more byte is available
    pub fn has_data(&self) -> bool {
        self.rest.has_remaining()
    }

    /// Total length of the view, consumed bytes included
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn position(&self) -> usize {
        self.size - self.rest.len()
    }

    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}

impl<'a> From<&'a [u8]> for Reader<'a> {
    fn from(view: &'a [u8]) -> Self {
        Self::new(view)
    }
}
