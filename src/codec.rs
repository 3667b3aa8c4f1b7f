use std::ffi::{CStr, CString};

use crate::errors::Result;
use crate::reader::Reader;
use crate::writer::Writer;

/// A value with a fixed wire encoding, written through [`Writer::write`].
pub trait Encode {
    fn encode(&self, writer: &mut Writer);
}

/// A value with a fixed wire encoding, read through [`Reader::read`].
///
/// The lifetime lets borrowed values such as `&CStr` point straight into the view.
pub trait Decode<'a>: Sized {
    /// # Errors
    ///
    /// `BufferUnderrun` when the view ends before the value does.
    fn decode(reader: &mut Reader<'a>) -> Result<Self>;
}

macro_rules! impl_codec_for_primitives {
    ($($t:ty => $write:ident, $read:ident);* $(;)?) => {
        $(
            impl Encode for $t {
                fn encode(&self, writer: &mut Writer) {
                    writer.$write(*self);
                }
            }

            impl<'a> Decode<'a> for $t {
                fn decode(reader: &mut Reader<'a>) -> Result<Self> {
                    reader.$read()
                }
            }
        )*
    };
}

impl_codec_for_primitives! {
    bool => write_bool, read_bool;
    i8 => write_i8, read_i8;
    u8 => write_u8, read_u8;
    i16 => write_i16, read_i16;
    u16 => write_u16, read_u16;
    i32 => write_i32, read_i32;
    u32 => write_u32, read_u32;
    i64 => write_i64, read_i64;
    u64 => write_u64, read_u64;
    f32 => write_f32, read_f32;
    f64 => write_f64, read_f64;
}

impl Encode for str {
    fn encode(&self, writer: &mut Writer) {
        writer.write_string(self);
    }
}

impl Encode for String {
    fn encode(&self, writer: &mut Writer) {
        writer.write_string(self);
    }
}

impl Encode for CStr {
    fn encode(&self, writer: &mut Writer) {
        writer.write_cstr(self);
    }
}

impl Encode for CString {
    fn encode(&self, writer: &mut Writer) {
        writer.write_cstr(self);
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, writer: &mut Writer) {
        (**self).encode(writer);
    }
}

impl<'a> Decode<'a> for &'a CStr {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_string()
    }
}

impl<'a> Decode<'a> for CString {
    fn decode(reader: &mut Reader<'a>) -> Result<Self> {
        reader.read_string().map(CStr::to_owned)
    }
}
