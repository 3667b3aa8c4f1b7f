//! Network byte order wire codec for spitz task and result payloads
//!
//! A [`Writer`] appends typed fields to an owned buffer, a [`Reader`] pulls them back out of a
//! borrowed view in the same order. The format carries no tags or lengths:
//!
//! | Kind | Width | Encoding |
//! |---|---|---|
//! | bool | 1 | `0x00` / `0x01` |
//! | i8 / u8 | 1 | raw |
//! | i16 / u16 | 2 | big-endian |
//! | i32 / u32 | 4 | big-endian |
//! | i64 / u64 | 8 | big-endian |
//! | f32 / f64 | 4 / 8 | big-endian IEEE-754 bits |
//! | string | n + 1 | bytes, then `0x00` |
//! | bytes | n | raw, length known by both sides |

#![warn(
    clippy::cognitive_complexity,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::doc_link_with_quotes,
    clippy::doc_markdown,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::float_equality_without_abs,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    non_ascii_idents,
    noop_method_call,
    clippy::option_if_let_else,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::semicolon_if_nothing_returned,
    clippy::unseparated_literal_suffix,
    clippy::shadow_unrelated,
    clippy::similar_names,
    clippy::suspicious_operation_groupings,
    unused_extern_crates,
    unused_import_braces,
    clippy::unused_self,
    clippy::use_debug,
    clippy::used_underscore_binding,
    clippy::useless_let_if_seq,
    clippy::wildcard_dependencies,
    clippy::wildcard_imports
)]

/// Encode & Decode traits
mod codec;

/// Errors
mod errors;

/// Byte order utils
mod utils;

/// Message reader
mod reader;

/// Message writer
pub mod writer;


pub use codec::{Decode, Encode};
pub use errors::{CodecError, Result};
pub use reader::Reader;
pub use utils::{hton16, hton32, hton64, ntoh16, ntoh32, ntoh64, ByteOrder, NetworkOrder};
pub use writer::Writer;
