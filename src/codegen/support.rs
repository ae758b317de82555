//! Support items emitted once into every generated file that has messages.
//!
//! Generated message code is self-contained: the error types, the dynamic
//! `Value` used by `to_map`, and the wire-format helper functions all live
//! in the generated file itself. Only well-known type wrappers come from the
//! runtime crate.

use proc_macro2::TokenStream;
use quote::quote;

/// The runtime error types surfaced by generated mutators and decoders.
pub fn error_items() -> TokenStream {
    quote! {
        /// Error raised when a scalar assignment falls outside the bounds of
        /// the field's protobuf type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct RangeError {
            pub field: &'static str,
            pub proto_type: &'static str,
        }

        impl core::fmt::Display for RangeError {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(
                    f,
                    "value out of range for {} field `{}`",
                    self.proto_type, self.field
                )
            }
        }

        impl std::error::Error for RangeError {}

        /// Error raised when a byte buffer does not hold a valid message.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct DecodeError {
            pub reason: &'static str,
        }

        impl core::fmt::Display for DecodeError {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "decode failed: {}", self.reason)
            }
        }

        impl std::error::Error for DecodeError {}
    }
}

/// The dynamic value types used by enum accessors and `to_map`.
pub fn value_items() -> TokenStream {
    quote! {
        /// An enum-typed field value: a known symbol, or the raw number
        /// preserved for values the schema does not name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum EnumValue {
            Symbol(&'static str),
            Number(i32),
        }

        /// A dynamically typed field value produced by `to_map`.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Value {
            Bool(bool),
            I32(i32),
            I64(i64),
            U32(u32),
            U64(u64),
            F32(f32),
            F64(f64),
            Str(String),
            Bytes(Vec<u8>),
            Enum(&'static str),
            List(Vec<Value>),
            Map(Vec<(Value, Value)>),
            Message(std::collections::BTreeMap<&'static str, Value>),
        }
    }
}

/// The wire-format helper functions generated encode/decode bodies call.
pub fn helper_items() -> TokenStream {
    quote! {
        /// Append a base-128 varint.
        #[inline]
        pub fn push_varint(buf: &mut Vec<u8>, mut value: u64) {
            loop {
                let byte = (value & 0x7f) as u8;
                value >>= 7;
                if value == 0 {
                    buf.push(byte);
                    return;
                }
                buf.push(byte | 0x80);
            }
        }

        /// Append a zigzag-encoded sint32.
        #[inline]
        pub fn push_sint32(buf: &mut Vec<u8>, value: i32) {
            push_varint(buf, u64::from(((value << 1) ^ (value >> 31)) as u32));
        }

        /// Append a zigzag-encoded sint64.
        #[inline]
        pub fn push_sint64(buf: &mut Vec<u8>, value: i64) {
            push_varint(buf, ((value << 1) ^ (value >> 63)) as u64);
        }

        /// Append a length-prefixed chunk.
        #[inline]
        pub fn push_chunk(buf: &mut Vec<u8>, chunk: &[u8]) {
            push_varint(buf, chunk.len() as u64);
            buf.extend_from_slice(chunk);
        }

        /// Finish a length-delimited record whose payload was written after a
        /// one-byte reservation at `mark`. Writes the low seven bits into the
        /// reserved byte; only when the length needs more bytes are the
        /// continuation bytes spliced in, shifting the payload right.
        pub fn patch_length(buf: &mut Vec<u8>, mark: usize) {
            let mut length = (buf.len() - mark - 1) as u64;
            buf[mark] = (length & 0x7f) as u8;
            length >>= 7;
            if length == 0 {
                return;
            }
            buf[mark] |= 0x80;
            let mut tail = Vec::new();
            loop {
                let byte = (length & 0x7f) as u8;
                length >>= 7;
                if length == 0 {
                    tail.push(byte);
                    break;
                }
                tail.push(byte | 0x80);
            }
            buf.splice(mark + 1..mark + 1, tail);
        }

        /// Read a base-128 varint of at most ten bytes.
        #[inline]
        pub fn pull_varint(buf: &[u8], at: &mut usize) -> Result<u64, DecodeError> {
            let mut value = 0u64;
            let mut shift = 0u32;
            loop {
                let byte = match buf.get(*at) {
                    Some(byte) => *byte,
                    None => {
                        return Err(DecodeError {
                            reason: "truncated varint",
                        });
                    }
                };
                *at += 1;
                value |= u64::from(byte & 0x7f) << shift;
                if byte & 0x80 == 0 {
                    return Ok(value);
                }
                shift += 7;
                if shift >= 70 {
                    return Err(DecodeError {
                        reason: "varint exceeds ten bytes",
                    });
                }
            }
        }

        /// Read a zigzag-encoded sint32.
        #[inline]
        pub fn pull_sint32(buf: &[u8], at: &mut usize) -> Result<i32, DecodeError> {
            let value = pull_varint(buf, at)? as u32;
            Ok(((value >> 1) as i32) ^ -((value & 1) as i32))
        }

        /// Read a zigzag-encoded sint64.
        #[inline]
        pub fn pull_sint64(buf: &[u8], at: &mut usize) -> Result<i64, DecodeError> {
            let value = pull_varint(buf, at)?;
            Ok(((value >> 1) as i64) ^ -((value & 1) as i64))
        }

        /// Read four little-endian bytes.
        #[inline]
        pub fn pull_fixed32(buf: &[u8], at: &mut usize) -> Result<u32, DecodeError> {
            match buf.get(*at..*at + 4) {
                Some(chunk) => {
                    *at += 4;
                    Ok(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
                }
                None => Err(DecodeError {
                    reason: "truncated fixed32 value",
                }),
            }
        }

        /// Read eight little-endian bytes.
        #[inline]
        pub fn pull_fixed64(buf: &[u8], at: &mut usize) -> Result<u64, DecodeError> {
            match buf.get(*at..*at + 8) {
                Some(chunk) => {
                    *at += 8;
                    Ok(u64::from_le_bytes([
                        chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6],
                        chunk[7],
                    ]))
                }
                None => Err(DecodeError {
                    reason: "truncated fixed64 value",
                }),
            }
        }

        /// Read a length prefix and check the payload fits in `[at, end)`.
        #[inline]
        pub fn pull_length(buf: &[u8], at: &mut usize, end: usize) -> Result<usize, DecodeError> {
            let length = pull_varint(buf, at)? as usize;
            if end < *at || length > end - *at {
                return Err(DecodeError {
                    reason: "truncated length-delimited payload",
                });
            }
            Ok(length)
        }

        /// Read a length-prefixed UTF-8 string.
        #[inline]
        pub fn pull_string(buf: &[u8], at: &mut usize, end: usize) -> Result<String, DecodeError> {
            let length = pull_length(buf, at, end)?;
            let chunk = &buf[*at..*at + length];
            *at += length;
            match core::str::from_utf8(chunk) {
                Ok(text) => Ok(text.to_owned()),
                Err(_) => Err(DecodeError {
                    reason: "string field holds invalid utf-8",
                }),
            }
        }

        /// Read a length-prefixed byte chunk.
        #[inline]
        pub fn pull_bytes(buf: &[u8], at: &mut usize, end: usize) -> Result<Vec<u8>, DecodeError> {
            let length = pull_length(buf, at, end)?;
            let chunk = buf[*at..*at + length].to_vec();
            *at += length;
            Ok(chunk)
        }
    }
}

/// Everything a generated file with messages needs, in emission order.
pub fn support_items() -> TokenStream {
    let mut items = error_items();
    items.extend(value_items());
    items.extend(helper_items());
    items
}
