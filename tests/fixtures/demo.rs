// This file is @generated by protoscribe. Do not edit.

pub mod demo {
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

    pub mod mood {
        pub const MOOD_UNSET: i32 = 0;
        pub const MOOD_HAPPY: i32 = 1;
        pub const MOOD_GRUMPY: i32 = 2;

        /// The symbol for a known value, or `None`.
        pub fn lookup(value: i32) -> Option<&'static str> {
            match value {
                0 => Some("MOOD_UNSET"),
                1 => Some("MOOD_HAPPY"),
                2 => Some("MOOD_GRUMPY"),
                _ => None,
            }
        }

        /// The value for a known symbol, or `None`.
        pub fn resolve(symbol: &str) -> Option<i32> {
            match symbol {
                "MOOD_UNSET" => Some(MOOD_UNSET),
                "MOOD_HAPPY" => Some(MOOD_HAPPY),
                "MOOD_GRUMPY" => Some(MOOD_GRUMPY),
                _ => None,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Inner {
        value: i32,
    }

    impl Inner {
        /// Parse one message from a complete byte sequence.
        pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
            let mut message = Self::default();
            message.decode_from(buf, 0, buf.len())?;
            Ok(message)
        }

        /// Serialize into a fresh byte sequence.
        pub fn encode(&self) -> Vec<u8> {
            let mut buf = Vec::new();
            self.encode_into(&mut buf);
            buf
        }

        pub fn value(&self) -> i32 {
            self.value
        }

        pub fn set_value<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "value",
                proto_type: "int32",
            })?;
            self.value = value;
            Ok(())
        }

        pub fn new(value: i32) -> Self {
            let mut message = Self::default();
            message.value = value;
            message
        }

        /// Convert into a name-keyed dictionary. Submessages recurse; a
        /// oneof contributes a single entry only while a member is active.
        pub fn to_map(&self) -> std::collections::BTreeMap<&'static str, Value> {
            let mut map = std::collections::BTreeMap::new();
            map.insert("value", Value::I32(self.value));
            map
        }

        /// Serialize into a caller-supplied buffer, appending.
        pub fn encode_into(&self, buf: &mut Vec<u8>) {
            if self.value != 0 {
                buf.push(8);
                push_varint(buf, self.value as i64 as u64);
            }
        }

        /// Populate in place from `buf[start..end)`, which must hold one
        /// complete message.
        pub fn decode_from(
            &mut self,
            buf: &[u8],
            start: usize,
            end: usize,
        ) -> Result<(), DecodeError> {
            if end > buf.len() {
                return Err(DecodeError {
                    reason: "decode range exceeds buffer",
                });
            }
            self.value = 0;
            let mut at = start;
            if at >= end {
                return Ok(());
            }
            let mut tag = pull_varint(buf, &mut at)?;
            loop {
                match tag {
                    8 => {
                        self.value = pull_varint(buf, &mut at)? as i32;
                    }
                    _ => {
                        match tag & 0x7 {
                            0 => {
                                pull_varint(buf, &mut at)?;
                            }
                            1 => {
                                if at + 8 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed64 value",
                                    });
                                }
                                at += 8;
                            }
                            2 => {
                                let length = pull_length(buf, &mut at, end)?;
                                at += length;
                            }
                            5 => {
                                if at + 4 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed32 value",
                                    });
                                }
                                at += 4;
                            }
                            _ => {
                                return Err(DecodeError {
                                    reason: "unexpected wire type",
                                });
                            }
                        }
                    }
                }
                if at >= end {
                    break;
                }
                tag = pull_varint(buf, &mut at)?;
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Scalars {
        a: i32,
        b: String,
        c: u32,
        d: i64,
        e: u64,
        f: i32,
        g: i64,
        h: u32,
        i: u64,
        j: i32,
        k: i64,
        l: f64,
        m: f32,
        n: bool,
        o: Vec<u8>,
        mood: i32,
        _bitmask: u64,
    }

    impl Scalars {
        /// Parse one message from a complete byte sequence.
        pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
            let mut message = Self::default();
            message.decode_from(buf, 0, buf.len())?;
            Ok(message)
        }

        /// Serialize into a fresh byte sequence.
        pub fn encode(&self) -> Vec<u8> {
            let mut buf = Vec::new();
            self.encode_into(&mut buf);
            buf
        }

        pub fn a(&self) -> i32 {
            self.a
        }

        pub fn b(&self) -> &str {
            self.b.as_str()
        }

        pub fn c(&self) -> u32 {
            self.c
        }

        pub fn d(&self) -> i64 {
            self.d
        }

        pub fn e(&self) -> u64 {
            self.e
        }

        pub fn f(&self) -> i32 {
            self.f
        }

        pub fn g(&self) -> i64 {
            self.g
        }

        pub fn h(&self) -> u32 {
            self.h
        }

        pub fn i(&self) -> u64 {
            self.i
        }

        pub fn j(&self) -> i32 {
            self.j
        }

        pub fn k(&self) -> i64 {
            self.k
        }

        pub fn l(&self) -> f64 {
            self.l
        }

        pub fn m(&self) -> f32 {
            self.m
        }

        pub fn n(&self) -> bool {
            self.n
        }

        pub fn o(&self) -> &[u8] {
            self.o.as_slice()
        }

        pub fn mood(&self) -> EnumValue {
            match mood::lookup(self.mood) {
                Some(symbol) => EnumValue::Symbol(symbol),
                None => EnumValue::Number(self.mood),
            }
        }

        pub fn set_a<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "a",
                proto_type: "int32",
            })?;
            self.a = value;
            Ok(())
        }

        pub fn set_b(&mut self, value: impl Into<String>) {
            self.b = value.into();
            self._bitmask |= 1;
        }

        pub fn set_c<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<u32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "c",
                proto_type: "uint32",
            })?;
            self.c = value;
            Ok(())
        }

        pub fn set_d<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i64>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "d",
                proto_type: "int64",
            })?;
            self.d = value;
            Ok(())
        }

        pub fn set_e<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<u64>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "e",
                proto_type: "uint64",
            })?;
            self.e = value;
            Ok(())
        }

        pub fn set_f<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "f",
                proto_type: "sint32",
            })?;
            self.f = value;
            Ok(())
        }

        pub fn set_g<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i64>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "g",
                proto_type: "sint64",
            })?;
            self.g = value;
            Ok(())
        }

        pub fn set_h<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<u32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "h",
                proto_type: "fixed32",
            })?;
            self.h = value;
            Ok(())
        }

        pub fn set_i<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<u64>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "i",
                proto_type: "fixed64",
            })?;
            self.i = value;
            Ok(())
        }

        pub fn set_j<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "j",
                proto_type: "sfixed32",
            })?;
            self.j = value;
            Ok(())
        }

        pub fn set_k<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i64>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "k",
                proto_type: "sfixed64",
            })?;
            self.k = value;
            Ok(())
        }

        pub fn set_l(&mut self, value: f64) {
            self.l = value;
        }

        pub fn set_m(&mut self, value: f32) {
            self.m = value;
        }

        pub fn set_n(&mut self, value: bool) {
            self.n = value;
        }

        pub fn set_o(&mut self, value: impl Into<Vec<u8>>) {
            self.o = value.into();
        }

        pub fn set_mood(&mut self, value: i32) {
            self.mood = value;
        }

        /// Resolve a symbol and store its number; unknown symbols leave
        /// the field untouched.
        pub fn set_mood_symbol(&mut self, symbol: &str) -> Option<i32> {
            match mood::resolve(symbol) {
                Some(number) => {
                    self.mood = number;
                    Some(number)
                }
                None => None,
            }
        }

        pub fn new(
            a: i32,
            b: Option<String>,
            c: u32,
            d: i64,
            e: u64,
            f: i32,
            g: i64,
            h: u32,
            i: u64,
            j: i32,
            k: i64,
            l: f64,
            m: f32,
            n: bool,
            o: Vec<u8>,
            mood: i32,
        ) -> Self {
            let mut message = Self::default();
            message.a = a;
            if let Some(value) = b {
                message.b = value;
                message._bitmask |= 1;
            }
            message.c = c;
            message.d = d;
            message.e = e;
            message.f = f;
            message.g = g;
            message.h = h;
            message.i = i;
            message.j = j;
            message.k = k;
            message.l = l;
            message.m = m;
            message.n = n;
            message.o = o;
            message.mood = mood;
            message
        }

        pub fn has_b(&self) -> bool {
            self._bitmask & 1 != 0
        }

        /// Convert into a name-keyed dictionary. Submessages recurse; a
        /// oneof contributes a single entry only while a member is active.
        pub fn to_map(&self) -> std::collections::BTreeMap<&'static str, Value> {
            let mut map = std::collections::BTreeMap::new();
            map.insert("a", Value::I32(self.a));
            map.insert("b", Value::Str(self.b.clone()));
            map.insert("c", Value::U32(self.c));
            map.insert("d", Value::I64(self.d));
            map.insert("e", Value::U64(self.e));
            map.insert("f", Value::I32(self.f));
            map.insert("g", Value::I64(self.g));
            map.insert("h", Value::U32(self.h));
            map.insert("i", Value::U64(self.i));
            map.insert("j", Value::I32(self.j));
            map.insert("k", Value::I64(self.k));
            map.insert("l", Value::F64(self.l));
            map.insert("m", Value::F32(self.m));
            map.insert("n", Value::Bool(self.n));
            map.insert("o", Value::Bytes(self.o.clone()));
            map.insert(
                "mood",
                match mood::lookup(self.mood) {
                    Some(symbol) => Value::Enum(symbol),
                    None => Value::I32(self.mood),
                },
            );
            map
        }

        /// Serialize into a caller-supplied buffer, appending.
        pub fn encode_into(&self, buf: &mut Vec<u8>) {
            if self.a != 0 {
                buf.push(8);
                push_varint(buf, self.a as i64 as u64);
            }
            if !self.b.is_empty() {
                buf.push(18);
                push_chunk(buf, self.b.as_bytes());
            }
            if self.c != 0 {
                buf.push(24);
                push_varint(buf, u64::from(self.c));
            }
            if self.d != 0 {
                buf.push(32);
                push_varint(buf, self.d as u64);
            }
            if self.e != 0 {
                buf.push(40);
                push_varint(buf, self.e);
            }
            if self.f != 0 {
                buf.push(48);
                push_sint32(buf, self.f);
            }
            if self.g != 0 {
                buf.push(56);
                push_sint64(buf, self.g);
            }
            if self.h != 0 {
                buf.push(69);
                buf.extend_from_slice(&self.h.to_le_bytes());
            }
            if self.i != 0 {
                buf.push(73);
                buf.extend_from_slice(&self.i.to_le_bytes());
            }
            if self.j != 0 {
                buf.push(85);
                buf.extend_from_slice(&self.j.to_le_bytes());
            }
            if self.k != 0 {
                buf.push(89);
                buf.extend_from_slice(&self.k.to_le_bytes());
            }
            if self.l != 0.0 {
                buf.push(97);
                buf.extend_from_slice(&self.l.to_le_bytes());
            }
            if self.m != 0.0 {
                buf.push(109);
                buf.extend_from_slice(&self.m.to_le_bytes());
            }
            if self.n {
                buf.push(112);
                push_varint(buf, u64::from(self.n));
            }
            if !self.o.is_empty() {
                buf.push(122);
                push_chunk(buf, self.o.as_slice());
            }
            if self.mood != 0 {
                buf.extend_from_slice(&[128, 1]);
                push_varint(buf, self.mood as i64 as u64);
            }
        }

        /// Populate in place from `buf[start..end)`, which must hold one
        /// complete message.
        pub fn decode_from(
            &mut self,
            buf: &[u8],
            start: usize,
            end: usize,
        ) -> Result<(), DecodeError> {
            if end > buf.len() {
                return Err(DecodeError {
                    reason: "decode range exceeds buffer",
                });
            }
            self._bitmask = 0;
            self.a = 0;
            self.b.clear();
            self.c = 0;
            self.d = 0;
            self.e = 0;
            self.f = 0;
            self.g = 0;
            self.h = 0;
            self.i = 0;
            self.j = 0;
            self.k = 0;
            self.l = 0.0;
            self.m = 0.0;
            self.n = false;
            self.o.clear();
            self.mood = 0;
            let mut at = start;
            if at >= end {
                return Ok(());
            }
            let mut tag = pull_varint(buf, &mut at)?;
            loop {
                match tag {
                    8 => {
                        self.a = pull_varint(buf, &mut at)? as i32;
                    }
                    18 => {
                        self.b = pull_string(buf, &mut at, end)?;
                        self._bitmask |= 1;
                    }
                    24 => {
                        self.c = pull_varint(buf, &mut at)? as u32;
                    }
                    32 => {
                        self.d = pull_varint(buf, &mut at)? as i64;
                    }
                    40 => {
                        self.e = pull_varint(buf, &mut at)?;
                    }
                    48 => {
                        self.f = pull_sint32(buf, &mut at)?;
                    }
                    56 => {
                        self.g = pull_sint64(buf, &mut at)?;
                    }
                    69 => {
                        self.h = pull_fixed32(buf, &mut at)?;
                    }
                    73 => {
                        self.i = pull_fixed64(buf, &mut at)?;
                    }
                    85 => {
                        self.j = pull_fixed32(buf, &mut at)? as i32;
                    }
                    89 => {
                        self.k = pull_fixed64(buf, &mut at)? as i64;
                    }
                    97 => {
                        self.l = f64::from_bits(pull_fixed64(buf, &mut at)?);
                    }
                    109 => {
                        self.m = f32::from_bits(pull_fixed32(buf, &mut at)?);
                    }
                    112 => {
                        self.n = pull_varint(buf, &mut at)? != 0;
                    }
                    122 => {
                        self.o = pull_bytes(buf, &mut at, end)?;
                    }
                    128 => {
                        self.mood = pull_varint(buf, &mut at)? as i32;
                    }
                    _ => {
                        match tag & 0x7 {
                            0 => {
                                pull_varint(buf, &mut at)?;
                            }
                            1 => {
                                if at + 8 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed64 value",
                                    });
                                }
                                at += 8;
                            }
                            2 => {
                                let length = pull_length(buf, &mut at, end)?;
                                at += length;
                            }
                            5 => {
                                if at + 4 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed32 value",
                                    });
                                }
                                at += 4;
                            }
                            _ => {
                                return Err(DecodeError {
                                    reason: "unexpected wire type",
                                });
                            }
                        }
                    }
                }
                if at >= end {
                    break;
                }
                tag = pull_varint(buf, &mut at)?;
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Packed {
        xs: Vec<i32>,
    }

    impl Packed {
        /// Parse one message from a complete byte sequence.
        pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
            let mut message = Self::default();
            message.decode_from(buf, 0, buf.len())?;
            Ok(message)
        }

        /// Serialize into a fresh byte sequence.
        pub fn encode(&self) -> Vec<u8> {
            let mut buf = Vec::new();
            self.encode_into(&mut buf);
            buf
        }

        pub fn xs(&self) -> &[i32] {
            self.xs.as_slice()
        }

        pub fn set_xs<V>(&mut self, values: Vec<V>) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let mut out = Vec::with_capacity(values.len());
            for value in values {
                out.push(value.try_into().map_err(|_| RangeError {
                    field: "xs",
                    proto_type: "int32",
                })?);
            }
            self.xs = out;
            Ok(())
        }

        pub fn new(xs: Vec<i32>) -> Self {
            let mut message = Self::default();
            message.xs = xs;
            message
        }

        /// Convert into a name-keyed dictionary. Submessages recurse; a
        /// oneof contributes a single entry only while a member is active.
        pub fn to_map(&self) -> std::collections::BTreeMap<&'static str, Value> {
            let mut map = std::collections::BTreeMap::new();
            map.insert(
                "xs",
                Value::List(self.xs.iter().map(|value| Value::I32(*value)).collect()),
            );
            map
        }

        /// Serialize into a caller-supplied buffer, appending.
        pub fn encode_into(&self, buf: &mut Vec<u8>) {
            if !self.xs.is_empty() {
                buf.push(10);
                let mark = buf.len();
                buf.push(0);
                for &value in &self.xs {
                    push_varint(buf, value as i64 as u64);
                }
                patch_length(buf, mark);
            }
        }

        /// Populate in place from `buf[start..end)`, which must hold one
        /// complete message.
        pub fn decode_from(
            &mut self,
            buf: &[u8],
            start: usize,
            end: usize,
        ) -> Result<(), DecodeError> {
            if end > buf.len() {
                return Err(DecodeError {
                    reason: "decode range exceeds buffer",
                });
            }
            self.xs.clear();
            let mut at = start;
            if at >= end {
                return Ok(());
            }
            let mut tag = pull_varint(buf, &mut at)?;
            'tag: loop {
                match tag {
                    10 => {
                        let length = pull_length(buf, &mut at, end)?;
                        let goal = at + length;
                        while at < goal {
                            self.xs.push(pull_varint(buf, &mut at)? as i32);
                        }
                    }
                    8 => {
                        while tag == 8 {
                            self.xs.push(pull_varint(buf, &mut at)? as i32);
                            if at >= end {
                                break 'tag;
                            }
                            tag = pull_varint(buf, &mut at)?;
                        }
                        continue 'tag;
                    }
                    _ => {
                        match tag & 0x7 {
                            0 => {
                                pull_varint(buf, &mut at)?;
                            }
                            1 => {
                                if at + 8 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed64 value",
                                    });
                                }
                                at += 8;
                            }
                            2 => {
                                let length = pull_length(buf, &mut at, end)?;
                                at += length;
                            }
                            5 => {
                                if at + 4 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed32 value",
                                    });
                                }
                                at += 4;
                            }
                            _ => {
                                return Err(DecodeError {
                                    reason: "unexpected wire type",
                                });
                            }
                        }
                    }
                }
                if at >= end {
                    break;
                }
                tag = pull_varint(buf, &mut at)?;
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct SintOne {
        s: i32,
    }

    impl SintOne {
        /// Parse one message from a complete byte sequence.
        pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
            let mut message = Self::default();
            message.decode_from(buf, 0, buf.len())?;
            Ok(message)
        }

        /// Serialize into a fresh byte sequence.
        pub fn encode(&self) -> Vec<u8> {
            let mut buf = Vec::new();
            self.encode_into(&mut buf);
            buf
        }

        pub fn s(&self) -> i32 {
            self.s
        }

        pub fn set_s<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "s",
                proto_type: "sint32",
            })?;
            self.s = value;
            Ok(())
        }

        pub fn new(s: i32) -> Self {
            let mut message = Self::default();
            message.s = s;
            message
        }

        /// Convert into a name-keyed dictionary. Submessages recurse; a
        /// oneof contributes a single entry only while a member is active.
        pub fn to_map(&self) -> std::collections::BTreeMap<&'static str, Value> {
            let mut map = std::collections::BTreeMap::new();
            map.insert("s", Value::I32(self.s));
            map
        }

        /// Serialize into a caller-supplied buffer, appending.
        pub fn encode_into(&self, buf: &mut Vec<u8>) {
            if self.s != 0 {
                buf.push(8);
                push_sint32(buf, self.s);
            }
        }

        /// Populate in place from `buf[start..end)`, which must hold one
        /// complete message.
        pub fn decode_from(
            &mut self,
            buf: &[u8],
            start: usize,
            end: usize,
        ) -> Result<(), DecodeError> {
            if end > buf.len() {
                return Err(DecodeError {
                    reason: "decode range exceeds buffer",
                });
            }
            self.s = 0;
            let mut at = start;
            if at >= end {
                return Ok(());
            }
            let mut tag = pull_varint(buf, &mut at)?;
            loop {
                match tag {
                    8 => {
                        self.s = pull_sint32(buf, &mut at)?;
                    }
                    _ => {
                        match tag & 0x7 {
                            0 => {
                                pull_varint(buf, &mut at)?;
                            }
                            1 => {
                                if at + 8 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed64 value",
                                    });
                                }
                                at += 8;
                            }
                            2 => {
                                let length = pull_length(buf, &mut at, end)?;
                                at += length;
                            }
                            5 => {
                                if at + 4 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed32 value",
                                    });
                                }
                                at += 4;
                            }
                            _ => {
                                return Err(DecodeError {
                                    reason: "unexpected wire type",
                                });
                            }
                        }
                    }
                }
                if at >= end {
                    break;
                }
                tag = pull_varint(buf, &mut at)?;
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Outer {
        inner: Option<Inner>,
        xs: Vec<i32>,
        names: Vec<String>,
        scores: std::collections::BTreeMap<String, i32>,
        kind: Option<outer::Kind>,
        opt: i32,
        ys: Vec<i32>,
        people: std::collections::BTreeMap<i64, Inner>,
        _bitmask: u64,
    }

    pub mod outer {
        use super::*;

        #[derive(Debug, Clone, PartialEq)]
        pub enum Kind {
            Num(i32),
            Sval(String),
            Msg(super::Inner),
        }
    }

    impl Outer {
        /// Parse one message from a complete byte sequence.
        pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
            let mut message = Self::default();
            message.decode_from(buf, 0, buf.len())?;
            Ok(message)
        }

        /// Serialize into a fresh byte sequence.
        pub fn encode(&self) -> Vec<u8> {
            let mut buf = Vec::new();
            self.encode_into(&mut buf);
            buf
        }

        pub fn inner(&self) -> Option<&Inner> {
            self.inner.as_ref()
        }

        pub fn xs(&self) -> &[i32] {
            self.xs.as_slice()
        }

        pub fn names(&self) -> &[String] {
            self.names.as_slice()
        }

        pub fn scores(&self) -> &std::collections::BTreeMap<String, i32> {
            &self.scores
        }

        pub fn kind(&self) -> Option<&'static str> {
            match &self.kind {
                Some(outer::Kind::Num(_)) => Some("num"),
                Some(outer::Kind::Sval(_)) => Some("sval"),
                Some(outer::Kind::Msg(_)) => Some("msg"),
                None => None,
            }
        }

        pub fn num(&self) -> i32 {
            match &self.kind {
                Some(outer::Kind::Num(value)) => *value,
                _ => 0,
            }
        }

        pub fn sval(&self) -> &str {
            match &self.kind {
                Some(outer::Kind::Sval(value)) => value.as_str(),
                _ => "",
            }
        }

        pub fn msg(&self) -> Option<&Inner> {
            match &self.kind {
                Some(outer::Kind::Msg(value)) => Some(value),
                _ => None,
            }
        }

        pub fn opt(&self) -> i32 {
            self.opt
        }

        pub fn ys(&self) -> &[i32] {
            self.ys.as_slice()
        }

        pub fn people(&self) -> &std::collections::BTreeMap<i64, Inner> {
            &self.people
        }

        pub fn set_inner(&mut self, value: Inner) {
            self.inner = Some(value);
        }

        pub fn set_xs<V>(&mut self, values: Vec<V>) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let mut out = Vec::with_capacity(values.len());
            for value in values {
                out.push(value.try_into().map_err(|_| RangeError {
                    field: "xs",
                    proto_type: "int32",
                })?);
            }
            self.xs = out;
            Ok(())
        }

        pub fn set_names(&mut self, values: Vec<String>) {
            self.names = values;
        }

        pub fn set_scores(&mut self, entries: std::collections::BTreeMap<String, i32>) {
            self.scores = entries;
        }

        pub fn set_num<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "num",
                proto_type: "int32",
            })?;
            self.kind = Some(outer::Kind::Num(value));
            Ok(())
        }

        pub fn set_sval(&mut self, value: impl Into<String>) {
            self.kind = Some(outer::Kind::Sval(value.into()));
        }

        pub fn set_msg(&mut self, value: Inner) {
            self.kind = Some(outer::Kind::Msg(value));
        }

        pub fn set_opt<V>(&mut self, value: V) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let value = value.try_into().map_err(|_| RangeError {
                field: "opt",
                proto_type: "int32",
            })?;
            self.opt = value;
            self._bitmask |= 1;
            Ok(())
        }

        pub fn set_ys<V>(&mut self, values: Vec<V>) -> Result<(), RangeError>
        where
            V: TryInto<i32>,
        {
            let mut out = Vec::with_capacity(values.len());
            for value in values {
                out.push(value.try_into().map_err(|_| RangeError {
                    field: "ys",
                    proto_type: "int32",
                })?);
            }
            self.ys = out;
            Ok(())
        }

        pub fn set_people(&mut self, entries: std::collections::BTreeMap<i64, Inner>) {
            self.people = entries;
        }

        pub fn new(
            inner: Option<Inner>,
            xs: Vec<i32>,
            names: Vec<String>,
            scores: std::collections::BTreeMap<String, i32>,
            kind: Option<outer::Kind>,
            opt: Option<i32>,
            ys: Vec<i32>,
            people: std::collections::BTreeMap<i64, Inner>,
        ) -> Self {
            let mut message = Self::default();
            if let Some(value) = inner {
                message.inner = Some(value);
            }
            message.xs = xs;
            message.names = names;
            message.scores = scores;
            message.kind = kind;
            if let Some(value) = opt {
                message.opt = value;
                message._bitmask |= 1;
            }
            message.ys = ys;
            message.people = people;
            message
        }

        pub fn has_opt(&self) -> bool {
            self._bitmask & 1 != 0
        }

        /// Convert into a name-keyed dictionary. Submessages recurse; a
        /// oneof contributes a single entry only while a member is active.
        pub fn to_map(&self) -> std::collections::BTreeMap<&'static str, Value> {
            let mut map = std::collections::BTreeMap::new();
            if let Some(value) = &self.inner {
                map.insert("inner", Value::Message(value.to_map()));
            }
            map.insert(
                "xs",
                Value::List(self.xs.iter().map(|value| Value::I32(*value)).collect()),
            );
            map.insert(
                "names",
                Value::List(
                    self.names
                        .iter()
                        .map(|value| Value::Str(value.clone()))
                        .collect(),
                ),
            );
            map.insert(
                "scores",
                Value::Map(
                    self.scores
                        .iter()
                        .map(|(key, value)| (Value::Str(key.clone()), Value::I32(*value)))
                        .collect(),
                ),
            );
            match &self.kind {
                Some(outer::Kind::Num(value)) => {
                    map.insert("num", Value::I32(*value));
                }
                Some(outer::Kind::Sval(value)) => {
                    map.insert("sval", Value::Str(value.clone()));
                }
                Some(outer::Kind::Msg(value)) => {
                    map.insert("msg", Value::Message(value.to_map()));
                }
                None => {}
            }
            map.insert("opt", Value::I32(self.opt));
            map.insert(
                "ys",
                Value::List(self.ys.iter().map(|value| Value::I32(*value)).collect()),
            );
            map.insert(
                "people",
                Value::Map(
                    self.people
                        .iter()
                        .map(|(key, value)| (Value::I64(*key), Value::Message(value.to_map())))
                        .collect(),
                ),
            );
            map
        }

        /// Serialize into a caller-supplied buffer, appending.
        pub fn encode_into(&self, buf: &mut Vec<u8>) {
            if let Some(value) = &self.inner {
                buf.push(10);
                let mark = buf.len();
                buf.push(0);
                value.encode_into(buf);
                patch_length(buf, mark);
            }
            if !self.xs.is_empty() {
                buf.push(18);
                let mark = buf.len();
                buf.push(0);
                for &value in &self.xs {
                    push_varint(buf, value as i64 as u64);
                }
                patch_length(buf, mark);
            }
            for value in &self.names {
                buf.push(26);
                push_chunk(buf, value.as_bytes());
            }
            for (key, &value) in &self.scores {
                buf.push(34);
                let entry_mark = buf.len();
                buf.push(0);
                buf.push(10);
                push_chunk(buf, key.as_bytes());
                buf.push(16);
                push_varint(buf, value as i64 as u64);
                patch_length(buf, entry_mark);
            }
            match &self.kind {
                Some(outer::Kind::Num(value)) => {
                    let value = *value;
                    buf.push(40);
                    push_varint(buf, value as i64 as u64);
                }
                Some(outer::Kind::Sval(value)) => {
                    buf.push(50);
                    push_chunk(buf, value.as_bytes());
                }
                Some(outer::Kind::Msg(value)) => {
                    buf.push(58);
                    let mark = buf.len();
                    buf.push(0);
                    value.encode_into(buf);
                    patch_length(buf, mark);
                }
                None => {}
            }
            if self.opt != 0 {
                buf.push(64);
                push_varint(buf, self.opt as i64 as u64);
            }
            for &value in &self.ys {
                buf.push(80);
                push_varint(buf, value as i64 as u64);
            }
            for (&key, value) in &self.people {
                buf.push(90);
                let entry_mark = buf.len();
                buf.push(0);
                buf.push(8);
                push_varint(buf, key as u64);
                buf.push(18);
                let mark = buf.len();
                buf.push(0);
                value.encode_into(buf);
                patch_length(buf, mark);
                patch_length(buf, entry_mark);
            }
        }

        /// Populate in place from `buf[start..end)`, which must hold one
        /// complete message.
        pub fn decode_from(
            &mut self,
            buf: &[u8],
            start: usize,
            end: usize,
        ) -> Result<(), DecodeError> {
            if end > buf.len() {
                return Err(DecodeError {
                    reason: "decode range exceeds buffer",
                });
            }
            self._bitmask = 0;
            self.inner = None;
            self.xs.clear();
            self.names.clear();
            self.scores.clear();
            self.kind = None;
            self.opt = 0;
            self.ys.clear();
            self.people.clear();
            let mut at = start;
            if at >= end {
                return Ok(());
            }
            let mut tag = pull_varint(buf, &mut at)?;
            'tag: loop {
                match tag {
                    10 => {
                        let value = {
                            let length = pull_length(buf, &mut at, end)?;
                            let goal = at + length;
                            let mut inner = Inner::default();
                            inner.decode_from(buf, at, goal)?;
                            at = goal;
                            inner
                        };
                        self.inner = Some(value);
                    }
                    18 => {
                        let length = pull_length(buf, &mut at, end)?;
                        let goal = at + length;
                        while at < goal {
                            self.xs.push(pull_varint(buf, &mut at)? as i32);
                        }
                    }
                    16 => {
                        while tag == 16 {
                            self.xs.push(pull_varint(buf, &mut at)? as i32);
                            if at >= end {
                                break 'tag;
                            }
                            tag = pull_varint(buf, &mut at)?;
                        }
                        continue 'tag;
                    }
                    26 => {
                        while tag == 26 {
                            self.names.push(pull_string(buf, &mut at, end)?);
                            if at >= end {
                                break 'tag;
                            }
                            tag = pull_varint(buf, &mut at)?;
                        }
                        continue 'tag;
                    }
                    34 => {
                        while tag == 34 {
                            let length = pull_length(buf, &mut at, end)?;
                            let goal = at + length;
                            let mut key = String::new();
                            let mut value = 0;
                            while at < goal {
                                let entry_tag = pull_varint(buf, &mut at)?;
                                match entry_tag {
                                    10 => {
                                        key = pull_string(buf, &mut at, end)?;
                                    }
                                    16 => {
                                        value = pull_varint(buf, &mut at)? as i32;
                                    }
                                    _ => {
                                        match entry_tag & 0x7 {
                                            0 => {
                                                pull_varint(buf, &mut at)?;
                                            }
                                            1 => {
                                                if at + 8 > end {
                                                    return Err(DecodeError {
                                                        reason: "truncated fixed64 value",
                                                    });
                                                }
                                                at += 8;
                                            }
                                            2 => {
                                                let length = pull_length(buf, &mut at, end)?;
                                                at += length;
                                            }
                                            5 => {
                                                if at + 4 > end {
                                                    return Err(DecodeError {
                                                        reason: "truncated fixed32 value",
                                                    });
                                                }
                                                at += 4;
                                            }
                                            _ => {
                                                return Err(DecodeError {
                                                    reason: "unexpected wire type",
                                                });
                                            }
                                        }
                                    }
                                }
                            }
                            self.scores.insert(key, value);
                            if at >= end {
                                break 'tag;
                            }
                            tag = pull_varint(buf, &mut at)?;
                        }
                        continue 'tag;
                    }
                    40 => {
                        self.kind = Some(outer::Kind::Num(pull_varint(buf, &mut at)? as i32));
                    }
                    50 => {
                        self.kind = Some(outer::Kind::Sval(pull_string(buf, &mut at, end)?));
                    }
                    58 => {
                        self.kind = Some(outer::Kind::Msg({
                            let length = pull_length(buf, &mut at, end)?;
                            let goal = at + length;
                            let mut inner = Inner::default();
                            inner.decode_from(buf, at, goal)?;
                            at = goal;
                            inner
                        }));
                    }
                    64 => {
                        self.opt = pull_varint(buf, &mut at)? as i32;
                        self._bitmask |= 1;
                    }
                    82 => {
                        let length = pull_length(buf, &mut at, end)?;
                        let goal = at + length;
                        while at < goal {
                            self.ys.push(pull_varint(buf, &mut at)? as i32);
                        }
                    }
                    80 => {
                        while tag == 80 {
                            self.ys.push(pull_varint(buf, &mut at)? as i32);
                            if at >= end {
                                break 'tag;
                            }
                            tag = pull_varint(buf, &mut at)?;
                        }
                        continue 'tag;
                    }
                    90 => {
                        while tag == 90 {
                            let length = pull_length(buf, &mut at, end)?;
                            let goal = at + length;
                            let mut key = 0;
                            let mut value = Default::default();
                            while at < goal {
                                let entry_tag = pull_varint(buf, &mut at)?;
                                match entry_tag {
                                    8 => {
                                        key = pull_varint(buf, &mut at)? as i64;
                                    }
                                    18 => {
                                        value = {
                                            let length = pull_length(buf, &mut at, end)?;
                                            let goal = at + length;
                                            let mut inner = Inner::default();
                                            inner.decode_from(buf, at, goal)?;
                                            at = goal;
                                            inner
                                        };
                                    }
                                    _ => {
                                        match entry_tag & 0x7 {
                                            0 => {
                                                pull_varint(buf, &mut at)?;
                                            }
                                            1 => {
                                                if at + 8 > end {
                                                    return Err(DecodeError {
                                                        reason: "truncated fixed64 value",
                                                    });
                                                }
                                                at += 8;
                                            }
                                            2 => {
                                                let length = pull_length(buf, &mut at, end)?;
                                                at += length;
                                            }
                                            5 => {
                                                if at + 4 > end {
                                                    return Err(DecodeError {
                                                        reason: "truncated fixed32 value",
                                                    });
                                                }
                                                at += 4;
                                            }
                                            _ => {
                                                return Err(DecodeError {
                                                    reason: "unexpected wire type",
                                                });
                                            }
                                        }
                                    }
                                }
                            }
                            self.people.insert(key, value);
                            if at >= end {
                                break 'tag;
                            }
                            tag = pull_varint(buf, &mut at)?;
                        }
                        continue 'tag;
                    }
                    _ => {
                        match tag & 0x7 {
                            0 => {
                                pull_varint(buf, &mut at)?;
                            }
                            1 => {
                                if at + 8 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed64 value",
                                    });
                                }
                                at += 8;
                            }
                            2 => {
                                let length = pull_length(buf, &mut at, end)?;
                                at += length;
                            }
                            5 => {
                                if at + 4 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed32 value",
                                    });
                                }
                                at += 4;
                            }
                            _ => {
                                return Err(DecodeError {
                                    reason: "unexpected wire type",
                                });
                            }
                        }
                    }
                }
                if at >= end {
                    break;
                }
                tag = pull_varint(buf, &mut at)?;
            }
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct Tree {
        label: String,
        child: Option<Box<Tree>>,
    }

    impl Tree {
        /// Parse one message from a complete byte sequence.
        pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
            let mut message = Self::default();
            message.decode_from(buf, 0, buf.len())?;
            Ok(message)
        }

        /// Serialize into a fresh byte sequence.
        pub fn encode(&self) -> Vec<u8> {
            let mut buf = Vec::new();
            self.encode_into(&mut buf);
            buf
        }

        pub fn label(&self) -> &str {
            self.label.as_str()
        }

        pub fn child(&self) -> Option<&Tree> {
            self.child.as_deref()
        }

        pub fn set_label(&mut self, value: impl Into<String>) {
            self.label = value.into();
        }

        pub fn set_child(&mut self, value: Tree) {
            self.child = Some(Box::new(value));
        }

        pub fn new(label: String, child: Option<Tree>) -> Self {
            let mut message = Self::default();
            message.label = label;
            if let Some(value) = child {
                message.child = Some(Box::new(value));
            }
            message
        }

        /// Convert into a name-keyed dictionary. Submessages recurse; a
        /// oneof contributes a single entry only while a member is active.
        pub fn to_map(&self) -> std::collections::BTreeMap<&'static str, Value> {
            let mut map = std::collections::BTreeMap::new();
            map.insert("label", Value::Str(self.label.clone()));
            if let Some(value) = &self.child {
                map.insert("child", Value::Message(value.to_map()));
            }
            map
        }

        /// Serialize into a caller-supplied buffer, appending.
        pub fn encode_into(&self, buf: &mut Vec<u8>) {
            if !self.label.is_empty() {
                buf.push(10);
                push_chunk(buf, self.label.as_bytes());
            }
            if let Some(value) = &self.child {
                buf.push(18);
                let mark = buf.len();
                buf.push(0);
                value.encode_into(buf);
                patch_length(buf, mark);
            }
        }

        /// Populate in place from `buf[start..end)`, which must hold one
        /// complete message.
        pub fn decode_from(
            &mut self,
            buf: &[u8],
            start: usize,
            end: usize,
        ) -> Result<(), DecodeError> {
            if end > buf.len() {
                return Err(DecodeError {
                    reason: "decode range exceeds buffer",
                });
            }
            self.label.clear();
            self.child = None;
            let mut at = start;
            if at >= end {
                return Ok(());
            }
            let mut tag = pull_varint(buf, &mut at)?;
            loop {
                match tag {
                    10 => {
                        self.label = pull_string(buf, &mut at, end)?;
                    }
                    18 => {
                        let value = {
                            let length = pull_length(buf, &mut at, end)?;
                            let goal = at + length;
                            let mut inner = Tree::default();
                            inner.decode_from(buf, at, goal)?;
                            at = goal;
                            inner
                        };
                        self.child = Some(Box::new(value));
                    }
                    _ => {
                        match tag & 0x7 {
                            0 => {
                                pull_varint(buf, &mut at)?;
                            }
                            1 => {
                                if at + 8 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed64 value",
                                    });
                                }
                                at += 8;
                            }
                            2 => {
                                let length = pull_length(buf, &mut at, end)?;
                                at += length;
                            }
                            5 => {
                                if at + 4 > end {
                                    return Err(DecodeError {
                                        reason: "truncated fixed32 value",
                                    });
                                }
                                at += 4;
                            }
                            _ => {
                                return Err(DecodeError {
                                    reason: "unexpected wire type",
                                });
                            }
                        }
                    }
                }
                if at >= end {
                    break;
                }
                tag = pull_varint(buf, &mut at)?;
            }
            Ok(())
        }
    }
}
