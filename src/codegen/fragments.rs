//! Per-wire-type text fragments, parameterized by field classification.
//!
//! Everything here produces tokens that land inside a generated message's
//! `encode_into` or `decode_from` body. The bodies establish a fixed
//! environment the fragments rely on:
//!
//! - encode: `buf: &mut Vec<u8>` plus the support helpers reachable through
//!   the file-root path;
//! - decode: `buf: &[u8]`, a cursor `at: usize`, the range end `end: usize`,
//!   the current `tag: u64`, and the dispatch loop labeled `'tag`.
//!
//! Fragments that consume a run of records for the same field (unpacked
//! repeated, map) read the following tag themselves and `continue 'tag`;
//! every other fragment leaves the shared read-next-tag tail to run.

use proc_macro2::{Ident, Literal, TokenStream};
use quote::quote;

use crate::context::{field_ident, supers, GenerationContext, Resolved};
use crate::descriptor::FieldType;

use super::classify::{FieldPlan, MapPlan, WireType};

/// Generation-time varint encoding, used to bake tags into byte constants.
pub fn varint_bytes(mut value: u64) -> Vec<u8> {
    let mut bytes = Vec::new();
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            bytes.push(byte);
            return bytes;
        }
        bytes.push(byte | 0x80);
    }
}

/// Statements appending a tag known at generation time: a single push for
/// one-byte tags (field numbers up to 15), a slice append otherwise.
pub fn push_tag(tag: u64) -> TokenStream {
    let bytes = varint_bytes(tag);
    if bytes.len() == 1 {
        let byte = Literal::u8_unsuffixed(bytes[0]);
        quote! { buf.push(#byte); }
    } else {
        let bytes: Vec<Literal> = bytes.iter().map(|b| Literal::u8_unsuffixed(*b)).collect();
        quote! { buf.extend_from_slice(&[#(#bytes),*]); }
    }
}

/// Path to a support item (helper function or type) from module depth
/// `depth` below the file root.
pub fn support(depth: usize, name: &str) -> TokenStream {
    let supers = supers(depth);
    let ident = Ident::new(name, proc_macro2::Span::call_site());
    quote!(#supers #ident)
}

/// The match-arm literal for a tag value.
pub fn tag_literal(tag: u64) -> Literal {
    Literal::u64_unsuffixed(tag)
}

/// The bitmask literal for a presence bit.
pub fn bit_literal(bit: u32) -> Literal {
    Literal::u64_unsuffixed(1u64 << bit)
}

/// The type one element of this field is stored as (before `Vec`, `Option`,
/// or `Box` wrapping).
pub fn element_type(ctx: &GenerationContext, plan: &FieldPlan, depth: usize) -> TokenStream {
    match &plan.ty {
        FieldType::Double => quote!(f64),
        FieldType::Float => quote!(f32),
        FieldType::Int32 | FieldType::Sint32 | FieldType::Sfixed32 => quote!(i32),
        FieldType::Int64 | FieldType::Sint64 | FieldType::Sfixed64 => quote!(i64),
        FieldType::Uint32 | FieldType::Fixed32 => quote!(u32),
        FieldType::Uint64 | FieldType::Fixed64 => quote!(u64),
        FieldType::Bool => quote!(bool),
        FieldType::String => quote!(String),
        FieldType::Bytes => quote!(Vec<u8>),
        FieldType::Named(_) => match plan.resolved.as_ref() {
            Some(resolved) => ctx.type_tokens(resolved, depth),
            None => quote!(()),
        },
    }
}

/// The canonical proto3 default for one element of this field.
pub fn default_expr(plan: &FieldPlan) -> TokenStream {
    match &plan.ty {
        FieldType::Double | FieldType::Float => quote!(0.0),
        FieldType::Bool => quote!(false),
        FieldType::String => quote!(String::new()),
        FieldType::Bytes => quote!(Vec::new()),
        FieldType::Named(_) if plan.is_enum => quote!(0),
        FieldType::Named(_) => quote!(Default::default()),
        _ => quote!(0),
    }
}

/// The default-omission gate for a singular non-message value.
pub fn not_default_test(plan: &FieldPlan, value: &TokenStream) -> TokenStream {
    match &plan.ty {
        FieldType::Double | FieldType::Float => quote!(#value != 0.0),
        FieldType::Bool => quote!(#value),
        FieldType::String | FieldType::Bytes => quote!(!#value.is_empty()),
        _ => quote!(#value != 0),
    }
}

/// Statements appending one value's bytes (no tag). `value` is an atomic
/// expression: the stored value for copy types, a reference for strings,
/// bytes, and messages.
pub fn push_value(plan: &FieldPlan, depth: usize, value: &TokenStream) -> TokenStream {
    let push_varint = support(depth, "push_varint");
    match &plan.ty {
        FieldType::Int32 => quote! { #push_varint(buf, #value as i64 as u64); },
        FieldType::Int64 => quote! { #push_varint(buf, #value as u64); },
        FieldType::Uint32 => quote! { #push_varint(buf, u64::from(#value)); },
        FieldType::Uint64 => quote! { #push_varint(buf, #value); },
        FieldType::Bool => quote! { #push_varint(buf, u64::from(#value)); },
        FieldType::Sint32 => {
            let push_sint32 = support(depth, "push_sint32");
            quote! { #push_sint32(buf, #value); }
        }
        FieldType::Sint64 => {
            let push_sint64 = support(depth, "push_sint64");
            quote! { #push_sint64(buf, #value); }
        }
        FieldType::Fixed32
        | FieldType::Sfixed32
        | FieldType::Float
        | FieldType::Fixed64
        | FieldType::Sfixed64
        | FieldType::Double => quote! { buf.extend_from_slice(&#value.to_le_bytes()); },
        FieldType::String => {
            let push_chunk = support(depth, "push_chunk");
            quote! { #push_chunk(buf, #value.as_bytes()); }
        }
        FieldType::Bytes => {
            let push_chunk = support(depth, "push_chunk");
            quote! { #push_chunk(buf, #value.as_slice()); }
        }
        FieldType::Named(_) if plan.is_enum => quote! { #push_varint(buf, #value as i64 as u64); },
        FieldType::Named(_) => {
            let patch_length = support(depth, "patch_length");
            quote! {
                let mark = buf.len();
                buf.push(0);
                #value.encode_into(buf);
                #patch_length(buf, mark);
            }
        }
    }
}

/// Expression producing one decoded value. Relies on `buf`, `at`, and `end`
/// from the decode environment; message values decode through a block that
/// allocates, recurses, and advances the cursor.
pub fn pull_value(ctx: &GenerationContext, plan: &FieldPlan, depth: usize) -> TokenStream {
    let pull_varint = support(depth, "pull_varint");
    match &plan.ty {
        FieldType::Int32 => quote!(#pull_varint(buf, &mut at)? as i32),
        FieldType::Int64 => quote!(#pull_varint(buf, &mut at)? as i64),
        FieldType::Uint32 => quote!(#pull_varint(buf, &mut at)? as u32),
        FieldType::Uint64 => quote!(#pull_varint(buf, &mut at)?),
        FieldType::Bool => quote!(#pull_varint(buf, &mut at)? != 0),
        FieldType::Sint32 => {
            let pull_sint32 = support(depth, "pull_sint32");
            quote!(#pull_sint32(buf, &mut at)?)
        }
        FieldType::Sint64 => {
            let pull_sint64 = support(depth, "pull_sint64");
            quote!(#pull_sint64(buf, &mut at)?)
        }
        FieldType::Fixed32 => {
            let pull_fixed32 = support(depth, "pull_fixed32");
            quote!(#pull_fixed32(buf, &mut at)?)
        }
        FieldType::Sfixed32 => {
            let pull_fixed32 = support(depth, "pull_fixed32");
            quote!(#pull_fixed32(buf, &mut at)? as i32)
        }
        FieldType::Float => {
            let pull_fixed32 = support(depth, "pull_fixed32");
            quote!(f32::from_bits(#pull_fixed32(buf, &mut at)?))
        }
        FieldType::Fixed64 => {
            let pull_fixed64 = support(depth, "pull_fixed64");
            quote!(#pull_fixed64(buf, &mut at)?)
        }
        FieldType::Sfixed64 => {
            let pull_fixed64 = support(depth, "pull_fixed64");
            quote!(#pull_fixed64(buf, &mut at)? as i64)
        }
        FieldType::Double => {
            let pull_fixed64 = support(depth, "pull_fixed64");
            quote!(f64::from_bits(#pull_fixed64(buf, &mut at)?))
        }
        FieldType::String => {
            let pull_string = support(depth, "pull_string");
            quote!(#pull_string(buf, &mut at, end)?)
        }
        FieldType::Bytes => {
            let pull_bytes = support(depth, "pull_bytes");
            quote!(#pull_bytes(buf, &mut at, end)?)
        }
        FieldType::Named(_) if plan.is_enum => quote!(#pull_varint(buf, &mut at)? as i32),
        FieldType::Named(_) => {
            let pull_length = support(depth, "pull_length");
            let ty = element_type(ctx, plan, depth);
            quote! {
                {
                    let length = #pull_length(buf, &mut at, end)?;
                    let goal = at + length;
                    let mut inner = #ty::default();
                    inner.decode_from(buf, at, goal)?;
                    at = goal;
                    inner
                }
            }
        }
    }
}

/// Expression converting one borrowed value into the support `Value` for
/// `to_map`. `value` is atomic: the copied value for copy types, a reference
/// for strings, bytes, and messages.
pub fn to_value(
    ctx: &GenerationContext,
    plan: &FieldPlan,
    depth: usize,
    value: &TokenStream,
) -> TokenStream {
    let value_ty = support(depth, "Value");
    match &plan.ty {
        FieldType::Int32 | FieldType::Sint32 | FieldType::Sfixed32 => {
            quote!(#value_ty::I32(#value))
        }
        FieldType::Int64 | FieldType::Sint64 | FieldType::Sfixed64 => {
            quote!(#value_ty::I64(#value))
        }
        FieldType::Uint32 | FieldType::Fixed32 => quote!(#value_ty::U32(#value)),
        FieldType::Uint64 | FieldType::Fixed64 => quote!(#value_ty::U64(#value)),
        FieldType::Float => quote!(#value_ty::F32(#value)),
        FieldType::Double => quote!(#value_ty::F64(#value)),
        FieldType::Bool => quote!(#value_ty::Bool(#value)),
        FieldType::String => quote!(#value_ty::Str(#value.clone())),
        FieldType::Bytes => quote!(#value_ty::Bytes(#value.clone())),
        FieldType::Named(_) if plan.is_enum => {
            let lookup = enum_module(ctx, plan, depth);
            quote! {
                match #lookup::lookup(#value) {
                    Some(symbol) => #value_ty::Enum(symbol),
                    None => #value_ty::I32(#value),
                }
            }
        }
        FieldType::Named(_) => quote!(#value_ty::Message(#value.to_map())),
    }
}

/// Path to the emitted module of the enum this field references.
pub fn enum_module(ctx: &GenerationContext, plan: &FieldPlan, depth: usize) -> TokenStream {
    match plan.resolved.as_ref() {
        Some(Resolved::Enum { segments }) => ctx.enum_module_tokens(segments, depth),
        _ => unreachable!("enum flag set without an enum resolution"),
    }
}

/// The bounded integer target behind a checked mutator, with the proto type
/// name reported in `RangeError`. `None` for types whose setters are
/// infallible.
pub fn integer_bound(plan: &FieldPlan) -> Option<(TokenStream, &'static str)> {
    match &plan.ty {
        FieldType::Int32 => Some((quote!(i32), "int32")),
        FieldType::Sint32 => Some((quote!(i32), "sint32")),
        FieldType::Sfixed32 => Some((quote!(i32), "sfixed32")),
        FieldType::Int64 => Some((quote!(i64), "int64")),
        FieldType::Sint64 => Some((quote!(i64), "sint64")),
        FieldType::Sfixed64 => Some((quote!(i64), "sfixed64")),
        FieldType::Uint32 => Some((quote!(u32), "uint32")),
        FieldType::Fixed32 => Some((quote!(u32), "fixed32")),
        FieldType::Uint64 => Some((quote!(u64), "uint64")),
        FieldType::Fixed64 => Some((quote!(u64), "fixed64")),
        _ => None,
    }
}

/// Encode statements for one plain (non-oneof, non-map) field.
pub fn encode_field_stmts(plan: &FieldPlan, depth: usize) -> TokenStream {
    let ident = field_ident(&plan.name);
    let tag = push_tag(plan.tag());

    if plan.is_repeated() {
        if plan.packed {
            return encode_packed(plan, depth);
        }
        let access = quote!(value);
        let push = push_value(plan, depth, &access);
        return if copies(plan) {
            quote! {
                for &value in &self.#ident {
                    #tag
                    #push
                }
            }
        } else {
            quote! {
                for value in &self.#ident {
                    #tag
                    #push
                }
            }
        };
    }

    if plan.is_message() {
        let access = quote!(value);
        let push = push_value(plan, depth, &access);
        return quote! {
            if let Some(value) = &self.#ident {
                #tag
                #push
            }
        };
    }

    let access = quote!(self.#ident);
    let gate = not_default_test(plan, &access);
    let push = push_value(plan, depth, &access);
    quote! {
        if #gate {
            #tag
            #push
        }
    }
}

/// One LEN record holding the concatenated element values. Varint elements
/// go through the length reservation and back-patch; fixed-width elements
/// have an exactly known payload size up front.
fn encode_packed(plan: &FieldPlan, depth: usize) -> TokenStream {
    let ident = field_ident(&plan.name);
    let tag = push_tag(plan.tag());
    let access = quote!(value);
    let push = push_value(plan, depth, &access);

    match plan.element_wire {
        WireType::I32 | WireType::I64 => {
            let width: usize = if plan.element_wire == WireType::I32 { 4 } else { 8 };
            let width = Literal::usize_unsuffixed(width);
            let push_varint = support(depth, "push_varint");
            quote! {
                if !self.#ident.is_empty() {
                    #tag
                    #push_varint(buf, (self.#ident.len() * #width) as u64);
                    for &value in &self.#ident {
                        #push
                    }
                }
            }
        }
        _ => {
            let patch_length = support(depth, "patch_length");
            quote! {
                if !self.#ident.is_empty() {
                    #tag
                    let mark = buf.len();
                    buf.push(0);
                    for &value in &self.#ident {
                        #push
                    }
                    #patch_length(buf, mark);
                }
            }
        }
    }
}

/// Whether one element of this field is a plain `Copy` value.
pub fn copies(plan: &FieldPlan) -> bool {
    !matches!(&plan.ty, FieldType::String | FieldType::Bytes | FieldType::Named(_))
        || plan.is_enum
}

/// Decode match arms for one plain field. Repeated fields get an arm per
/// accepted wire form.
pub fn decode_field_arms(
    ctx: &GenerationContext,
    plan: &FieldPlan,
    depth: usize,
) -> Vec<TokenStream> {
    let ident = field_ident(&plan.name);
    let pull = pull_value(ctx, plan, depth);
    let pull_varint = support(depth, "pull_varint");

    if plan.is_repeated() {
        let mut arms = Vec::new();
        if plan.element_wire != WireType::Len {
            // The packed form is accepted regardless of the declared
            // packedness; both forms decode to the same sequence.
            let len_tag = tag_literal((u64::from(plan.number) << 3) | WireType::Len.bits());
            let pull_length = support(depth, "pull_length");
            arms.push(quote! {
                #len_tag => {
                    let length = #pull_length(buf, &mut at, end)?;
                    let goal = at + length;
                    while at < goal {
                        self.#ident.push(#pull);
                    }
                }
            });
        }
        let elem_tag = tag_literal(plan.element_tag());
        arms.push(quote! {
            #elem_tag => {
                while tag == #elem_tag {
                    self.#ident.push(#pull);
                    if at >= end {
                        break 'tag;
                    }
                    tag = #pull_varint(buf, &mut at)?;
                }
                continue 'tag;
            }
        });
        return arms;
    }

    let tag = tag_literal(plan.tag());
    let set_bit = match plan.bit {
        Some(bit) => {
            let mask = bit_literal(bit);
            quote! { self._bitmask |= #mask; }
        }
        None => quote!(),
    };

    if plan.is_message() {
        let store = if plan.boxed {
            quote!(Some(Box::new(value)))
        } else {
            quote!(Some(value))
        };
        return vec![quote! {
            #tag => {
                let value = #pull;
                self.#ident = #store;
                #set_bit
            }
        }];
    }

    vec![quote! {
        #tag => {
            self.#ident = #pull;
            #set_bit
        }
    }]
}

/// Encode statements for a map field: one back-patched LEN record per entry,
/// key field 1 then value field 2, both written unconditionally.
pub fn encode_map_stmts(map: &MapPlan, depth: usize) -> TokenStream {
    let ident = field_ident(&map.name);
    let tag = push_tag(map.tag());
    let key_tag = push_tag(map.key.tag());
    let value_tag = push_tag(map.value.tag());
    let patch_length = support(depth, "patch_length");

    let key_access = quote!(key);
    let value_access = quote!(value);
    let push_key = push_value(&map.key, depth, &key_access);
    let push_value_stmts = push_value(&map.value, depth, &value_access);

    let key_binding = if copies(&map.key) { quote!(&key) } else { quote!(key) };
    let value_binding = if copies(&map.value) {
        quote!(&value)
    } else {
        quote!(value)
    };

    // The entry's reservation gets its own name: a message-typed value
    // opens a second reservation named `mark` inside this block.
    quote! {
        for (#key_binding, #value_binding) in &self.#ident {
            #tag
            let entry_mark = buf.len();
            buf.push(0);
            #key_tag
            #push_key
            #value_tag
            #push_value_stmts
            #patch_length(buf, entry_mark);
        }
    }
}

/// The decode arm for a map field: consume a run of entry records, each a
/// LEN payload holding tag-prefixed key and value fields.
pub fn decode_map_arm(ctx: &GenerationContext, map: &MapPlan, depth: usize) -> TokenStream {
    let ident = field_ident(&map.name);
    let tag = tag_literal(map.tag());
    let key_tag = tag_literal(map.key.tag());
    let value_tag = tag_literal(map.value.tag());
    let pull_varint = support(depth, "pull_varint");
    let pull_length = support(depth, "pull_length");

    let key_default = default_expr(&map.key);
    let value_default = default_expr(&map.value);
    let pull_key = pull_value(ctx, &map.key, depth);
    let pull_val = pull_value(ctx, &map.value, depth);
    let skip = skip_unknown(depth, &quote!(entry_tag));

    quote! {
        #tag => {
            while tag == #tag {
                let length = #pull_length(buf, &mut at, end)?;
                let goal = at + length;
                let mut key = #key_default;
                let mut value = #value_default;
                while at < goal {
                    let entry_tag = #pull_varint(buf, &mut at)?;
                    match entry_tag {
                        #key_tag => {
                            key = #pull_key;
                        }
                        #value_tag => {
                            value = #pull_val;
                        }
                        _ => {
                            #skip
                        }
                    }
                }
                self.#ident.insert(key, value);
                if at >= end {
                    break 'tag;
                }
                tag = #pull_varint(buf, &mut at)?;
            }
            continue 'tag;
        }
    }
}

/// Statements skipping one unrecognized field keyed on the tag's low three
/// bits.
pub fn skip_unknown(depth: usize, tag: &TokenStream) -> TokenStream {
    let pull_varint = support(depth, "pull_varint");
    let pull_length = support(depth, "pull_length");
    let decode_error = support(depth, "DecodeError");
    quote! {
        match #tag & 0x7 {
            0 => {
                #pull_varint(buf, &mut at)?;
            }
            1 => {
                if at + 8 > end {
                    return Err(#decode_error {
                        reason: "truncated fixed64 value",
                    });
                }
                at += 8;
            }
            2 => {
                let length = #pull_length(buf, &mut at, end)?;
                at += length;
            }
            5 => {
                if at + 4 > end {
                    return Err(#decode_error {
                        reason: "truncated fixed32 value",
                    });
                }
                at += 4;
            }
            _ => {
                return Err(#decode_error {
                    reason: "unexpected wire type",
                });
            }
        }
    }
}
