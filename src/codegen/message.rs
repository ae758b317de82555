//! Message code generation.
//!
//! Each message becomes a struct with private storage, a nested module for
//! its oneof enums and nested types, and one impl block carrying the full
//! surface: `decode`/`encode`, per-field accessors and mutators, the
//! constructor, presence predicates, `to_map`, `encode_into`, and
//! `decode_from`.

use log::debug;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::context::{field_ident, module_ident, to_snake_case, type_ident, GenerationContext};
use crate::descriptor::{FieldType, MessageDescriptor};
use crate::Error;

use super::classify::{plan_message, EntryPlan, FieldPlan, MapPlan, MessagePlan};
use super::enumeration::generate_enum;
use super::fragments;
use super::oneof;

/// Generate one message and its nested types. `scope` is the chain of
/// enclosing message names; `depth` the module depth below the file root.
pub fn generate_message(
    ctx: &GenerationContext,
    scope: &[String],
    message: &MessageDescriptor,
    depth: usize,
) -> Result<TokenStream, Error> {
    if message.name.is_empty() {
        return Err(Error::MissingName);
    }
    debug!("message: {}", message.name);

    let mut full_scope = scope.to_vec();
    full_scope.push(message.name.clone());
    let plan = plan_message(ctx, &full_scope, message)?;

    let struct_name = type_ident(&message.name);
    let msg_mod = module_ident(&message.name);

    let fields = struct_fields(ctx, &plan, &msg_mod, depth);
    let nested = nested_items(ctx, &full_scope, message, &plan, depth)?;
    let nested_mod = if nested.is_empty() {
        quote!()
    } else {
        quote! {
            pub mod #msg_mod {
                use super::*;
                #nested
            }
        }
    };

    let decode_error = fragments::support(depth, "DecodeError");
    let accessors = accessors(ctx, &plan, &msg_mod, depth);
    let mutators = mutators(ctx, &plan, &msg_mod, depth);
    let constructor = constructor(ctx, &plan, &msg_mod, depth);
    let presence = presence_predicates(&plan);
    let to_map = to_map(ctx, &plan, &msg_mod, depth);
    let encode_into = encode_into(&plan, &msg_mod, depth);
    let decode_from = decode_from(ctx, &plan, &msg_mod, depth);

    Ok(quote! {
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct #struct_name {
            #fields
        }

        #nested_mod

        impl #struct_name {
            /// Parse one message from a complete byte sequence.
            pub fn decode(buf: &[u8]) -> Result<Self, #decode_error> {
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

            #accessors
            #mutators
            #constructor
            #presence
            #to_map
            #encode_into
            #decode_from
        }
    })
}

/// The stored type of a plain field, wrappers included.
fn stored_type(ctx: &GenerationContext, plan: &FieldPlan, depth: usize) -> TokenStream {
    let element = fragments::element_type(ctx, plan, depth);
    if plan.is_repeated() {
        quote!(Vec<#element>)
    } else if plan.is_message() {
        if plan.boxed {
            quote!(Option<Box<#element>>)
        } else {
            quote!(Option<#element>)
        }
    } else {
        element
    }
}

fn map_types(ctx: &GenerationContext, map: &MapPlan, depth: usize) -> (TokenStream, TokenStream) {
    (
        fragments::element_type(ctx, &map.key, depth),
        fragments::element_type(ctx, &map.value, depth),
    )
}

fn struct_fields(
    ctx: &GenerationContext,
    plan: &MessagePlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let mut fields = TokenStream::new();
    for entry in &plan.entries {
        match entry {
            EntryPlan::Field(field) => {
                let ident = field_ident(&field.name);
                let ty = stored_type(ctx, field, depth);
                fields.extend(quote! { #ident: #ty, });
            }
            EntryPlan::Oneof(group) => {
                let ident = field_ident(&group.name);
                let enum_name = oneof::group_enum_ident(group);
                fields.extend(quote! { #ident: Option<#msg_mod::#enum_name>, });
            }
            EntryPlan::Map(map) => {
                let ident = field_ident(&map.name);
                let (key, value) = map_types(ctx, map, depth);
                fields.extend(quote! { #ident: std::collections::BTreeMap<#key, #value>, });
            }
        }
    }
    if plan.has_bitmask() {
        fields.extend(quote! { _bitmask: u64, });
    }
    fields
}

fn nested_items(
    ctx: &GenerationContext,
    full_scope: &[String],
    message: &MessageDescriptor,
    plan: &MessagePlan,
    depth: usize,
) -> Result<TokenStream, Error> {
    let mut nested = TokenStream::new();

    for entry in &plan.entries {
        if let EntryPlan::Oneof(group) = entry {
            nested.extend(oneof::generate_oneof_enum(ctx, group, depth + 1));
        }
    }
    for enum_type in &message.enums {
        nested.extend(generate_enum(enum_type)?);
    }
    for nested_msg in &message.messages {
        nested.extend(generate_message(ctx, full_scope, nested_msg, depth + 1)?);
    }

    Ok(nested)
}

fn accessors(
    ctx: &GenerationContext,
    plan: &MessagePlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let mut tokens = TokenStream::new();
    for entry in &plan.entries {
        match entry {
            EntryPlan::Field(field) => tokens.extend(field_accessor(ctx, field, depth)),
            EntryPlan::Oneof(group) => {
                tokens.extend(oneof::accessors(ctx, group, msg_mod, depth));
            }
            EntryPlan::Map(map) => {
                let ident = field_ident(&map.name);
                let (key, value) = map_types(ctx, map, depth);
                tokens.extend(quote! {
                    pub fn #ident(&self) -> &std::collections::BTreeMap<#key, #value> {
                        &self.#ident
                    }
                });
            }
        }
    }
    tokens
}

fn field_accessor(ctx: &GenerationContext, field: &FieldPlan, depth: usize) -> TokenStream {
    let ident = field_ident(&field.name);

    if field.is_repeated() {
        let element = fragments::element_type(ctx, field, depth);
        return quote! {
            pub fn #ident(&self) -> &[#element] {
                self.#ident.as_slice()
            }
        };
    }

    if field.is_message() {
        let element = fragments::element_type(ctx, field, depth);
        let body = if field.boxed {
            quote!(self.#ident.as_deref())
        } else {
            quote!(self.#ident.as_ref())
        };
        return quote! {
            pub fn #ident(&self) -> Option<&#element> {
                #body
            }
        };
    }

    if field.is_enum {
        let enum_value = fragments::support(depth, "EnumValue");
        let enum_mod = fragments::enum_module(ctx, field, depth);
        return quote! {
            pub fn #ident(&self) -> #enum_value {
                match #enum_mod::lookup(self.#ident) {
                    Some(symbol) => #enum_value::Symbol(symbol),
                    None => #enum_value::Number(self.#ident),
                }
            }
        };
    }

    match &field.ty {
        FieldType::String => quote! {
            pub fn #ident(&self) -> &str {
                self.#ident.as_str()
            }
        },
        FieldType::Bytes => quote! {
            pub fn #ident(&self) -> &[u8] {
                self.#ident.as_slice()
            }
        },
        _ => {
            let element = fragments::element_type(ctx, field, depth);
            quote! {
                pub fn #ident(&self) -> #element {
                    self.#ident
                }
            }
        }
    }
}

fn mutators(
    ctx: &GenerationContext,
    plan: &MessagePlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let mut tokens = TokenStream::new();
    for entry in &plan.entries {
        match entry {
            EntryPlan::Field(field) => tokens.extend(field_mutator(ctx, field, depth)),
            EntryPlan::Oneof(group) => {
                tokens.extend(oneof::mutators(ctx, group, msg_mod, depth));
            }
            EntryPlan::Map(map) => {
                let ident = field_ident(&map.name);
                let setter = format_ident!("set_{}", to_snake_case(&map.name));
                let (key, value) = map_types(ctx, map, depth);
                tokens.extend(quote! {
                    pub fn #setter(&mut self, entries: std::collections::BTreeMap<#key, #value>) {
                        self.#ident = entries;
                    }
                });
            }
        }
    }
    tokens
}

/// The presence-bit statement a successful optional assignment performs.
fn set_bit(field: &FieldPlan) -> TokenStream {
    match field.bit {
        Some(bit) => {
            let mask = fragments::bit_literal(bit);
            quote! { self._bitmask |= #mask; }
        }
        None => quote!(),
    }
}

fn field_mutator(ctx: &GenerationContext, field: &FieldPlan, depth: usize) -> TokenStream {
    let ident = field_ident(&field.name);
    let setter = format_ident!("set_{}", to_snake_case(&field.name));
    let mark = set_bit(field);

    if field.is_repeated() {
        if let Some((target, proto_type)) = fragments::integer_bound(field) {
            let range_error = fragments::support(depth, "RangeError");
            let name = field.name.as_str();
            return quote! {
                pub fn #setter<V>(&mut self, values: Vec<V>) -> Result<(), #range_error>
                where
                    V: TryInto<#target>,
                {
                    let mut out = Vec::with_capacity(values.len());
                    for value in values {
                        out.push(value.try_into().map_err(|_| #range_error {
                            field: #name,
                            proto_type: #proto_type,
                        })?);
                    }
                    self.#ident = out;
                    Ok(())
                }
            };
        }
        let element = fragments::element_type(ctx, field, depth);
        return quote! {
            pub fn #setter(&mut self, values: Vec<#element>) {
                self.#ident = values;
            }
        };
    }

    if field.is_message() {
        let element = fragments::element_type(ctx, field, depth);
        let store = if field.boxed {
            quote!(Some(Box::new(value)))
        } else {
            quote!(Some(value))
        };
        return quote! {
            pub fn #setter(&mut self, value: #element) {
                self.#ident = #store;
                #mark
            }
        };
    }

    if field.is_enum {
        let symbol_setter = format_ident!("set_{}_symbol", to_snake_case(&field.name));
        let enum_mod = fragments::enum_module(ctx, field, depth);
        return quote! {
            pub fn #setter(&mut self, value: i32) {
                self.#ident = value;
                #mark
            }

            /// Resolve a symbol and store its number; unknown symbols leave
            /// the field untouched.
            pub fn #symbol_setter(&mut self, symbol: &str) -> Option<i32> {
                match #enum_mod::resolve(symbol) {
                    Some(number) => {
                        self.#ident = number;
                        #mark
                        Some(number)
                    }
                    None => None,
                }
            }
        };
    }

    if let Some((target, proto_type)) = fragments::integer_bound(field) {
        let range_error = fragments::support(depth, "RangeError");
        let name = field.name.as_str();
        return quote! {
            pub fn #setter<V>(&mut self, value: V) -> Result<(), #range_error>
            where
                V: TryInto<#target>,
            {
                let value = value.try_into().map_err(|_| #range_error {
                    field: #name,
                    proto_type: #proto_type,
                })?;
                self.#ident = value;
                #mark
                Ok(())
            }
        };
    }

    match &field.ty {
        FieldType::String => quote! {
            pub fn #setter(&mut self, value: impl Into<String>) {
                self.#ident = value.into();
                #mark
            }
        },
        FieldType::Bytes => quote! {
            pub fn #setter(&mut self, value: impl Into<Vec<u8>>) {
                self.#ident = value.into();
                #mark
            }
        },
        _ => {
            let element = fragments::element_type(ctx, field, depth);
            quote! {
                pub fn #setter(&mut self, value: #element) {
                    self.#ident = value;
                    #mark
                }
            }
        }
    }
}

/// The constructor takes every field as a parameter in descriptor order;
/// optional fields and submessages arrive as `Option`.
fn constructor(
    ctx: &GenerationContext,
    plan: &MessagePlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let mut params = Vec::new();
    let mut inits = Vec::new();

    for entry in &plan.entries {
        match entry {
            EntryPlan::Field(field) => {
                let ident = field_ident(&field.name);
                let element = fragments::element_type(ctx, field, depth);
                if field.is_repeated() {
                    params.push(quote!(#ident: Vec<#element>));
                    inits.push(quote! { message.#ident = #ident; });
                } else if field.is_message() {
                    let store = if field.boxed {
                        quote!(Some(Box::new(value)))
                    } else {
                        quote!(Some(value))
                    };
                    let mark = set_bit(field);
                    params.push(quote!(#ident: Option<#element>));
                    inits.push(quote! {
                        if let Some(value) = #ident {
                            message.#ident = #store;
                            #mark
                        }
                    });
                } else if field.is_optional() {
                    let mark = set_bit(field);
                    params.push(quote!(#ident: Option<#element>));
                    inits.push(quote! {
                        if let Some(value) = #ident {
                            message.#ident = value;
                            #mark
                        }
                    });
                } else {
                    params.push(quote!(#ident: #element));
                    inits.push(quote! { message.#ident = #ident; });
                }
            }
            EntryPlan::Oneof(group) => {
                let ident = field_ident(&group.name);
                let enum_name = oneof::group_enum_ident(group);
                params.push(quote!(#ident: Option<#msg_mod::#enum_name>));
                inits.push(quote! { message.#ident = #ident; });
            }
            EntryPlan::Map(map) => {
                let ident = field_ident(&map.name);
                let (key, value) = map_types(ctx, map, depth);
                params.push(quote!(#ident: std::collections::BTreeMap<#key, #value>));
                inits.push(quote! { message.#ident = #ident; });
            }
        }
    }

    if params.is_empty() {
        return quote! {
            pub fn new() -> Self {
                Self::default()
            }
        };
    }

    quote! {
        pub fn new(#(#params),*) -> Self {
            let mut message = Self::default();
            #(#inits)*
            message
        }
    }
}

fn presence_predicates(plan: &MessagePlan) -> TokenStream {
    let mut tokens = TokenStream::new();
    for entry in &plan.entries {
        if let EntryPlan::Field(field) = entry {
            if let Some(bit) = field.bit {
                let has = format_ident!("has_{}", to_snake_case(&field.name));
                let mask = fragments::bit_literal(bit);
                tokens.extend(quote! {
                    pub fn #has(&self) -> bool {
                        self._bitmask & #mask != 0
                    }
                });
            }
        }
    }
    tokens
}

fn to_map(
    ctx: &GenerationContext,
    plan: &MessagePlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let value_ty = fragments::support(depth, "Value");
    let mut stmts = TokenStream::new();

    for entry in &plan.entries {
        match entry {
            EntryPlan::Field(field) => {
                let ident = field_ident(&field.name);
                let name = field.name.as_str();
                if field.is_repeated() {
                    let element = if fragments::copies(field) {
                        quote!(*value)
                    } else {
                        quote!(value)
                    };
                    let converted = fragments::to_value(ctx, field, depth, &element);
                    stmts.extend(quote! {
                        map.insert(
                            #name,
                            #value_ty::List(self.#ident.iter().map(|value| #converted).collect()),
                        );
                    });
                } else if field.is_message() {
                    let access = quote!(value);
                    let converted = fragments::to_value(ctx, field, depth, &access);
                    stmts.extend(quote! {
                        if let Some(value) = &self.#ident {
                            map.insert(#name, #converted);
                        }
                    });
                } else {
                    let access = quote!(self.#ident);
                    let converted = fragments::to_value(ctx, field, depth, &access);
                    stmts.extend(quote! {
                        map.insert(#name, #converted);
                    });
                }
            }
            EntryPlan::Oneof(group) => {
                stmts.extend(oneof::to_map(ctx, group, msg_mod, depth));
            }
            EntryPlan::Map(map) => {
                let ident = field_ident(&map.name);
                let name = map.name.as_str();
                let key_expr = if fragments::copies(&map.key) {
                    quote!(*key)
                } else {
                    quote!(key)
                };
                let value_expr = if fragments::copies(&map.value) {
                    quote!(*value)
                } else {
                    quote!(value)
                };
                let key_conv = fragments::to_value(ctx, &map.key, depth, &key_expr);
                let value_conv = fragments::to_value(ctx, &map.value, depth, &value_expr);
                stmts.extend(quote! {
                    map.insert(
                        #name,
                        #value_ty::Map(
                            self.#ident
                                .iter()
                                .map(|(key, value)| (#key_conv, #value_conv))
                                .collect(),
                        ),
                    );
                });
            }
        }
    }

    quote! {
        /// Convert into a name-keyed dictionary. Submessages recurse; a
        /// oneof contributes a single entry only while a member is active.
        pub fn to_map(&self) -> std::collections::BTreeMap<&'static str, #value_ty> {
            let mut map = std::collections::BTreeMap::new();
            #stmts
            map
        }
    }
}

fn encode_into(plan: &MessagePlan, msg_mod: &Ident, depth: usize) -> TokenStream {
    if plan.entries.is_empty() {
        return quote! {
            /// Serialize into a caller-supplied buffer, appending.
            pub fn encode_into(&self, _buf: &mut Vec<u8>) {}
        };
    }

    let mut stmts = TokenStream::new();
    for entry in &plan.entries {
        match entry {
            EntryPlan::Field(field) => {
                stmts.extend(fragments::encode_field_stmts(field, depth));
            }
            EntryPlan::Oneof(group) => stmts.extend(oneof::encode(group, msg_mod, depth)),
            EntryPlan::Map(map) => stmts.extend(fragments::encode_map_stmts(map, depth)),
        }
    }

    quote! {
        /// Serialize into a caller-supplied buffer, appending.
        pub fn encode_into(&self, buf: &mut Vec<u8>) {
            #stmts
        }
    }
}

fn decode_from(
    ctx: &GenerationContext,
    plan: &MessagePlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let decode_error = fragments::support(depth, "DecodeError");
    let pull_varint = fragments::support(depth, "pull_varint");

    let mut resets = TokenStream::new();
    if plan.has_bitmask() {
        resets.extend(quote! { self._bitmask = 0; });
    }
    for entry in &plan.entries {
        match entry {
            EntryPlan::Field(field) => {
                let ident = field_ident(&field.name);
                if field.is_repeated() {
                    resets.extend(quote! { self.#ident.clear(); });
                } else if field.is_message() {
                    resets.extend(quote! { self.#ident = None; });
                } else {
                    match &field.ty {
                        FieldType::String | FieldType::Bytes => {
                            resets.extend(quote! { self.#ident.clear(); });
                        }
                        _ => {
                            let default = fragments::default_expr(field);
                            resets.extend(quote! { self.#ident = #default; });
                        }
                    }
                }
            }
            EntryPlan::Oneof(group) => {
                let ident = field_ident(&group.name);
                resets.extend(quote! { self.#ident = None; });
            }
            EntryPlan::Map(map) => {
                let ident = field_ident(&map.name);
                resets.extend(quote! { self.#ident.clear(); });
            }
        }
    }

    let mut arms = Vec::new();
    let mut needs_label = false;
    for entry in &plan.entries {
        match entry {
            EntryPlan::Field(field) => {
                if field.is_repeated() {
                    needs_label = true;
                }
                arms.extend(fragments::decode_field_arms(ctx, field, depth));
            }
            EntryPlan::Oneof(group) => {
                arms.extend(oneof::decode_arms(ctx, group, msg_mod, depth));
            }
            EntryPlan::Map(map) => {
                needs_label = true;
                arms.push(fragments::decode_map_arm(ctx, map, depth));
            }
        }
    }

    let skip = fragments::skip_unknown(depth, &quote!(tag));
    let loop_head = if needs_label {
        quote!('tag: loop)
    } else {
        quote!(loop)
    };

    quote! {
        /// Populate in place from `buf[start..end)`, which must hold one
        /// complete message.
        pub fn decode_from(
            &mut self,
            buf: &[u8],
            start: usize,
            end: usize,
        ) -> Result<(), #decode_error> {
            if end > buf.len() {
                return Err(#decode_error {
                    reason: "decode range exceeds buffer",
                });
            }
            #resets
            let mut at = start;
            if at >= end {
                return Ok(());
            }
            let mut tag = #pull_varint(buf, &mut at)?;
            #loop_head {
                match tag {
                    #(#arms)*
                    _ => {
                        #skip
                    }
                }
                if at >= end {
                    break;
                }
                tag = #pull_varint(buf, &mut at)?;
            }
            Ok(())
        }
    }
}
