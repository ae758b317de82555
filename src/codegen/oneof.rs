//! Oneof group code generation.
//!
//! A oneof is stored as `Option<{message_mod}::{GroupName}>`, a tagged enum
//! with one variant per member. The group reader reports the active member's
//! name as the discriminator; member readers return the stored value or the
//! member default; member mutators set the discriminator and value in one
//! assignment, which is what keeps at most one member active.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::context::{field_ident, variant_ident, GenerationContext};
use crate::descriptor::FieldType;

use super::classify::{FieldPlan, OneofPlan};
use super::fragments;

/// The enum type identifier for a group.
pub fn group_enum_ident(plan: &OneofPlan) -> Ident {
    variant_ident(&plan.name)
}

/// The enum definition, emitted inside the message's nested module (one
/// level below the message's own depth).
pub fn generate_oneof_enum(
    ctx: &GenerationContext,
    plan: &OneofPlan,
    depth: usize,
) -> TokenStream {
    let enum_name = group_enum_ident(plan);
    let variants: Vec<TokenStream> = plan
        .members
        .iter()
        .map(|member| {
            let variant = variant_ident(&member.name);
            let ty = fragments::element_type(ctx, member, depth);
            if member.boxed {
                quote!(#variant(Box<#ty>),)
            } else {
                quote!(#variant(#ty),)
            }
        })
        .collect();

    quote! {
        #[derive(Debug, Clone, PartialEq)]
        pub enum #enum_name {
            #(#variants)*
        }
    }
}

/// Tokens naming the group enum from the message's impl block.
fn enum_path(msg_mod: &Ident, plan: &OneofPlan) -> TokenStream {
    let enum_name = group_enum_ident(plan);
    quote!(#msg_mod::#enum_name)
}

/// The group reader plus one reader per member.
pub fn accessors(
    ctx: &GenerationContext,
    plan: &OneofPlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let group = field_ident(&plan.name);
    let path = enum_path(msg_mod, plan);

    let discriminator_arms: Vec<TokenStream> = plan
        .members
        .iter()
        .map(|member| {
            let variant = variant_ident(&member.name);
            let name = member.name.as_str();
            quote! { Some(#path::#variant(_)) => Some(#name), }
        })
        .collect();

    let mut tokens = quote! {
        pub fn #group(&self) -> Option<&'static str> {
            match &self.#group {
                #(#discriminator_arms)*
                None => None,
            }
        }
    };

    for member in &plan.members {
        let reader = field_ident(&member.name);
        let variant = variant_ident(&member.name);

        let accessor = if member.is_message() {
            let ty = fragments::element_type(ctx, member, depth);
            let bind = if member.boxed {
                quote!(Some(value.as_ref()))
            } else {
                quote!(Some(value))
            };
            quote! {
                pub fn #reader(&self) -> Option<&#ty> {
                    match &self.#group {
                        Some(#path::#variant(value)) => #bind,
                        _ => None,
                    }
                }
            }
        } else if member.is_enum {
            let enum_value = fragments::support(depth, "EnumValue");
            let enum_mod = fragments::enum_module(ctx, member, depth);
            quote! {
                pub fn #reader(&self) -> #enum_value {
                    let number = match &self.#group {
                        Some(#path::#variant(value)) => *value,
                        _ => 0,
                    };
                    match #enum_mod::lookup(number) {
                        Some(symbol) => #enum_value::Symbol(symbol),
                        None => #enum_value::Number(number),
                    }
                }
            }
        } else {
            match &member.ty {
                FieldType::String => quote! {
                    pub fn #reader(&self) -> &str {
                        match &self.#group {
                            Some(#path::#variant(value)) => value.as_str(),
                            _ => "",
                        }
                    }
                },
                FieldType::Bytes => quote! {
                    pub fn #reader(&self) -> &[u8] {
                        match &self.#group {
                            Some(#path::#variant(value)) => value.as_slice(),
                            _ => &[],
                        }
                    }
                },
                _ => {
                    let ty = fragments::element_type(ctx, member, depth);
                    let default = fragments::default_expr(member);
                    quote! {
                        pub fn #reader(&self) -> #ty {
                            match &self.#group {
                                Some(#path::#variant(value)) => *value,
                                _ => #default,
                            }
                        }
                    }
                }
            }
        };
        tokens.extend(accessor);
    }

    tokens
}

/// One mutator per member. Setting any member replaces the whole group.
pub fn mutators(
    ctx: &GenerationContext,
    plan: &OneofPlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let group = field_ident(&plan.name);
    let path = enum_path(msg_mod, plan);
    let mut tokens = TokenStream::new();

    for member in &plan.members {
        let setter = setter_ident(member);
        let variant = variant_ident(&member.name);

        let mutator = if let Some((target, proto_type)) = fragments::integer_bound(member) {
            let range_error = fragments::support(depth, "RangeError");
            let name = member.name.as_str();
            quote! {
                pub fn #setter<V>(&mut self, value: V) -> Result<(), #range_error>
                where
                    V: TryInto<#target>,
                {
                    let value = value.try_into().map_err(|_| #range_error {
                        field: #name,
                        proto_type: #proto_type,
                    })?;
                    self.#group = Some(#path::#variant(value));
                    Ok(())
                }
            }
        } else if member.is_message() {
            let ty = fragments::element_type(ctx, member, depth);
            let store = if member.boxed {
                quote!(Box::new(value))
            } else {
                quote!(value)
            };
            quote! {
                pub fn #setter(&mut self, value: #ty) {
                    self.#group = Some(#path::#variant(#store));
                }
            }
        } else if member.is_enum {
            let symbol_setter = symbol_setter_ident(member);
            let enum_mod = fragments::enum_module(ctx, member, depth);
            quote! {
                pub fn #setter(&mut self, value: i32) {
                    self.#group = Some(#path::#variant(value));
                }

                pub fn #symbol_setter(&mut self, symbol: &str) -> Option<i32> {
                    match #enum_mod::resolve(symbol) {
                        Some(number) => {
                            self.#group = Some(#path::#variant(number));
                            Some(number)
                        }
                        None => None,
                    }
                }
            }
        } else {
            match &member.ty {
                FieldType::String => quote! {
                    pub fn #setter(&mut self, value: impl Into<String>) {
                        self.#group = Some(#path::#variant(value.into()));
                    }
                },
                FieldType::Bytes => quote! {
                    pub fn #setter(&mut self, value: impl Into<Vec<u8>>) {
                        self.#group = Some(#path::#variant(value.into()));
                    }
                },
                _ => {
                    let ty = fragments::element_type(ctx, member, depth);
                    quote! {
                        pub fn #setter(&mut self, value: #ty) {
                            self.#group = Some(#path::#variant(value));
                        }
                    }
                }
            }
        };
        tokens.extend(mutator);
    }

    tokens
}

/// Encode statements: emit exactly the active member, nothing when unset.
pub fn encode(plan: &OneofPlan, msg_mod: &Ident, depth: usize) -> TokenStream {
    let group = field_ident(&plan.name);
    let path = enum_path(msg_mod, plan);

    let arms: Vec<TokenStream> = plan
        .members
        .iter()
        .map(|member| {
            let variant = variant_ident(&member.name);
            let tag = fragments::push_tag(member.tag());
            let value = quote!(value);
            let push = fragments::push_value(member, depth, &value);
            // Copy members rebind by value so the push fragment sees the
            // same atomic expression shape as everywhere else.
            let rebind = if fragments::copies(member) {
                quote! { let value = *value; }
            } else {
                quote!()
            };
            quote! {
                Some(#path::#variant(value)) => {
                    #rebind
                    #tag
                    #push
                }
            }
        })
        .collect();

    quote! {
        match &self.#group {
            #(#arms)*
            None => {}
        }
    }
}

/// Decode arms: one per member tag, each replacing the whole group.
pub fn decode_arms(
    ctx: &GenerationContext,
    plan: &OneofPlan,
    msg_mod: &Ident,
    depth: usize,
) -> Vec<TokenStream> {
    let group = field_ident(&plan.name);
    let path = enum_path(msg_mod, plan);

    plan.members
        .iter()
        .map(|member| {
            let variant = variant_ident(&member.name);
            let tag = fragments::tag_literal(member.tag());
            let pull = fragments::pull_value(ctx, member, depth);
            let store = if member.boxed {
                quote!(Box::new(#pull))
            } else {
                pull
            };
            quote! {
                #tag => {
                    self.#group = Some(#path::#variant(#store));
                }
            }
        })
        .collect()
}

/// `to_map` statements: a single entry keyed by the active member's name.
pub fn to_map(
    ctx: &GenerationContext,
    plan: &OneofPlan,
    msg_mod: &Ident,
    depth: usize,
) -> TokenStream {
    let group = field_ident(&plan.name);
    let path = enum_path(msg_mod, plan);

    let arms: Vec<TokenStream> = plan
        .members
        .iter()
        .map(|member| {
            let variant = variant_ident(&member.name);
            let name = member.name.as_str();
            let value = if fragments::copies(member) {
                quote!(*value)
            } else {
                quote!(value)
            };
            let converted = fragments::to_value(ctx, member, depth, &value);
            quote! {
                Some(#path::#variant(value)) => {
                    map.insert(#name, #converted);
                }
            }
        })
        .collect();

    quote! {
        match &self.#group {
            #(#arms)*
            None => {}
        }
    }
}

fn setter_ident(member: &FieldPlan) -> Ident {
    quote::format_ident!("set_{}", crate::context::to_snake_case(&member.name))
}

fn symbol_setter_ident(member: &FieldPlan) -> Ident {
    quote::format_ident!("set_{}_symbol", crate::context::to_snake_case(&member.name))
}
