//! Enum namespace code generation.
//!
//! A proto enum becomes a module of named integer constants plus the two
//! total resolution functions: `lookup` from number to symbol and `resolve`
//! from symbol to number. Message fields of enum type store a raw `i32` and
//! go through these functions in their accessors and mutators, which is what
//! lets unknown numbers round-trip untouched.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use crate::context::module_ident;
use crate::descriptor::EnumDescriptor;
use crate::Error;

/// Generate the module for one enum.
pub fn generate_enum(enum_type: &EnumDescriptor) -> Result<TokenStream, Error> {
    if enum_type.name.is_empty() {
        return Err(Error::MissingName);
    }
    if enum_type.constants.is_empty() {
        return Err(Error::EmptyEnum(enum_type.name.clone()));
    }

    let mod_name = module_ident(&enum_type.name);

    let mut constants = Vec::new();
    let mut lookup_arms = Vec::new();
    let mut resolve_arms = Vec::new();
    for constant in &enum_type.constants {
        if constant.name.is_empty() {
            return Err(Error::MissingName);
        }
        let const_ident = format_ident!("{}", constant.name);
        let number = Literal::i32_unsuffixed(constant.number);
        let symbol = constant.name.as_str();
        constants.push(quote! {
            pub const #const_ident: i32 = #number;
        });
        // First declaration wins for aliased numbers, matching the order
        // the schema names them in.
        if !enum_type
            .constants
            .iter()
            .take_while(|c| c.name != constant.name)
            .any(|c| c.number == constant.number)
        {
            lookup_arms.push(quote! {
                #number => Some(#symbol),
            });
        }
        resolve_arms.push(quote! {
            #symbol => Some(#const_ident),
        });
    }

    Ok(quote! {
        pub mod #mod_name {
            #(#constants)*

            /// The symbol for a known value, or `None`.
            pub fn lookup(value: i32) -> Option<&'static str> {
                match value {
                    #(#lookup_arms)*
                    _ => None,
                }
            }

            /// The value for a known symbol, or `None`.
            pub fn resolve(symbol: &str) -> Option<i32> {
                match symbol {
                    #(#resolve_arms)*
                    _ => None,
                }
            }
        }
    })
}
