//! Code generation from file descriptors.

pub mod classify;
mod enumeration;
mod fragments;
mod message;
mod oneof;
pub(crate) mod recursion;
mod support;

use log::debug;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::config::Config;
use crate::context::{module_ident, GenerationContext};
use crate::descriptor::FileDescriptor;
use crate::Error;

/// Generate the source text for one file: the `Descriptor -> EmittedSource`
/// function the crate exists for.
pub fn generate_file(config: &Config, file: &FileDescriptor) -> Result<String, Error> {
    let tokens = generate_tokens(config, file)?;
    if config.skip_format {
        return Ok(tokens.to_string());
    }
    let parsed = syn::parse2::<syn::File>(tokens).map_err(|e| Error::Render(e.to_string()))?;
    let text = prettyplease::unparse(&parsed);
    Ok(format!(
        "// This file is @generated by protoscribe. Do not edit.\n\n{}",
        text
    ))
}

/// Generate the unformatted token stream for one file.
pub fn generate_tokens(config: &Config, file: &FileDescriptor) -> Result<TokenStream, Error> {
    let ctx = GenerationContext::new(config, file);
    debug!(
        "file: package `{}`, {} enums, {} messages",
        file.package,
        file.enums.len(),
        file.messages.len()
    );

    let mut items = TokenStream::new();
    for enum_type in &file.enums {
        items.extend(enumeration::generate_enum(enum_type)?);
    }
    for msg in &file.messages {
        items.extend(message::generate_message(&ctx, &[], msg, 0)?);
    }

    // The preamble comes together after emission: only then is it known
    // which well-known wrappers the file referenced.
    let mut body = TokenStream::new();
    let deps = ctx.wkt_dependencies();
    if !deps.is_empty() {
        let runtime = ctx.runtime_tokens();
        let names: Vec<_> = deps.iter().map(|name| format_ident!("{}", name)).collect();
        body.extend(quote! {
            #[allow(unused_imports)]
            use #runtime::{#(#names),*};
        });
    }
    if !file.messages.is_empty() {
        body.extend(support::support_items());
    }
    body.extend(items);

    // Innermost-out namespace nesting.
    for component in file.namespace_components().iter().rev() {
        let ident = module_ident(component);
        body = quote! {
            pub mod #ident {
                #body
            }
        };
    }

    Ok(body)
}
