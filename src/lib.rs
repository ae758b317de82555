//! `protoscribe` compiles proto3 descriptors into self-contained Rust
//! message codecs.
//!
//! Given the in-memory descriptor tree for one `.proto` file (produced by an
//! external parser), the generator emits Rust source implementing, per
//! message: a struct with accessors and bounds-checked mutators, a
//! constructor with proto3 defaults, bitmask-tracked optional presence, a
//! dictionary conversion, and wire-format `encode`/`decode` with the
//! encode/decode fragments inlined into the generated file. Enums become
//! namespaces of integer constants with total `lookup`/`resolve` functions.
//!
//! # Example
//!
//! ```rust
//! use protoscribe::descriptor::{
//!     FieldDescriptor, FieldType, FileDescriptor, MessageDescriptor, MessageEntry,
//! };
//!
//! fn main() -> Result<(), protoscribe::Error> {
//!     let mut file = FileDescriptor::new("demo");
//!     file.messages.push(MessageDescriptor::with_entries(
//!         "Ping",
//!         vec![MessageEntry::Field(FieldDescriptor::new(
//!             "sequence",
//!             1,
//!             FieldType::Uint64,
//!         ))],
//!     ));
//!
//!     let source = protoscribe::generate_file(&protoscribe::Config::new(), &file)?;
//!     assert!(source.contains("pub struct Ping"));
//!     Ok(())
//! }
//! ```
//!
//! # Well-known types
//!
//! Fields referencing `google.protobuf.{Bool,Int32,...}Value` or
//! `google.protobuf.Timestamp` are rewritten to wrapper types from a runtime
//! crate; the emitted file declares the import. The wrapper path is
//! configurable:
//!
//! ```rust,no_run
//! # let file = protoscribe::descriptor::FileDescriptor::new("demo");
//! let mut config = protoscribe::Config::new();
//! config.runtime_path("my_runtime::wkt");
//! let source = protoscribe::generate_file(&config, &file)?;
//! # Ok::<(), protoscribe::Error>(())
//! ```

mod codegen;
mod config;
mod context;
pub mod descriptor;
mod error;

pub use config::Config;
pub use error::Error;

use descriptor::FileDescriptor;
use proc_macro2::TokenStream;

/// Generate formatted Rust source for one file descriptor.
pub fn generate_file(config: &Config, file: &FileDescriptor) -> Result<String, Error> {
    codegen::generate_file(config, file)
}

/// Generate the raw token stream for one file descriptor, for callers that
/// embed the output in further token manipulation.
pub fn generate_tokens(config: &Config, file: &FileDescriptor) -> Result<TokenStream, Error> {
    codegen::generate_tokens(config, file)
}
