//! Configuration for code generation.

use std::collections::HashMap;

/// Configuration for code generation.
///
/// The defaults produce self-contained output that only references the
/// well-known-type runtime crate when a schema actually uses a well-known
/// type.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rust path of the runtime library providing well-known type wrappers.
    pub(crate) runtime_path: String,

    /// Extra substitutions for externally provided types.
    /// Maps a fully qualified proto name to a Rust path, e.g.
    /// `"google.protobuf.Duration"` -> `"prost_types::Duration"`.
    pub(crate) extern_paths: HashMap<String, String>,

    /// Return raw token text instead of prettyplease-formatted source.
    pub(crate) skip_format: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime_path: "protoscribe_wkt".to_owned(),
            extern_paths: HashMap::new(),
            skip_format: false,
        }
    }
}

impl Config {
    /// Create a new Config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Rust path generated code uses for well-known type wrappers.
    pub fn runtime_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.runtime_path = path.into();
        self
    }

    /// Declare an externally provided protobuf type.
    ///
    /// When a field references `proto_name`, the generated code uses
    /// `rust_path` for it instead of resolving within the file. Checked
    /// before the built-in well-known type table.
    pub fn extern_path(
        &mut self,
        proto_name: impl Into<String>,
        rust_path: impl Into<String>,
    ) -> &mut Self {
        self.extern_paths.insert(proto_name.into(), rust_path.into());
        self
    }

    /// Skip formatting with prettyplease.
    pub fn skip_format(&mut self) -> &mut Self {
        self.skip_format = true;
        self
    }

    /// Generate source text for one file descriptor.
    pub fn generate_file(
        &self,
        file: &crate::descriptor::FileDescriptor,
    ) -> Result<String, crate::Error> {
        crate::codegen::generate_file(self, file)
    }
}
