//! Error types for protoscribe.

use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum Error {
    /// A field references a type the generator cannot categorize.
    #[error("field `{field}` references a type that cannot be categorized: `{type_name}`")]
    UnknownType { field: String, type_name: String },

    /// The presence bitmask holds at most 62 optional fields.
    #[error("message `{message}` declares {count} optional fields; at most 62 are supported")]
    TooManyOptionalFields { message: String, count: usize },

    /// An enum with no constants cannot produce lookup/resolve functions.
    #[error("enum `{0}` declares no constants")]
    EmptyEnum(String),

    /// A descriptor entity is missing its name.
    #[error("descriptor entity is missing a name")]
    MissingName,

    /// Map keys must be integral, bool, or string types.
    #[error("map field `{field}` uses an invalid key type `{key_type}`")]
    InvalidMapKey { field: String, key_type: String },

    /// The emitted token stream failed to parse as a Rust file.
    #[error("generated code failed to parse: {0}")]
    Render(String),
}
