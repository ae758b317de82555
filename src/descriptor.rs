//! Descriptor types for a parsed `.proto` file.
//!
//! These mirror the tree produced by the proto source parser but are
//! implemented independently so the generator carries no parser dependency.
//! Descriptors are immutable during emission; everything the emitters derive
//! from them (wire types, presence bits, enum flags) lives in
//! [`crate::codegen::classify`].

/// A complete `.proto` file: package, optional namespace override, and the
/// top-level types in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FileDescriptor {
    /// The dot-separated proto package, e.g. `"demo.core"`. May be empty.
    pub package: String,
    /// Explicit namespace override, split on `::` when present.
    pub namespace: Option<String>,
    /// Top-level enums.
    pub enums: Vec<EnumDescriptor>,
    /// Top-level messages.
    pub messages: Vec<MessageDescriptor>,
}

impl FileDescriptor {
    pub fn new(package: impl Into<String>) -> Self {
        FileDescriptor {
            package: package.into(),
            ..Default::default()
        }
    }

    /// The namespace components this file's items are nested under.
    pub fn namespace_components(&self) -> Vec<String> {
        match &self.namespace {
            Some(ns) => ns.split("::").map(str::to_owned).collect(),
            None if self.package.is_empty() => Vec::new(),
            None => self.package.split('.').map(str::to_owned).collect(),
        }
    }
}

/// An enum type: a name and its constants in declaration order.
#[derive(Debug, Clone)]
pub struct EnumDescriptor {
    pub name: String,
    pub constants: Vec<EnumConstant>,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>, constants: Vec<EnumConstant>) -> Self {
        EnumDescriptor {
            name: name.into(),
            constants,
        }
    }
}

/// A single enum constant.
#[derive(Debug, Clone)]
pub struct EnumConstant {
    pub name: String,
    pub number: i32,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        EnumConstant {
            name: name.into(),
            number,
        }
    }
}

/// A message type: nested types plus its entries in declaration order.
///
/// An entry is either a plain field, a oneof group, or a map field; keeping
/// them in one ordered list preserves the descriptor order the encoder
/// emits fields in.
#[derive(Debug, Clone, Default)]
pub struct MessageDescriptor {
    pub name: String,
    pub enums: Vec<EnumDescriptor>,
    pub messages: Vec<MessageDescriptor>,
    pub entries: Vec<MessageEntry>,
}

impl MessageDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        MessageDescriptor {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_entries(name: impl Into<String>, entries: Vec<MessageEntry>) -> Self {
        MessageDescriptor {
            name: name.into(),
            entries,
            ..Default::default()
        }
    }
}

/// One declaration inside a message body.
#[derive(Debug, Clone)]
pub enum MessageEntry {
    Field(FieldDescriptor),
    Oneof(OneofDescriptor),
    Map(MapDescriptor),
}

/// A plain (non-map, non-oneof) field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    /// Field number, `1..=2^29-1`.
    pub number: u32,
    pub ty: FieldType,
    pub cardinality: Cardinality,
    /// Whether a repeated scalar field is packed on the wire.
    pub packed: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, number: u32, ty: FieldType) -> Self {
        FieldDescriptor {
            name: name.into(),
            number,
            ty,
            cardinality: Cardinality::Required,
            packed: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.cardinality = Cardinality::Optional;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self
    }

    pub fn packed(mut self) -> Self {
        self.cardinality = Cardinality::Repeated;
        self.packed = true;
        self
    }
}

/// Field cardinality. Proto3 "singular" fields arrive as `Required`;
/// `Optional` is the explicit-presence form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Required,
    Optional,
    Repeated,
}

/// A field's proto type: one of the scalar types, or a reference to an enum
/// or message by (possibly dotted) name. Whether a `Named` reference is an
/// enum is derived during classification against the visible scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
    Named(String),
}

impl FieldType {
    /// Parse a proto type keyword, treating anything else as a type reference.
    pub fn parse(keyword: &str) -> FieldType {
        match keyword {
            "double" => FieldType::Double,
            "float" => FieldType::Float,
            "int32" => FieldType::Int32,
            "int64" => FieldType::Int64,
            "uint32" => FieldType::Uint32,
            "uint64" => FieldType::Uint64,
            "sint32" => FieldType::Sint32,
            "sint64" => FieldType::Sint64,
            "fixed32" => FieldType::Fixed32,
            "fixed64" => FieldType::Fixed64,
            "sfixed32" => FieldType::Sfixed32,
            "sfixed64" => FieldType::Sfixed64,
            "bool" => FieldType::Bool,
            "string" => FieldType::String,
            "bytes" => FieldType::Bytes,
            other => FieldType::Named(other.to_owned()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, FieldType::Named(_))
    }

    /// The proto keyword for this type, used in error messages.
    pub fn proto_name(&self) -> &str {
        match self {
            FieldType::Double => "double",
            FieldType::Float => "float",
            FieldType::Int32 => "int32",
            FieldType::Int64 => "int64",
            FieldType::Uint32 => "uint32",
            FieldType::Uint64 => "uint64",
            FieldType::Sint32 => "sint32",
            FieldType::Sint64 => "sint64",
            FieldType::Fixed32 => "fixed32",
            FieldType::Fixed64 => "fixed64",
            FieldType::Sfixed32 => "sfixed32",
            FieldType::Sfixed64 => "sfixed64",
            FieldType::Bool => "bool",
            FieldType::String => "string",
            FieldType::Bytes => "bytes",
            FieldType::Named(name) => name,
        }
    }
}

/// A oneof group. Member fields record their own numbers and types; the
/// group name is what the generated discriminator reader reports.
#[derive(Debug, Clone)]
pub struct OneofDescriptor {
    pub name: String,
    pub members: Vec<FieldDescriptor>,
}

impl OneofDescriptor {
    pub fn new(name: impl Into<String>, members: Vec<FieldDescriptor>) -> Self {
        OneofDescriptor {
            name: name.into(),
            members,
        }
    }
}

/// A map field. Keys are restricted to integral, bool, and string types;
/// values may be any scalar, enum, or message type.
#[derive(Debug, Clone)]
pub struct MapDescriptor {
    pub name: String,
    pub number: u32,
    pub key: FieldType,
    pub value: FieldType,
}

impl MapDescriptor {
    pub fn new(name: impl Into<String>, number: u32, key: FieldType, value: FieldType) -> Self {
        MapDescriptor {
            name: name.into(),
            number,
            key,
            value,
        }
    }
}
