//! Generation context: per-file type registry and name resolution.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};

use crate::codegen::recursion::{find_recursive_fields, RecursiveField};
use crate::config::Config;
use crate::descriptor::{EnumDescriptor, FileDescriptor, MessageDescriptor};

/// Well-known types rewritten to the runtime library's wrappers.
const WELL_KNOWN_TYPES: &[(&str, &str)] = &[
    ("google.protobuf.BoolValue", "BoolValue"),
    ("google.protobuf.Int32Value", "Int32Value"),
    ("google.protobuf.Int64Value", "Int64Value"),
    ("google.protobuf.UInt32Value", "UInt32Value"),
    ("google.protobuf.UInt64Value", "UInt64Value"),
    ("google.protobuf.FloatValue", "FloatValue"),
    ("google.protobuf.DoubleValue", "DoubleValue"),
    ("google.protobuf.StringValue", "StringValue"),
    ("google.protobuf.BytesValue", "BytesValue"),
    ("google.protobuf.Timestamp", "Timestamp"),
];

/// What kind of type a registry entry names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Message,
    Enum,
}

/// A registered type: its kind and its declared-name path from the file
/// root, e.g. `["Outer", "Inner"]`.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub kind: TypeKind,
    pub segments: Vec<String>,
}

/// The outcome of resolving a field's type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// A message within this file (or an unresolved lazy reference treated
    /// as one; the type need only exist at the call site's namespace).
    Message { segments: Vec<String> },
    /// An enum within this file.
    Enum { segments: Vec<String> },
    /// One of the fixed well-known types, substituted by the runtime crate.
    WellKnown { name: &'static str },
    /// A type the caller mapped via [`Config::extern_path`].
    Extern { path: String },
}

/// Context for generating one file.
pub struct GenerationContext<'a> {
    pub config: &'a Config,
    /// Dotted path from the file root -> entry, e.g. `"Outer.Color"`.
    registry: HashMap<String, TypeEntry>,
    /// Fields that must be boxed to break reference cycles.
    recursive_fields: HashSet<RecursiveField>,
    /// Well-known wrappers this file ended up referencing.
    wkt_deps: RefCell<BTreeSet<&'static str>>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(config: &'a Config, file: &FileDescriptor) -> Self {
        let mut registry = HashMap::new();
        for message in &file.messages {
            register_message(&mut registry, &[], message);
        }
        for enum_type in &file.enums {
            register_enum(&mut registry, &[], enum_type);
        }

        let mut ctx = Self {
            config,
            registry,
            recursive_fields: HashSet::new(),
            wkt_deps: RefCell::new(BTreeSet::new()),
        };
        ctx.recursive_fields = find_recursive_fields(&ctx, file);
        ctx
    }

    /// Resolve a type reference as seen from inside `scope` (the chain of
    /// enclosing message names). Never fails: references that match nothing
    /// are kept as lazy message paths.
    pub fn resolve(&self, scope: &[String], reference: &str) -> Resolved {
        if let Some(path) = self.config.extern_paths.get(reference) {
            return Resolved::Extern { path: path.clone() };
        }
        if let Some((_, name)) = WELL_KNOWN_TYPES
            .iter()
            .find(|(proto, _)| *proto == reference)
        {
            self.wkt_deps.borrow_mut().insert(name);
            return Resolved::WellKnown { name };
        }

        // Innermost scope outward, then the bare reference at file level.
        for depth in (0..=scope.len()).rev() {
            let mut candidate = scope[..depth].join(".");
            if !candidate.is_empty() {
                candidate.push('.');
            }
            candidate.push_str(reference);
            if let Some(entry) = self.registry.get(&candidate) {
                return match entry.kind {
                    TypeKind::Message => Resolved::Message {
                        segments: entry.segments.clone(),
                    },
                    TypeKind::Enum => Resolved::Enum {
                        segments: entry.segments.clone(),
                    },
                };
            }
        }

        Resolved::Message {
            segments: reference.split('.').map(str::to_owned).collect(),
        }
    }

    /// Whether a reference names an enum visible from `scope`.
    pub fn is_enum(&self, scope: &[String], reference: &str) -> bool {
        matches!(self.resolve(scope, reference), Resolved::Enum { .. })
    }

    /// Whether a message field was marked as part of a reference cycle.
    pub fn is_recursive_field(&self, message_path: &str, field_name: &str) -> bool {
        self.recursive_fields.contains(&RecursiveField {
            message_path: message_path.to_owned(),
            field_name: field_name.to_owned(),
        })
    }

    /// The dotted message path a scoped reference resolves to, if it names a
    /// message in this file. Used by cycle detection.
    pub fn resolve_message_path(&self, scope: &[String], reference: &str) -> Option<String> {
        for depth in (0..=scope.len()).rev() {
            let mut candidate = scope[..depth].join(".");
            if !candidate.is_empty() {
                candidate.push('.');
            }
            candidate.push_str(reference);
            if let Some(entry) = self.registry.get(&candidate) {
                return match entry.kind {
                    TypeKind::Message => Some(candidate),
                    TypeKind::Enum => None,
                };
            }
        }
        None
    }

    /// Well-known wrappers referenced so far, in deterministic order.
    pub fn wkt_dependencies(&self) -> Vec<&'static str> {
        self.wkt_deps.borrow().iter().copied().collect()
    }

    /// Tokens naming the type a field stores, as seen from module depth
    /// `depth` below the file root.
    pub fn type_tokens(&self, resolved: &Resolved, depth: usize) -> TokenStream {
        match resolved {
            Resolved::Message { segments } => {
                let supers = supers(depth);
                let modules: Vec<Ident> = segments[..segments.len() - 1]
                    .iter()
                    .map(|s| module_ident(s))
                    .collect();
                let name = type_ident(&segments[segments.len() - 1]);
                quote!(#supers #(#modules::)* #name)
            }
            Resolved::Enum { .. } => quote!(i32),
            Resolved::WellKnown { name } => {
                let runtime = path_tokens(&self.config.runtime_path);
                let name = format_ident!("{}", name);
                quote!(#runtime::#name)
            }
            Resolved::Extern { path } => path_tokens(path),
        }
    }

    /// Tokens naming an enum's emitted module, as seen from `depth`.
    pub fn enum_module_tokens(&self, segments: &[String], depth: usize) -> TokenStream {
        let supers = supers(depth);
        let modules: Vec<Ident> = segments[..segments.len() - 1]
            .iter()
            .map(|s| module_ident(s))
            .collect();
        let name = module_ident(&segments[segments.len() - 1]);
        quote!(#supers #(#modules::)* #name)
    }

    /// Tokens for the runtime crate path.
    pub fn runtime_tokens(&self) -> TokenStream {
        path_tokens(&self.config.runtime_path)
    }
}

fn register_message(
    registry: &mut HashMap<String, TypeEntry>,
    parents: &[String],
    message: &MessageDescriptor,
) {
    let mut segments = parents.to_vec();
    segments.push(message.name.clone());
    registry.insert(
        segments.join("."),
        TypeEntry {
            kind: TypeKind::Message,
            segments: segments.clone(),
        },
    );

    for nested in &message.messages {
        register_message(registry, &segments, nested);
    }
    for enum_type in &message.enums {
        register_enum(registry, &segments, enum_type);
    }
}

fn register_enum(
    registry: &mut HashMap<String, TypeEntry>,
    parents: &[String],
    enum_type: &EnumDescriptor,
) {
    let mut segments = parents.to_vec();
    segments.push(enum_type.name.clone());
    registry.insert(
        segments.join("."),
        TypeEntry {
            kind: TypeKind::Enum,
            segments,
        },
    );
}

/// `super::` repeated `depth` times; empty at the file root.
pub fn supers(depth: usize) -> TokenStream {
    let mut tokens = TokenStream::new();
    for _ in 0..depth {
        tokens.extend(quote!(super::));
    }
    tokens
}

/// Parse a `::`-separated Rust path into tokens.
fn path_tokens(path: &str) -> TokenStream {
    let segments: Vec<Ident> = path
        .split("::")
        .filter(|s| !s.is_empty())
        .map(|s| format_ident!("{}", s))
        .collect();
    quote!(#(#segments)::*)
}

/// A module identifier for a proto type or package component.
pub fn module_ident(name: &str) -> Ident {
    let snake = to_snake_case(name);
    if is_rust_keyword(&snake) {
        Ident::new_raw(&snake, Span::call_site())
    } else {
        format_ident!("{}", snake)
    }
}

/// A field or method identifier from a proto field name.
pub fn field_ident(name: &str) -> Ident {
    let snake = to_snake_case(name);
    if is_rust_keyword(&snake) {
        Ident::new_raw(&snake, Span::call_site())
    } else {
        format_ident!("{}", snake)
    }
}

/// A type identifier from a declared proto type name.
pub fn type_ident(name: &str) -> Ident {
    if is_rust_keyword(name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        format_ident!("{}", name)
    }
}

/// A variant identifier from a oneof member or enum constant name.
pub fn variant_ident(name: &str) -> Ident {
    format_ident!("{}", to_pascal_case(name))
}

/// Whether a type reference is well-formed: dotted non-empty identifier
/// segments.
pub fn valid_reference(reference: &str) -> bool {
    !reference.is_empty()
        && reference.split('.').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
                }
                _ => false,
            }
        })
}

/// Convert a proto identifier to snake_case.
///
/// An underscore goes in wherever a word starts: before an uppercase letter
/// following a lowercase letter or digit, and before the last capital of an
/// acronym run when a lowercase letter follows ("HTTPServer" ->
/// "http_server", "myField" -> "my_field").
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut rest = s.chars().peekable();
    let mut previous: Option<char> = None;

    while let Some(c) = rest.next() {
        if c.is_ascii_uppercase() {
            let word_start = match previous {
                None => false,
                Some(p) if p.is_ascii_uppercase() => {
                    rest.peek().is_some_and(|n| n.is_ascii_lowercase())
                }
                Some(p) => p.is_ascii_lowercase() || p.is_ascii_digit(),
            };
            if word_start {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
        previous = Some(c);
    }
    out
}

/// Convert snake_case or SCREAMING_SNAKE_CASE to PascalCase.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.map(|c| c.to_ascii_lowercase()))
                    .collect(),
            }
        })
        .collect()
}

/// Strict and reserved keywords that need `r#` escaping, in ASCII order so
/// membership is a binary search.
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_rust_keyword(s: &str) -> bool {
    RUST_KEYWORDS.binary_search(&s).is_ok()
}
