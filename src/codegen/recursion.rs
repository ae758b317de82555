//! Recursive type detection for automatic boxing.
//!
//! Messages can reference themselves directly (`Tree.child: Tree`) or
//! through a cycle of other messages. The generated structs store singular
//! submessages inline inside `Option`, and oneof members inline inside the
//! group enum, so such cycles would have infinite size; the fields closing a
//! cycle are marked here and emitted as `Box<T>`. Repeated and map fields
//! already go through `Vec`/`BTreeMap` indirection and never need boxing.

use std::collections::{HashMap, HashSet};

use crate::context::GenerationContext;
use crate::descriptor::{
    Cardinality, FieldType, FileDescriptor, MessageDescriptor, MessageEntry,
};

/// A field that needs to be boxed to break a reference cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecursiveField {
    /// Dotted path of the containing message from the file root.
    pub message_path: String,
    /// Name of the field (or oneof member) that needs boxing.
    pub field_name: String,
}

/// Analyze a file for reference cycles and return the fields needing a box.
///
/// A field's edge closes a cycle exactly when the referenced message can
/// reach the referencing one, so every edge is tested against the reachable
/// set of its target.
pub fn find_recursive_fields(
    ctx: &GenerationContext,
    file: &FileDescriptor,
) -> HashSet<RecursiveField> {
    let mut graph: HashMap<String, Vec<(String, String)>> = HashMap::new();
    for message in &file.messages {
        collect_message_edges(ctx, &mut graph, &[], message);
    }

    let mut result = HashSet::new();
    for (source, edges) in &graph {
        for (field_name, target) in edges {
            if reachable_from(&graph, target).contains(source.as_str()) {
                result.insert(RecursiveField {
                    message_path: source.clone(),
                    field_name: field_name.clone(),
                });
            }
        }
    }
    result
}

fn collect_message_edges(
    ctx: &GenerationContext,
    graph: &mut HashMap<String, Vec<(String, String)>>,
    parents: &[String],
    message: &MessageDescriptor,
) {
    let mut scope = parents.to_vec();
    scope.push(message.name.clone());
    let message_path = scope.join(".");

    let mut edges = Vec::new();
    let mut add_edge = |field_name: &str, reference: &str| {
        if let Some(target) = ctx.resolve_message_path(&scope, reference) {
            edges.push((field_name.to_owned(), target));
        }
    };

    for entry in &message.entries {
        match entry {
            MessageEntry::Field(field) => {
                // Only singular stored-inline submessages can create cycles.
                if field.cardinality == Cardinality::Repeated {
                    continue;
                }
                if let FieldType::Named(reference) = &field.ty {
                    add_edge(&field.name, reference);
                }
            }
            MessageEntry::Oneof(oneof) => {
                for member in &oneof.members {
                    if let FieldType::Named(reference) = &member.ty {
                        add_edge(&member.name, reference);
                    }
                }
            }
            MessageEntry::Map(_) => {}
        }
    }

    graph.insert(message_path, edges);

    for nested in &message.messages {
        collect_message_edges(ctx, graph, &scope, nested);
    }
}

/// Every message reachable from `start` by following one or more edges.
/// A worklist sweep; `start` itself appears in the result only when some
/// path leads back to it.
fn reachable_from<'a>(
    graph: &'a HashMap<String, Vec<(String, String)>>,
    start: &str,
) -> HashSet<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pending: Vec<&str> = graph
        .get(start)
        .map(|edges| edges.iter().map(|(_, target)| target.as_str()).collect())
        .unwrap_or_default();

    while let Some(node) = pending.pop() {
        if !seen.insert(node) {
            continue;
        }
        if let Some(edges) = graph.get(node) {
            pending.extend(edges.iter().map(|(_, target)| target.as_str()));
        }
    }
    seen
}
