//! Field classification: wire types, presence bits, enum flags.
//!
//! Canonicalizes a message descriptor into the form the emitters consume.
//! Descriptors themselves stay untouched; everything derived lives in the
//! plan structs here.

use log::trace;

use crate::context::{valid_reference, GenerationContext, Resolved};
use crate::descriptor::{
    Cardinality, FieldDescriptor, FieldType, MapDescriptor, MessageDescriptor, MessageEntry,
};
use crate::Error;

/// The 3-bit wire type suffix of a field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint,
    I64,
    Len,
    I32,
}

impl WireType {
    pub const fn bits(self) -> u64 {
        match self {
            WireType::Varint => 0,
            WireType::I64 => 1,
            WireType::Len => 2,
            WireType::I32 => 5,
        }
    }
}

/// A classified field: a plain field, a oneof member, or a synthesized map
/// key/value field.
#[derive(Debug, Clone)]
pub struct FieldPlan {
    pub name: String,
    pub number: u32,
    pub ty: FieldType,
    pub cardinality: Cardinality,
    /// Effective packedness: the descriptor flag, restricted to scalar
    /// element types.
    pub packed: bool,
    /// Whether the type name resolved to an enum visible at this scope.
    pub is_enum: bool,
    /// Whether the stored value must be boxed to break a reference cycle.
    pub boxed: bool,
    /// Resolution of a `Named` type; `None` for scalar types.
    pub resolved: Option<Resolved>,
    /// Wire type of a single element of this field.
    pub element_wire: WireType,
    /// Wire type carried in this field's tag.
    pub record_wire: WireType,
    /// Presence bit index for optional fields.
    pub bit: Option<u32>,
}

impl FieldPlan {
    /// The tag value this field is written with: `(number << 3) | wire`.
    pub fn tag(&self) -> u64 {
        (u64::from(self.number) << 3) | self.record_wire.bits()
    }

    /// The tag an unpacked element of a packed-capable field arrives with.
    pub fn element_tag(&self) -> u64 {
        (u64::from(self.number) << 3) | self.element_wire.bits()
    }

    pub fn is_message(&self) -> bool {
        matches!(self.ty, FieldType::Named(_)) && !self.is_enum
    }

    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }

    pub fn is_optional(&self) -> bool {
        self.cardinality == Cardinality::Optional
    }
}

/// A classified oneof group.
#[derive(Debug, Clone)]
pub struct OneofPlan {
    pub name: String,
    pub members: Vec<FieldPlan>,
}

/// A classified map field, with its synthesized key and value fields
/// (numbers 1 and 2 inside each entry record).
#[derive(Debug, Clone)]
pub struct MapPlan {
    pub name: String,
    pub number: u32,
    pub key: FieldPlan,
    pub value: FieldPlan,
}

impl MapPlan {
    pub fn tag(&self) -> u64 {
        (u64::from(self.number) << 3) | WireType::Len.bits()
    }
}

/// One classified message entry, in descriptor order.
#[derive(Debug, Clone)]
pub enum EntryPlan {
    Field(FieldPlan),
    Oneof(OneofPlan),
    Map(MapPlan),
}

/// A fully classified message.
#[derive(Debug, Clone)]
pub struct MessagePlan {
    pub entries: Vec<EntryPlan>,
    /// Number of optional fields, i.e. presence bits in use.
    pub optional_count: usize,
}

impl MessagePlan {
    pub fn has_bitmask(&self) -> bool {
        self.optional_count > 0
    }
}

/// Wire type of one element of the given type; `Named` types need the
/// derived enum flag.
fn element_wire(ty: &FieldType, is_enum: bool) -> WireType {
    match ty {
        FieldType::Bool
        | FieldType::Int32
        | FieldType::Int64
        | FieldType::Uint32
        | FieldType::Uint64
        | FieldType::Sint32
        | FieldType::Sint64 => WireType::Varint,
        FieldType::Fixed64 | FieldType::Sfixed64 | FieldType::Double => WireType::I64,
        FieldType::Fixed32 | FieldType::Sfixed32 | FieldType::Float => WireType::I32,
        FieldType::String | FieldType::Bytes => WireType::Len,
        FieldType::Named(_) => {
            if is_enum {
                WireType::Varint
            } else {
                WireType::Len
            }
        }
    }
}

/// Classify every entry of a message, assigning presence bits in descriptor
/// order. `scope` is the enclosing message chain including this message.
pub fn plan_message(
    ctx: &GenerationContext,
    scope: &[String],
    message: &MessageDescriptor,
) -> Result<MessagePlan, Error> {
    let message_path = scope.join(".");
    let mut entries = Vec::with_capacity(message.entries.len());
    let mut next_bit: u32 = 0;

    for entry in &message.entries {
        match entry {
            MessageEntry::Field(field) => {
                let bit = if field.cardinality == Cardinality::Optional {
                    let bit = next_bit;
                    next_bit += 1;
                    Some(bit)
                } else {
                    None
                };
                let plan = plan_field(ctx, scope, &message_path, field, bit)?;
                trace!(
                    "  field {}.{} -> tag {:#x}",
                    message_path,
                    plan.name,
                    plan.tag()
                );
                entries.push(EntryPlan::Field(plan));
            }
            MessageEntry::Oneof(oneof) => {
                let members = oneof
                    .members
                    .iter()
                    .map(|member| plan_field(ctx, scope, &message_path, member, None))
                    .collect::<Result<Vec<_>, _>>()?;
                entries.push(EntryPlan::Oneof(OneofPlan {
                    name: oneof.name.clone(),
                    members,
                }));
            }
            MessageEntry::Map(map) => {
                entries.push(EntryPlan::Map(plan_map(ctx, scope, map)?));
            }
        }
    }

    let optional_count = next_bit as usize;
    if optional_count > 62 {
        return Err(Error::TooManyOptionalFields {
            message: message.name.clone(),
            count: optional_count,
        });
    }

    Ok(MessagePlan {
        entries,
        optional_count,
    })
}

fn plan_field(
    ctx: &GenerationContext,
    scope: &[String],
    message_path: &str,
    field: &FieldDescriptor,
    bit: Option<u32>,
) -> Result<FieldPlan, Error> {
    if field.name.is_empty() {
        return Err(Error::MissingName);
    }

    let (resolved, is_enum) = match &field.ty {
        FieldType::Named(reference) => {
            if !valid_reference(reference) {
                return Err(Error::UnknownType {
                    field: field.name.clone(),
                    type_name: reference.clone(),
                });
            }
            let resolved = ctx.resolve(scope, reference);
            let is_enum = matches!(resolved, Resolved::Enum { .. });
            (Some(resolved), is_enum)
        }
        _ => (None, false),
    };

    let element = element_wire(&field.ty, is_enum);
    let repeated = field.cardinality == Cardinality::Repeated;
    // Only scalar and enum elements can be packed.
    let packed = field.packed && repeated && element != WireType::Len;
    let record_wire = if packed {
        WireType::Len
    } else {
        element
    };

    let boxed = !repeated
        && matches!(resolved, Some(Resolved::Message { .. }))
        && ctx.is_recursive_field(message_path, &field.name);

    Ok(FieldPlan {
        name: field.name.clone(),
        number: field.number,
        ty: field.ty.clone(),
        cardinality: field.cardinality,
        packed,
        is_enum,
        boxed,
        resolved,
        element_wire: element,
        record_wire,
        bit,
    })
}

fn plan_map(
    ctx: &GenerationContext,
    scope: &[String],
    map: &MapDescriptor,
) -> Result<MapPlan, Error> {
    match map.key {
        FieldType::Int32
        | FieldType::Int64
        | FieldType::Uint32
        | FieldType::Uint64
        | FieldType::Sint32
        | FieldType::Sint64
        | FieldType::Fixed32
        | FieldType::Fixed64
        | FieldType::Sfixed32
        | FieldType::Sfixed64
        | FieldType::Bool
        | FieldType::String => {}
        _ => {
            return Err(Error::InvalidMapKey {
                field: map.name.clone(),
                key_type: map.key.proto_name().to_owned(),
            });
        }
    }

    let key = plan_field(
        ctx,
        scope,
        "",
        &FieldDescriptor::new("key", 1, map.key.clone()),
        None,
    )?;
    let value = plan_field(
        ctx,
        scope,
        "",
        &FieldDescriptor::new("value", 2, map.value.clone()),
        None,
    )?;

    Ok(MapPlan {
        name: map.name.clone(),
        number: map.number,
        key,
        value,
    })
}
