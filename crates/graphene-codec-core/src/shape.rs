//! Structural descriptions of payload types.
//!
//! A [`Shape`] describes what a payload looks like without naming its Rust
//! type, so codecs can be compared, cached and printed generically. The
//! [`StaticVariantDescriptor`] is the composite shape of a tagged union:
//! a two-element list of `(discriminant, payload)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{CodecError, Result};

/// Leaf shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveShape {
    /// Signed 32-bit, varint in binary mode.
    VarInt32,
    /// Signed 64-bit, varint in binary mode.
    VarInt64,
    /// Unsigned 64-bit, varint in binary mode.
    VarUInt64,
    UInt8,
    UInt16,
    UInt32,
    /// Seconds since the Unix epoch, fixed 32-bit in binary mode.
    TimePointSec,
    Bool,
    String,
    Unit,
}

impl PrimitiveShape {
    pub fn serial_name(self) -> &'static str {
        match self {
            PrimitiveShape::VarInt32 => "VarInt",
            PrimitiveShape::VarInt64 => "VarLong",
            PrimitiveShape::VarUInt64 => "ULongVarInt",
            PrimitiveShape::UInt8 => "UInt8",
            PrimitiveShape::UInt16 => "UInt16",
            PrimitiveShape::UInt32 => "UInt32",
            PrimitiveShape::TimePointSec => "TimePointSec",
            PrimitiveShape::Bool => "Bool",
            PrimitiveShape::String => "String",
            PrimitiveShape::Unit => "Unit",
        }
    }
}

/// Coarse classification of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Primitive,
    List,
    Optional,
    Record,
}

/// A named field of a record shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub shape: Shape,
}

/// The structural description of a payload type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Primitive(PrimitiveShape),
    List(Box<Shape>),
    Optional(Box<Shape>),
    Record { name: String, fields: Vec<Field> },
    StaticVariant(Box<StaticVariantDescriptor>),
}

impl Shape {
    /// Build a record shape from `(field_name, shape)` pairs.
    pub fn record<'a>(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (&'a str, Shape)>,
    ) -> Self {
        Shape::Record {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(name, shape)| Field {
                    name: name.to_string(),
                    shape,
                })
                .collect(),
        }
    }

    pub fn list(item: Shape) -> Self {
        Shape::List(Box::new(item))
    }

    pub fn optional(item: Shape) -> Self {
        Shape::Optional(Box::new(item))
    }

    pub fn kind(&self) -> StructureKind {
        match self {
            Shape::Primitive(_) => StructureKind::Primitive,
            Shape::List(_) | Shape::StaticVariant(_) => StructureKind::List,
            Shape::Optional(_) => StructureKind::Optional,
            Shape::Record { .. } => StructureKind::Record,
        }
    }

    pub fn serial_name(&self) -> &str {
        match self {
            Shape::Primitive(p) => p.serial_name(),
            Shape::List(_) => "List",
            Shape::Optional(_) => "Optional",
            Shape::Record { name, .. } => name,
            Shape::StaticVariant(_) => StaticVariantDescriptor::SERIAL_NAME,
        }
    }
}

impl From<PrimitiveShape> for Shape {
    fn from(p: PrimitiveShape) -> Self {
        Shape::Primitive(p)
    }
}

impl From<StaticVariantDescriptor> for Shape {
    fn from(d: StaticVariantDescriptor) -> Self {
        Shape::StaticVariant(Box::new(d))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Primitive(p) => f.write_str(p.serial_name()),
            Shape::List(item) => write!(f, "List<{item}>"),
            Shape::Optional(item) => write!(f, "Optional<{item}>"),
            Shape::Record { name, .. } => f.write_str(name),
            Shape::StaticVariant(d) => write!(f, "{d}"),
        }
    }
}

/// Composite descriptor of a static variant: `(discriminant, payload)`.
///
/// Element 0 is always a 64-bit varint. Element 1 is the declared payload
/// shape. Codecs build this from their first alternative, so it is a
/// placeholder for unions whose alternatives differ in shape; encode and
/// decode never consult it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticVariantDescriptor {
    payload: Shape,
}

impl StaticVariantDescriptor {
    pub const SERIAL_NAME: &'static str = "StaticVar";
    pub const ELEMENT_COUNT: usize = 2;
    pub const TAG_INDEX: usize = 0;
    pub const PAYLOAD_INDEX: usize = 1;

    pub fn new(payload: Shape) -> Self {
        Self { payload }
    }

    pub fn serial_name(&self) -> &'static str {
        Self::SERIAL_NAME
    }

    pub fn kind(&self) -> StructureKind {
        StructureKind::List
    }

    pub fn element_count(&self) -> usize {
        Self::ELEMENT_COUNT
    }

    /// Elements are named by their position.
    pub fn element_name(&self, index: usize) -> String {
        index.to_string()
    }

    /// Inverse of [`element_name`](Self::element_name).
    pub fn element_index(&self, name: &str) -> Result<usize> {
        match name.parse::<usize>() {
            Ok(index) if index < Self::ELEMENT_COUNT => Ok(index),
            _ => Err(CodecError::InvalidElementName(name.to_string())),
        }
    }

    pub fn element_shape(&self, index: usize) -> Result<Shape> {
        match index {
            Self::TAG_INDEX => Ok(Shape::Primitive(PrimitiveShape::VarInt64)),
            Self::PAYLOAD_INDEX => Ok(self.payload.clone()),
            _ => Err(CodecError::ElementIndex(index)),
        }
    }

    pub fn is_element_optional(&self, index: usize) -> Result<bool> {
        if index >= Self::ELEMENT_COUNT {
            return Err(CodecError::ElementIndex(index));
        }
        Ok(false)
    }

    /// The declared payload shape.
    pub fn payload_shape(&self) -> &Shape {
        &self.payload
    }
}

impl Hash for StaticVariantDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::SERIAL_NAME.hash(state);
        self.payload.hash(state);
    }
}

impl fmt::Display for StaticVariantDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", Self::SERIAL_NAME, self.payload)
    }
}
