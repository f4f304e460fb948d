//! Payload encoding: the per-type half of every codec.
//!
//! Each payload type supplies its own encode/decode behavior for both modes
//! through [`Payload`]. A [`Handler`] captures that behavior as a table of
//! function pointers so it can be stored, passed around, or replaced with an
//! explicit override without touching the codecs that use it.

use serde_json::Value;
use std::fmt;

use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::mode::{Encoded, Mode};
use crate::reader::BinaryReader;
use crate::shape::{PrimitiveShape, Shape};
use crate::varint;

/// A type that can be encoded in both modes.
pub trait Payload: Sized {
    /// Structural description of this type.
    fn shape() -> Shape;

    fn to_text(&self) -> Result<Value>;

    fn from_text(value: &Value) -> Result<Self>;

    /// Append the binary encoding to `buf`.
    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()>;

    /// Decode from the reader, consuming exactly this value's bytes.
    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self>;
}

/// Encode a payload in the given mode.
pub fn encode<T: Payload>(value: &T, mode: Mode) -> Result<Encoded> {
    match mode {
        Mode::Textual => value.to_text().map(Encoded::Textual),
        Mode::Binary => {
            let mut buf = Vec::new();
            value.write_binary(&mut buf)?;
            Ok(Encoded::from(buf))
        }
    }
}

/// Decode a payload using the default configuration.
pub fn decode<T: Payload>(encoded: &Encoded) -> Result<T> {
    decode_with(encoded, &CodecConfig::default())
}

/// Decode a payload. The mode is taken from the encoded value.
pub fn decode_with<T: Payload>(encoded: &Encoded, config: &CodecConfig) -> Result<T> {
    match encoded {
        Encoded::Textual(value) => T::from_text(value),
        Encoded::Binary(bytes) => {
            let mut reader = BinaryReader::new(bytes, config);
            let value = T::read_binary(&mut reader)?;
            reader.finish()?;
            Ok(value)
        }
    }
}

/// Encode/decode behavior for one type, detached from the type itself.
pub struct Handler<T> {
    shape: Shape,
    to_text: fn(&T) -> Result<Value>,
    from_text: fn(&Value) -> Result<T>,
    write_binary: fn(&T, &mut Vec<u8>) -> Result<()>,
    read_binary: fn(&mut BinaryReader<'_>) -> Result<T>,
}

impl<T: Payload> Handler<T> {
    /// The handler derived from `T`'s own [`Payload`] implementation.
    pub fn of() -> Self {
        Self {
            shape: T::shape(),
            to_text: T::to_text,
            from_text: T::from_text,
            write_binary: T::write_binary,
            read_binary: T::read_binary,
        }
    }
}

impl<T> Handler<T> {
    /// An explicit handler, used to override a type's default encoding.
    pub fn new(
        shape: Shape,
        to_text: fn(&T) -> Result<Value>,
        from_text: fn(&Value) -> Result<T>,
        write_binary: fn(&T, &mut Vec<u8>) -> Result<()>,
        read_binary: fn(&mut BinaryReader<'_>) -> Result<T>,
    ) -> Self {
        Self {
            shape,
            to_text,
            from_text,
            write_binary,
            read_binary,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn to_text(&self, value: &T) -> Result<Value> {
        (self.to_text)(value)
    }

    pub fn from_text(&self, value: &Value) -> Result<T> {
        (self.from_text)(value)
    }

    pub fn write_binary(&self, value: &T, buf: &mut Vec<u8>) -> Result<()> {
        (self.write_binary)(value, buf)
    }

    pub fn read_binary(&self, reader: &mut BinaryReader<'_>) -> Result<T> {
        (self.read_binary)(reader)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape.clone(),
            to_text: self.to_text,
            from_text: self.from_text,
            write_binary: self.write_binary,
            read_binary: self.read_binary,
        }
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("shape", &self.shape).finish()
    }
}

// Fixed-width little-endian unsigned integers.
macro_rules! impl_fixed_uint {
    ($type:ty, $shape:ident, $read:ident, $put:ident) => {
        impl Payload for $type {
            fn shape() -> Shape {
                Shape::Primitive(PrimitiveShape::$shape)
            }

            fn to_text(&self) -> Result<Value> {
                Ok(Value::from(*self))
            }

            fn from_text(value: &Value) -> Result<Self> {
                let n = value
                    .as_u64()
                    .ok_or_else(|| CodecError::invalid_text("unsigned integer", value))?;
                <$type>::try_from(n).map_err(|_| CodecError::IntegerOverflow {
                    value: n as i128,
                    target: stringify!($type),
                })
            }

            fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
                bytes::BufMut::$put(buf, *self);
                Ok(())
            }

            fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
                reader.$read()
            }
        }
    };
}

impl_fixed_uint!(u8, UInt8, read_u8, put_u8);
impl_fixed_uint!(u16, UInt16, read_u16_le, put_u16_le);
impl_fixed_uint!(u32, UInt32, read_u32_le, put_u32_le);

impl Payload for bool {
    fn shape() -> Shape {
        Shape::Primitive(PrimitiveShape::Bool)
    }

    fn to_text(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }

    fn from_text(value: &Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| CodecError::invalid_text("boolean", value))
    }

    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(u8::from(*self));
        Ok(())
    }

    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
        match reader.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(CodecError::InvalidBool(b)),
        }
    }
}

impl Payload for String {
    fn shape() -> Shape {
        Shape::Primitive(PrimitiveShape::String)
    }

    fn to_text(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }

    fn from_text(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| CodecError::invalid_text("string", value))
    }

    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        varint::write(self.len() as u64, buf);
        buf.extend_from_slice(self.as_bytes());
        Ok(())
    }

    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let len = reader.read_length()?;
        let bytes = reader.read_bytes(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| CodecError::InvalidUtf8)
    }
}

/// The empty record: no bytes on the wire, `{}` in text.
impl Payload for () {
    fn shape() -> Shape {
        Shape::Primitive(PrimitiveShape::Unit)
    }

    fn to_text(&self) -> Result<Value> {
        Ok(Value::Object(serde_json::Map::new()))
    }

    fn from_text(value: &Value) -> Result<Self> {
        match value {
            Value::Object(_) | Value::Null => Ok(()),
            other => Err(CodecError::invalid_text("object", other)),
        }
    }

    fn write_binary(&self, _buf: &mut Vec<u8>) -> Result<()> {
        Ok(())
    }

    fn read_binary(_reader: &mut BinaryReader<'_>) -> Result<Self> {
        Ok(())
    }
}

impl<T: Payload> Payload for Vec<T> {
    fn shape() -> Shape {
        Shape::list(T::shape())
    }

    fn to_text(&self) -> Result<Value> {
        self.iter()
            .map(T::to_text)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    fn from_text(value: &Value) -> Result<Self> {
        value
            .as_array()
            .ok_or_else(|| CodecError::invalid_text("array", value))?
            .iter()
            .map(T::from_text)
            .collect()
    }

    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        varint::write(self.len() as u64, buf);
        for item in self {
            item.write_binary(buf)?;
        }
        Ok(())
    }

    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
        let count = reader.read_length()?;
        // Capacity is capped by the remaining input, not the declared count.
        let mut items = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            items.push(T::read_binary(reader)?);
        }
        Ok(items)
    }
}

impl<T: Payload> Payload for Option<T> {
    fn shape() -> Shape {
        Shape::optional(T::shape())
    }

    fn to_text(&self) -> Result<Value> {
        match self {
            Some(value) => value.to_text(),
            None => Ok(Value::Null),
        }
    }

    fn from_text(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_text(other).map(Some),
        }
    }

    fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
        match self {
            Some(value) => {
                buf.push(1);
                value.write_binary(buf)
            }
            None => {
                buf.push(0);
                Ok(())
            }
        }
    }

    fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
        if bool::read_binary(reader)? {
            T::read_binary(reader).map(Some)
        } else {
            Ok(None)
        }
    }
}
