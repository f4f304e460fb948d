//! Primitive integer codec.
//!
//! Textual mode writes integers as literal JSON numbers. Binary mode writes
//! them as varints of their 64-bit pattern: `i32` is sign-extended first,
//! `u64` is used as-is, so `-1i32`, `-1i64` and `u64::MAX` share an encoding.

use serde_json::Value;

use crate::error::{CodecError, Result};
use crate::payload::Payload;
use crate::reader::BinaryReader;
use crate::shape::{PrimitiveShape, Shape};
use crate::varint;

/// An integer type carried as a varint in binary mode.
pub trait VarInt: Copy + Sized {
    const SHAPE: PrimitiveShape;

    /// The 64-bit pattern written to the wire.
    fn to_bits(self) -> u64;

    /// Recover the value from a decoded 64-bit pattern.
    fn from_bits(bits: u64) -> Result<Self>;

    fn to_json(self) -> Value;

    fn from_json(value: &Value) -> Result<Self>;
}

impl VarInt for i64 {
    const SHAPE: PrimitiveShape = PrimitiveShape::VarInt64;

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn from_bits(bits: u64) -> Result<Self> {
        Ok(bits as i64)
    }

    fn to_json(self) -> Value {
        Value::from(self)
    }

    fn from_json(value: &Value) -> Result<Self> {
        value
            .as_i64()
            .ok_or_else(|| CodecError::invalid_text("64-bit integer", value))
    }
}

impl VarInt for i32 {
    const SHAPE: PrimitiveShape = PrimitiveShape::VarInt32;

    fn to_bits(self) -> u64 {
        i64::from(self) as u64
    }

    fn from_bits(bits: u64) -> Result<Self> {
        narrow(bits as i64)
    }

    fn to_json(self) -> Value {
        Value::from(self)
    }

    fn from_json(value: &Value) -> Result<Self> {
        let wide = value
            .as_i64()
            .ok_or_else(|| CodecError::invalid_text("32-bit integer", value))?;
        narrow(wide)
    }
}

impl VarInt for u64 {
    const SHAPE: PrimitiveShape = PrimitiveShape::VarUInt64;

    fn to_bits(self) -> u64 {
        self
    }

    fn from_bits(bits: u64) -> Result<Self> {
        Ok(bits)
    }

    fn to_json(self) -> Value {
        Value::from(self)
    }

    fn from_json(value: &Value) -> Result<Self> {
        value
            .as_u64()
            .ok_or_else(|| CodecError::invalid_text("unsigned 64-bit integer", value))
    }
}

fn narrow(wide: i64) -> Result<i32> {
    i32::try_from(wide).map_err(|_| CodecError::IntegerOverflow {
        value: i128::from(wide),
        target: "i32",
    })
}

macro_rules! impl_varint_payload {
    ($type:ty) => {
        impl Payload for $type {
            fn shape() -> Shape {
                Shape::Primitive(<$type as VarInt>::SHAPE)
            }

            fn to_text(&self) -> Result<Value> {
                Ok(self.to_json())
            }

            fn from_text(value: &Value) -> Result<Self> {
                <$type>::from_json(value)
            }

            fn write_binary(&self, buf: &mut Vec<u8>) -> Result<()> {
                varint::write(self.to_bits(), buf);
                Ok(())
            }

            fn read_binary(reader: &mut BinaryReader<'_>) -> Result<Self> {
                <$type>::from_bits(reader.read_varint()?)
            }
        }
    };
}

impl_varint_payload!(i32);
impl_varint_payload!(i64);
impl_varint_payload!(u64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::{Encoded, Mode};
    use crate::payload::{decode, encode};
    use proptest::prelude::*;
    use serde_json::json;

    fn binary<T: Payload>(value: T) -> Vec<u8> {
        encode(&value, Mode::Binary)
            .unwrap()
            .as_binary()
            .unwrap()
            .to_vec()
    }

    #[test]
    fn test_binary_is_varint() {
        assert_eq!(binary(0i64), vec![0x00]);
        assert_eq!(binary(127i64), vec![0x7f]);
        assert_eq!(binary(128i64), vec![0x80, 0x01]);
        assert_eq!(binary(5i32), vec![0x05]);
        assert_eq!(binary(300u64), vec![0xac, 0x02]);
    }

    #[test]
    fn test_negative_values_are_not_zigzagged() {
        let minus_one = binary(-1i64);
        assert_eq!(minus_one.len(), 10);
        assert_eq!(binary(-1i32), minus_one);
        assert_eq!(binary(u64::MAX), minus_one);
    }

    #[test]
    fn test_textual_is_literal() {
        assert_eq!(encode(&5i32, Mode::Textual).unwrap(), Encoded::from(json!(5)));
        assert_eq!(encode(&-7i64, Mode::Textual).unwrap(), Encoded::from(json!(-7)));
        assert_eq!(
            encode(&u64::MAX, Mode::Textual).unwrap(),
            Encoded::from(json!(u64::MAX))
        );
        assert_eq!(decode::<i64>(&Encoded::from(json!(42))).unwrap(), 42);
    }

    #[test]
    fn test_textual_rejects_non_numbers() {
        assert!(matches!(
            decode::<i64>(&Encoded::from(json!("42"))),
            Err(CodecError::InvalidText { .. })
        ));
        assert!(matches!(
            decode::<u64>(&Encoded::from(json!(-1))),
            Err(CodecError::InvalidText { .. })
        ));
    }

    #[test]
    fn test_i32_overflow() {
        let too_big = binary(i64::from(i32::MAX) + 1);
        assert_eq!(
            decode::<i32>(&Encoded::from(too_big)),
            Err(CodecError::IntegerOverflow {
                value: i128::from(i32::MAX) + 1,
                target: "i32"
            })
        );
        assert!(decode::<i32>(&Encoded::from(json!(i64::MIN))).is_err());
    }

    #[test]
    fn test_truncated_varint() {
        assert_eq!(
            decode::<i64>(&Encoded::from(vec![0x80, 0x80])),
            Err(CodecError::MalformedVarint)
        );
    }

    proptest! {
        #[test]
        fn test_i32_roundtrip(value: i32) {
            for mode in Mode::ALL {
                let encoded = encode(&value, mode).unwrap();
                prop_assert_eq!(decode::<i32>(&encoded).unwrap(), value);
            }
        }

        #[test]
        fn test_i64_roundtrip(value: i64) {
            for mode in Mode::ALL {
                let encoded = encode(&value, mode).unwrap();
                prop_assert_eq!(decode::<i64>(&encoded).unwrap(), value);
            }
        }

        #[test]
        fn test_u64_matches_signed_pattern(value: u64) {
            prop_assert_eq!(binary(value), binary(value as i64));
        }
    }
}
