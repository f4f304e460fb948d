//! # Graphene Codec Core
//!
//! Primitives for encoding Graphene protocol values in two modes: a
//! self-describing textual form (JSON) and the compact binary wire form.
//!
//! This crate contains no I/O. It transforms in-memory values to and from
//! JSON values and byte slices supplied by the caller.
//!
//! ## Key Types
//!
//! - [`Mode`] - Closed choice of wire mode
//! - [`Encoded`] - A value encoded in one of the modes
//! - [`Payload`] - Per-type encode/decode behavior for both modes
//! - [`Handler`] - Detached, replaceable encode/decode behavior for one type
//! - [`Shape`] / [`StaticVariantDescriptor`] - Structural descriptions
//! - [`BinaryReader`] - Cursor over binary input
//! - [`TimePointSec`] - Protocol time point, ISO-8601 in text
//!
//! ## Binary Integers
//!
//! Integers are varint encoded, 7 bits per byte with a continuation flag.
//! See [`varint`] and [`int`].

pub mod config;
pub mod error;
pub mod int;
pub mod mode;
pub mod payload;
pub mod reader;
pub mod record;
pub mod shape;
pub mod time;
pub mod varint;

pub use config::CodecConfig;
pub use error::{CodecError, Result};
pub use int::VarInt;
pub use mode::{Encoded, Mode};
pub use payload::{decode, decode_with, encode, Handler, Payload};
pub use reader::BinaryReader;
pub use shape::{Field, PrimitiveShape, Shape, StaticVariantDescriptor, StructureKind};
pub use time::TimePointSec;
