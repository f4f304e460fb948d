//! # Graphene Codec
//!
//! Codec for *static variants*: closed unions of payload types distinguished
//! by an integer discriminant, as used throughout the Graphene protocol.
//!
//! ## Overview
//!
//! A [`StaticVariantCodec`] is built once per union type from an ordered list
//! of [`Alternative`]s. The position of an alternative in that list is its
//! wire discriminant:
//!
//! - **Binary**: `<varint tag><payload bytes>`, matching the protocol's layout
//! - **Textual**: `[tag, payload]` as JSON
//!
//! The codec is immutable after construction and safe to share across
//! threads.
//!
//! ## Usage
//!
//! ```rust
//! use graphene_codec::{Alternative, Mode, StaticVariant, StaticVariantCodec};
//!
//! #[derive(Debug, PartialEq)]
//! enum Memo {
//!     Id(i32),
//!     Text(String),
//! }
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum MemoKind {
//!     Id,
//!     Text,
//! }
//!
//! impl StaticVariant for Memo {
//!     type Kind = MemoKind;
//!
//!     fn kind(&self) -> MemoKind {
//!         match self {
//!             Memo::Id(_) => MemoKind::Id,
//!             Memo::Text(_) => MemoKind::Text,
//!         }
//!     }
//! }
//!
//! fn as_id(m: &Memo) -> Option<&i32> {
//!     match m {
//!         Memo::Id(id) => Some(id),
//!         _ => None,
//!     }
//! }
//!
//! fn as_text(m: &Memo) -> Option<&String> {
//!     match m {
//!         Memo::Text(text) => Some(text),
//!         _ => None,
//!     }
//! }
//!
//! let codec = StaticVariantCodec::builder()
//!     .alternative(Alternative::new(MemoKind::Id, Memo::Id, as_id))
//!     .alternative(Alternative::new(MemoKind::Text, Memo::Text, as_text))
//!     .build()
//!     .unwrap();
//!
//! let encoded = codec.encode(&Memo::Id(5), Mode::Binary).unwrap();
//! assert_eq!(encoded.as_binary().unwrap(), &[0x00, 0x05]);
//! assert_eq!(codec.decode(&encoded).unwrap(), Memo::Id(5));
//! ```
//!
//! ## Re-exports
//!
//! - `graphene_codec::core` - Modes, varints, payload handlers, descriptors

pub mod alternative;
pub mod ordering;
pub mod static_variant;

// Re-export component crate
pub use graphene_codec_core as core;

pub use alternative::{Alternative, StaticVariant};
pub use static_variant::{StaticVariantCodec, StaticVariantCodecBuilder};

// Re-export commonly used core types
pub use graphene_codec_core::{
    decode, decode_with, encode, BinaryReader, CodecConfig, CodecError, Encoded, Handler, Mode,
    Payload, PrimitiveShape, Result, Shape, StaticVariantDescriptor, TimePointSec,
};
