//! The static variant codec.
//!
//! A static variant is encoded as the pair `(tag, payload)` where `tag` is
//! the zero-based position of the value's alternative in the list the codec
//! was built with:
//!
//! - Binary: `<varint tag><payload bytes>`, no length prefix or framing.
//! - Textual: the JSON array `[tag, payload]`.
//!
//! The position *is* the wire discriminant. Reordering the alternative list
//! changes the meaning of previously encoded data, so a published list may
//! only ever be appended to by defining a new union type.

use graphene_codec_core::{
    BinaryReader, CodecConfig, CodecError, Encoded, Mode, Payload, Result, Shape,
    StaticVariantDescriptor,
};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::alternative::{kind_name, Alternative, StaticVariant};

/// Codec for one static variant type.
///
/// Built once from an ordered alternative list and immutable afterwards.
/// All operations take `&self`, so one instance can be shared freely across
/// threads (e.g. in a `static OnceLock`).
pub struct StaticVariantCodec<V: StaticVariant> {
    alternatives: Vec<Alternative<V>>,
    index: HashMap<V::Kind, usize>,
    descriptor: StaticVariantDescriptor,
}

impl<V: StaticVariant> StaticVariantCodec<V> {
    /// Build a codec whose alternatives all use their registered handlers.
    pub fn new(alternatives: Vec<Alternative<V>>) -> Result<Self> {
        Self::with_fallbacks(alternatives, Vec::new())
    }

    /// Start building a codec.
    pub fn builder() -> StaticVariantCodecBuilder<V> {
        StaticVariantCodecBuilder::new()
    }

    /// Build a codec, replacing the handler of each alternative that has a
    /// fallback of the same kind. Fallbacks never change positions.
    pub fn with_fallbacks(
        alternatives: Vec<Alternative<V>>,
        fallbacks: Vec<Alternative<V>>,
    ) -> Result<Self> {
        if alternatives.is_empty() {
            return Err(CodecError::EmptyAlternativeList);
        }

        let override_count = fallbacks.len();
        let mut overrides: HashMap<V::Kind, Alternative<V>> = HashMap::new();
        for fallback in fallbacks {
            let kind = fallback.kind();
            if overrides.insert(kind, fallback).is_some() {
                return Err(CodecError::DuplicateAlternative {
                    kind: kind_name(kind),
                });
            }
        }

        let mut index = HashMap::with_capacity(alternatives.len());
        let mut resolved = Vec::with_capacity(alternatives.len());
        for (position, alternative) in alternatives.into_iter().enumerate() {
            let kind = alternative.kind();
            if index.insert(kind, position).is_some() {
                return Err(CodecError::DuplicateAlternative {
                    kind: kind_name(kind),
                });
            }
            resolved.push(overrides.remove(&kind).unwrap_or(alternative));
        }

        if let Some(orphan) = overrides.keys().next() {
            return Err(CodecError::UnknownAlternative {
                kind: kind_name(*orphan),
            });
        }

        // The declared payload shape comes from the first alternative only.
        let descriptor = StaticVariantDescriptor::new(resolved[0].shape().clone());

        tracing::debug!(
            alternatives = resolved.len(),
            overrides = override_count,
            descriptor = %descriptor,
            "built static variant codec"
        );

        Ok(Self {
            alternatives: resolved,
            index,
            descriptor,
        })
    }

    /// The composite `(discriminant, payload)` descriptor.
    pub fn descriptor(&self) -> &StaticVariantDescriptor {
        &self.descriptor
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Alternative kinds in tag order.
    pub fn kinds(&self) -> impl Iterator<Item = V::Kind> + '_ {
        self.alternatives.iter().map(Alternative::kind)
    }

    /// The resolved payload shape of every alternative, in tag order.
    pub fn alternative_shapes(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.alternatives.iter().map(Alternative::shape)
    }

    /// The tag of a kind, if it is part of this codec.
    pub fn tag_of_kind(&self, kind: V::Kind) -> Option<usize> {
        self.index.get(&kind).copied()
    }

    /// The tag `value` is encoded with.
    pub fn tag_of(&self, value: &V) -> Result<usize> {
        let kind = value.kind();
        self.tag_of_kind(kind)
            .ok_or_else(|| CodecError::UnknownAlternative {
                kind: kind_name(kind),
            })
    }

    fn alternative_at(&self, tag: i128) -> Result<&Alternative<V>> {
        usize::try_from(tag)
            .ok()
            .and_then(|position| self.alternatives.get(position))
            .ok_or_else(|| {
                tracing::debug!(%tag, len = self.len(), "rejected out-of-range static variant tag");
                CodecError::OutOfRangeTag {
                    tag,
                    len: self.len(),
                }
            })
    }

    /// Encode `value` in the given mode.
    pub fn encode(&self, value: &V, mode: Mode) -> Result<Encoded> {
        match mode {
            Mode::Textual => self.encode_text(value).map(Encoded::Textual),
            Mode::Binary => {
                let mut buf = Vec::new();
                self.encode_binary(value, &mut buf)?;
                Ok(Encoded::from(buf))
            }
        }
    }

    /// Encode `value` as the JSON array `[tag, payload]`.
    pub fn encode_text(&self, value: &V) -> Result<Value> {
        let tag = self.tag_of(value)?;
        tracing::trace!(tag, mode = %Mode::Textual, "encoding static variant");
        let payload = self.alternatives[tag].to_text(value)?;
        Ok(Value::Array(vec![(tag as i64).to_text()?, payload]))
    }

    /// Append `<varint tag><payload>` to `buf`.
    ///
    /// On error `buf` is left exactly as it was.
    pub fn encode_binary(&self, value: &V, buf: &mut Vec<u8>) -> Result<()> {
        let tag = self.tag_of(value)?;
        tracing::trace!(tag, mode = %Mode::Binary, "encoding static variant");

        let start = buf.len();
        let result = (tag as i64)
            .write_binary(buf)
            .and_then(|()| self.alternatives[tag].write_binary(value, buf));
        if result.is_err() {
            buf.truncate(start);
        }
        result
    }

    /// Decode using the default configuration.
    pub fn decode(&self, encoded: &Encoded) -> Result<V> {
        self.decode_with(encoded, &CodecConfig::default())
    }

    /// Decode a complete encoded value. The mode is taken from `encoded`.
    pub fn decode_with(&self, encoded: &Encoded, config: &CodecConfig) -> Result<V> {
        match encoded {
            Encoded::Textual(value) => self.decode_text(value),
            Encoded::Binary(bytes) => {
                let mut reader = BinaryReader::new(bytes, config);
                let value = self.decode_binary(&mut reader)?;
                reader.finish()?;
                Ok(value)
            }
        }
    }

    /// Decode a `[tag, payload]` array, or an object keyed by element name
    /// (`{"0": tag, "1": payload}`).
    pub fn decode_text(&self, value: &Value) -> Result<V> {
        let (tag, payload) = self.split_text(value)?;
        let tag = text_tag(tag)?;
        tracing::trace!(%tag, mode = %Mode::Textual, "decoding static variant");
        self.alternative_at(tag)?.from_text(payload)
    }

    fn split_text<'a>(&self, value: &'a Value) -> Result<(&'a Value, &'a Value)> {
        match value {
            Value::Array(items) if items.len() == self.descriptor.element_count() => {
                Ok((&items[0], &items[1]))
            }
            Value::Object(fields) => {
                for name in fields.keys() {
                    self.descriptor.element_index(name)?;
                }
                let element = |index: usize| {
                    let name = self.descriptor.element_name(index);
                    fields
                        .get(&name)
                        .ok_or(CodecError::MissingField(name))
                };
                Ok((
                    element(StaticVariantDescriptor::TAG_INDEX)?,
                    element(StaticVariantDescriptor::PAYLOAD_INDEX)?,
                ))
            }
            other => Err(CodecError::invalid_text("[tag, payload] pair", other)),
        }
    }

    /// Decode `<varint tag><payload>` from the reader, leaving it positioned
    /// after the payload.
    pub fn decode_binary(&self, reader: &mut BinaryReader<'_>) -> Result<V> {
        let tag = i64::read_binary(reader)?;
        tracing::trace!(tag, mode = %Mode::Binary, "decoding static variant");
        self.alternative_at(i128::from(tag))?.read_binary(reader)
    }
}

// Any JSON integer is a tag. Values past `i64::MAX` are out of range rather
// than malformed.
fn text_tag(value: &Value) -> Result<i128> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
        .ok_or_else(|| CodecError::invalid_text("integer tag", value))
}

impl<V: StaticVariant> fmt::Debug for StaticVariantCodec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVariantCodec")
            .field("descriptor", &self.descriptor)
            .field("alternatives", &self.alternatives)
            .finish()
    }
}

/// Builder for [`StaticVariantCodec`].
pub struct StaticVariantCodecBuilder<V: StaticVariant> {
    alternatives: Vec<Alternative<V>>,
    fallbacks: Vec<Alternative<V>>,
}

impl<V: StaticVariant> StaticVariantCodecBuilder<V> {
    pub fn new() -> Self {
        Self {
            alternatives: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    /// Append an alternative. Its tag is the number of alternatives added
    /// before it.
    pub fn alternative(mut self, alternative: Alternative<V>) -> Self {
        self.alternatives.push(alternative);
        self
    }

    /// Override the handler of an already listed kind.
    pub fn fallback(mut self, fallback: Alternative<V>) -> Self {
        self.fallbacks.push(fallback);
        self
    }

    pub fn build(self) -> Result<StaticVariantCodec<V>> {
        StaticVariantCodec::with_fallbacks(self.alternatives, self.fallbacks)
    }
}

impl<V: StaticVariant> Default for StaticVariantCodecBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
