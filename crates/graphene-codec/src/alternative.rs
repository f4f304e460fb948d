//! Alternatives: one member of a static variant's fixed shape set.

use graphene_codec_core::{BinaryReader, CodecError, Handler, Payload, Result, Shape};
use serde_json::Value;
use std::fmt;
use std::hash::Hash;

/// A closed sum type whose members are encoded by position.
///
/// `Kind` identifies which member a value is without looking at its payload.
/// It usually is a fieldless mirror of the enum.
pub trait StaticVariant: Sized + 'static {
    type Kind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// The runtime kind of this value.
    fn kind(&self) -> Self::Kind;
}

type ToText<V> = Box<dyn Fn(&V) -> Result<Value> + Send + Sync>;
type FromText<V> = Box<dyn Fn(&Value) -> Result<V> + Send + Sync>;
type WriteBinary<V> = Box<dyn Fn(&V, &mut Vec<u8>) -> Result<()> + Send + Sync>;
type ReadBinary<V> = Box<dyn Fn(&mut BinaryReader<'_>) -> Result<V> + Send + Sync>;

/// The resolved handler of one alternative, lifted to the union type.
pub struct Alternative<V: StaticVariant> {
    kind: V::Kind,
    shape: Shape,
    to_text: ToText<V>,
    from_text: FromText<V>,
    write_binary: WriteBinary<V>,
    read_binary: ReadBinary<V>,
}

impl<V: StaticVariant> Alternative<V> {
    /// An alternative encoded by its payload type's own [`Payload`] impl.
    ///
    /// `inject` wraps a payload into the union, `project` borrows it back out
    /// (returning `None` for other members).
    pub fn new<A: Payload + 'static>(
        kind: V::Kind,
        inject: fn(A) -> V,
        project: fn(&V) -> Option<&A>,
    ) -> Self {
        Self::with_handler(kind, Handler::of(), inject, project)
    }

    /// An alternative encoded by an explicit handler.
    pub fn with_handler<A: 'static>(
        kind: V::Kind,
        handler: Handler<A>,
        inject: fn(A) -> V,
        project: fn(&V) -> Option<&A>,
    ) -> Self {
        let shape = handler.shape().clone();
        let to_text_handler = handler.clone();
        let from_text_handler = handler.clone();
        let write_handler = handler.clone();
        let read_handler = handler;

        Self {
            kind,
            shape,
            to_text: Box::new(move |value: &V| {
                to_text_handler.to_text(project_or_err(project, value)?)
            }),
            from_text: Box::new(move |value: &Value| {
                from_text_handler.from_text(value).map(inject)
            }),
            write_binary: Box::new(move |value: &V, buf: &mut Vec<u8>| {
                write_handler.write_binary(project_or_err(project, value)?, buf)
            }),
            read_binary: Box::new(move |reader: &mut BinaryReader<'_>| {
                read_handler.read_binary(reader).map(inject)
            }),
        }
    }

    pub fn kind(&self) -> V::Kind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub(crate) fn to_text(&self, value: &V) -> Result<Value> {
        (self.to_text)(value)
    }

    pub(crate) fn from_text(&self, value: &Value) -> Result<V> {
        (self.from_text)(value)
    }

    pub(crate) fn write_binary(&self, value: &V, buf: &mut Vec<u8>) -> Result<()> {
        (self.write_binary)(value, buf)
    }

    pub(crate) fn read_binary(&self, reader: &mut BinaryReader<'_>) -> Result<V> {
        (self.read_binary)(reader)
    }
}

impl<V: StaticVariant> fmt::Debug for Alternative<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alternative")
            .field("kind", &self.kind)
            .field("shape", &self.shape)
            .finish()
    }
}

/// Format a kind for error messages.
pub(crate) fn kind_name<K: fmt::Debug>(kind: K) -> String {
    format!("{kind:?}")
}

// A projection that misses means `kind()` and the registered projection
// disagree about which member the value is.
fn project_or_err<'a, V: StaticVariant, A>(
    project: fn(&V) -> Option<&A>,
    value: &'a V,
) -> Result<&'a A> {
    project(value).ok_or_else(|| CodecError::UnknownAlternative {
        kind: kind_name(value.kind()),
    })
}
