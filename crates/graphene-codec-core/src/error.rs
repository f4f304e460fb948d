//! Error types for the Graphene codec.

use thiserror::Error;

use crate::mode::Mode;

/// Errors that can occur while building codecs or encoding/decoding values.
///
/// None of these are transient: they signal either a misconfigured
/// alternative list or corrupted/mismatched input, so nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The runtime kind of a value is not part of the codec's alternative list.
    #[error("unknown alternative: {kind}")]
    UnknownAlternative { kind: String },

    /// A decoded discriminant does not index into the alternative list.
    ///
    /// Wide enough for any tag either mode can carry: a binary `i64` or a
    /// textual JSON integer up to `u64::MAX`.
    #[error("tag {tag} out of range for {len} alternatives")]
    OutOfRangeTag { tag: i128, len: usize },

    /// A mode name that does not match any supported wire mode.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    /// The input ended before a varint's terminating byte.
    #[error("malformed varint: input ended before terminating byte")]
    MalformedVarint,

    /// The varint carries more than 64 significant bits.
    #[error("varint overflows 64 bits")]
    VarintOverflow,

    /// A multi-byte varint ends in a zero byte, so a shorter encoding of the
    /// same value exists.
    #[error("non-canonical varint: redundant trailing zero byte")]
    NonCanonicalVarint,

    /// A decoded integer does not fit the requested width.
    #[error("integer {value} does not fit in {target}")]
    IntegerOverflow { value: i128, target: &'static str },

    /// A fixed-width read ran past the end of the input.
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A top-level decode left bytes unconsumed.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    /// A length prefix exceeds the configured maximum.
    #[error("length {len} exceeds maximum of {max}")]
    LengthLimitExceeded { len: u64, max: usize },

    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,

    /// A textual time point is not `YYYY-MM-DDTHH:MM:SS`.
    #[error("invalid time point: {0:?}")]
    InvalidTimePoint(String),

    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    /// A record field is absent from a textual object.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A textual record failed to serialize or deserialize.
    #[error("invalid textual record: {0}")]
    InvalidRecord(String),

    /// A textual value does not have the expected structure.
    #[error("invalid textual value: expected {expected}, found {found}")]
    InvalidText { expected: &'static str, found: String },

    /// A mode-specific operation received a value encoded in the other mode.
    #[error("mode mismatch: expected {expected}, found {found}")]
    ModeMismatch { expected: Mode, found: Mode },

    /// A descriptor element index outside `0..element_count`.
    #[error("element index {0} out of bounds")]
    ElementIndex(usize),

    #[error("{0:?} is not a valid element name")]
    InvalidElementName(String),

    #[error("alternative list is empty")]
    EmptyAlternativeList,

    #[error("alternative {kind} registered more than once")]
    DuplicateAlternative { kind: String },

    /// Raised by explicitly supplied handlers.
    #[error("{0}")]
    Custom(String),
}

impl CodecError {
    /// Build an `InvalidText` error describing the offending JSON value.
    pub fn invalid_text(expected: &'static str, found: &serde_json::Value) -> Self {
        let found = match found {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::Bool(_) => "boolean".to_string(),
            serde_json::Value::Number(n) => format!("number {n}"),
            serde_json::Value::String(_) => "string".to_string(),
            serde_json::Value::Array(a) => format!("array of {}", a.len()),
            serde_json::Value::Object(_) => "object".to_string(),
        };
        CodecError::InvalidText { expected, found }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
