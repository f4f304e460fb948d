//! Wire modes and their encoded representations.
//!
//! The set of modes is closed: every codec in this workspace supports both
//! and there is no way to ask for a third.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// The target representation of an encode/decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Self-describing JSON: named fields, integers as literal numbers.
    Textual,
    /// Compact protocol bytes: no field names, varint integers.
    Binary,
}

impl Mode {
    /// All supported modes.
    pub const ALL: [Mode; 2] = [Mode::Textual, Mode::Binary];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Textual => "textual",
            Mode::Binary => "binary",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "textual" | "text" | "json" => Ok(Mode::Textual),
            "binary" | "bin" => Ok(Mode::Binary),
            _ => Err(CodecError::UnsupportedMode(s.to_string())),
        }
    }
}

/// A value encoded in one of the two modes.
#[derive(Clone, PartialEq)]
pub enum Encoded {
    Textual(serde_json::Value),
    Binary(Bytes),
}

impl Encoded {
    /// The mode this value was encoded in.
    pub fn mode(&self) -> Mode {
        match self {
            Encoded::Textual(_) => Mode::Textual,
            Encoded::Binary(_) => Mode::Binary,
        }
    }

    pub fn as_textual(&self) -> Option<&serde_json::Value> {
        match self {
            Encoded::Textual(value) => Some(value),
            Encoded::Binary(_) => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Encoded::Binary(bytes) => Some(bytes),
            Encoded::Textual(_) => None,
        }
    }

    /// Get the bytes, failing if this is a textual value.
    pub fn expect_binary(&self) -> Result<&[u8], CodecError> {
        self.as_binary().ok_or(CodecError::ModeMismatch {
            expected: Mode::Binary,
            found: self.mode(),
        })
    }

    /// Get the JSON value, failing if this is a binary value.
    pub fn expect_textual(&self) -> Result<&serde_json::Value, CodecError> {
        self.as_textual().ok_or(CodecError::ModeMismatch {
            expected: Mode::Textual,
            found: self.mode(),
        })
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoded::Textual(value) => write!(f, "Textual({value})"),
            Encoded::Binary(bytes) => write!(f, "Binary({})", hex::encode(bytes)),
        }
    }
}

impl From<serde_json::Value> for Encoded {
    fn from(value: serde_json::Value) -> Self {
        Encoded::Textual(value)
    }
}

impl From<Vec<u8>> for Encoded {
    fn from(bytes: Vec<u8>) -> Self {
        Encoded::Binary(bytes.into())
    }
}
