//! Decode configuration.

use serde::{Deserialize, Serialize};

/// Default bound on length prefixes (1 MiB).
pub const DEFAULT_MAX_LENGTH: usize = 1 << 20;

/// Configuration for decoding.
///
/// Encoding is not configurable: the wire layout is fixed by the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Maximum value accepted for a varint length prefix (string bytes,
    /// sequence items) in binary mode.
    pub max_length: usize,

    /// Whether a top-level binary decode may leave input unconsumed.
    pub allow_trailing_bytes: bool,
}

impl CodecConfig {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_trailing_bytes(mut self, allow: bool) -> Self {
        self.allow_trailing_bytes = allow;
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            allow_trailing_bytes: false,
        }
    }
}
