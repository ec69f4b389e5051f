//! Codec options.

use serde::{Deserialize, Serialize};

/// Media type the service uses for Protocol Buffers bodies.
pub const CONTENT_TYPE: &str = "application/yosokumo+protobuf";

/// Options for [`ProtobufCodec`](crate::ProtobufCodec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Value for `Content-Type` and `Accept` headers.
    pub content_type: String,
    /// Largest buffer decode will accept. `None` means unlimited.
    pub max_input_len: Option<usize>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            content_type: CONTENT_TYPE.to_string(),
            max_input_len: None,
        }
    }
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    #[must_use]
    pub fn with_max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = Some(limit);
        self
    }
}
