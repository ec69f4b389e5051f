//! Error types for codec operations.

use thiserror::Error;
use yosokumo_model::{ModelError, ValueKind};

/// Errors returned by encode and decode calls.
#[derive(Debug, Error)]
pub enum WireError {
    /// Decode was handed a zero-length buffer.
    #[error("input buffer is empty")]
    EmptyInput,

    /// Decode was handed more bytes than the configured limit.
    #[error("input of {len} bytes exceeds the {limit} byte limit")]
    InputTooLarge { len: usize, limit: usize },

    /// The bytes are not a well-formed record of the expected type.
    #[error("malformed {record} record")]
    ParseFailure {
        record: &'static str,
        #[source]
        source: prost::DecodeError,
    },

    /// An enum field held a number outside its declared range.
    #[error("invalid value {value} for enum field {field}")]
    InvalidEnumValue { field: &'static str, value: i32 },

    /// None of a record's value slots was set.
    #[error("{record} record has no value")]
    MissingValue { record: &'static str },

    /// A required field was absent.
    #[error("{record} record has no {field}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// The value kind has no slot in the target record.
    #[error("{kind} values cannot be encoded as a {record}")]
    UnsupportedValueKind {
        record: &'static str,
        kind: ValueKind,
    },

    /// A keyed collection listed the same key twice.
    #[error("duplicate key: {key}")]
    DuplicateKey { key: String },

    /// A message decoded to whitespace-only text.
    #[error("message text is empty")]
    EmptyMessage,

    /// A decoded field violated an entity invariant.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, WireError>;

impl WireError {
    pub fn parse_failure(record: &'static str, source: prost::DecodeError) -> Self {
        Self::ParseFailure { record, source }
    }

    pub fn invalid_enum(field: &'static str, value: i32) -> Self {
        Self::InvalidEnumValue { field, value }
    }

    pub fn missing_value(record: &'static str) -> Self {
        Self::MissingValue { record }
    }

    pub fn missing_field(record: &'static str, field: &'static str) -> Self {
        Self::MissingField { record, field }
    }

    pub fn unsupported_value_kind(record: &'static str, kind: ValueKind) -> Self {
        Self::UnsupportedValueKind { record, kind }
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    /// True for the whitespace-only message case, which callers usually
    /// treat as "no message" rather than a failure.
    pub fn is_empty_message(&self) -> bool {
        matches!(self, WireError::EmptyMessage)
    }
}
