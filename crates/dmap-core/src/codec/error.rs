use thiserror::Error;

use crate::registry::{SemanticType, TagCode};

/// Hard decode failures; per-tag anomalies degrade instead (see `diag`).
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("entry header truncated at offset {offset}: need {needed} bytes, got {remaining}")]
    TruncatedHeader {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("declared length {declared} for tag {code} exceeds remaining payload ({remaining} bytes)")]
    LengthOverrun {
        code: TagCode,
        declared: u32,
        remaining: usize,
    },
}

/// Encode failures. Tag codes are well-formed by construction; only
/// oversized payloads remain.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("field payload for tag {code} is too large for a 32-bit length: {len} bytes")]
    FieldTooLong { code: TagCode, len: usize },
    #[error("message body is too large for a 32-bit length: {len} bytes")]
    BodyTooLong { len: usize },
}

/// Scalar conversion failures, in either direction.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("expected {expected} bytes for a {kind} value, got {actual}")]
    Width {
        kind: SemanticType,
        expected: usize,
        actual: usize,
    },
    #[error("{kind} values are not scalar")]
    NotScalar { kind: SemanticType },
    #[error("invalid hex digit {byte:#04x} at position {index}")]
    HexDigit { byte: u8, index: usize },
    #[error("hex string has odd length {len}")]
    HexLength { len: usize },
    #[error("timestamp {seconds} does not fit in the 32-bit wire field")]
    DateRange { seconds: i64 },
}
