//! Scalar value converters.
//!
//! Decode converters take a payload slice of an exact expected width;
//! each has a named encoding counterpart callers use to pre-encode
//! fields for [`crate::encode`]. The unknown-value heuristic is part of
//! the wire contract: downstream consumers depend on its integer-width
//! choices, so it must not be changed.

use super::error::ValueError;
use super::layout;
use crate::Value;
use crate::registry::SemanticType;

fn width(kind: SemanticType, expected: usize, actual: usize) -> ValueError {
    ValueError::Width {
        kind,
        expected,
        actual,
    }
}

pub fn decode_u8(data: &[u8]) -> Result<u8, ValueError> {
    match *data {
        [value] => Ok(value),
        _ => Err(width(SemanticType::Byte, layout::BYTE_LEN, data.len())),
    }
}

pub fn decode_u16(data: &[u8]) -> Result<u16, ValueError> {
    match *data {
        [hi, lo] => Ok(u16::from_be_bytes([hi, lo])),
        _ => Err(width(SemanticType::UInt16, layout::U16_LEN, data.len())),
    }
}

pub fn decode_u32(data: &[u8]) -> Result<u32, ValueError> {
    match *data {
        [a, b, c, d] => Ok(u32::from_be_bytes([a, b, c, d])),
        _ => Err(width(SemanticType::UInt32, layout::U32_LEN, data.len())),
    }
}

pub fn decode_u64(data: &[u8]) -> Result<u64, ValueError> {
    match *data {
        [a, b, c, d, e, f, g, h] => Ok(u64::from_be_bytes([a, b, c, d, e, f, g, h])),
        _ => Err(width(SemanticType::UInt64, layout::U64_LEN, data.len())),
    }
}

pub fn decode_bool(data: &[u8]) -> Result<bool, ValueError> {
    match *data {
        [byte] => Ok(byte != 0x00),
        _ => Err(width(SemanticType::Bool, layout::BOOL_LEN, data.len())),
    }
}

/// Lowercase hex rendering, two characters per byte, in buffer order.
pub fn decode_hex(data: &[u8]) -> String {
    data.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Raw bytes as UTF-8 text, passed through unvalidated.
pub fn decode_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

/// 32-bit big-endian Unix epoch seconds.
pub fn decode_date(data: &[u8]) -> Result<i64, ValueError> {
    match *data {
        [a, b, c, d] => Ok(i64::from(u32::from_be_bytes([a, b, c, d]))),
        _ => Err(width(SemanticType::Date, layout::DATE_LEN, data.len())),
    }
}

/// `(major from first two bytes BE, third byte, fourth byte)`.
pub fn decode_version(data: &[u8]) -> Result<(u16, u8, u8), ValueError> {
    match *data {
        [hi, lo, minor, patch] => Ok((u16::from_be_bytes([hi, lo]), minor, patch)),
        _ => Err(width(SemanticType::Version, layout::VERSION_LEN, data.len())),
    }
}

pub fn encode_u8(value: u8) -> [u8; 1] {
    [value]
}

pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

pub fn encode_u32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn encode_bool(value: bool) -> [u8; 1] {
    [if value { 0x01 } else { 0x00 }]
}

pub fn encode_text(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

pub fn encode_date(seconds: i64) -> Result<[u8; 4], ValueError> {
    let raw = u32::try_from(seconds).map_err(|_| ValueError::DateRange { seconds })?;
    Ok(raw.to_be_bytes())
}

pub fn encode_version(major: u16, minor: u8, patch: u8) -> [u8; 4] {
    let [hi, lo] = major.to_be_bytes();
    [hi, lo, minor, patch]
}

/// Inverse of [`decode_hex`]; rejects odd lengths and non-hex digits.
pub fn encode_hex(value: &str) -> Result<Vec<u8>, ValueError> {
    let bytes = value.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(ValueError::HexLength { len: bytes.len() });
    }
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for (index, pair) in bytes.chunks_exact(2).enumerate() {
        let hi = hex_digit(pair[0], index * 2)?;
        let lo = hex_digit(pair[1], index * 2 + 1)?;
        out.push(hi << 4 | lo);
    }
    Ok(out)
}

fn hex_digit(byte: u8, index: usize) -> Result<u8, ValueError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(ValueError::HexDigit { byte, index }),
    }
}

/// Dispatch a registered scalar type to its converter.
pub fn scalar_value(kind: SemanticType, data: &[u8]) -> Result<Value, ValueError> {
    match kind {
        SemanticType::Byte => decode_u8(data).map(Value::Byte),
        SemanticType::UInt16 => decode_u16(data).map(Value::UInt16),
        SemanticType::UInt32 => decode_u32(data).map(Value::UInt32),
        SemanticType::UInt64 => decode_u64(data).map(Value::UInt64),
        SemanticType::Bool => decode_bool(data).map(Value::Bool),
        SemanticType::Hex => Ok(Value::Hex(decode_hex(data))),
        SemanticType::String => Ok(Value::Text(decode_text(data))),
        SemanticType::Date => decode_date(data).map(Value::Date),
        SemanticType::Version => {
            decode_version(data).map(|(major, minor, patch)| Value::Version {
                major,
                minor,
                patch,
            })
        }
        SemanticType::Container | SemanticType::Unknown => Err(ValueError::NotScalar { kind }),
    }
}

/// Heuristic for payloads with no usable declared type.
///
/// All-printable-ASCII payloads (including empty ones) decode as text.
/// Otherwise the payload decodes as a big-endian unsigned integer when
/// it is exactly 1, 4, or 8 bytes, and as opaque bytes otherwise.
pub fn decode_unknown(data: &[u8]) -> Value {
    let printable = data
        .iter()
        .all(|byte| (layout::PRINTABLE_MIN..=layout::PRINTABLE_MAX).contains(byte));
    if printable {
        return Value::Text(decode_text(data));
    }
    match *data {
        [value] => Value::Byte(value),
        [a, b, c, d] => Value::UInt32(u32::from_be_bytes([a, b, c, d])),
        [a, b, c, d, e, f, g, h] => Value::UInt64(u64::from_be_bytes([a, b, c, d, e, f, g, h])),
        _ => Value::Bytes(data.to_vec()),
    }
}
