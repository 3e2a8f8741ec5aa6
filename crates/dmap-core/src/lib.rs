//! DMAP core library for decoding and encoding tagged-length-value messages.
//!
//! DMAP is the binary TLV format used by the DAAP/DACP family of
//! media-sharing control protocols. This crate implements the wire codec:
//! a static registry of tag definitions, scalar converters in both
//! directions, a recursive decoder producing a typed node tree, and an
//! encoder assembling a message from pre-encoded fields. Parsing is
//! byte-oriented and side-effect free; there is no transport or protocol
//! command layer here.
//!
//! Invariants:
//! - A node's value variant follows its definition's semantic type;
//!   per-tag anomalies degrade to the unknown-value heuristic.
//! - Container children preserve source-buffer order.
//! - The registry is a fixed `static` table, so concurrent decodes need
//!   no locking.
//!
//! # Examples
//! ```
//! use dmap_core::{decode, encode, TagCode};
//!
//! let status = 200u32.to_be_bytes();
//! let message = encode(
//!     TagCode::new(*b"mlog"),
//!     &[(TagCode::new(*b"mstt"), status.as_slice())],
//! )?;
//! let root = decode(&message)?.expect("well-formed message");
//! assert_eq!(root.definition.name, "dmap.loginresponse");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

mod codec;
pub mod registry;

pub use codec::convert;
pub use codec::diag::{Diagnostic, DiagnosticKind, DiagnosticSink};
pub use codec::error::{DecodeError, EncodeError, ValueError};
pub use codec::{decode, decode_with_sink, encode};
pub use registry::{SemanticType, TagCode, TagCodeError, TagDefinition};

/// One decoded tag: its registry definition and typed value.
///
/// Nodes are built bottom-up in a single decode pass and never mutated
/// afterwards.
///
/// # Examples
/// ```
/// use dmap_core::{decode, TagCode};
///
/// let message = b"mlog\x00\x00\x00\x0cmstt\x00\x00\x00\x04\x00\x00\x00\xc8";
/// let root = decode(message)?.expect("message");
/// let status = root.child(TagCode::new(*b"mstt")).expect("status child");
/// assert_eq!(status.value.to_string(), "200");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Registry definition for this tag (synthetic for unrecognized codes).
    #[serde(flatten)]
    pub definition: TagDefinition,
    /// Decoded value; `Value::List` for container tags.
    pub value: Value,
}

impl Node {
    /// The 4-byte tag code of this node.
    pub fn code(&self) -> TagCode {
        self.definition.code
    }

    /// Child nodes when this node is a container, in source order.
    pub fn children(&self) -> Option<&[Node]> {
        match &self.value {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// First direct child carrying `code`, if any.
    pub fn child(&self, code: TagCode) -> Option<&Node> {
        self.children()?.iter().find(|node| node.code() == code)
    }
}

/// Typed value of a decoded tag.
///
/// The `List` variant makes the type self-referential: a container's
/// value owns the same node type as its siblings. `Bytes` is the opaque
/// fallback of the unknown-value heuristic and never comes from a
/// registered scalar type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Unsigned 8-bit integer.
    Byte(u8),
    /// Unsigned 16-bit integer (big-endian on the wire).
    UInt16(u16),
    /// Unsigned 32-bit integer (big-endian on the wire).
    UInt32(u32),
    /// Unsigned 64-bit integer (big-endian on the wire).
    UInt64(u64),
    /// Boolean; `false` iff the wire byte is `0x00`.
    Bool(bool),
    /// Lowercase hexadecimal rendering of the payload.
    Hex(String),
    /// UTF-8 text, passed through unvalidated.
    Text(String),
    /// Unix epoch seconds.
    Date(i64),
    /// Protocol version triple, displayed as `major.minor.patch`.
    Version {
        /// First two payload bytes, big-endian.
        major: u16,
        /// Third payload byte.
        minor: u8,
        /// Fourth payload byte.
        patch: u8,
    },
    /// Opaque payload bytes (heuristic fallback).
    Bytes(Vec<u8>),
    /// Ordered children of a container tag.
    List(Vec<Node>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Byte(value) => write!(f, "{value}"),
            Value::UInt16(value) => write!(f, "{value}"),
            Value::UInt32(value) => write!(f, "{value}"),
            Value::UInt64(value) => write!(f, "{value}"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Hex(text) | Value::Text(text) => f.write_str(text),
            Value::Date(seconds) => match format_epoch(*seconds) {
                Some(formatted) => f.write_str(&formatted),
                None => write!(f, "{seconds}"),
            },
            Value::Version {
                major,
                minor,
                patch,
            } => write!(f, "{major}.{minor}.{patch}"),
            Value::Bytes(bytes) => f.write_str(&convert::decode_hex(bytes)),
            Value::List(items) => write!(f, "({} children)", items.len()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Byte(value) => serializer.serialize_u8(*value),
            Value::UInt16(value) => serializer.serialize_u16(*value),
            Value::UInt32(value) => serializer.serialize_u32(*value),
            Value::UInt64(value) => serializer.serialize_u64(*value),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Hex(text) | Value::Text(text) => serializer.serialize_str(text),
            Value::Date(_) | Value::Version { .. } => serializer.collect_str(self),
            Value::Bytes(bytes) => serializer.serialize_str(&convert::decode_hex(bytes)),
            Value::List(items) => items.serialize(serializer),
        }
    }
}

fn format_epoch(seconds: i64) -> Option<String> {
    let timestamp = OffsetDateTime::from_unix_timestamp(seconds).ok()?;
    timestamp.format(&Rfc3339).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(code: &[u8; 4], value: Value) -> Node {
        Node {
            definition: registry::find(TagCode::new(*code))
                .copied()
                .unwrap_or_else(|| TagDefinition::unknown(TagCode::new(*code))),
            value,
        }
    }

    #[test]
    fn version_displays_dotted_triple() {
        let value = Value::Version {
            major: 1,
            minor: 2,
            patch: 3,
        };
        assert_eq!(value.to_string(), "1.2.3");
    }

    #[test]
    fn date_displays_rfc3339() {
        assert_eq!(Value::Date(0).to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn bytes_display_as_hex() {
        assert_eq!(Value::Bytes(vec![0x00, 0xff]).to_string(), "00ff");
    }

    #[test]
    fn node_serializes_flattened_definition() {
        let root = node(
            b"mlog",
            Value::List(vec![node(b"mstt", Value::UInt32(200))]),
        );

        let value = serde_json::to_value(&root).expect("node json");
        assert_eq!(value["code"], "mlog");
        assert_eq!(value["type"], "container");
        assert_eq!(value["name"], "dmap.loginresponse");
        assert_eq!(value["value"][0]["code"], "mstt");
        assert_eq!(value["value"][0]["value"], 200);
    }

    #[test]
    fn date_and_version_serialize_as_rendered_strings() {
        let date = node(b"mstc", Value::Date(0));
        let version = node(
            b"mpro",
            Value::Version {
                major: 2,
                minor: 0,
                patch: 10,
            },
        );

        let date_json = serde_json::to_value(&date).expect("date json");
        let version_json = serde_json::to_value(&version).expect("version json");
        assert_eq!(date_json["value"], "1970-01-01T00:00:00Z");
        assert_eq!(version_json["value"], "2.0.10");
    }

    #[test]
    fn child_lookup_finds_first_match() {
        let root = node(
            b"mlcl",
            Value::List(vec![
                node(b"miid", Value::UInt32(1)),
                node(b"miid", Value::UInt32(2)),
            ]),
        );

        let first = root.child(TagCode::new(*b"miid")).expect("child");
        assert_eq!(first.value, Value::UInt32(1));
        assert!(root.child(TagCode::new(*b"minm")).is_none());
    }
}
