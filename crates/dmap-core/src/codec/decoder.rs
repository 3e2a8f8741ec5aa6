//! Recursive TLV decoder.
//!
//! A message is one top-level TLV whose payload is a container: a
//! concatenation of `code (4) ++ length (4, BE) ++ payload` entries
//! consuming exactly the enclosing payload. There is no element count;
//! container parsing terminates by exhaustion of the byte range.

use super::convert;
use super::diag::{Diagnostic, DiagnosticKind, DiagnosticSink, Discard};
use super::error::{DecodeError, ValueError};
use super::layout;
use super::reader::DmapReader;
use crate::registry::{self, SemanticType, TagCode, TagDefinition};
use crate::{Node, Value};

/// Decode one top-level message, discarding diagnostics.
///
/// Returns `Ok(None)` when the input is shorter than the 8-byte header;
/// this is the only soft failure. Truncated entry headers and length
/// fields overrunning the buffer are hard errors.
///
/// # Examples
/// ```
/// use dmap_core::decode;
///
/// assert!(decode(b"short")?.is_none());
/// # Ok::<(), dmap_core::DecodeError>(())
/// ```
pub fn decode(input: &[u8]) -> Result<Option<Node>, DecodeError> {
    decode_with_sink(input, &mut Discard)
}

/// Decode one top-level message, reporting per-tag anomalies to `sink`.
pub fn decode_with_sink(
    input: &[u8],
    sink: &mut dyn DiagnosticSink,
) -> Result<Option<Node>, DecodeError> {
    if input.len() < layout::HEADER_LEN {
        return Ok(None);
    }
    let mut reader = DmapReader::new(input);
    let code = reader.read_code()?;
    // The top-level length field is read but not validated; producers
    // routinely put stale values here. The payload is everything left.
    let _declared = reader.read_u32_be()?;
    let (definition, _) = resolve(code);
    let children = parse_container(reader.rest(), sink)?;
    Ok(Some(Node {
        definition,
        value: Value::List(children),
    }))
}

fn parse_container(
    payload: &[u8],
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<Node>, DecodeError> {
    let mut reader = DmapReader::new(payload);
    let mut nodes = Vec::new();

    while !reader.is_empty() {
        let code = reader.read_code()?;
        let declared = reader.read_u32_be()?;
        let data = reader.read_payload(code, declared)?;
        let (definition, recognized) = resolve(code);

        let value = match definition.kind {
            SemanticType::Container => Value::List(parse_container(data, sink)?),
            SemanticType::Unknown => {
                if recognized {
                    // Registered, but the table declares no converter.
                    sink.record(Diagnostic {
                        code,
                        kind: DiagnosticKind::UnhandledType {
                            declared: definition.kind,
                        },
                    });
                }
                convert::decode_unknown(data)
            }
            kind => match convert::scalar_value(kind, data) {
                Ok(value) => value,
                Err(ValueError::Width {
                    expected, actual, ..
                }) => {
                    sink.record(Diagnostic {
                        code,
                        kind: DiagnosticKind::ValueWidth {
                            declared: kind,
                            expected,
                            actual,
                        },
                    });
                    convert::decode_unknown(data)
                }
                Err(_) => {
                    sink.record(Diagnostic {
                        code,
                        kind: DiagnosticKind::UnhandledType { declared: kind },
                    });
                    convert::decode_unknown(data)
                }
            },
        };

        nodes.push(Node { definition, value });
    }

    Ok(nodes)
}

fn resolve(code: TagCode) -> (TagDefinition, bool) {
    match registry::find(code) {
        Some(definition) => (*definition, true),
        None => (TagDefinition::unknown(code), false),
    }
}
