//! TLV message encoder.
//!
//! The input unit is pre-encoded bytes per field, not typed values; the
//! decoder's typed output is deliberately not mirrored here (the named
//! encode converters in [`super::convert`] cover pre-encoding). Codes
//! are well-formed by construction of [`TagCode`].

use super::error::EncodeError;
use super::layout;
use crate::registry::TagCode;

/// Assemble one top-level message from ordered `(code, payload)` fields.
///
/// Each field is emitted as `code ++ be32(len) ++ payload`, in input
/// order; the concatenation becomes the body of a single
/// length-prefixed block named `name`.
///
/// # Examples
/// ```
/// use dmap_core::{convert, encode, TagCode};
///
/// let status = convert::encode_u32(200);
/// let message = encode(
///     TagCode::new(*b"mlog"),
///     &[(TagCode::new(*b"mstt"), status.as_slice())],
/// )?;
/// assert_eq!(&message[..8], b"mlog\x00\x00\x00\x0c");
/// # Ok::<(), dmap_core::EncodeError>(())
/// ```
pub fn encode(name: TagCode, fields: &[(TagCode, &[u8])]) -> Result<Vec<u8>, EncodeError> {
    let mut body = Vec::new();
    for (code, data) in fields {
        let len = u32::try_from(data.len()).map_err(|_| EncodeError::FieldTooLong {
            code: *code,
            len: data.len(),
        })?;
        body.extend_from_slice(code.as_bytes());
        body.extend_from_slice(&len.to_be_bytes());
        body.extend_from_slice(data);
    }

    let body_len =
        u32::try_from(body.len()).map_err(|_| EncodeError::BodyTooLong { len: body.len() })?;
    let mut out = Vec::with_capacity(layout::HEADER_LEN + body.len());
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(&body_len.to_be_bytes());
    out.extend_from_slice(&body);
    Ok(out)
}
