//! DMAP wire codec.
//!
//! Layered structure:
//! - `layout`: field widths and wire constants (source of truth)
//! - `reader`: safe cursor over the raw buffer
//! - `convert`: scalar converters in both directions plus the
//!   unknown-value heuristic
//! - `decoder` / `encoder`: message-level walk, no direct byte indexing
//! - `error`: explicit, actionable errors
//! - `diag`: recoverable per-tag anomalies surfaced to an injectable sink
//!
//! The decoder absorbs per-tag anomalies locally (they degrade to the
//! heuristic value and a diagnostic); only truncated entry headers and
//! overrunning length fields abort a decode.

pub mod convert;
pub mod decoder;
pub mod diag;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod reader;

pub use decoder::{decode, decode_with_sink};
pub use encoder::encode;
