//! Recoverable per-tag decode anomalies.
//!
//! These replace the original implementation's ad hoc console printing:
//! the decoder reports them to an injectable sink and carries on with
//! the heuristic value.

use crate::registry::{SemanticType, TagCode};

/// One anomaly observed while decoding a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Tag code the anomaly was observed on.
    pub code: TagCode,
    /// What went wrong.
    pub kind: DiagnosticKind,
}

/// Anomaly classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The registry declares a type the codec has no converter for.
    /// Distinct from an unrecognized code, which is handled silently.
    UnhandledType {
        /// The declared semantic type.
        declared: SemanticType,
    },
    /// A scalar payload's width does not match its declared type.
    ValueWidth {
        /// The declared semantic type.
        declared: SemanticType,
        /// Width the converter expects.
        expected: usize,
        /// Width found on the wire.
        actual: usize,
    },
}

/// Injectable observability hook for decode diagnostics.
pub trait DiagnosticSink {
    /// Record one anomaly. Called in encounter order.
    fn record(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink used by [`crate::decode`], which drops diagnostics.
pub(crate) struct Discard;

impl DiagnosticSink for Discard {
    fn record(&mut self, _diagnostic: Diagnostic) {}
}
