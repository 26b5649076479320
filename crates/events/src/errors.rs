//! Error types for the event domain.
//!
//! [`FormatError`] is the single, uniform error the codec reports for any
//! structurally invalid payload. It deliberately carries no sub-classification:
//! callers learn that a payload was rejected, not which rule it broke.

use thiserror::Error;

/// A payload could not be decoded into an [`crate::Event`].
///
/// Produced by: line-count mismatch, a line shorter than the 8-byte label,
/// an unknown event type, a type whose line count does not match, an empty
/// field value, or a non-UTF-8 body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unable to parse event payload: invalid format")]
pub struct FormatError;

/// An identifier newtype was constructed from an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} must not be empty")]
pub struct EmptyIdentifier {
    /// Name of the identifier type that rejected the value.
    pub kind: &'static str,
}
