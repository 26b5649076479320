//! Error types for the listener infrastructure.
//!
//! Each concern has its own enum. [`ReceiveError`] is the union reported by
//! [`crate::WebhookReceiver`] and is what the HTTP layer maps to status codes.
//! None of these are retried inside this crate; the caller decides.

use events::FormatError;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Queue
// ---------------------------------------------------------------------------

/// Failure to place an event into, or take the consumer side of, the
/// ingestion queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The queue was at capacity; the event was dropped.
    #[error("event queue is full")]
    Overloaded,

    /// The queue has been shut down and accepts no more events.
    #[error("event queue is closed")]
    Closed,

    /// The consumer stream was already taken. A queue is drained at most once.
    #[error("event queue is already being drained")]
    AlreadyDraining,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// The server configuration is invalid.
///
/// Produced at construction time; a [`crate::Server`] never exists with an
/// invalid config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("port must be greater than zero")]
    InvalidPort,

    /// Not an absolute, literal route (relative, or contains `:`, `*`, `{`, `}`).
    #[error("invalid webhook path: {path:?}")]
    InvalidPath { path: String },

    /// The path collides with a route the listener serves itself.
    #[error("webhook path is reserved: {path:?}")]
    ReservedPath { path: String },

    #[error("queue capacity must be greater than zero")]
    InvalidCapacity,

    /// A raw configuration value could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A webhook body failed HMAC signature verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("signature header is missing")]
    MissingHeader,

    /// The header is not `sha256=<hex>`.
    #[error("signature header is malformed")]
    MalformedHeader,

    #[error("signature does not match payload")]
    Mismatch,
}

// ---------------------------------------------------------------------------
// Receive
// ---------------------------------------------------------------------------

/// Why an inbound webhook delivery was not enqueued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiveError {
    #[error("unauthorized: {0}")]
    Unauthorized(#[from] SignatureError),

    #[error(transparent)]
    InvalidFormat(#[from] FormatError),

    #[error("event dropped: queue is full")]
    Overloaded,

    #[error("event dropped: queue is closed")]
    Closed,
}

impl From<QueueError> for ReceiveError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::Overloaded => ReceiveError::Overloaded,
            // A producer never drains, so only `Closed` remains.
            QueueError::Closed | QueueError::AlreadyDraining => ReceiveError::Closed,
        }
    }
}

// ---------------------------------------------------------------------------
// Consumer
// ---------------------------------------------------------------------------

/// An [`crate::EventHandler`] failed to process one event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event handler failed: {message}")]
pub struct HandlerError {
    pub message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
