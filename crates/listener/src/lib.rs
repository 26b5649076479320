//! buildhook event source infrastructure.
//!
//! Turns raw webhook bodies into [`events::Event`] values on a bounded
//! in-process queue, and hands them to a single consumer:
//!
//! ```text
//! HTTP body ─▶ WebhookReceiver ─▶ (SignatureVerifier) ─▶ events::decode
//!                                                           │
//!                      run_consumer ◀─ EventStream ◀─ EventQueue
//! ```
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | [`ServerConfig`] defaults/env loading and the [`Server`] that owns the queue |
//! | [`queue`] | [`EventQueue`], [`EventProducer`], [`EventStream`], [`ShutdownHandle`] |
//! | [`signature`] | HMAC-SHA256 [`SignatureVerifier`] |
//! | [`receiver`] | Transport-independent [`WebhookReceiver`] |
//! | [`http`] | axum router and serve loop |
//! | [`consumer`] | [`EventHandler`] port and [`run_consumer`] |
//! | [`errors`] | Error enums for each of the above |
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Transport, authentication and buffering live here. The
//! [`events`] crate sees none of it.

pub mod config;
pub mod consumer;
pub mod errors;
pub mod http;
pub mod queue;
pub mod receiver;
pub mod signature;

pub use config::{Server, ServerConfig, HEALTH_PATH};
pub use consumer::{run_consumer, ConsumerReport, EventHandler};
pub use errors::{ConfigError, HandlerError, QueueError, ReceiveError, SignatureError};
pub use queue::{EventProducer, EventQueue, EventStream, ShutdownHandle};
pub use receiver::{DeliveryId, WebhookReceiver};
pub use signature::{SignatureVerifier, SIGNATURE_HEADER};
