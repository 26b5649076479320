//! Event domain for buildhook.
//!
//! This crate defines the webhook [`Event`] value, the newtype identifiers it
//! is made of, and the line-based wire codec that turns raw webhook bodies into
//! events and back. The `listener` crate builds its queue and HTTP boundary on
//! top of these types; it never adds format rules of its own.
//!
//! ## Architectural Layer
//!
//! **Domain.** This crate has no I/O dependencies and no shared state. Every
//! function is pure and safe to call from any thread.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Non-empty string newtypes (`Owner`, `RepoName`, etc.) |
//! | [`event`] | [`Event`], [`EventKind`], [`PullRequestBase`] |
//! | [`codec`] | [`decode`], [`decode_bytes`], [`encode`] |
//! | [`errors`] | [`FormatError`], [`EmptyIdentifier`] |

pub mod codec;
pub mod errors;
pub mod event;
pub mod identifiers;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use codec::{decode, decode_bytes, encode};
pub use errors::{EmptyIdentifier, FormatError};
pub use event::{Event, EventKind, PullRequestBase};
pub use identifiers::{BranchName, CommitSha, Owner, RepoName};
