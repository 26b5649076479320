//! Server configuration and the [`Server`] value that owns the ingestion queue.
//!
//! [`ServerConfig`] is plain data with defaults (port 8080, path `/build`, no
//! secret, queue capacity 10). It can be built in code, deserialised with serde,
//! or read from `BUILDHOOK_*` environment variables.
//!
//! [`Server::new`] validates a config and allocates exactly one
//! [`EventQueue`], which it owns for its whole lifetime. Producers and the
//! consumer reach the queue only through handles obtained from the server.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, EventQueue, SignatureVerifier, WebhookReceiver};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PATH: &str = "/build";
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Route reserved for liveness checks; not usable as the webhook path.
pub const HEALTH_PATH: &str = "/health";

pub const ENV_PORT: &str = "BUILDHOOK_PORT";
pub const ENV_PATH: &str = "BUILDHOOK_PATH";
pub const ENV_SECRET: &str = "BUILDHOOK_SECRET";
pub const ENV_QUEUE_CAPACITY: &str = "BUILDHOOK_QUEUE_CAPACITY";

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

/// Construction-time settings for a [`Server`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port the HTTP boundary listens on.
    pub port: u16,

    /// HTTP path that receives webhook bodies. Must start with `/`, must not
    /// contain `:`, `*`, `{` or `}`, and must not be [`HEALTH_PATH`].
    pub path: String,

    /// Shared secret for HMAC-SHA256 signature checks.
    ///
    /// `None` (or an empty string) disables verification.
    pub secret: Option<String>,

    /// Maximum number of events buffered between producers and the consumer.
    pub queue_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
            secret: None,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("path", &self.path)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("queue_capacity", &self.queue_capacity)
            .finish()
    }
}

impl ServerConfig {
    /// Reads overrides from the process environment; unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PORT) {
            config.port = parse_value(ENV_PORT, &raw)?;
        }
        if let Some(path) = lookup(ENV_PATH) {
            config.path = path;
        }
        if let Some(secret) = lookup(ENV_SECRET) {
            config.secret = Some(secret);
        }
        if let Some(raw) = lookup(ENV_QUEUE_CAPACITY) {
            config.queue_capacity = parse_value(ENV_QUEUE_CAPACITY, &raw)?;
        }

        Ok(config)
    }

    /// Checks every field. Called by [`Server::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if !is_literal_route(&self.path) {
            return Err(ConfigError::InvalidPath {
                path: self.path.clone(),
            });
        }
        if self.path == HEALTH_PATH {
            return Err(ConfigError::ReservedPath {
                path: self.path.clone(),
            });
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        Ok(())
    }

    /// The secret, treating an empty string as unset.
    pub fn effective_secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|s| !s.is_empty())
    }
}

/// An absolute path with no router syntax: `:name` and `*rest` captures and
/// `{}` braces would either panic the router or match more than one path.
fn is_literal_route(path: &str) -> bool {
    path.starts_with('/') && !path.contains(|c| matches!(c, ':' | '*' | '{' | '}'))
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// A validated configuration together with the queue it owns.
#[derive(Debug)]
pub struct Server {
    config: ServerConfig,
    queue: EventQueue,
}

impl Server {
    /// Validates `config` and allocates its queue.
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity =
            NonZeroUsize::new(config.queue_capacity).ok_or(ConfigError::InvalidCapacity)?;

        tracing::debug!(
            port = config.port,
            path = %config.path,
            queue_capacity = capacity.get(),
            signed = config.effective_secret().is_some(),
            "server configured"
        );

        Ok(Self {
            queue: EventQueue::new(capacity),
            config,
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// Builds the inbound boundary: signature check (if a secret is set),
    /// decode, then enqueue onto this server's queue.
    pub fn receiver(&self) -> WebhookReceiver {
        let verifier = self.config.effective_secret().map(SignatureVerifier::new);
        WebhookReceiver::new(self.queue.producer(), verifier)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
