//! Immutable client settings.
//!
//! The HTTP version, default port and read chunk size are plain values handed
//! to the builder and transport, never process-wide state.

use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 80;
pub const HTTP_VERSION: &str = "HTTP/1.1";
pub const DEFAULT_CLIENT_ID: &str = "rawhttp";
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Settings shared by the request builder and the TCP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Version token written at the end of the request line.
    pub http_version: String,
    /// Port used when the URL does not name one.
    pub default_port: u16,
    /// Value of the `Server` request header.
    pub client_id: String,
    /// Maximum bytes requested per `read` call.
    pub chunk_size: usize,
    /// `None` blocks until the OS gives up.
    pub connect_timeout: Option<Duration>,
    /// `None` blocks until the peer closes the connection.
    pub read_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http_version: HTTP_VERSION.to_string(),
            default_port: DEFAULT_PORT,
            client_id: DEFAULT_CLIENT_ID.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            connect_timeout: None,
            read_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `RAWHTTP_CLIENT_ID`, `RAWHTTP_CONNECT_TIMEOUT_MS`
    /// and `RAWHTTP_READ_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(id) = lookup("RAWHTTP_CLIENT_ID").filter(|id| !id.is_empty()) {
            config.client_id = id;
        }
        config.connect_timeout = millis(&lookup, "RAWHTTP_CONNECT_TIMEOUT_MS");
        config.read_timeout = millis(&lookup, "RAWHTTP_READ_TIMEOUT_MS");
        config
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn with_client_id(mut self, client_id: &str) -> Self {
        self.client_id = client_id.to_string();
        self
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Duration> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        // zero would make the socket calls fail with InvalidInput
        Ok(0) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            tracing::warn!("ignoring {key}={raw:?}: not a number of milliseconds");
            None
        }
    }
}
