//! Error types for the raw HTTP client.
//!
//! # Design
//! Every failure is terminal for the request that produced it; there are no
//! retries and no partial results. `Connection` keeps the target host and port
//! so the CLI can print a useful diagnostic without re-deriving them.

use std::fmt;

/// Errors returned by the request builder, transport and response parser.
#[derive(Debug)]
pub enum ClientError {
    /// The URL could not be parsed, has no host, or is not `http://`.
    InvalidUrl(String),

    /// Name resolution or the TCP connect failed.
    Connection { host: String, port: u16, reason: String },

    /// Writing the request or reading the response failed after connecting.
    Io(String),

    /// No numeric status code on the first line of the response.
    MalformedResponse(String),

    /// The response has no blank line between headers and body.
    MissingSeparator,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            ClientError::Connection { host, port, reason } => {
                write!(f, "failed to connect to {host} at port {port}: {reason}")
            }
            ClientError::Io(msg) => write!(f, "i/o error: {msg}"),
            ClientError::MalformedResponse(msg) => {
                write!(f, "malformed response: {msg}")
            }
            ClientError::MissingSeparator => {
                write!(f, "malformed response: no blank line between headers and body")
            }
        }
    }
}

impl std::error::Error for ClientError {}
