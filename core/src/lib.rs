//! A minimal HTTP/1.1 client written directly against TCP sockets.
//!
//! # Overview
//! Shows exactly which bytes go out for a GET or POST and how the reply is
//! taken apart. The request builder and response parser are pure functions
//! over bytes; the transport is the only part that touches the network.
//!
//! # Design
//! - One request per connection, `Connection: close`, read until EOF.
//! - No keep-alive, chunked decoding, redirects or TLS.
//! - `HttpClient` is generic over `Transport` so the request/response cycle can
//!   be exercised without a socket.
//! - Version string, default port and client id live in `ClientConfig` and are
//!   passed in, never global.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod response;
pub mod target;
pub mod transport;

pub use client::{FormArgs, HttpClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::build_message;
pub use target::{encode_form, parse_target, Target};
pub use transport::{TcpTransport, Transport};
