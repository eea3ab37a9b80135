//! One-shot TCP transport.
//!
//! # Design
//! Each call connects, writes the whole request, reads until the peer closes
//! the connection, and drops the stream. The stream never outlives
//! [`TcpTransport::send`], so it is closed on the success path and on every
//! error path alike.
//!
//! Reading to EOF is the only framing: `Content-Length` and chunked encoding
//! are ignored. A server that keeps the connection open despite
//! `Connection: close` blocks the call until `read_timeout` fires, or forever
//! when no timeout is configured.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Sends a request message and returns the raw response bytes.
pub trait Transport {
    fn send(&self, host: &str, port: u16, message: &[u8]) -> Result<Vec<u8>, ClientError>;
}

/// Blocking transport over `std::net::TcpStream`.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    chunk_size: usize,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl TcpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            chunk_size: config.chunk_size.max(1),
            connect_timeout: config.connect_timeout,
            read_timeout: config.read_timeout,
        }
    }

    fn connect(&self, host: &str, port: u16) -> Result<TcpStream, ClientError> {
        let connection_error = |reason: String| ClientError::Connection {
            host: host.to_string(),
            port,
            reason,
        };

        let addrs: Vec<SocketAddr> = (resolvable(host), port)
            .to_socket_addrs()
            .map_err(|e| connection_error(e.to_string()))?
            .collect();
        if addrs.is_empty() {
            return Err(connection_error("no addresses resolved".to_string()));
        }

        let mut last_error = None;
        for addr in addrs {
            let attempt = match self.connect_timeout {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    tracing::debug!("connect to {addr} failed: {e}");
                    last_error = Some(e);
                }
            }
        }
        Err(connection_error(
            last_error.map(|e| e.to_string()).unwrap_or_default(),
        ))
    }
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Transport for TcpTransport {
    fn send(&self, host: &str, port: u16, message: &[u8]) -> Result<Vec<u8>, ClientError> {
        let mut stream = self.connect(host, port)?;
        tracing::info!("connected to {host} at port {port}");

        stream
            .set_read_timeout(self.read_timeout)
            .map_err(|e| ClientError::Io(e.to_string()))?;
        stream
            .write_all(message)
            .and_then(|()| stream.flush())
            .map_err(|e| ClientError::Io(format!("sending request: {e}")))?;

        let response = read_to_eof(&mut stream, self.chunk_size)
            .map_err(|e| ClientError::Io(format!("reading response: {e}")))?;
        tracing::debug!("read {} bytes from {host}:{port}", response.len());
        Ok(response)
    }
}

/// URL hosts keep IPv6 literals bracketed (`[::1]`); the resolver wants them bare.
fn resolvable(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}

/// Read `chunk_size` bytes at a time until a read returns zero.
pub fn read_to_eof<R: Read>(reader: &mut R, chunk_size: usize) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = vec![0u8; chunk_size.max(1)];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(buffer),
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
