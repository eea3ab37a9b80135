//! GET/POST facade over the builder, transport and parser.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and `execute`, which writes it to the transport and parses
//! what comes back. `get`, `post` and `command` chain the two. The client holds
//! no per-request state; every call opens and closes its own connection.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::request::build_message;
use crate::response;
use crate::target::parse_target;
use crate::transport::{TcpTransport, Transport};

/// Form arguments as ordered key/value pairs.
pub type FormArgs = [(String, String)];

/// Synchronous HTTP/1.1 client, one connection per request.
#[derive(Debug, Clone)]
pub struct HttpClient<T: Transport = TcpTransport> {
    config: ClientConfig,
    transport: T,
}

impl HttpClient<TcpTransport> {
    pub fn new(config: ClientConfig) -> Self {
        let transport = TcpTransport::new(&config);
        Self { config, transport }
    }
}

impl Default for HttpClient<TcpTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_get(&self, url: &str, args: Option<&FormArgs>) -> Result<HttpRequest, ClientError> {
        let target = parse_target(url)?;
        Ok(HttpRequest::get(target, pairs(args)))
    }

    pub fn build_post(&self, url: &str, args: Option<&FormArgs>) -> Result<HttpRequest, ClientError> {
        let target = parse_target(url)?;
        Ok(HttpRequest::post(target, pairs(args)))
    }

    /// Send `request` over a fresh connection and parse the reply.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let message = build_message(request, &self.config);
        tracing::info!("request:\n{}", String::from_utf8_lossy(&message));

        let port = request.port.unwrap_or(self.config.default_port);
        let raw = self.transport.send(&request.host, port, &message)?;
        tracing::info!("response:\n{}", String::from_utf8_lossy(&raw));

        response::parse(&raw)
    }

    pub fn get(&self, url: &str, args: Option<&FormArgs>) -> Result<HttpResponse, ClientError> {
        let request = self.build_get(url, args)?;
        self.execute(&request)
    }

    pub fn post(&self, url: &str, args: Option<&FormArgs>) -> Result<HttpResponse, ClientError> {
        let request = self.build_post(url, args)?;
        self.execute(&request)
    }

    /// Dispatch on `method`: exactly `"POST"` posts, anything else is a GET.
    pub fn command(
        &self,
        url: &str,
        method: &str,
        args: Option<&FormArgs>,
    ) -> Result<HttpResponse, ClientError> {
        match dispatch(method) {
            HttpMethod::Post => self.post(url, args),
            HttpMethod::Get => self.get(url, args),
        }
    }
}

fn dispatch(method: &str) -> HttpMethod {
    if method == "POST" {
        HttpMethod::Post
    } else {
        HttpMethod::Get
    }
}

fn pairs(args: Option<&FormArgs>) -> impl Iterator<Item = (&str, &str)> {
    args.unwrap_or_default()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
}
