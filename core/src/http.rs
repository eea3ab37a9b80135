//! HTTP request and response values.
//!
//! # Design
//! These types describe one request/response cycle as plain data. The request
//! builder turns an `HttpRequest` into wire bytes and the response parser turns
//! wire bytes into an `HttpResponse`; neither touches the network.
//!
//! GET carries its arguments in the query string and POST in the body, so an
//! `HttpRequest` never has both populated from the same argument set.

use serde::Serialize;

use crate::target::{encode_form, Target};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub host: String,
    /// `None` means the default port; the `Host` header then omits it.
    pub port: Option<u16>,
    pub path: String,
    /// Already percent-encoded, without the leading `?`.
    pub query: String,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// A GET for `target` with `args` form-encoded onto the URL's own query.
    pub fn get<I, K, V>(target: Target, args: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let encoded = encode_form(args);
        let query = match (target.query.is_empty(), encoded.is_empty()) {
            (_, true) => target.query,
            (true, false) => encoded,
            (false, false) => format!("{}&{encoded}", target.query),
        };
        Self {
            method: HttpMethod::Get,
            host: target.host,
            port: target.port,
            path: target.path,
            query,
            body: Vec::new(),
        }
    }

    /// A POST for `target` with `args` form-encoded into the body. The URL's
    /// own query is dropped: POST data travels only in the body.
    pub fn post<I, K, V>(target: Target, args: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            method: HttpMethod::Post,
            host: target.host,
            port: target.port,
            path: target.path,
            query: String::new(),
            body: encode_form(args).into_bytes(),
        }
    }
}

/// An HTTP response parsed from the raw bytes read off the socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw header lines in arrival order, unparsed.
    pub headers: Vec<String>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(query: &str) -> Target {
        Target {
            host: "localhost".to_string(),
            port: Some(3000),
            path: "/echo".to_string(),
            query: query.to_string(),
        }
    }

    #[test]
    fn get_puts_args_in_query() {
        let req = HttpRequest::get(target(""), [("a", "1"), ("b", "x y")]);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.query, "a=1&b=x+y");
        assert!(req.body.is_empty());
    }

    #[test]
    fn get_appends_args_after_url_query() {
        let req = HttpRequest::get(target("page=2"), [("q", "rust")]);
        assert_eq!(req.query, "page=2&q=rust");
    }

    #[test]
    fn get_without_args_keeps_url_query() {
        let req = HttpRequest::get(target("page=2"), Vec::<(String, String)>::new());
        assert_eq!(req.query, "page=2");
    }

    #[test]
    fn post_puts_args_in_body() {
        let req = HttpRequest::post(target(""), [("name", "Ada Lovelace")]);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body, b"name=Ada+Lovelace");
        assert_eq!(req.query, "");
    }

    #[test]
    fn post_drops_url_query() {
        let req = HttpRequest::post(target("x=1"), [("a", "b")]);
        assert_eq!(req.query, "");
        assert_eq!(req.body, b"a=b");
    }

    #[test]
    fn post_without_args_has_empty_body() {
        let req = HttpRequest::post(target(""), Vec::<(String, String)>::new());
        assert!(req.body.is_empty());
    }
}
