//! Request message builder.
//!
//! Produces the exact bytes written to the socket: request line, a fixed set
//! of headers in a fixed order, the blank line, then the body.

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest};

const CRLF: &str = "\r\n";

/// Assemble the wire form of `request`.
pub fn build_message(request: &HttpRequest, config: &ClientConfig) -> Vec<u8> {
    let mut head = request_line(request, config);
    head.push_str(&headers(request, config).join(CRLF));
    head.push_str(CRLF);
    head.push_str(CRLF);

    let mut message = head.into_bytes();
    message.extend_from_slice(&request.body);
    message
}

fn request_line(request: &HttpRequest, config: &ClientConfig) -> String {
    let path = if request.path.is_empty() { "/" } else { request.path.as_str() };
    // only GET carries data in the query; POST data travels in the body
    if request.method != HttpMethod::Get || request.query.is_empty() {
        format!("{} {path} {}{CRLF}", request.method.as_str(), config.http_version)
    } else {
        format!(
            "{} {path}?{} {}{CRLF}",
            request.method.as_str(),
            request.query,
            config.http_version
        )
    }
}

fn headers(request: &HttpRequest, config: &ClientConfig) -> Vec<String> {
    let mut headers = vec![
        "Accept: */*".to_string(),
        "Connection: close".to_string(),
        format!("Content-Length: {}", request.body.len()),
        "Upgrade-Insecure-Requests: 1".to_string(),
        format!("Server: {}", config.client_id),
    ];
    headers.push(match request.port {
        None => format!("Host: {}", request.host),
        Some(port) => format!("Host: {}:{port}", request.host),
    });
    if request.method == HttpMethod::Post {
        headers.push("Content-Type: application/x-www-form-urlencoded".to_string());
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: HttpMethod, port: Option<u16>, path: &str, query: &str, body: &[u8]) -> HttpRequest {
        HttpRequest {
            method,
            host: "example.com".to_string(),
            port,
            path: path.to_string(),
            query: query.to_string(),
            body: body.to_vec(),
        }
    }

    fn build(req: &HttpRequest) -> String {
        String::from_utf8(build_message(req, &ClientConfig::default())).unwrap()
    }

    #[test]
    fn get_message_is_byte_exact() {
        let msg = build(&request(HttpMethod::Get, None, "/index.html", "", b""));
        assert_eq!(
            msg,
            "GET /index.html HTTP/1.1\r\n\
             Accept: */*\r\n\
             Connection: close\r\n\
             Content-Length: 0\r\n\
             Upgrade-Insecure-Requests: 1\r\n\
             Server: rawhttp\r\n\
             Host: example.com\r\n\
             \r\n"
        );
    }

    #[test]
    fn post_message_is_byte_exact() {
        let msg = build(&request(HttpMethod::Post, Some(8080), "/form", "", b"a=1&b=x+y"));
        assert_eq!(
            msg,
            "POST /form HTTP/1.1\r\n\
             Accept: */*\r\n\
             Connection: close\r\n\
             Content-Length: 9\r\n\
             Upgrade-Insecure-Requests: 1\r\n\
             Server: rawhttp\r\n\
             Host: example.com:8080\r\n\
             Content-Type: application/x-www-form-urlencoded\r\n\
             \r\n\
             a=1&b=x+y"
        );
    }

    #[test]
    fn empty_path_defaults_to_root() {
        let msg = build(&request(HttpMethod::Get, None, "", "", b""));
        assert!(msg.starts_with("GET / HTTP/1.1\r\n"));
    }

    #[test]
    fn query_is_appended_after_question_mark() {
        let msg = build(&request(HttpMethod::Get, None, "/echo", "a=1&b=x+y", b""));
        assert!(msg.starts_with("GET /echo?a=1&b=x+y HTTP/1.1\r\n"));
    }

    #[test]
    fn post_never_writes_a_query() {
        let msg = build(&request(HttpMethod::Post, None, "/p", "x=1", b""));
        assert!(msg.starts_with("POST /p HTTP/1.1\r\n"));
    }

    #[test]
    fn content_length_counts_utf8_bytes() {
        let body = "name=J%C3%BCrgen é".as_bytes();
        let msg = build(&request(HttpMethod::Post, None, "/", "", body));
        assert!(msg.contains(&format!("Content-Length: {}\r\n", body.len())));
        assert_eq!(body.len(), 19);
    }

    #[test]
    fn exactly_one_blank_line_before_body() {
        let msg = build(&request(HttpMethod::Post, None, "/", "", b"x=1"));
        let (head, body) = msg.split_once("\r\n\r\n").unwrap();
        assert!(!head.contains("\r\n\r\n"));
        assert_eq!(body, "x=1");
    }

    #[test]
    fn get_has_no_content_type() {
        let msg = build(&request(HttpMethod::Get, None, "/", "", b""));
        assert!(!msg.contains("Content-Type"));
    }

    #[test]
    fn config_controls_version_and_client_id() {
        let config = ClientConfig {
            http_version: "HTTP/1.0".to_string(),
            ..ClientConfig::default().with_client_id("tester/2")
        };
        let req = request(HttpMethod::Get, None, "/", "", b"");
        let msg = String::from_utf8(build_message(&req, &config)).unwrap();
        assert!(msg.starts_with("GET / HTTP/1.0\r\n"));
        assert!(msg.contains("Server: tester/2\r\n"));
    }
}
