//! Response message parser.
//!
//! The raw response is treated as text split on line boundaries. Only two
//! things are located: the numeric token on the status line and the first
//! empty line. Header values are never interpreted, so `Content-Length` and
//! `Transfer-Encoding` have no effect on what is returned as the body.

use crate::error::ClientError;
use crate::http::HttpResponse;

/// Parse a complete response read off the socket.
pub fn parse(raw: &[u8]) -> Result<HttpResponse, ClientError> {
    let text = String::from_utf8_lossy(raw);
    Ok(HttpResponse {
        status: parse_status(&text)?,
        headers: parse_headers(&text)?,
        body: parse_body(&text)?,
    })
}

/// The first all-digit token on the first line.
pub fn parse_status(raw: &str) -> Result<u16, ClientError> {
    let status_line = raw
        .lines()
        .next()
        .ok_or_else(|| ClientError::MalformedResponse("empty response".to_string()))?;

    let token = status_line
        .split_whitespace()
        .find(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| {
            ClientError::MalformedResponse(format!("no status code in {status_line:?}"))
        })?;

    token.parse::<u16>().map_err(|_| {
        ClientError::MalformedResponse(format!("status code {token} out of range"))
    })
}

/// Header lines strictly between the status line and the first empty line.
pub fn parse_headers(raw: &str) -> Result<Vec<String>, ClientError> {
    let lines: Vec<&str> = raw.lines().collect();
    let separator = find_separator(&lines)?;
    let headers = lines.get(1..separator).unwrap_or_default();
    Ok(headers.iter().map(|line| line.to_string()).collect())
}

/// Lines after the first empty line, rejoined with CRLF.
pub fn parse_body(raw: &str) -> Result<String, ClientError> {
    let lines: Vec<&str> = raw.lines().collect();
    let separator = find_separator(&lines)?;
    Ok(lines[separator + 1..].join("\r\n"))
}

fn find_separator(lines: &[&str]) -> Result<usize, ClientError> {
    lines
        .iter()
        .position(|line| line.is_empty())
        .ok_or(ClientError::MissingSeparator)
}
