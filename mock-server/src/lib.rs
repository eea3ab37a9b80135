use std::collections::BTreeMap;

use axum::{
    extract::{Path, RawQuery},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Form fields as the server decoded them, in submission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEcho {
    pub fields: Vec<(String, String)>,
}

/// Method, path and reply of every route `app` serves, for the startup log.
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "\"hello\""),
    ("GET", "/echo", "raw query string"),
    ("GET", "/headers", "request headers as JSON"),
    ("POST", "/form", "decoded form fields as JSON"),
    ("GET", "/status/{code}", "\"status {code}\" with that status"),
];

pub fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/echo", get(echo_query))
        .route("/headers", get(echo_headers))
        .route("/form", post(echo_form))
        .route("/status/{code}", get(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn index() -> &'static str {
    "hello"
}

async fn echo_query(RawQuery(query): RawQuery) -> String {
    query.unwrap_or_default()
}

async fn echo_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    Json(header_map(&headers))
}

async fn echo_form(Form(fields): Form<Vec<(String, String)>>) -> Json<FormEcho> {
    Json(FormEcho { fields })
}

async fn status(Path(code): Path<u16>) -> (StatusCode, String) {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, format!("status {code}")),
        Err(_) => (StatusCode::BAD_REQUEST, format!("invalid status {code}")),
    }
}

/// Lower-cased header names mapped to their (last) value.
pub fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}
