//! URL parsing and form encoding, delegated to the `url` crate.

use url::form_urlencoded;
use url::Url;

use crate::error::ClientError;

/// Where a request goes, as extracted from an `http://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    /// `None` when the URL names no port or names the scheme default.
    pub port: Option<u16>,
    pub path: String,
    /// The URL's own query, without the leading `?`.
    pub query: String,
}

/// Parse `raw` into a [`Target`]. Only plain `http` is supported.
pub fn parse_target(raw: &str) -> Result<Target, ClientError> {
    let url = Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.scheme() != "http" {
        return Err(ClientError::InvalidUrl(format!(
            "{raw}: unsupported scheme {:?}",
            url.scheme()
        )));
    }
    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ClientError::InvalidUrl(format!("{raw}: missing host")))?;

    Ok(Target {
        host: host.to_string(),
        port: url.port(),
        path: url.path().to_string(),
        query: url.query().unwrap_or_default().to_string(),
    })
}

/// Percent-encode `pairs` as `key=value&key=value`, spaces as `+`.
pub fn encode_form<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}
