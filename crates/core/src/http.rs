//! Pure request and response shaping for `fetch_with_option`.
//!
//! Nothing here touches the network. The shell crate sends the merged headers
//! through its transport and hands the raw response back to
//! [`interpret_response`].

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_METHOD: &str = "GET";

/// Request description: `{ url, headers, method?, body? }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Status code and undecoded body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Default `Content-Type: application/json` overlaid with the caller's headers.
///
/// Caller headers win on collision. Names compare case-insensitively, and the
/// caller's spelling of the name is kept.
pub fn merged_headers(request: &HttpRequest) -> Vec<(String, String)> {
    let mut merged = vec![("Content-Type".to_string(), DEFAULT_CONTENT_TYPE.to_string())];

    for (name, value) in &request.headers {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => *slot = (name.clone(), value.clone()),
            None => merged.push((name.clone(), value.clone())),
        }
    }

    merged
}

/// Upper-cased request method, `GET` when unset or blank.
pub fn request_method(request: &HttpRequest) -> String {
    request
        .method
        .as_deref()
        .map(str::trim)
        .filter(|method| !method.is_empty())
        .map(str::to_ascii_uppercase)
        .unwrap_or_else(|| DEFAULT_METHOD.to_string())
}

/// Check the status and decode the body as JSON.
pub fn interpret_response<T: DeserializeOwned>(response: &RawResponse) -> Result<T, Error> {
    if !(200..=299).contains(&response.status) {
        return Err(Error::Status(response.status));
    }

    serde_json::from_slice(&response.body).map_err(|e| Error::Parse(e.to_string()))
}

/// Parse a `Name: value` header line, as given on a command line.
pub fn parse_header_line(line: &str) -> Result<(String, String), Error> {
    let (name, value) = line
        .split_once(':')
        .ok_or_else(|| Error::InvalidHeader(format!("expected 'Name: value', got '{line}'")))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidHeader(format!("empty header name in '{line}'")));
    }

    Ok((name.to_string(), value.trim().to_string()))
}
