use std::{collections::HashMap, time::Duration};

use bytes::Bytes;
use url::Url;

#[derive(Clone, Debug, PartialEq)]
pub struct Headers {
    inner: HashMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for Headers {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, String>> for Headers {
    fn from(map: HashMap<String, String>) -> Self {
        Self { inner: map }
    }
}

/// Status code and body of one POST round trip.
///
/// Produced per call and handed to the caller as-is; no status is
/// interpreted here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkResponse {
    pub status: u16,
    pub body: Bytes,
}

impl NetworkResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub const DEFAULT_KEY_REQUEST_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Clone, Debug)]
pub struct TransportOptions {
    /// Endpoint receiving key request payloads.
    pub proxy_url: Url,
    pub request_timeout: Duration,
    /// Max idle connections per host. Set to 0 to disable pooling.
    pub pool_max_idle_per_host: usize,
    /// `Content-Type` sent with key request payloads.
    pub key_request_content_type: String,
    /// Sent with every request.
    pub headers: Headers,
}

impl TransportOptions {
    pub fn new(proxy_url: Url) -> Self {
        Self {
            proxy_url,
            request_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 0,
            key_request_content_type: DEFAULT_KEY_REQUEST_CONTENT_TYPE.to_string(),
            headers: Headers::new(),
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    #[must_use]
    pub fn with_key_request_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.key_request_content_type = content_type.into();
        self
    }

    #[must_use]
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.insert(key, value);
        self
    }
}
