use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::{error::NetError, traits::LicenseTransport, types::NetworkResponse};

/// Timeout decorator for [`LicenseTransport`] implementations
pub struct TimeoutTransport<T> {
    inner: T,
    timeout: Duration,
}

impl<T: LicenseTransport> TimeoutTransport<T> {
    pub fn new(inner: T, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: LicenseTransport> LicenseTransport for TimeoutTransport<T> {
    async fn post_url(&self, url: Url) -> Result<NetworkResponse, NetError> {
        tokio::time::timeout(self.timeout, self.inner.post_url(url))
            .await
            .map_err(|_| NetError::timeout())?
    }

    async fn post_body(&self, body: Bytes) -> Result<NetworkResponse, NetError> {
        tokio::time::timeout(self.timeout, self.inner.post_body(body))
            .await
            .map_err(|_| NetError::timeout())?
    }

    fn proxy_url(&self) -> Url {
        self.inner.proxy_url()
    }
}
