use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
#[cfg(any(test, feature = "test-utils"))]
use unimock::unimock;
use url::Url;

use crate::{error::NetError, timeout::TimeoutTransport, types::NetworkResponse};

/// HTTP boundary used by the DRM adapter.
///
/// Implementations report every HTTP status as a [`NetworkResponse`];
/// only I/O level failures become [`NetError`].
#[cfg_attr(
    any(test, feature = "test-utils"),
    unimock(api = LicenseTransportMock)
)]
#[async_trait]
pub trait LicenseTransport: Send + Sync {
    /// POST an empty body to `url`.
    async fn post_url(&self, url: Url) -> Result<NetworkResponse, NetError>;

    /// POST `body` to the configured proxy URL.
    async fn post_body(&self, body: Bytes) -> Result<NetworkResponse, NetError>;

    /// Endpoint that [`post_body`](Self::post_body) targets.
    fn proxy_url(&self) -> Url;
}

pub trait TransportExt: LicenseTransport + Sized {
    /// Add timeout layer
    fn with_timeout(self, timeout: Duration) -> TimeoutTransport<Self> {
        TimeoutTransport::new(self, timeout)
    }
}

impl<T: LicenseTransport> TransportExt for T {}
