use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, header::CONTENT_TYPE};
use tracing::debug;
use url::Url;

use crate::{
    error::{NetError, NetResult},
    traits::LicenseTransport,
    types::{Headers, NetworkResponse, TransportOptions},
};

/// `reqwest`-backed [`LicenseTransport`].
#[derive(Clone, Debug)]
pub struct HttpTransport {
    inner: Client,
    options: TransportOptions,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`NetError::Build`] if the `reqwest::Client` cannot be built.
    pub fn new(options: TransportOptions) -> NetResult<Self> {
        let inner = Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(options.pool_max_idle_per_host)
            .build()
            .map_err(|e| NetError::Build(e.to_string()))?;
        Ok(Self { inner, options })
    }

    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    fn apply_headers(mut req: reqwest::RequestBuilder, headers: &Headers) -> reqwest::RequestBuilder {
        for (k, v) in headers.iter() {
            req = req.header(k, v);
        }
        req
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> NetResult<NetworkResponse> {
        let req = Self::apply_headers(req, &self.options.headers);
        let req = req.timeout(self.options.request_timeout);

        let resp = req.send().await.map_err(NetError::from)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(NetError::from)?;

        debug!(status, len = body.len(), "license transport response");
        Ok(NetworkResponse { status, body })
    }
}

#[async_trait]
impl LicenseTransport for HttpTransport {
    async fn post_url(&self, url: Url) -> Result<NetworkResponse, NetError> {
        debug!(%url, "POST with empty body");
        let req = self.inner.post(url).body(Vec::new());
        self.send(req).await
    }

    async fn post_body(&self, body: Bytes) -> Result<NetworkResponse, NetError> {
        debug!(url = %self.options.proxy_url, len = body.len(), "POST payload to proxy");
        let req = self
            .inner
            .post(self.options.proxy_url.clone())
            .header(CONTENT_TYPE, self.options.key_request_content_type.as_str())
            .body(body);
        self.send(req).await
    }

    fn proxy_url(&self) -> Url {
        self.options.proxy_url.clone()
    }
}
