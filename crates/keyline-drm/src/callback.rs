use async_trait::async_trait;
use bytes::Bytes;
use keyline_net::{LicenseTransport, NetworkResponse};
use tracing::{error, info};
use url::Url;
use uuid::Uuid;

use crate::{
    error::{CallbackError, DrmResult},
    request::{KeyRequest, ProvisionRequest},
    scheme::scheme_name,
};

/// Capability a media DRM framework calls whenever it needs provisioning
/// or license bytes.
#[async_trait]
pub trait MediaDrmCallback: Send + Sync {
    /// # Errors
    ///
    /// Returns [`CallbackError`] if the provisioning server could not be
    /// reached or rejected the request.
    async fn execute_provision_request(
        &self,
        scheme: Uuid,
        request: &ProvisionRequest,
    ) -> DrmResult<Bytes>;

    /// # Errors
    ///
    /// Returns [`CallbackError`] if the license proxy could not be reached
    /// or rejected the request.
    async fn execute_key_request(&self, scheme: Uuid, request: &KeyRequest) -> DrmResult<Bytes>;
}

/// [`MediaDrmCallback`] that forwards requests to a [`LicenseTransport`].
///
/// Holds no mutable state: every call is one independent POST with no
/// retry and no caching. Timeouts belong to the transport.
#[derive(Clone, Debug)]
pub struct LicenseCallback<T> {
    transport: T,
}

fn provisioning_status_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

// Exactly 200, unlike provisioning.
fn key_status_ok(status: u16) -> bool {
    status == 200
}

fn status_error(response: &NetworkResponse, url: String) -> CallbackError {
    let body = (!response.body.is_empty()).then(|| response.body_text());
    CallbackError::http_status(response.status, body, url)
}

impl<T: LicenseTransport> LicenseCallback<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST an empty body to the provisioning URL built from `request`.
    ///
    /// # Errors
    ///
    /// - [`CallbackError::InvalidUrl`] if the built URL does not parse.
    /// - [`CallbackError::HttpStatus`] for any status outside `[200, 300)`.
    /// - [`CallbackError::Transport`] with the transport's own error.
    pub async fn handle_provisioning_request(&self, request: &ProvisionRequest) -> DrmResult<Bytes> {
        let request_url = request.provisioning_url();
        info!(url = %request_url, "executing provisioning request");

        let url = match Url::parse(&request_url) {
            Ok(url) => url,
            Err(e) => {
                error!(url = %request_url, error = %e, "provisioning URL is invalid");
                return Err(CallbackError::InvalidUrl {
                    url: request_url,
                    reason: e.to_string(),
                });
            }
        };

        let response = match self.transport.post_url(url).await {
            Ok(response) => response,
            Err(e) => {
                error!(url = %request_url, error = %e, "provisioning failed");
                return Err(e.into());
            }
        };

        if !provisioning_status_ok(response.status) {
            error!(
                url = %request_url,
                status = response.status,
                "provisioning rejected"
            );
            return Err(status_error(&response, request_url));
        }

        info!(status = response.status, len = response.body.len(), "provisioning request success");
        Ok(response.body)
    }

    /// POST the key request payload to the transport's proxy URL.
    ///
    /// The payload is sent for every
    /// [`KeyRequestType`](crate::KeyRequestType), `None` included. The type
    /// is only logged.
    ///
    /// # Errors
    ///
    /// - [`CallbackError::HttpStatus`] for any status other than `200`.
    /// - [`CallbackError::Transport`] with the transport's own error.
    pub async fn handle_key_request(&self, request: &KeyRequest) -> DrmResult<Bytes> {
        let proxy_url = self.transport.proxy_url();
        info!(
            url = %proxy_url,
            request_type = ?request.request_type,
            license_server_url = request.license_server_url.as_deref(),
            len = request.data.len(),
            "executing key request"
        );

        let response = match self.transport.post_body(request.data.clone()).await {
            Ok(response) => response,
            Err(e) => {
                error!(url = %proxy_url, error = %e, "license request failed");
                return Err(e.into());
            }
        };

        if !key_status_ok(response.status) {
            error!(url = %proxy_url, status = response.status, "license request rejected");
            return Err(status_error(&response, proxy_url.to_string()));
        }

        info!(len = response.body.len(), "license request success");
        Ok(response.body)
    }
}

#[async_trait]
impl<T: LicenseTransport> MediaDrmCallback for LicenseCallback<T> {
    async fn execute_provision_request(
        &self,
        scheme: Uuid,
        request: &ProvisionRequest,
    ) -> DrmResult<Bytes> {
        info!(%scheme, name = scheme_name(scheme), "provision request from DRM framework");
        self.handle_provisioning_request(request).await
    }

    async fn execute_key_request(&self, scheme: Uuid, request: &KeyRequest) -> DrmResult<Bytes> {
        info!(%scheme, name = scheme_name(scheme), "key request from DRM framework");
        self.handle_key_request(request).await
    }
}
