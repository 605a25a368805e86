use bytes::Bytes;
use url::form_urlencoded;

/// Query parameter carrying the provisioning request blob.
const SIGNED_REQUEST_PARAM: &str = "signedRequest";

/// Device provisioning request produced by the DRM framework.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionRequest {
    /// Opaque signed blob, appended to the URL as `signedRequest`.
    pub data: Bytes,
    /// Provisioning endpoint suggested by the DRM system.
    pub default_url: String,
}

impl ProvisionRequest {
    pub fn new(data: impl Into<Bytes>, default_url: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            default_url: default_url.into(),
        }
    }

    /// `default_url` followed by `&signedRequest=` and the form-encoded
    /// request data. The default URL is used verbatim.
    pub fn provisioning_url(&self) -> String {
        let signed: String = form_urlencoded::byte_serialize(&self.data).collect();
        format!("{}&{SIGNED_REQUEST_PARAM}={signed}", self.default_url)
    }
}

/// Kind of license exchange a [`KeyRequest`] belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyRequestType {
    #[default]
    Initial,
    Renewal,
    Release,
    /// Framework reports the keys as already loaded. The adapter does not
    /// inspect the type and still posts the payload.
    None,
    Update,
}

/// License (key) request produced by the DRM framework.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRequest {
    /// Opaque challenge, sent verbatim as the POST body.
    pub data: Bytes,
    /// Server URL embedded in the content, if any. Informational only:
    /// key requests always go to the transport's proxy URL.
    pub license_server_url: Option<String>,
    pub request_type: KeyRequestType,
}

impl KeyRequest {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            license_server_url: None,
            request_type: KeyRequestType::default(),
        }
    }

    #[must_use]
    pub fn with_license_server_url(mut self, url: impl Into<String>) -> Self {
        self.license_server_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_request_type(mut self, request_type: KeyRequestType) -> Self {
        self.request_type = request_type;
        self
    }
}
