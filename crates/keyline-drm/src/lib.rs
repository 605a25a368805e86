#![forbid(unsafe_code)]

//! DRM license and provisioning callback for keyline.
//!
//! A media DRM framework asks for provisioning or license bytes through
//! [`MediaDrmCallback`]. [`LicenseCallback`] answers by issuing one HTTP
//! POST through a [`LicenseTransport`](keyline_net::LicenseTransport),
//! validating the status and returning the raw response body.
//!
//! # Accepted statuses
//!
//! Provisioning accepts any status in `[200, 300)`. Key requests accept
//! exactly `200`.

mod callback;
mod error;
mod request;
pub mod scheme;

pub use callback::{LicenseCallback, MediaDrmCallback};
pub use error::{CallbackError, DrmResult};
pub use request::{KeyRequest, KeyRequestType, ProvisionRequest};
