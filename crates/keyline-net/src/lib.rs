#![forbid(unsafe_code)]

//! HTTP transport for DRM license and provisioning requests.
//!
//! [`LicenseTransport`] is the seam the DRM adapter talks to: one call
//! posts an empty body to a per-request URL, the other posts an opaque
//! payload to a preconfigured proxy. [`HttpTransport`] implements it on
//! top of `reqwest`; [`TimeoutTransport`] bounds any implementation.

mod client;
mod error;
mod timeout;
mod traits;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    pub use crate::traits::LicenseTransportMock;
}

pub use crate::{
    client::HttpTransport,
    error::{NetError, NetResult},
    timeout::TimeoutTransport,
    traits::{LicenseTransport, TransportExt},
    types::{Headers, NetworkResponse, TransportOptions},
};
