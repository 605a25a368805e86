#![forbid(unsafe_code)]

//! # Keyline
//!
//! Facade crate bridging a media DRM framework's provisioning and license
//! requests to an HTTP transport.
//!
//! ## Quick start
//!
//! ```ignore
//! use keyline::prelude::*;
//!
//! let options = TransportOptions::new("https://proxy.example/license".parse()?);
//! let callback = LicenseCallback::new(HttpTransport::new(options)?);
//!
//! let license = callback
//!     .execute_key_request(WIDEVINE_UUID, &KeyRequest::new(challenge))
//!     .await?;
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod drm {
    pub use keyline_drm::*;
}

pub mod net {
    pub use keyline_net::*;
}

// ── Prelude ─────────────────────────────────────────────────────────────

pub mod prelude {
    pub use keyline_drm::{
        CallbackError, DrmResult, KeyRequest, KeyRequestType, LicenseCallback, MediaDrmCallback,
        ProvisionRequest,
        scheme::{CLEARKEY_UUID, PLAYREADY_UUID, WIDEVINE_UUID},
    };
    pub use keyline_net::{
        HttpTransport, LicenseTransport, NetError, NetworkResponse, TransportExt,
        TransportOptions,
    };
}
