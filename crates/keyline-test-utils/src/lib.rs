#![forbid(unsafe_code)]
#![expect(
    clippy::expect_used,
    reason = "test utility crate — panics on setup failure are acceptable"
)]

//! Shared test utilities for the keyline workspace.

pub mod license_server;

pub use license_server::{LicenseServer, RecordedRequest, SLOW_RESPONSE_DELAY, license_router};
