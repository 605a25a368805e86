use thiserror::Error;

/// Centralized error type for keyline-net.
///
/// Only transport-level failures live here. A response with an unexpected
/// status is still a successful transport call and is reported as a
/// [`NetworkResponse`](crate::NetworkResponse).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetError {
    #[error("HTTP request failed: {0}")]
    Http(String),
    #[error("Timeout")]
    Timeout,
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl NetError {
    /// Creates a timeout error
    pub fn timeout() -> Self {
        Self::Timeout
    }

    /// Creates an HTTP error from a generic string
    pub fn http<S: Into<String>>(msg: S) -> Self {
        Self::Http(msg.into())
    }

    /// Creates an error from a reqwest error, keeping timeouts distinguishable
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error.to_string())
        }
    }

    /// Checks if this error indicates a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetError::Timeout)
    }
}

impl From<reqwest::Error> for NetError {
    fn from(error: reqwest::Error) -> Self {
        Self::from_reqwest(error)
    }
}

pub type NetResult<T> = Result<T, NetError>;
