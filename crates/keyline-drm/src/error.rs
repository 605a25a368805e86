#![forbid(unsafe_code)]

use keyline_net::NetError;
use thiserror::Error;

/// Failure of a provisioning or key request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CallbackError {
    /// The server answered with a status outside the accepted range.
    #[error("Response code: {status} for URL: {url}")]
    HttpStatus {
        status: u16,
        /// Response body text, `None` when the body was empty.
        body: Option<String>,
        url: String,
    },

    #[error("Invalid provisioning URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure, exactly as the transport reported it.
    #[error(transparent)]
    Transport(#[from] NetError),
}

impl CallbackError {
    pub fn http_status(status: u16, body: Option<String>, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body,
            url: url.into(),
        }
    }

    /// Gets the HTTP status code if this is a status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Target URL, when the failure is tied to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { url, .. } | Self::InvalidUrl { url, .. } => Some(url),
            Self::Transport(_) => None,
        }
    }

    pub fn transport_error(&self) -> Option<&NetError> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

pub type DrmResult<T> = Result<T, CallbackError>;
