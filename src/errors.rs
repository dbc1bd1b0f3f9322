//! Error taxonomy for the personal info exchange.
//!
//! Every failure that crosses the library boundary is an [`OuraError`]. The
//! variant decides the stable [`ErrorKind`] and the HTTP status used by the
//! API layer; `Display` is the message shown to the caller.

use thiserror::Error;

/// Which side of the exchange produced malformed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOrigin {
    Request,
    Response,
}

/// A shape violation, reported at the first offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {}: {path} {expected}", origin_label(.origin))]
pub struct ValidationError {
    pub origin: ValidationOrigin,
    /// JSON path of the offending value, e.g. `$.email`.
    pub path: String,
    /// What the field was expected to be.
    pub expected: String,
}

fn origin_label(origin: &ValidationOrigin) -> &'static str {
    match origin {
        ValidationOrigin::Request => "request",
        ValidationOrigin::Response => "response from Oura API",
    }
}

impl ValidationError {
    pub fn request(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            origin: ValidationOrigin::Request,
            path: path.into(),
            expected: expected.into(),
        }
    }

    pub fn response(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            origin: ValidationOrigin::Response,
            path: path.into(),
            expected: expected.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Upstream,
    Internal,
}

#[derive(Debug, Error)]
pub enum OuraError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Authentication(String),

    #[error("Oura API error: {status}")]
    Upstream { status: u16 },

    /// The inner string is the diagnostic detail for the server log. It is
    /// not part of the caller-visible message.
    #[error("Failed to fetch personal info from Oura API")]
    Internal(String),
}

impl OuraError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Upstream { .. } => ErrorKind::Upstream,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn missing_token() -> Self {
        Self::Authentication("Personal Access Token is required".to_string())
    }

    pub fn invalid_token() -> Self {
        Self::Authentication("Invalid Personal Access Token".to_string())
    }
}
