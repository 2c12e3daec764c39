//! OpenAI-style error envelope.

use std::fmt;

use serde::Serialize;

/// HTTP 400.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// HTTP 404.
pub const STATUS_NOT_FOUND: u16 = 404;

/// The `type` field of an error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The request was malformed (HTTP 400).
    InvalidRequestError,
    /// The requested resource does not exist (HTTP 404).
    NotFoundError,
    /// Any other failure.
    ApiError,
}

impl ErrorType {
    /// Maps an HTTP status to the error type clients expect.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            STATUS_BAD_REQUEST => Self::InvalidRequestError,
            STATUS_NOT_FOUND => Self::NotFoundError,
            _ => Self::ApiError,
        }
    }

    /// Returns the wire name of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequestError => "invalid_request_error",
            Self::NotFoundError => "not_found_error",
            Self::ApiError => "api_error",
        }
    }
}

/// The inner `error` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub message: String,
    /// Error category
    #[serde(rename = "type")]
    pub kind: ErrorType,
    /// Offending request parameter, if known
    pub param: Option<String>,
    /// Machine-readable code, if any
    pub code: Option<String>,
}

/// An error response in the OpenAI wire format.
///
/// Serializes as `{"error": {"message", "type", "param", "code"}}`. The HTTP
/// status is carried alongside but not serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// The error body
    pub error: ErrorBody,
    #[serde(skip)]
    status: u16,
}

impl ErrorResponse {
    /// Creates an error response for the given HTTP status.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                kind: ErrorType::from_status(status),
                param: None,
                code: None,
            },
            status,
        }
    }

    /// Creates a 400 `invalid_request_error`.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(STATUS_BAD_REQUEST, message)
    }

    /// Creates a 404 `not_found_error`.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(STATUS_NOT_FOUND, message)
    }

    /// Sets the offending parameter name.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.error.param = Some(param.into());
        self
    }

    /// Returns the HTTP status this error should be sent with.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.status,
            self.error.kind.as_str(),
            self.error.message
        )
    }
}

impl std::error::Error for ErrorResponse {}
