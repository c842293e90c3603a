//! Domain-level error type.
//!
//! Errors are transport agnostic. Inbound adapters decide how each
//! [`ErrorCode`] is surfaced (HTTP status, flash banner, ...).

use std::fmt;

use super::TraceId;

/// Stable machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// A dependency (e.g. the record store) is temporarily unavailable.
    ServiceUnavailable,
    /// An unexpected failure inside the service.
    InternalError,
}

impl ErrorCode {
    /// Snake-case identifier used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::ServiceUnavailable => "service_unavailable",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure returned by domain services.
///
/// `violations` carries every individual validation problem, in rule order,
/// so callers can report all of them at once. It is empty for non-validation
/// failures.
///
/// # Examples
/// ```
/// use school_locator::domain::{Error, ErrorCode};
///
/// let err = Error::validation(vec!["School name is required".to_owned()]);
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// assert_eq!(err.violations(), ["School name is required"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    violations: Vec<String>,
}

impl Error {
    /// Create an error, capturing the trace identifier in scope (if any).
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            violations: Vec::new(),
        }
    }

    /// Validation failure listing every violated rule.
    ///
    /// The message joins the violations with `", "`.
    pub fn validation(violations: Vec<String>) -> Self {
        let message = if violations.is_empty() {
            "invalid request".to_owned()
        } else {
            violations.join(", ")
        };
        let mut error = Self::new(ErrorCode::InvalidRequest, message);
        error.violations = violations;
        error
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Override the trace identifier.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
