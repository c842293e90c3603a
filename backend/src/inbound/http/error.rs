//! HTTP mapping for domain errors.
//!
//! Every failure is rendered as the same JSON envelope:
//! `{"success":false,"code":...,"error":...,"errors":[...],"traceId":...}`.
//! Internal errors are redacted so store details never reach clients.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of any internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Stable machine-readable code, e.g. `invalid_request`.
    #[schema(example = "invalid_request")]
    pub code: String,
    /// Human-readable summary.
    #[schema(example = "Latitude and longitude are required")]
    pub error: String,
    /// Individual validation failures, when there are any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Correlation identifier matching the `trace-id` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        let message = if err.code() == ErrorCode::InternalError {
            INTERNAL_ERROR_MESSAGE.to_owned()
        } else {
            err.message().to_owned()
        };
        Self {
            success: false,
            code: err.code().as_str().to_owned(),
            error: message,
            errors: err.violations().to_vec(),
            trace_id: err.trace_id().map(str::to_owned),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorBody::from(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(INTERNAL_ERROR_MESSAGE)
    }
}

/// Render malformed JSON bodies with the standard envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON payload");
    Error::invalid_request(format!("Invalid JSON body: {err}")).into()
}

/// Render malformed query strings with the standard envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected query string");
    Error::invalid_request(format!("Invalid query string: {err}")).into()
}
