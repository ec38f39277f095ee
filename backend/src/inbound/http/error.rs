//! HTTP mapping for domain errors.
//!
//! The domain error stays transport agnostic; this module chooses the status
//! code, echoes the trace id header and redacts internal messages. It also
//! turns actix extractor failures (bad JSON, bad query string, bad path
//! segment) into the same structured 400 payload.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal("Internal server error");
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(message = self.message(), trace_id = ?self.trace_id(), "request failed");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

fn payload_error(source: &'static str, cause: impl std::fmt::Display) -> actix_web::Error {
    warn!(source, %cause, "rejected malformed request");
    Error::invalid_request(format!("malformed {source}: {cause}"))
        .with_details(json!({ "code": "malformed_payload", "source": source }))
        .into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    payload_error("body", err)
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    payload_error("query", err)
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    payload_error("path", err)
}

/// Extractor configuration registering the structured error handlers.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error));
}
