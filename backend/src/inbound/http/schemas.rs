//! OpenAPI schema definitions for the error payload.
//!
//! `Error` lives in the domain and stays free of utoipa derives; these
//! wrappers register its shape under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or a value cannot be decoded.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The ticket, machine or client does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: maszyna_id")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6f1c2a0e-8c7b-4b8e-9d43-2f0b7f0c9a11")]
    trace_id: Option<String>,
    /// Offending field and validation code, when known.
    details: Option<serde_json::Value>,
}
