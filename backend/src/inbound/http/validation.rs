//! Boundary validation helpers for the HTTP adapter.
//!
//! Every failure becomes `invalid_request` with
//! `details: {"field": ..., "code": ...}` so clients can highlight the input.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    BlankField,
    InvalidDate,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::BlankField => "blank_field",
            Self::InvalidDate => "invalid_date",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

/// Error for a value the domain rejected, e.g. a blank client name.
pub(crate) fn blank_field_error(field: FieldName, reason: impl std::fmt::Display) -> Error {
    field_error(field, ValidationCode::BlankField, reason.to_string())
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("{name} must be a date in YYYY-MM-DD format")).with_details(
        json!({
            "field": name,
            "value": value,
            "code": ValidationCode::InvalidDate.as_str(),
        }),
    )
}

/// Unwrap a required field; absent and blank text both count as missing.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_date(value: &str, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| invalid_date_error(field, value))
}

/// Optional date where blank text means "no date".
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => parse_date(&text, field).map(Some),
        _ => Ok(None),
    }
}
