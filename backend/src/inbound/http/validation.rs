//! Shared validation helpers for inbound HTTP adapters.

use chrono::NaiveDate;
use pagination::{DEFAULT_LIMIT, PageParams, PageRequest, PaginationError};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidDate,
    InvalidValue,
    InvalidLimit,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidValue => "invalid_value",
            ErrorCode::InvalidLimit => "invalid_limit",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_value_error(field: FieldName, value: &str, message: &str) -> Error {
    ValidationError::new(field.as_str(), message).with_value(ErrorCode::InvalidValue, value)
}

/// Require a present, non-blank string field.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
        let name = field.as_str();
        ValidationError::new(name, format!("{name} must be a YYYY-MM-DD date"))
            .with_value(ErrorCode::InvalidDate, value)
    })
}

pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    value.map(|raw| parse_date(raw, field)).transpose()
}

/// Validate `limit`/`offset` query parameters, defaulting the limit.
pub(crate) fn page_request(
    limit: Option<usize>,
    offset: Option<usize>,
    default_limit: usize,
) -> Result<PageRequest, Error> {
    PageParams { limit, offset }
        .into_request(default_limit)
        .map_err(|error: PaginationError| {
            ValidationError::new("limit", error.to_string()).with_code(ErrorCode::InvalidLimit)
        })
}

/// [`page_request`] with the shared default page size.
pub(crate) fn default_page_request(
    limit: Option<usize>,
    offset: Option<usize>,
) -> Result<PageRequest, Error> {
    page_request(limit, offset, DEFAULT_LIMIT)
}
