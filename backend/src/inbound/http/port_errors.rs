//! Mapping from port errors to the API error payload.
//!
//! Storage failures become redacted internal errors; the detail is logged
//! by the error responder and never reaches clients.

use crate::domain::Error;
use crate::domain::ports::{
    ContactRepositoryError, ReportCatalogueError, SubmissionRepositoryError, UserRepositoryError,
};

pub(crate) fn map_contact_error(error: ContactRepositoryError) -> Error {
    match error {
        ContactRepositoryError::NotFound { id } => {
            Error::not_found(format!("contact {id} not found"))
        }
        ContactRepositoryError::Rejected { message } => Error::invalid_request(message),
        ContactRepositoryError::Storage { message } => {
            Error::internal(format!("contact repository error: {message}"))
        }
    }
}

pub(crate) fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::NotFound { id } => Error::not_found(format!("user {id} not found")),
        UserRepositoryError::Conflict { contact_id } => Error::conflict(format!(
            "user already exists for contact {contact_id}"
        )),
        UserRepositoryError::Rejected { message } => Error::invalid_request(message),
        UserRepositoryError::Storage { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

pub(crate) fn map_report_error(error: ReportCatalogueError) -> Error {
    match error {
        ReportCatalogueError::Storage { message } => {
            Error::internal(format!("report catalogue error: {message}"))
        }
    }
}

pub(crate) fn map_submission_error(error: SubmissionRepositoryError) -> Error {
    match error {
        SubmissionRepositoryError::Storage { message } => {
            Error::internal(format!("submission repository error: {message}"))
        }
    }
}
