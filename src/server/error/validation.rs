//! Create payload validation errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// A create payload is missing a field the record cannot exist without.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Named field was absent or null.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
