//! Error types for the pokedex server application.
//!
//! Each domain (configuration, payload validation, entity lookups, favorites) has its own
//! `thiserror` enum with an `IntoResponse` mapping. They are aggregated into [`Error`], which
//! controllers return so that `?` works across every layer.

pub mod config;
pub mod entity;
pub mod favorite;
pub mod validation;

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, entity::EntityError, favorite::FavoriteError,
        validation::ValidationError,
    },
};

/// Main error type for the pokedex server application.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Validation errors (required payload field missing)
/// - Entity errors (user, pokemon or pokeball not found, email taken)
/// - Favorite errors (duplicate favorite, favorite not found)
/// - Path errors (ID segment is not an integer)
/// - External library errors (database, socket I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A required field was missing from a create payload.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced user or collectible does not exist, or a unique field is taken.
    #[error(transparent)]
    EntityError(#[from] EntityError),
    /// A favorite already exists or does not exist.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// A path ID segment did not parse as an integer.
    #[error(transparent)]
    InvalidPath(#[from] PathRejection),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing required field, email taken, pokemon/pokeball already in favorites
/// - 404 Not Found - Missing user, pokemon, pokeball or favorite, non-integer path ID
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::EntityError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::InvalidPath(err) => {
                tracing::debug!("Rejected path: {}", err);

                error_response(StatusCode::NOT_FOUND, "Not found")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and client-facing message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
