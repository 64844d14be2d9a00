//! Errors for missing users, pokemon and pokeballs, and taken emails.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

/// Errors from looking up or writing user, pokemon and pokeball records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntityError {
    /// No user with this ID.
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    /// No pokemon with this ID.
    #[error("Pokemon ID {0} not found")]
    PokemonNotFound(i32),
    /// No pokeball with this ID.
    #[error("Pokeball ID {0} not found")]
    PokeballNotFound(i32),
    /// Another user already has this email.
    #[error("Email {0:?} is already registered to another user")]
    EmailTaken(String),
}

impl IntoResponse for EntityError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::PokemonNotFound(_) => error_response(StatusCode::NOT_FOUND, "Pokemon not found"),
            Self::PokeballNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Pokeball not found")
            }
            Self::EmailTaken(_) => {
                error_response(StatusCode::BAD_REQUEST, "Email already registered")
            }
        }
    }
}
