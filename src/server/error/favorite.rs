//! Errors for favorite join records.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::{error::error_response, model::collectible::CollectibleKind};

/// Errors from adding or removing favorites.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FavoriteError {
    /// The exact (user, item) pair is already a favorite.
    #[error("{kind} ID {item_id} is already in favorites for user ID {user_id}")]
    AlreadyFavorite {
        /// Which join table was checked.
        kind: CollectibleKind,
        /// The user the favorite belongs to.
        user_id: i32,
        /// The pokemon or pokeball ID.
        item_id: i32,
    },
    /// No favorite links this user to this item.
    #[error("No favorite {kind} ID {item_id} for user ID {user_id}")]
    FavoriteNotFound {
        /// Which join table was checked.
        kind: CollectibleKind,
        /// The user the favorite belongs to.
        user_id: i32,
        /// The pokemon or pokeball ID.
        item_id: i32,
    },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyFavorite { kind, .. } => error_response(
                StatusCode::BAD_REQUEST,
                format!("{} already in favorites", kind),
            ),
            Self::FavoriteNotFound { kind, .. } => {
                error_response(StatusCode::NOT_FOUND, format!("Favorite {} not found", kind))
            }
        }
    }
}
