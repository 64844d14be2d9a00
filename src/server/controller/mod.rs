//! HTTP controller endpoints for the pokedex web API.
//!
//! This module contains Axum handlers for users, pokemon, pokeballs and favorites. Each
//! handler maps one route to one service call. Handlers that write open a transaction,
//! hand it to the service and commit on success; returning early through `?` drops the
//! transaction, rolling it back. Handlers are annotated with utoipa for OpenAPI documentation.

pub mod extract;
pub mod favorite;
pub mod pokeball;
pub mod pokemon;
pub mod user;
