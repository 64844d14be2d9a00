//! Pokeball CRUD endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pokeball::{CreatePokeballDto, PokeballDto, UpdatePokeballDto},
    },
    server::{
        controller::extract::IdPath, error::Error, model::app::AppState,
        service::pokeball::PokeballService,
    },
};

/// OpenAPI tag grouping the pokeball routes
pub static POKEBALL_TAG: &str = "pokeball";

/// List all pokeballs
#[utoipa::path(
    get,
    path = "/pokeballs",
    tag = POKEBALL_TAG,
    responses(
        (status = 200, description = "Every pokeball ordered by ID", body = Vec<PokeballDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pokeballs(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let pokeballs = PokeballService::new(&state.db).list_pokeballs().await?;

    Ok((StatusCode::OK, Json(pokeballs)))
}

/// Create a pokeball
///
/// `name` is required.
#[utoipa::path(
    post,
    path = "/pokeballs",
    tag = POKEBALL_TAG,
    request_body = CreatePokeballDto,
    responses(
        (status = 201, description = "Pokeball created", body = PokeballDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pokeball(
    State(state): State<AppState>,
    Json(payload): Json<CreatePokeballDto>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let pokeball = PokeballService::new(&txn).create_pokeball(payload).await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(pokeball)))
}

/// Get a pokeball by ID
#[utoipa::path(
    get,
    path = "/pokeballs/{id}",
    tag = POKEBALL_TAG,
    params(("id" = i32, Path, description = "Pokeball ID")),
    responses(
        (status = 200, description = "Pokeball found", body = PokeballDto),
        (status = 404, description = "Pokeball not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokeball(
    State(state): State<AppState>,
    IdPath(pokeball_id): IdPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokeball = PokeballService::new(&state.db).get_pokeball(pokeball_id).await?;

    Ok((StatusCode::OK, Json(pokeball)))
}

/// Update a pokeball
///
/// Omitted or null fields keep their stored value.
#[utoipa::path(
    put,
    path = "/pokeballs/{id}",
    tag = POKEBALL_TAG,
    params(("id" = i32, Path, description = "Pokeball ID")),
    request_body = UpdatePokeballDto,
    responses(
        (status = 200, description = "Pokeball updated", body = PokeballDto),
        (status = 404, description = "Pokeball not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pokeball(
    State(state): State<AppState>,
    IdPath(pokeball_id): IdPath<i32>,
    Json(changes): Json<UpdatePokeballDto>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let pokeball = PokeballService::new(&txn)
        .update_pokeball(pokeball_id, changes)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(pokeball)))
}

/// Delete a pokeball
#[utoipa::path(
    delete,
    path = "/pokeballs/{id}",
    tag = POKEBALL_TAG,
    params(("id" = i32, Path, description = "Pokeball ID")),
    responses(
        (status = 200, description = "Pokeball deleted", body = MessageDto),
        (status = 404, description = "Pokeball not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pokeball(
    State(state): State<AppState>,
    IdPath(pokeball_id): IdPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let message = PokeballService::new(&txn).delete_pokeball(pokeball_id).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(message)))
}
