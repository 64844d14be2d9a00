//! Pokemon CRUD endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pokemon::{CreatePokemonDto, PokemonDto, UpdatePokemonDto},
    },
    server::{
        controller::extract::IdPath, error::Error, model::app::AppState,
        service::pokemon::PokemonService,
    },
};

/// OpenAPI tag grouping the pokemon routes
pub static POKEMON_TAG: &str = "pokemon";

/// List all pokemons
#[utoipa::path(
    get,
    path = "/pokemons",
    tag = POKEMON_TAG,
    responses(
        (status = 200, description = "Every pokemon ordered by ID", body = Vec<PokemonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pokemons(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let pokemons = PokemonService::new(&state.db).list_pokemons().await?;

    Ok((StatusCode::OK, Json(pokemons)))
}

/// Create a pokemon
///
/// `name` and `type` are required.
#[utoipa::path(
    post,
    path = "/pokemons",
    tag = POKEMON_TAG,
    request_body = CreatePokemonDto,
    responses(
        (status = 201, description = "Pokemon created", body = PokemonDto),
        (status = 400, description = "Missing name/type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pokemon(
    State(state): State<AppState>,
    Json(payload): Json<CreatePokemonDto>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let pokemon = PokemonService::new(&txn).create_pokemon(payload).await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(pokemon)))
}

/// Get a pokemon by ID
#[utoipa::path(
    get,
    path = "/pokemons/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Pokemon found", body = PokemonDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    IdPath(pokemon_id): IdPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon = PokemonService::new(&state.db).get_pokemon(pokemon_id).await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

/// Update a pokemon
///
/// Omitted or null fields keep their stored value.
#[utoipa::path(
    put,
    path = "/pokemons/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    request_body = UpdatePokemonDto,
    responses(
        (status = 200, description = "Pokemon updated", body = PokemonDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pokemon(
    State(state): State<AppState>,
    IdPath(pokemon_id): IdPath<i32>,
    Json(changes): Json<UpdatePokemonDto>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let pokemon = PokemonService::new(&txn)
        .update_pokemon(pokemon_id, changes)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

/// Delete a pokemon
#[utoipa::path(
    delete,
    path = "/pokemons/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Pokemon deleted", body = MessageDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pokemon(
    State(state): State<AppState>,
    IdPath(pokemon_id): IdPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let message = PokemonService::new(&txn).delete_pokemon(pokemon_id).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(message)))
}
