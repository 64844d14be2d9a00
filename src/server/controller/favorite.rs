//! Endpoints for a user's favorite pokemon and pokeballs.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{
            CollectibleCreatedDto, FavoritePokeballDto, FavoritePokemonDto, UserFavoritesDto,
        },
        pokeball::CreatePokeballDto,
        pokemon::CreatePokemonDto,
    },
    server::{
        controller::extract::IdPath,
        error::Error,
        model::{
            app::AppState,
            collectible::{CollectibleKind, NewCollectible},
        },
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag grouping the favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// Get a user together with their favorite pokemon and pokeballs
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User and favorites", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .list_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Create a pokemon and add it to the user's favorites
#[utoipa::path(
    post,
    path = "/users/{id}/pokemons",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = CreatePokemonDto,
    responses(
        (status = 201, description = "Pokemon created and assigned to user", body = CollectibleCreatedDto),
        (status = 400, description = "Missing name or type", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user_pokemon(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
    Json(payload): Json<CreatePokemonDto>,
) -> Result<impl IntoResponse, Error> {
    create_and_favorite(&state, user_id, NewCollectible::Pokemon(payload)).await
}

/// Create a pokeball and add it to the user's favorites
#[utoipa::path(
    post,
    path = "/users/{id}/pokeballs",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = CreatePokeballDto,
    responses(
        (status = 201, description = "Pokeball created and assigned to user", body = CollectibleCreatedDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user_pokeball(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
    Json(payload): Json<CreatePokeballDto>,
) -> Result<impl IntoResponse, Error> {
    create_and_favorite(&state, user_id, NewCollectible::Pokeball(payload)).await
}

async fn create_and_favorite(
    state: &AppState,
    user_id: i32,
    new_item: NewCollectible,
) -> Result<(StatusCode, Json<CollectibleCreatedDto>), Error> {
    let kind = new_item.kind();
    let txn = state.db.begin().await?;

    let item = FavoriteService::new(&txn)
        .create_item_and_favorite(user_id, new_item)
        .await?;

    txn.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(CollectibleCreatedDto {
            message: format!("{} created and assigned to user", kind),
            item,
        }),
    ))
}

/// Add an existing pokemon to the user's favorites
#[utoipa::path(
    post,
    path = "/users/{id}/favorite/pokemon/{pokemon_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("pokemon_id" = i32, Path, description = "Pokemon ID"),
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoritePokemonDto),
        (status = 400, description = "Pokemon already in favorites", body = ErrorDto),
        (status = 404, description = "User or pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_pokemon(
    State(state): State<AppState>,
    IdPath((user_id, pokemon_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, user_id, CollectibleKind::Pokemon, pokemon_id).await
}

/// Add an existing pokeball to the user's favorites
#[utoipa::path(
    post,
    path = "/users/{id}/favorite/pokeball/{pokeball_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("pokeball_id" = i32, Path, description = "Pokeball ID"),
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoritePokeballDto),
        (status = 400, description = "Pokeball already in favorites", body = ErrorDto),
        (status = 404, description = "User or pokeball not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_pokeball(
    State(state): State<AppState>,
    IdPath((user_id, pokeball_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    add_favorite(&state, user_id, CollectibleKind::Pokeball, pokeball_id).await
}

async fn add_favorite(
    state: &AppState,
    user_id: i32,
    kind: CollectibleKind,
    item_id: i32,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let favorite = FavoriteService::new(&txn)
        .add_favorite(user_id, kind, item_id)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a pokemon from the user's favorites
#[utoipa::path(
    delete,
    path = "/users/{id}/favorite/pokemon/{pokemon_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("pokemon_id" = i32, Path, description = "Pokemon ID"),
    ),
    responses(
        (status = 200, description = "Favorite Pokemon removed", body = MessageDto),
        (status = 404, description = "Favorite Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_pokemon(
    State(state): State<AppState>,
    IdPath((user_id, pokemon_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, user_id, CollectibleKind::Pokemon, pokemon_id).await
}

/// Remove a pokeball from the user's favorites
#[utoipa::path(
    delete,
    path = "/users/{id}/favorite/pokeball/{pokeball_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("pokeball_id" = i32, Path, description = "Pokeball ID"),
    ),
    responses(
        (status = 200, description = "Favorite Pokeball removed", body = MessageDto),
        (status = 404, description = "Favorite Pokeball not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_pokeball(
    State(state): State<AppState>,
    IdPath((user_id, pokeball_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, user_id, CollectibleKind::Pokeball, pokeball_id).await
}

async fn remove_favorite(
    state: &AppState,
    user_id: i32,
    kind: CollectibleKind,
    item_id: i32,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let message = FavoriteService::new(&txn)
        .remove_favorite(user_id, kind, item_id)
        .await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(message)))
}
