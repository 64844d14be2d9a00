use serde::{Deserialize, Serialize};

use crate::model::{pokeball::PokeballDto, pokemon::PokemonDto, user::UserDto};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePokemonDto {
    pub id: i32,
    pub user_id: i32,
    pub pokemon_id: i32,
}

impl From<entity::favorite_pokemon::Model> for FavoritePokemonDto {
    fn from(favorite: entity::favorite_pokemon::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            pokemon_id: favorite.pokemon_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePokeballDto {
    pub id: i32,
    pub user_id: i32,
    pub pokeball_id: i32,
}

impl From<entity::favorite_pokeball::Model> for FavoritePokeballDto {
    fn from(favorite: entity::favorite_pokeball::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            pokeball_id: favorite.pokeball_id,
        }
    }
}

/// A single favorite join record of either kind, serialized as the bare record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum FavoriteDto {
    Pokemon(FavoritePokemonDto),
    Pokeball(FavoritePokeballDto),
}

/// A newly created collectible, keyed by its kind (`"pokemon"` or `"pokeball"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CollectibleDto {
    Pokemon(PokemonDto),
    Pokeball(PokeballDto),
}

/// Response of `POST /users/{id}/pokemons` and `POST /users/{id}/pokeballs`.
///
/// The item is flattened next to the message, so a pokemon reads
/// `{"message": "...", "pokemon": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CollectibleCreatedDto {
    pub message: String,
    #[serde(flatten)]
    pub item: CollectibleDto,
}

/// Response of `GET /users/{id}/favorites`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub user: UserDto,
    pub favorite_pokemons: Vec<FavoritePokemonDto>,
    pub favorite_pokeballs: Vec<FavoritePokeballDto>,
}
