use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PokemonDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub pokemon_type: String,
    pub description: Option<String>,
}

impl From<entity::pokemon::Model> for PokemonDto {
    fn from(pokemon: entity::pokemon::Model) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name,
            pokemon_type: pokemon.pokemon_type,
            description: pokemon.description,
        }
    }
}

/// Body of `POST /pokemons` and `POST /users/{id}/pokemons`. `name` and `type` are required.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePokemonDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pokemon_type: Option<String>,
    pub description: Option<String>,
}

/// Body of `PUT /pokemons/{id}`. Omitted fields keep their stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePokemonDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pokemon_type: Option<String>,
    pub description: Option<String>,
}
