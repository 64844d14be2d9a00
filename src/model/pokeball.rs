use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PokeballDto {
    pub id: i32,
    pub name: String,
    pub effect: Option<String>,
}

impl From<entity::pokeball::Model> for PokeballDto {
    fn from(pokeball: entity::pokeball::Model) -> Self {
        Self {
            id: pokeball.id,
            name: pokeball.name,
            effect: pokeball.effect,
        }
    }
}

/// Body of `POST /pokeballs` and `POST /users/{id}/pokeballs`. `name` is required.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePokeballDto {
    pub name: Option<String>,
    pub effect: Option<String>,
}

/// Body of `PUT /pokeballs/{id}`. Omitted fields keep their stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePokeballDto {
    pub name: Option<String>,
    pub effect: Option<String>,
}
