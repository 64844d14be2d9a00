//! Collectible item kinds.
//!
//! Pokemon and pokeballs are structurally parallel but stored in separate tables, each with
//! its own favorite join table. `CollectibleKind` names which pair of tables an operation
//! targets.

use std::fmt;

use crate::{
    model::{pokeball::CreatePokeballDto, pokemon::CreatePokemonDto},
    server::error::entity::EntityError,
};

/// The kind of collectible a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    /// A record in the `pokemons` table.
    Pokemon,
    /// A record in the `pokeballs` table.
    Pokeball,
}

impl CollectibleKind {
    /// The not-found error for an item of this kind.
    pub fn not_found(self, item_id: i32) -> EntityError {
        match self {
            Self::Pokemon => EntityError::PokemonNotFound(item_id),
            Self::Pokeball => EntityError::PokeballNotFound(item_id),
        }
    }
}

impl fmt::Display for CollectibleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pokemon => write!(f, "Pokemon"),
            Self::Pokeball => write!(f, "Pokeball"),
        }
    }
}

/// An unvalidated collectible payload for the combined create-and-favorite endpoint.
#[derive(Debug, Clone)]
pub enum NewCollectible {
    /// Body of `POST /users/{id}/pokemons`.
    Pokemon(CreatePokemonDto),
    /// Body of `POST /users/{id}/pokeballs`.
    Pokeball(CreatePokeballDto),
}

impl NewCollectible {
    /// The kind of collectible this payload creates.
    pub fn kind(&self) -> CollectibleKind {
        match self {
            Self::Pokemon(_) => CollectibleKind::Pokemon,
            Self::Pokeball(_) => CollectibleKind::Pokeball,
        }
    }
}
