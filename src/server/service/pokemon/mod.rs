//! Pokemon service layer.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    model::{
        api::MessageDto,
        pokemon::{CreatePokemonDto, PokemonDto, UpdatePokemonDto},
    },
    server::{
        data::pokemon::PokemonRepository,
        error::{entity::EntityError, Error},
        model::input::NewPokemon,
    },
};

/// Service for managing pokemon records.
pub struct PokemonService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokemonService<'a, C> {
    /// Creates a new instance of PokemonService.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Retrieves every pokemon ordered by ID.
    pub async fn list_pokemons(&self) -> Result<Vec<PokemonDto>, Error> {
        let pokemons = PokemonRepository::new(self.db).list_all().await?;

        Ok(pokemons.into_iter().map(PokemonDto::from).collect())
    }

    /// Retrieves a single pokemon, or `EntityError::PokemonNotFound`.
    pub async fn get_pokemon(&self, pokemon_id: i32) -> Result<PokemonDto, Error> {
        let pokemon = PokemonRepository::new(self.db)
            .get(pokemon_id)
            .await?
            .ok_or(EntityError::PokemonNotFound(pokemon_id))?;

        Ok(pokemon.into())
    }

    /// Validates the payload and creates a pokemon.
    ///
    /// # Returns
    /// - `Ok(PokemonDto)` - The created pokemon
    /// - `Err(Error::ValidationError)` - `name` or `type` missing, nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_pokemon(&self, payload: CreatePokemonDto) -> Result<PokemonDto, Error> {
        let new_pokemon = NewPokemon::try_from(payload)?;

        let pokemon = PokemonRepository::new(self.db).create(new_pokemon).await?;

        tracing::info!("Created pokemon ID {}", pokemon.id);

        Ok(pokemon.into())
    }

    /// Applies the provided fields to an existing pokemon.
    pub async fn update_pokemon(
        &self,
        pokemon_id: i32,
        changes: UpdatePokemonDto,
    ) -> Result<PokemonDto, Error> {
        let pokemon = PokemonRepository::new(self.db)
            .update(pokemon_id, &changes)
            .await?
            .ok_or(EntityError::PokemonNotFound(pokemon_id))?;

        tracing::info!("Updated pokemon ID {}", pokemon.id);

        Ok(pokemon.into())
    }

    /// Deletes a pokemon. Favorites referencing it are kept.
    pub async fn delete_pokemon(&self, pokemon_id: i32) -> Result<MessageDto, Error> {
        let result = PokemonRepository::new(self.db).delete(pokemon_id).await?;

        if result.rows_affected == 0 {
            return Err(EntityError::PokemonNotFound(pokemon_id).into());
        }

        tracing::info!("Deleted pokemon ID {}", pokemon_id);

        Ok(MessageDto::new("Pokemon deleted"))
    }
}
