//! Pokeball service layer.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    model::{
        api::MessageDto,
        pokeball::{CreatePokeballDto, PokeballDto, UpdatePokeballDto},
    },
    server::{
        data::pokeball::PokeballRepository,
        error::{entity::EntityError, Error},
        model::input::NewPokeball,
    },
};

/// Service for managing pokeball records.
pub struct PokeballService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokeballService<'a, C> {
    /// Creates a new instance of PokeballService.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists every pokeball ordered by ID.
    pub async fn list_pokeballs(&self) -> Result<Vec<PokeballDto>, Error> {
        let pokeballs = PokeballRepository::new(self.db).list_all().await?;

        Ok(pokeballs.into_iter().map(PokeballDto::from).collect())
    }

    /// Gets a pokeball, or `PokeballNotFound`.
    pub async fn get_pokeball(&self, pokeball_id: i32) -> Result<PokeballDto, Error> {
        let pokeball = PokeballRepository::new(self.db)
            .get(pokeball_id)
            .await?
            .ok_or(EntityError::PokeballNotFound(pokeball_id))?;

        Ok(pokeball.into())
    }

    /// Validates the payload and creates a pokeball.
    ///
    /// Fails with `ValidationError` before any write when `name` is missing.
    pub async fn create_pokeball(
        &self,
        payload: CreatePokeballDto,
    ) -> Result<PokeballDto, Error> {
        let new_pokeball = NewPokeball::try_from(payload)?;

        let pokeball = PokeballRepository::new(self.db).create(new_pokeball).await?;

        tracing::info!("Created pokeball ID {}", pokeball.id);

        Ok(pokeball.into())
    }

    /// Applies the fields present in `changes`, leaving the rest as stored.
    pub async fn update_pokeball(
        &self,
        pokeball_id: i32,
        changes: UpdatePokeballDto,
    ) -> Result<PokeballDto, Error> {
        let pokeball = PokeballRepository::new(self.db)
            .update(pokeball_id, &changes)
            .await?
            .ok_or(EntityError::PokeballNotFound(pokeball_id))?;

        tracing::info!("Updated pokeball ID {}", pokeball.id);

        Ok(pokeball.into())
    }

    /// Deletes a pokeball. Favorites pointing at it are kept.
    pub async fn delete_pokeball(&self, pokeball_id: i32) -> Result<MessageDto, Error> {
        let result = PokeballRepository::new(self.db).delete(pokeball_id).await?;

        if result.rows_affected == 0 {
            return Err(EntityError::PokeballNotFound(pokeball_id).into());
        }

        tracing::info!("Deleted pokeball ID {}", pokeball_id);

        Ok(MessageDto::new("Pokeball deleted"))
    }
}
