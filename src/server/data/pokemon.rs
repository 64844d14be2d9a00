//! Pokemon repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::pokemon::UpdatePokemonDto, server::model::input::NewPokemon};

/// Repository for pokemon records
pub struct PokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokemonRepository<'a, C> {
    /// Creates a new instance of [`PokemonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every pokemon ordered by ID
    pub async fn list_all(&self) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a pokemon by ID
    pub async fn get(&self, pokemon_id: i32) -> Result<Option<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find_by_id(pokemon_id)
            .one(self.db)
            .await
    }

    /// Inserts a validated pokemon
    pub async fn create(&self, pokemon: NewPokemon) -> Result<entity::pokemon::Model, DbErr> {
        let pokemon = entity::pokemon::ActiveModel {
            name: ActiveValue::Set(pokemon.name),
            pokemon_type: ActiveValue::Set(pokemon.pokemon_type),
            description: ActiveValue::Set(pokemon.description),
            ..Default::default()
        };

        pokemon.insert(self.db).await
    }

    /// Overwrites the fields present in `changes`, leaving the rest untouched
    ///
    /// Returns `None` if the pokemon does not exist.
    pub async fn update(
        &self,
        pokemon_id: i32,
        changes: &UpdatePokemonDto,
    ) -> Result<Option<entity::pokemon::Model>, DbErr> {
        let pokemon = match entity::prelude::Pokemon::find_by_id(pokemon_id)
            .one(self.db)
            .await?
        {
            Some(pokemon) => pokemon,
            None => return Ok(None),
        };

        let mut pokemon_am = pokemon.clone().into_active_model();
        if let Some(name) = &changes.name {
            pokemon_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(pokemon_type) = &changes.pokemon_type {
            pokemon_am.pokemon_type = ActiveValue::Set(pokemon_type.clone());
        }
        if let Some(description) = &changes.description {
            pokemon_am.description = ActiveValue::Set(Some(description.clone()));
        }

        if !pokemon_am.is_changed() {
            return Ok(Some(pokemon));
        }

        let pokemon = pokemon_am.update(self.db).await?;

        Ok(Some(pokemon))
    }

    /// Deletes a pokemon
    ///
    /// Check [`DeleteResult::rows_affected`] to tell whether the pokemon existed.
    pub async fn delete(&self, pokemon_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pokemon::delete_by_id(pokemon_id)
            .exec(self.db)
            .await
    }
}
