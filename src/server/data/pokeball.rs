//! Pokeball repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::pokeball::UpdatePokeballDto, server::model::input::NewPokeball};

/// Repository for pokeball records
pub struct PokeballRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokeballRepository<'a, C> {
    /// Creates a new instance of [`PokeballRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every pokeball ordered by ID
    pub async fn list_all(&self) -> Result<Vec<entity::pokeball::Model>, DbErr> {
        entity::prelude::Pokeball::find()
            .order_by_asc(entity::pokeball::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a pokeball by ID
    pub async fn get(&self, pokeball_id: i32) -> Result<Option<entity::pokeball::Model>, DbErr> {
        entity::prelude::Pokeball::find_by_id(pokeball_id)
            .one(self.db)
            .await
    }

    /// Inserts a validated pokeball
    pub async fn create(&self, pokeball: NewPokeball) -> Result<entity::pokeball::Model, DbErr> {
        let pokeball = entity::pokeball::ActiveModel {
            name: ActiveValue::Set(pokeball.name),
            effect: ActiveValue::Set(pokeball.effect),
            ..Default::default()
        };

        pokeball.insert(self.db).await
    }

    /// Overwrites the fields present in `changes`, leaving the rest untouched
    ///
    /// Returns `None` if the pokeball does not exist.
    pub async fn update(
        &self,
        pokeball_id: i32,
        changes: &UpdatePokeballDto,
    ) -> Result<Option<entity::pokeball::Model>, DbErr> {
        let pokeball = match entity::prelude::Pokeball::find_by_id(pokeball_id)
            .one(self.db)
            .await?
        {
            Some(pokeball) => pokeball,
            None => return Ok(None),
        };

        let mut pokeball_am = pokeball.clone().into_active_model();
        if let Some(name) = &changes.name {
            pokeball_am.name = ActiveValue::Set(name.clone());
        }
        if let Some(effect) = &changes.effect {
            pokeball_am.effect = ActiveValue::Set(Some(effect.clone()));
        }

        if !pokeball_am.is_changed() {
            return Ok(Some(pokeball));
        }

        let pokeball = pokeball_am.update(self.db).await?;

        Ok(Some(pokeball))
    }

    /// Deletes a pokeball
    ///
    /// Check [`DeleteResult::rows_affected`] to tell whether the pokeball existed.
    pub async fn delete(&self, pokeball_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pokeball::delete_by_id(pokeball_id)
            .exec(self.db)
            .await
    }
}
