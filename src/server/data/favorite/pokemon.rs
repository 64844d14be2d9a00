//! Favorite pokemon join repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Repository for the `favorite_pokemons` join table
pub struct FavoritePokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePokemonRepository<'a, C> {
    /// Creates a new instance of [`FavoritePokemonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a pokemon to a user
    ///
    /// Neither ID is checked for existence here.
    pub async fn create(
        &self,
        user_id: i32,
        pokemon_id: i32,
    ) -> Result<entity::favorite_pokemon::Model, DbErr> {
        let favorite = entity::favorite_pokemon::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            pokemon_id: ActiveValue::Set(pokemon_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Finds the favorite row for a user and pokemon pair, if any
    pub async fn find(
        &self,
        user_id: i32,
        pokemon_id: i32,
    ) -> Result<Option<entity::favorite_pokemon::Model>, DbErr> {
        entity::prelude::FavoritePokemon::find()
            .filter(entity::favorite_pokemon::Column::UserId.eq(user_id))
            .filter(entity::favorite_pokemon::Column::PokemonId.eq(pokemon_id))
            .one(self.db)
            .await
    }

    /// Returns every favorite pokemon row for a user ordered by ID
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_pokemon::Model>, DbErr> {
        entity::prelude::FavoritePokemon::find()
            .filter(entity::favorite_pokemon::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_pokemon::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite row by its own ID
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePokemon::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
