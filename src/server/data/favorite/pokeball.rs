//! Favorite pokeball join repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Repository for the `favorite_pokeballs` join table
pub struct FavoritePokeballRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoritePokeballRepository<'a, C> {
    /// Creates a new instance of [`FavoritePokeballRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a pokeball to a user
    ///
    /// Neither ID is checked for existence here.
    pub async fn create(
        &self,
        user_id: i32,
        pokeball_id: i32,
    ) -> Result<entity::favorite_pokeball::Model, DbErr> {
        let favorite = entity::favorite_pokeball::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            pokeball_id: ActiveValue::Set(pokeball_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Finds the favorite row for a user and pokeball pair, if any
    pub async fn find(
        &self,
        user_id: i32,
        pokeball_id: i32,
    ) -> Result<Option<entity::favorite_pokeball::Model>, DbErr> {
        entity::prelude::FavoritePokeball::find()
            .filter(entity::favorite_pokeball::Column::UserId.eq(user_id))
            .filter(entity::favorite_pokeball::Column::PokeballId.eq(pokeball_id))
            .one(self.db)
            .await
    }

    /// Returns every favorite pokeball row for a user ordered by ID
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favorite_pokeball::Model>, DbErr> {
        entity::prelude::FavoritePokeball::find()
            .filter(entity::favorite_pokeball::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_pokeball::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a favorite row by its own ID
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoritePokeball::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
