use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoritePokeballModel, FavoritePokemonModel},
    TestContext,
};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { context: self }
    }
}

pub struct FavoriteFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite pokemon row without checking that either side exists.
    pub async fn insert_favorite_pokemon(
        &self,
        user_id: i32,
        pokemon_id: i32,
    ) -> Result<FavoritePokemonModel, TestError> {
        Ok(
            entity::prelude::FavoritePokemon::insert(entity::favorite_pokemon::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                pokemon_id: ActiveValue::Set(pokemon_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a favorite pokeball row without checking that either side exists.
    pub async fn insert_favorite_pokeball(
        &self,
        user_id: i32,
        pokeball_id: i32,
    ) -> Result<FavoritePokeballModel, TestError> {
        Ok(
            entity::prelude::FavoritePokeball::insert(entity::favorite_pokeball::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                pokeball_id: ActiveValue::Set(pokeball_id),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
