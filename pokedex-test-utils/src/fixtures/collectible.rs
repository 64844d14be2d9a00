use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{PokeballModel, PokemonModel},
    TestContext,
};

impl TestContext {
    pub fn collectible(&self) -> CollectibleFixtures<'_> {
        CollectibleFixtures { context: self }
    }
}

pub struct CollectibleFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> CollectibleFixtures<'a> {
    /// Insert an Electric type pokemon with the provided name.
    pub async fn insert_mock_pokemon(&self, name: &str) -> Result<PokemonModel, TestError> {
        Ok(
            entity::prelude::Pokemon::insert(entity::pokemon::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                pokemon_type: ActiveValue::Set("Electric".to_string()),
                description: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert a pokeball with the provided name and no effect.
    pub async fn insert_mock_pokeball(&self, name: &str) -> Result<PokeballModel, TestError> {
        Ok(
            entity::prelude::Pokeball::insert(entity::pokeball::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                effect: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
