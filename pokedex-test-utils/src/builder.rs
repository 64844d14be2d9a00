//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use crate::{error::TestError, TestContext};
use sea_orm::Schema;

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    include_pokedex_tables: bool,

    // Database fixtures to insert, in this order
    users: Vec<String>,            // emails
    pokemons: Vec<String>,         // names
    pokeballs: Vec<String>,        // names
    favorite_pokemons: Vec<(i32, i32)>,  // (user_id, pokemon_id)
    favorite_pokeballs: Vec<(i32, i32)>, // (user_id, pokeball_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_pokedex_tables: false,
            users: Vec::new(),
            pokemons: Vec::new(),
            pokeballs: Vec::new(),
            favorite_pokemons: Vec::new(),
            favorite_pokeballs: Vec::new(),
        }
    }

    /// Add every pokedex table to the test database.
    ///
    /// Creates User, Pokemon, Pokeball, FavoritePokemon and FavoritePokeball tables along
    /// with the entity indexes, including the unique user/item pair on each favorite table.
    pub fn with_pokedex_tables(mut self) -> Self {
        self.include_pokedex_tables = true;
        self
    }

    /// Insert a mock user with the given email.
    ///
    /// Users are inserted first, so the n-th call yields user ID n.
    pub fn with_mock_user(mut self, email: &str) -> Self {
        self.users.push(email.to_string());
        self
    }

    /// Insert a mock pokemon with the given name.
    pub fn with_mock_pokemon(mut self, name: &str) -> Self {
        self.pokemons.push(name.to_string());
        self
    }

    /// Insert a mock pokeball with the given name.
    pub fn with_mock_pokeball(mut self, name: &str) -> Self {
        self.pokeballs.push(name.to_string());
        self
    }

    /// Insert a favorite pokemon join row.
    pub fn with_favorite_pokemon(mut self, user_id: i32, pokemon_id: i32) -> Self {
        self.favorite_pokemons.push((user_id, pokemon_id));
        self
    }

    /// Insert a favorite pokeball join row.
    pub fn with_favorite_pokeball(mut self, user_id: i32, pokeball_id: i32) -> Self {
        self.favorite_pokeballs.push((user_id, pokeball_id));
        self
    }

    /// Build the test context.
    ///
    /// Creates the in-memory database, then its tables, then inserts fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table or index creation, or a fixture insert, failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables and their indexes
        if self.include_pokedex_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            setup
                .with_tables(vec![
                    schema.create_table_from_entity(entity::prelude::User),
                    schema.create_table_from_entity(entity::prelude::Pokemon),
                    schema.create_table_from_entity(entity::prelude::Pokeball),
                    schema.create_table_from_entity(entity::prelude::FavoritePokemon),
                    schema.create_table_from_entity(entity::prelude::FavoritePokeball),
                ])
                .await?;

            let mut indexes = Vec::new();
            indexes.extend(schema.create_index_from_entity(entity::prelude::FavoritePokemon));
            indexes.extend(schema.create_index_from_entity(entity::prelude::FavoritePokeball));
            setup.with_indexes(indexes).await?;
        }

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_mock_user(&email).await?;
        }

        for name in self.pokemons {
            setup.collectible().insert_mock_pokemon(&name).await?;
        }

        for name in self.pokeballs {
            setup.collectible().insert_mock_pokeball(&name).await?;
        }

        for (user_id, pokemon_id) in self.favorite_pokemons {
            setup
                .favorite()
                .insert_favorite_pokemon(user_id, pokemon_id)
                .await?;
        }

        for (user_id, pokeball_id) in self.favorite_pokeballs {
            setup
                .favorite()
                .insert_favorite_pokeball(user_id, pokeball_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
