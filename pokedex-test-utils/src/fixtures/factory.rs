//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests of conversions and serialization.

use chrono::NaiveDateTime;

use crate::model::{PokeballModel, PokemonModel, UserModel};

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `id` - The user record ID
/// - `subscription_date` - Fixed timestamp so serialized output is predictable
pub fn mock_user_model(id: i32, subscription_date: NaiveDateTime) -> UserModel {
    UserModel {
        id,
        email: "ash@example.com".to_string(),
        password: Some("pikachu".to_string()),
        first_name: "Ash".to_string(),
        last_name: None,
        age: Some(10),
        gender: None,
        subscription_date,
        is_active: true,
    }
}

/// Create a mock pokemon database model for testing.
pub fn mock_pokemon_model(id: i32) -> PokemonModel {
    PokemonModel {
        id,
        name: "Pikachu".to_string(),
        pokemon_type: "Electric".to_string(),
        description: Some("Mouse pokemon".to_string()),
    }
}

/// Create a mock pokeball database model for testing.
pub fn mock_pokeball_model(id: i32) -> PokeballModel {
    PokeballModel {
        id,
        name: "Ultra Ball".to_string(),
        effect: None,
    }
}
