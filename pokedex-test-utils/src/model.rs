//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main pokedex crate so fixtures and tests read the same.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for pokemon database model.
pub type PokemonModel = entity::pokemon::Model;

/// Type alias for pokeball database model.
pub type PokeballModel = entity::pokeball::Model;

/// Type alias for favorite pokemon join model.
pub type FavoritePokemonModel = entity::favorite_pokemon::Model;

/// Type alias for favorite pokeball join model.
pub type FavoritePokeballModel = entity::favorite_pokeball::Model;
