pub use super::favorite_pokeball::Entity as FavoritePokeball;
pub use super::favorite_pokemon::Entity as FavoritePokemon;
pub use super::pokeball::Entity as Pokeball;
pub use super::pokemon::Entity as Pokemon;
pub use super::user::Entity as User;
