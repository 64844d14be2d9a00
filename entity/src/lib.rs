//! `SeaORM` Entity definitions for the pokedex schema.

pub mod prelude;

pub mod favorite_pokeball;
pub mod favorite_pokemon;
pub mod pokeball;
pub mod pokemon;
pub mod user;
