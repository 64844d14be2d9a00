//! Test fixture modules for database record creation.
//!
//! - `user` - User records
//! - `collectible` - Pokemon and pokeball records
//! - `favorite` - Favorite join records linking users to collectibles
//! - `factory` - In-memory models that never touch the database

pub mod collectible;
pub mod factory;
pub mod favorite;
pub mod user;
