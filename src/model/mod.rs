//! Request and response bodies exchanged over the HTTP API.

pub mod api;
pub mod favorite;
pub mod pokeball;
pub mod pokemon;
pub mod user;
