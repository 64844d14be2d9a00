//! Pokedex favorites API.
//!
//! `model` holds the JSON request/response shapes; `server` holds everything that runs
//! behind the HTTP listener.

pub mod model;
pub mod server;
