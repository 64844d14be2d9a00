//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, the collectible kinds, and validated inputs for record creation.

pub mod app;
pub mod collectible;
pub mod db;
pub mod input;
