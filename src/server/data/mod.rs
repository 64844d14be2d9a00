//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same code runs against a
//! pooled connection or an open transaction.

pub mod favorite;
pub mod pokeball;
pub mod pokemon;
pub mod user;
