//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. They validate create payloads,
//! turn missing records into domain errors, and convert models into DTOs. Every service is
//! generic over [`sea_orm::ConnectionTrait`], so controllers can hand them an open
//! transaction for writes or the shared connection for reads.

pub mod favorite;
pub mod pokeball;
pub mod pokemon;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Whether the database rejected a write because of a unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
