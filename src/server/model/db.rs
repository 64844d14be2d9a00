//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't need to reach into the `entity` crate.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `password` - Opaque password string, never serialized
/// - `first_name` / `last_name` - Display name parts, last name optional
/// - `age` / `gender` - Optional profile fields
/// - `subscription_date` - UTC timestamp set at creation
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;
