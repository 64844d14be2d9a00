//! Repositories for the favorite join tables.
//!
//! Join rows store plain user and item IDs with no foreign keys, so a row may outlive the
//! user or item it references.

pub mod pokeball;
pub mod pokemon;
