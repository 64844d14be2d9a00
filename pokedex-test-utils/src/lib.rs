//! Shared test harness for the pokedex workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and fixture rows
//! a test needs, and `build()` turns that into a [`TestContext`] backed by a fresh in-memory
//! SQLite database. Fixture helpers on the context insert further rows during the test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
