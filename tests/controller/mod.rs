//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a `State` built from the test database, and the
//! status and body of the resulting response are checked.

mod favorite;
mod pokeball;
mod pokemon;
mod user;

use pokedex_test_utils::prelude::*;

use crate::util::{body_json, TestContextExt};
