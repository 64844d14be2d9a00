
use pokedex_test_utils::prelude::*;

use crate::server::{
    error::{entity::EntityError, favorite::FavoriteError, Error},
    model::collectible::CollectibleKind,
    service::favorite::FavoriteService,
};
