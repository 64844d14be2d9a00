mod delete_user;

use pokedex_test_utils::prelude::*;

use crate::server::{
    error::{entity::EntityError, Error},
    service::user::UserService,
};
