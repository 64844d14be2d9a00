//! User CRUD endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::TransactionTrait;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::extract::IdPath, error::Error, model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag grouping the user routes
pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user ordered by ID", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Create a user
///
/// `email` and `first_name` are required, `is_active` defaults to `true`.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing required field or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let user = UserService::new(&txn).create_user(payload).await?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Update a user's email and/or active flag
///
/// Omitted or null fields keep their stored value.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
    Json(changes): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let user = UserService::new(&txn).update_user(user_id, changes).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete a user
///
/// Favorites belonging to the user are not deleted.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let txn = state.db.begin().await?;

    let message = UserService::new(&txn).delete_user(user_id).await?;

    txn.commit().await?;

    Ok((StatusCode::OK, Json(message)))
}
