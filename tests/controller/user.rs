//! Tests for the user endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokedex::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::controller::{
        extract::IdPath,
        user::{create_user, delete_user, get_user, list_users, update_user},
    },
};

use super::*;

fn ash() -> CreateUserDto {
    CreateUserDto {
        email: Some("a@b.com".to_string()),
        first_name: Some("Ash".to_string()),
        ..Default::default()
    }
}

/// Expect 201 with an active user for a valid payload
#[tokio::test]
async fn create_user_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let result = create_user(State(test.into_app_state()), Json(ash())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.id, 1);
    assert!(user.is_active);

    Ok(())
}

/// Expect 400 naming the missing field
#[tokio::test]
async fn create_user_rejects_missing_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let payload = CreateUserDto {
        email: None,
        ..ash()
    };
    let result = create_user(State(test.into_app_state()), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Missing required field: email");

    Ok(())
}

/// Expect 400 when the email is already registered
#[tokio::test]
async fn create_user_rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("a@b.com")
        .build()
        .await?;

    let result = create_user(State(test.into_app_state()), Json(ash())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Email already registered");

    Ok(())
}

/// Expect 200 with every user
#[tokio::test]
async fn list_users_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .with_mock_user("brock@example.com")
        .build()
        .await?;

    let resp = list_users(State(test.into_app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<UserDto> = body_json(resp).await;
    assert_eq!(users.len(), 2);

    Ok(())
}

/// Expect 404 with a message for a user that does not exist
#[tokio::test]
async fn get_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let result = get_user(State(test.into_app_state()), IdPath(1)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "User not found");

    Ok(())
}

/// Expect 200 with the merged user
#[tokio::test]
async fn update_user_deactivates() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .build()
        .await?;

    let changes = UpdateUserDto {
        email: None,
        is_active: Some(false),
    };
    let resp = update_user(State(test.into_app_state()), IdPath(1), Json(changes))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.email, "ash@example.com");
    assert!(!user.is_active);

    Ok(())
}

/// Expect 200 with the confirmation message, then 404 on a second delete
#[tokio::test]
async fn delete_user_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .build()
        .await?;

    let resp = delete_user(State(test.into_app_state()), IdPath(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = body_json(resp).await;
    assert_eq!(message.message, "User deleted");

    let result = delete_user(State(test.into_app_state()), IdPath(1)).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 500 with a generic message when the tables are missing
#[tokio::test]
async fn list_users_hides_database_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_users(State(test.into_app_state())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Internal server error");

    Ok(())
}
