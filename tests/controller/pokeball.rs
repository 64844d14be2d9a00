//! Tests for the pokeball endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokedex::{
    model::{
        api::ErrorDto,
        pokeball::{CreatePokeballDto, PokeballDto, UpdatePokeballDto},
    },
    server::controller::{
        extract::IdPath,
        pokeball::{create_pokeball, delete_pokeball, get_pokeball, update_pokeball},
    },
};

use super::*;

/// Expect 201 with the created pokeball
#[tokio::test]
async fn create_pokeball_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let payload = CreatePokeballDto {
        name: Some("Master Ball".to_string()),
        effect: Some("Never fails".to_string()),
    };
    let resp = create_pokeball(State(test.into_app_state()), Json(payload))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 when the name is missing
#[tokio::test]
async fn create_pokeball_rejects_missing_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let result = create_pokeball(
        State(test.into_app_state()),
        Json(CreatePokeballDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Missing required field: name");

    Ok(())
}

/// Expect 200 with the renamed pokeball
#[tokio::test]
async fn update_pokeball_renames() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_pokeball("Poke Ball")
        .build()
        .await?;

    let changes = UpdatePokeballDto {
        name: Some("Great Ball".to_string()),
        effect: None,
    };
    let resp = update_pokeball(State(test.into_app_state()), IdPath(1), Json(changes))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let pokeball: PokeballDto = body_json(resp).await;
    assert_eq!(pokeball.name, "Great Ball");

    Ok(())
}

/// Expect 404 for get and delete of a pokeball that does not exist
#[tokio::test]
async fn missing_pokeball_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let result = get_pokeball(State(test.into_app_state()), IdPath(1)).await;
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    let result = delete_pokeball(State(test.into_app_state()), IdPath(1)).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Pokeball not found");

    Ok(())
}
