use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokedex::{
    model::{
        api::ErrorDto,
        pokeball::CreatePokeballDto,
        pokemon::CreatePokemonDto,
    },
    server::controller::{
        extract::IdPath,
        favorite::{create_user_pokeball, create_user_pokemon},
    },
};
use serde_json::Value;

use super::*;

fn pikachu() -> CreatePokemonDto {
    CreatePokemonDto {
        name: Some("Pikachu".to_string()),
        pokemon_type: Some("Electric".to_string()),
        description: None,
    }
}

/// Expect 201 with the message and the pokemon under the `pokemon` key
#[tokio::test]
async fn creates_pokemon_for_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .build()
        .await?;

    let resp = create_user_pokemon(State(test.into_app_state()), IdPath(1), Json(pikachu()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Pokemon created and assigned to user");
    assert_eq!(body["pokemon"]["id"], 1);
    assert_eq!(body["pokemon"]["type"], "Electric");

    Ok(())
}

/// Expect 201 with the message and the pokeball under the `pokeball` key
#[tokio::test]
async fn creates_pokeball_for_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .build()
        .await?;

    let payload = CreatePokeballDto {
        name: Some("Poke Ball".to_string()),
        effect: None,
    };
    let resp = create_user_pokeball(State(test.into_app_state()), IdPath(1), Json(payload))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Pokeball created and assigned to user");
    assert_eq!(body["pokeball"]["name"], "Poke Ball");

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_pokedex_tables().build().await?;

    let result = create_user_pokemon(State(test.into_app_state()), IdPath(1), Json(pikachu())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "User not found");

    Ok(())
}

/// Expect 400 and nothing committed when the pokeball name is missing
#[tokio::test]
async fn fails_for_missing_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .build()
        .await?;

    let result = create_user_pokeball(
        State(test.into_app_state()),
        IdPath(1),
        Json(CreatePokeballDto::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Missing required field: name");

    Ok(())
}
