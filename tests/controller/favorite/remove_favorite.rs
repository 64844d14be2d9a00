use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use pokedex::{
    model::api::{ErrorDto, MessageDto},
    server::controller::{
        extract::IdPath,
        favorite::{remove_favorite_pokeball, remove_favorite_pokemon},
    },
};

use super::*;

/// Expect 200 with the confirmation, then 404 on the second removal
#[tokio::test]
async fn removes_favorite_pokemon_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .with_mock_pokemon("Pikachu")
        .with_favorite_pokemon(1, 1)
        .build()
        .await?;

    let resp = remove_favorite_pokemon(State(test.into_app_state()), IdPath((1, 1)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let message: MessageDto = body_json(resp).await;
    assert_eq!(message.message, "Favorite Pokemon removed");

    let result = remove_favorite_pokemon(State(test.into_app_state()), IdPath((1, 1))).await;
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Favorite Pokemon not found");

    Ok(())
}

/// Expect 404 when the user never favorited the pokeball
#[tokio::test]
async fn fails_for_missing_favorite_pokeball() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .with_mock_user("ash@example.com")
        .with_mock_pokeball("Poke Ball")
        .build()
        .await?;

    let result = remove_favorite_pokeball(State(test.into_app_state()), IdPath((1, 1))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: ErrorDto = body_json(resp).await;
    assert_eq!(error.message, "Favorite Pokeball not found");

    Ok(())
}
