//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::SitemapDto,
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered in one `routes!` call. The documented paths are
/// also served as a sitemap at `GET /`.
///
/// # Registered Endpoints
/// - `GET|POST /users`, `GET|PUT|DELETE /users/{id}`
/// - `GET /users/{id}/favorites`
/// - `POST /users/{id}/pokemons`, `POST /users/{id}/pokeballs`
/// - `POST|DELETE /users/{id}/favorite/pokemon/{pokemon_id}`
/// - `POST|DELETE /users/{id}/favorite/pokeball/{pokeball_id}`
/// - `GET|POST /pokemons`, `GET|PUT|DELETE /pokemons/{id}`
/// - `GET|POST /pokeballs`, `GET|PUT|DELETE /pokeballs/{id}`
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pokedex", description = "Pokedex API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::pokemon::POKEMON_TAG, description = "Pokemon API routes"),
        (name = controller::pokeball::POKEBALL_TAG, description = "Pokeball API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::list_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(controller::favorite::create_user_pokemon))
        .routes(routes!(controller::favorite::create_user_pokeball))
        .routes(routes!(
            controller::favorite::add_favorite_pokemon,
            controller::favorite::remove_favorite_pokemon
        ))
        .routes(routes!(
            controller::favorite::add_favorite_pokeball,
            controller::favorite::remove_favorite_pokeball
        ))
        .routes(routes!(
            controller::pokemon::list_pokemons,
            controller::pokemon::create_pokemon
        ))
        .routes(routes!(
            controller::pokemon::get_pokemon,
            controller::pokemon::update_pokemon,
            controller::pokemon::delete_pokemon
        ))
        .routes(routes!(
            controller::pokeball::list_pokeballs,
            controller::pokeball::create_pokeball
        ))
        .routes(routes!(
            controller::pokeball::get_pokeball,
            controller::pokeball::update_pokeball,
            controller::pokeball::delete_pokeball
        ))
        .split_for_parts();

    let sitemap = SitemapDto {
        endpoints: api.paths.paths.keys().cloned().collect(),
    };

    routes
        .route("/", get(move || async move { Json(sitemap) }))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
