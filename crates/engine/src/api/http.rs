//! HTTP routes and transport error mapping.

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::app::App;
use crate::infrastructure::http::pokemon_routes;
use crate::use_cases::EngineError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route(
            "/api/pokemons",
            get(pokemon_routes::get_pokemon)
                .post(pokemon_routes::create_pokemon)
                .patch(pokemon_routes::update_pokemon)
                .delete(pokemon_routes::delete_pokemon),
        )
        .route("/api/pokemons/all", get(pokemon_routes::list_pokemons))
        .route("/api/pokemons/matchups", get(pokemon_routes::get_matchups))
        .route("/api/pokemons/battle", get(pokemon_routes::simulate_battle))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Upstream(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (axum::http::StatusCode::BAD_REQUEST, msg).into_response(),
            // The upstream detail is logged, not leaked to the caller.
            ApiError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream store failure");
                (axum::http::StatusCode::BAD_GATEWAY, "Upstream failure").into_response()
            }
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Validation(msg) => ApiError::BadRequest(msg),
            EngineError::NotFound(_) => ApiError::NotFound(e.to_string()),
            EngineError::Upstream(msg) => ApiError::Upstream(msg),
        }
    }
}
