//! HTTP route handlers.

pub mod pokemon_routes;
