//! Postgres record store.

mod pokemon_repo;
mod schema;

pub use pokemon_repo::PostgresPokemonRepo;
pub use schema::ensure_schema;
