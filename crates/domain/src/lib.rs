//! Pokedex domain library.
//!
//! Core catalog types and the battle-resolution rules. This crate is pure:
//! no I/O, no async, no store access. Everything that touches Postgres or
//! the blob store lives in `pokedex-engine`.

pub mod artifact;
pub mod battle;
pub mod error;
pub mod pokemon;

pub use artifact::{ImageUpload, MAX_IMAGE_BYTES};
pub use battle::{resolve_battle, BattleOutcome, Winner};
pub use error::DomainError;
pub use pokemon::{Attack, Pokemon, PokemonId, Resistance, Weakness};
