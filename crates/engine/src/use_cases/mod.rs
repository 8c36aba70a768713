//! Use cases: the operations the service boundary calls into.

pub mod battle;
pub mod catalog;
pub mod matchups;

pub use battle::{BattleResult, SimulateBattle};
pub use catalog::{CatalogOps, CreatePokemon, UpdatePokemon};
pub use matchups::{MatchupQuery, Matchups};

use crate::infrastructure::ports::{ArtifactError, RepoError};
use pokedex_domain::DomainError;

/// Engine-level failure taxonomy, mapped to transport codes by the API layer.
///
/// - `Validation`: malformed or disallowed input, never retried
/// - `NotFound`: the requested key resolves to no record
/// - `Upstream`: record or artifact store fault, propagated verbatim
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

impl From<RepoError> for EngineError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound => Self::NotFound("Pokemon".to_string()),
            RepoError::Database(msg) | RepoError::Serialization(msg) => Self::Upstream(msg),
        }
    }
}

impl From<ArtifactError> for EngineError {
    fn from(e: ArtifactError) -> Self {
        Self::Upstream(e.to_string())
    }
}

impl From<DomainError> for EngineError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => Self::Validation(msg),
        }
    }
}
