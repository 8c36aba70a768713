//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - The record store (could swap Postgres -> something else)
//! - The artifact store (could swap the HTTP gateway -> AWS SDK)
//!
//! The engine performs no retries or local recovery on port failures; every
//! error is terminal for the current request and propagates to the caller.

use async_trait::async_trait;

use pokedex_domain::{Attack, Pokemon, PokemonId, Resistance, Weakness};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found")]
    NotFound,
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Upload failed: {0}")]
    Upload(String),
    #[error("Artifact store unavailable")]
    Unavailable,
}

// =============================================================================
// Infrastructure Types
// =============================================================================

/// Fields for a new record; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPokemon {
    pub name: String,
    pub health: i32,
    pub rarity: Option<String>,
    pub artifact_ref: Option<String>,
    pub attack: Attack,
    pub weakness: Weakness,
    pub resistance: Option<Resistance>,
}

/// Partial update. `None` fields keep their stored values; the store bumps
/// `updated_at` on every merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonPatch {
    pub name: Option<String>,
    pub health: Option<i32>,
    pub rarity: Option<String>,
    pub artifact_ref: Option<String>,
    pub attack: Option<Attack>,
    pub weakness: Option<Weakness>,
    pub resistance: Option<Resistance>,
}

// =============================================================================
// Ports
// =============================================================================

/// Record store port.
///
/// `find_by_attack_name` is the structural-containment query: the match on
/// the nested `attack.name` field runs inside the store, not by loading the
/// catalog into application memory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonRepo: Send + Sync {
    // CRUD
    async fn insert(&self, new: NewPokemon) -> Result<Pokemon, RepoError>;
    async fn merge(&self, id: PokemonId, patch: PokemonPatch)
        -> Result<Option<Pokemon>, RepoError>;
    async fn get(&self, id: PokemonId) -> Result<Option<Pokemon>, RepoError>;
    /// Delete by id, returning the number of affected rows.
    async fn delete(&self, id: PokemonId) -> Result<u64, RepoError>;

    // Queries
    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, RepoError>;
    async fn find_by_rarity(&self, rarity: &str) -> Result<Vec<Pokemon>, RepoError>;
    /// Page of records in store-native (insertion) order.
    async fn find_page(&self, limit: u32, offset: u32) -> Result<Vec<Pokemon>, RepoError>;
    /// All records whose attack carries the given move name.
    async fn find_by_attack_name(&self, move_name: &str) -> Result<Vec<Pokemon>, RepoError>;
}

/// Artifact store port. Upload happens-before record persistence on create;
/// there is no compensating delete if the subsequent persist fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Store the payload and return a stable public reference for it.
    async fn upload(&self, payload: Vec<u8>, original_name: &str) -> Result<String, ArtifactError>;
}
