//! Catalog lifecycle use cases - create, update, lookup, list, delete.
//!
//! Key resolution is explicit: `*_by_id` and `*_by_name` are separate
//! operations rather than one operation that type-sniffs a string, so
//! "123" as a name is never mistaken for an id.

use std::sync::Arc;

use serde::Deserialize;
use validator::Validate;

use crate::infrastructure::ports::{ArtifactStore, NewPokemon, PokemonPatch, PokemonRepo};
use crate::use_cases::EngineError;
use pokedex_domain::{Attack, ImageUpload, Pokemon, PokemonId, Resistance, Weakness};

/// Confirmation message returned by the delete operations.
pub const DELETED_MESSAGE: &str = "Pokemon deleted successfully";

/// Creation payload. Attack and weakness are required; their absence is a
/// boundary-side validation failure and never reaches this type.
#[derive(Debug, Clone, Validate)]
pub struct CreatePokemon {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "health must be a positive number"))]
    pub health: i32,
    pub rarity: Option<String>,
    pub attack: Attack,
    pub weakness: Weakness,
    pub resistance: Option<Resistance>,
}

/// Partial update payload; unset fields retain their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePokemon {
    pub name: Option<String>,
    pub health: Option<i32>,
    pub rarity: Option<String>,
    pub attack: Option<Attack>,
    pub weakness: Option<Weakness>,
    pub resistance: Option<Resistance>,
}

impl From<UpdatePokemon> for PokemonPatch {
    fn from(update: UpdatePokemon) -> Self {
        Self {
            name: update.name,
            health: update.health,
            rarity: update.rarity,
            artifact_ref: None,
            attack: update.attack,
            weakness: update.weakness,
            resistance: update.resistance,
        }
    }
}

/// Catalog record lifecycle operations.
pub struct CatalogOps {
    repo: Arc<dyn PokemonRepo>,
    artifacts: Arc<dyn ArtifactStore>,
}

impl CatalogOps {
    pub fn new(repo: Arc<dyn PokemonRepo>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self { repo, artifacts }
    }

    /// Create a record, optionally uploading an attached image first.
    ///
    /// The artifact checks run before any upload call, and the upload
    /// happens before the insert: an upload failure aborts the create with
    /// no partial record left behind.
    pub async fn create(
        &self,
        payload: CreatePokemon,
        image: Option<ImageUpload>,
    ) -> Result<Pokemon, EngineError> {
        payload
            .validate()
            .map_err(|e| EngineError::Validation(e.to_string()))?;

        let mut artifact_ref = None;
        if let Some(image) = image {
            image.validate()?;
            let url = self
                .artifacts
                .upload(image.bytes, &image.file_name)
                .await?;
            tracing::debug!(url = %url, "Uploaded image artifact");
            artifact_ref = Some(url);
        }

        let pokemon = self
            .repo
            .insert(NewPokemon {
                name: payload.name,
                health: payload.health,
                rarity: payload.rarity,
                artifact_ref,
                attack: payload.attack,
                weakness: payload.weakness,
                resistance: payload.resistance,
            })
            .await?;

        tracing::info!(id = %pokemon.id, name = %pokemon.name, "Created pokemon");
        Ok(pokemon)
    }

    /// Apply a partial update to the record with the given id.
    pub async fn update_by_id(
        &self,
        id: PokemonId,
        update: UpdatePokemon,
    ) -> Result<Pokemon, EngineError> {
        self.repo
            .merge(id, update.into())
            .await?
            .ok_or_else(|| EngineError::NotFound("Pokemon".to_string()))
    }

    /// Resolve a record by name, then apply a partial update to it.
    pub async fn update_by_name(
        &self,
        name: &str,
        update: UpdatePokemon,
    ) -> Result<Pokemon, EngineError> {
        let existing = self
            .repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| EngineError::NotFound("Pokemon".to_string()))?;

        self.repo
            .merge(existing.id, update.into())
            .await?
            .ok_or_else(|| EngineError::NotFound("Pokemon".to_string()))
    }

    pub async fn get_by_id(&self, id: PokemonId) -> Result<Pokemon, EngineError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| EngineError::NotFound("Pokemon".to_string()))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Pokemon, EngineError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| EngineError::NotFound("Pokemon".to_string()))
    }

    /// All records with the given rarity discriminator.
    pub async fn find_by_rarity(&self, rarity: &str) -> Result<Vec<Pokemon>, EngineError> {
        let found = self.repo.find_by_rarity(rarity).await?;
        if found.is_empty() {
            return Err(EngineError::NotFound("Pokemon".to_string()));
        }
        Ok(found)
    }

    /// Page of records in store-native order. The engine does not cap the
    /// limit; the boundary owns the maximum page size policy.
    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<Pokemon>, EngineError> {
        Ok(self.repo.find_page(limit, offset).await?)
    }

    pub async fn delete_by_id(&self, id: PokemonId) -> Result<&'static str, EngineError> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(EngineError::NotFound("Pokemon".to_string()));
        }

        tracing::debug!(id = %id, "Deleted pokemon");
        Ok(DELETED_MESSAGE)
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<&'static str, EngineError> {
        let existing = self
            .repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| EngineError::NotFound("Pokemon".to_string()))?;

        self.delete_by_id(existing.id).await
    }
}
