//! Shared fixtures for use-case and API tests.
//!
//! The in-memory repo mirrors the Postgres store's observable behavior:
//! monotonically assigned ids, insertion order, store-managed timestamps,
//! merge semantics. It also counts attack-name queries so tests can assert
//! how many store round trips a computation issued.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::infrastructure::ports::{
    ArtifactError, ArtifactStore, NewPokemon, PokemonPatch, PokemonRepo, RepoError,
};
use crate::use_cases::CreatePokemon;
use pokedex_domain::{Attack, Pokemon, PokemonId, Resistance, Weakness};

/// A creation payload with the catalog's canonical sample shape.
pub fn sample_payload(name: &str) -> CreatePokemon {
    CreatePokemon {
        name: name.to_string(),
        health: 100,
        rarity: Some("Rare".to_string()),
        attack: Attack {
            name: "THUNDER_SHOCK".to_string(),
            damage: 40,
        },
        weakness: Weakness {
            name: "FIRE_BLAST".to_string(),
            multiplier: 2.0,
        },
        resistance: Some(Resistance {
            name: "WATER_GUN".to_string(),
            value: 20,
        }),
    }
}

/// Insert-shaped sibling of [`sample_payload`].
pub fn sample_new(name: &str) -> NewPokemon {
    let payload = sample_payload(name);
    NewPokemon {
        name: payload.name,
        health: payload.health,
        rarity: payload.rarity,
        artifact_ref: None,
        attack: payload.attack,
        weakness: payload.weakness,
        resistance: payload.resistance,
    }
}

/// In-memory record store.
pub struct InMemoryPokemonRepo {
    records: Mutex<Vec<Pokemon>>,
    next_id: AtomicI64,
    attack_queries: AtomicUsize,
}

impl InMemoryPokemonRepo {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            attack_queries: AtomicUsize::new(0),
        }
    }

    /// Synchronously insert a record, as if it had been created earlier.
    pub fn seed(&self, new: NewPokemon) -> Pokemon {
        let now = Utc::now();
        let pokemon = Pokemon {
            id: PokemonId::new(self.next_id.fetch_add(1, Ordering::SeqCst)),
            name: new.name,
            health: new.health,
            rarity: new.rarity,
            artifact_ref: new.artifact_ref,
            attack: new.attack,
            weakness: new.weakness,
            resistance: new.resistance,
            created_at: now,
            updated_at: now,
        };
        self.records
            .lock()
            .expect("fixture lock")
            .push(pokemon.clone());
        pokemon
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("fixture lock").len()
    }

    /// How many attack-name containment queries have been issued.
    pub fn attack_query_count(&self) -> usize {
        self.attack_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PokemonRepo for InMemoryPokemonRepo {
    async fn insert(&self, new: NewPokemon) -> Result<Pokemon, RepoError> {
        Ok(self.seed(new))
    }

    async fn merge(
        &self,
        id: PokemonId,
        patch: PokemonPatch,
    ) -> Result<Option<Pokemon>, RepoError> {
        let mut records = self.records.lock().expect("fixture lock");
        let Some(record) = records.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(health) = patch.health {
            record.health = health;
        }
        if let Some(rarity) = patch.rarity {
            record.rarity = Some(rarity);
        }
        if let Some(artifact_ref) = patch.artifact_ref {
            record.artifact_ref = Some(artifact_ref);
        }
        if let Some(attack) = patch.attack {
            record.attack = attack;
        }
        if let Some(weakness) = patch.weakness {
            record.weakness = weakness;
        }
        if let Some(resistance) = patch.resistance {
            record.resistance = Some(resistance);
        }
        record.updated_at = Utc::now();

        Ok(Some(record.clone()))
    }

    async fn get(&self, id: PokemonId) -> Result<Option<Pokemon>, RepoError> {
        let records = self.records.lock().expect("fixture lock");
        Ok(records.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: PokemonId) -> Result<u64, RepoError> {
        let mut records = self.records.lock().expect("fixture lock");
        let before = records.len();
        records.retain(|p| p.id != id);
        Ok((before - records.len()) as u64)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, RepoError> {
        let records = self.records.lock().expect("fixture lock");
        Ok(records.iter().find(|p| p.name == name).cloned())
    }

    async fn find_by_rarity(&self, rarity: &str) -> Result<Vec<Pokemon>, RepoError> {
        let records = self.records.lock().expect("fixture lock");
        Ok(records
            .iter()
            .filter(|p| p.rarity.as_deref() == Some(rarity))
            .cloned()
            .collect())
    }

    async fn find_page(&self, limit: u32, offset: u32) -> Result<Vec<Pokemon>, RepoError> {
        let records = self.records.lock().expect("fixture lock");
        Ok(records
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_attack_name(&self, move_name: &str) -> Result<Vec<Pokemon>, RepoError> {
        self.attack_queries.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().expect("fixture lock");
        Ok(records
            .iter()
            .filter(|p| p.attack.name == move_name)
            .cloned()
            .collect())
    }
}

/// Artifact store fake that records uploads and hands back a stable URL.
pub struct RecordingArtifactStore {
    uploads: Mutex<Vec<String>>,
}

impl RecordingArtifactStore {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().expect("fixture lock").len()
    }
}

#[async_trait]
impl ArtifactStore for RecordingArtifactStore {
    async fn upload(&self, _payload: Vec<u8>, original_name: &str) -> Result<String, ArtifactError> {
        self.uploads
            .lock()
            .expect("fixture lock")
            .push(original_name.to_string());
        Ok(format!("https://artifacts.test/{original_name}"))
    }
}

/// An [`crate::App`] wired against the in-memory fixtures.
pub fn test_app() -> (Arc<crate::App>, Arc<InMemoryPokemonRepo>) {
    let repo = Arc::new(InMemoryPokemonRepo::new());
    let artifacts = Arc::new(RecordingArtifactStore::new());
    let app = Arc::new(crate::App::new(repo.clone(), artifacts));
    (app, repo)
}
