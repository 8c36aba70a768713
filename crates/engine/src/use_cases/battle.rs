//! Battle simulation use case.
//!
//! Resolves both combatants from the store, runs the pure domain
//! resolution, and shapes the winner payload. Stored health is never
//! mutated; the exchange is request-scoped.

use std::sync::Arc;

use serde::Serialize;

use crate::infrastructure::ports::PokemonRepo;
use crate::use_cases::EngineError;
use pokedex_domain::{resolve_battle, PokemonId, Winner};

/// Winner payload for a simulated exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleResult {
    pub id: PokemonId,
    pub name: String,
    pub message: String,
}

/// Simulates a one-round battle between two stored records.
pub struct SimulateBattle {
    repo: Arc<dyn PokemonRepo>,
}

impl SimulateBattle {
    pub fn new(repo: Arc<dyn PokemonRepo>) -> Self {
        Self { repo }
    }

    /// Resolve both keys (attacker checked first) and compute the outcome.
    pub async fn execute(
        &self,
        attacker_id: PokemonId,
        defender_id: PokemonId,
    ) -> Result<BattleResult, EngineError> {
        let attacker = self
            .repo
            .get(attacker_id)
            .await?
            .ok_or_else(|| EngineError::NotFound("Attacker Pokemon".to_string()))?;

        let defender = self
            .repo
            .get(defender_id)
            .await?
            .ok_or_else(|| EngineError::NotFound("Defender Pokemon".to_string()))?;

        let outcome = resolve_battle(&attacker, &defender);

        tracing::debug!(
            attacker = %attacker.name,
            defender = %defender.name,
            base_damage = attacker.attack.damage,
            resistance_offset = outcome.resistance_offset,
            multiplier = outcome.multiplier,
            final_damage = outcome.final_damage,
            defender_health = defender.health,
            "Resolved battle"
        );

        let winner = match outcome.winner {
            Winner::Attacker => attacker,
            Winner::Defender => defender,
        };

        Ok(BattleResult {
            id: winner.id,
            name: winner.name.clone(),
            message: format!("{} won the battle", winner.name),
        })
    }
}
