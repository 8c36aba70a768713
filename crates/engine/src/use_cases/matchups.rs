//! Matchup query - who threatens and who resists a given record.
//!
//! "Weaknesses" are the names of every record whose attack carries the
//! target's weakness move; "resistances" the same against the target's
//! resistance move. Both matches run store-side (structural containment on
//! the nested attack name) rather than scanning the catalog in memory.
//! Results follow store-native order and are not deduplicated.

use std::sync::Arc;

use serde::Serialize;

use crate::infrastructure::ports::PokemonRepo;
use crate::use_cases::EngineError;
use pokedex_domain::{Pokemon, PokemonId};

/// Names of records offensively/defensively related to the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matchups {
    pub weaknesses: Vec<String>,
    pub resistances: Vec<String>,
}

/// Computes the weakness/resistance relationship sets for a record.
pub struct MatchupQuery {
    repo: Arc<dyn PokemonRepo>,
}

impl MatchupQuery {
    pub fn new(repo: Arc<dyn PokemonRepo>) -> Self {
        Self { repo }
    }

    pub async fn by_id(&self, id: PokemonId) -> Result<Matchups, EngineError> {
        let target = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| EngineError::NotFound("Pokemon".to_string()))?;

        self.compute(&target).await
    }

    pub async fn by_name(&self, name: &str) -> Result<Matchups, EngineError> {
        let target = self
            .repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| EngineError::NotFound("Pokemon".to_string()))?;

        self.compute(&target).await
    }

    async fn compute(&self, target: &Pokemon) -> Result<Matchups, EngineError> {
        let weaknesses = self
            .repo
            .find_by_attack_name(&target.weakness.name)
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();

        // No resistance declared: skip the second store query entirely.
        let resistances = match &target.resistance {
            Some(resistance) => self
                .repo
                .find_by_attack_name(&resistance.name)
                .await?
                .into_iter()
                .map(|p| p.name)
                .collect(),
            None => Vec::new(),
        };

        tracing::debug!(
            target = %target.name,
            weakness_move = %target.weakness.name,
            "Computed matchups"
        );

        Ok(Matchups {
            weaknesses,
            resistances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{sample_new, InMemoryPokemonRepo};
    use pokedex_domain::{Attack, Resistance, Weakness};

    #[tokio::test]
    async fn weaknesses_list_every_record_with_the_exploiting_attack() {
        let repo = Arc::new(InMemoryPokemonRepo::new());

        // Target is weak to FIRE_BLAST and itself attacks with FIRE_BLAST,
        // so it must appear in its own weaknesses list.
        let mut target = sample_new("Flareon");
        target.attack = Attack {
            name: "FIRE_BLAST".to_string(),
            damage: 90,
        };
        target.weakness = Weakness {
            name: "FIRE_BLAST".to_string(),
            multiplier: 2.0,
        };
        target.resistance = None;
        let target = repo.seed(target);

        let mut charizard = sample_new("Charizard");
        charizard.attack = Attack {
            name: "FIRE_BLAST".to_string(),
            damage: 120,
        };
        repo.seed(charizard);

        let mut squirtle = sample_new("Squirtle");
        squirtle.attack = Attack {
            name: "WATER_GUN".to_string(),
            damage: 30,
        };
        repo.seed(squirtle);

        let matchups = MatchupQuery::new(repo).by_id(target.id).await.expect("computed");

        assert_eq!(matchups.weaknesses, vec!["Flareon", "Charizard"]);
        assert_eq!(matchups.resistances, Vec::<String>::new());
    }

    #[tokio::test]
    async fn resistances_list_records_attacking_with_the_resisted_move() {
        let repo = Arc::new(InMemoryPokemonRepo::new());

        let mut target = sample_new("Onix");
        target.weakness = Weakness {
            name: "VINE_WHIP".to_string(),
            multiplier: 2.0,
        };
        target.resistance = Some(Resistance {
            name: "THUNDER_SHOCK".to_string(),
            value: 20,
        });
        let target = repo.seed(target);

        let mut pikachu = sample_new("Pikachu");
        pikachu.attack = Attack {
            name: "THUNDER_SHOCK".to_string(),
            damage: 40,
        };
        repo.seed(pikachu);

        let matchups = MatchupQuery::new(repo.clone())
            .by_name(&target.name)
            .await
            .expect("computed");

        assert_eq!(matchups.resistances, vec!["Pikachu"]);
        // One query for the weakness move, one for the resistance move.
        assert_eq!(repo.attack_query_count(), 2);
    }

    #[tokio::test]
    async fn no_resistance_means_no_second_store_query() {
        let repo = Arc::new(InMemoryPokemonRepo::new());

        let mut target = sample_new("Ditto");
        target.resistance = None;
        let target = repo.seed(target);

        let matchups = MatchupQuery::new(repo.clone())
            .by_id(target.id)
            .await
            .expect("computed");

        assert_eq!(matchups.resistances, Vec::<String>::new());
        assert_eq!(repo.attack_query_count(), 1);
    }

    #[tokio::test]
    async fn missing_target_returns_not_found() {
        let repo = Arc::new(InMemoryPokemonRepo::new());

        let err = MatchupQuery::new(repo)
            .by_name("Mewtwo")
            .await
            .expect_err("missing");

        assert!(matches!(err, EngineError::NotFound(_)));
    }
}
