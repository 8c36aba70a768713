//! Pokemon entity - the sole catalog record.
//!
//! A record carries one attack, one declared weakness, and an optional
//! resistance. Move names are opaque strings shared across the whole
//! catalog's attack/weakness/resistance vocabulary; relationships between
//! records are always computed from these names, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned numeric identifier, unique and immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonId(i64);

impl PokemonId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PokemonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PokemonId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A record's move: the shared move name plus its base damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub damage: i32,
}

/// Declared weakness. The multiplier scales incoming damage when the
/// attacking move's name matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    pub name: String,
    pub multiplier: f64,
}

/// Declared resistance. The value is an *addition offset* applied to the
/// attacker's base damage before the weakness multiplier: a matching
/// resistance increases effective damage. This is the observed behavior of
/// the catalog and is preserved exactly, not "fixed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resistance {
    pub name: String,
    pub value: i32,
}

/// A single creature record with combat-relevant attributes.
///
/// All fields are public: any combination of values the store hands back is
/// a valid record. Creation-time invariants (positive health, non-empty
/// name, artifact constraints) are enforced on the way in by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    /// Total hit points; positive at creation.
    pub health: i32,
    /// Rarity discriminator (e.g., "Rare"); optional lookup criterion.
    pub rarity: Option<String>,
    /// Stable reference to the stored image, absent when none was supplied.
    pub artifact_ref: Option<String>,
    pub attack: Attack,
    pub weakness: Weakness,
    pub resistance: Option<Resistance>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_id_round_trips_through_string() {
        let id: PokemonId = "42".parse().expect("numeric id parses");
        assert_eq!(id, PokemonId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn pokemon_id_rejects_non_numeric() {
        assert!("Pikachu".parse::<PokemonId>().is_err());
    }

    #[test]
    fn structured_fields_deserialize_from_catalog_shape() {
        let attack: Attack =
            serde_json::from_str(r#"{"name":"THUNDER_SHOCK","damage":40}"#).expect("attack json");
        assert_eq!(attack.name, "THUNDER_SHOCK");
        assert_eq!(attack.damage, 40);

        let weakness: Weakness =
            serde_json::from_str(r#"{"name":"FIRE_BLAST","multiplier":2}"#).expect("weakness json");
        assert_eq!(weakness.multiplier, 2.0);

        let resistance: Resistance =
            serde_json::from_str(r#"{"name":"WATER_GUN","value":20}"#).expect("resistance json");
        assert_eq!(resistance.value, 20);
    }
}
