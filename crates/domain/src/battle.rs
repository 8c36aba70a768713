//! Battle resolution - a stateless, single-exchange computation.
//!
//! One round, attacker swings once:
//!
//! 1. Start from the attacker's base attack damage.
//! 2. If the defender declares a resistance whose move name matches the
//!    attack, the resistance value is *added* to the base damage. Matching
//!    resistance increases effective damage in this catalog; the offset is
//!    applied before the multiplier, and the order matters.
//! 3. If the defender's weakness name matches the attack, the damage is
//!    scaled by the weakness multiplier.
//! 4. The attacker wins iff the final damage reaches the defender's health;
//!    exactly-lethal damage counts as a win for the attacker.
//!
//! No stored health is mutated; callers map the outcome to a result payload.

use crate::pokemon::Pokemon;

/// Which side of the exchange won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Attacker,
    Defender,
}

/// The resolved exchange, with the intermediate values exposed so callers
/// can log the play-by-play.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleOutcome {
    pub winner: Winner,
    /// Resistance offset that was added to the base damage (0 on no match).
    pub resistance_offset: i32,
    /// Weakness multiplier that was applied (1 on no match).
    pub multiplier: f64,
    /// Damage after offset and multiplier.
    pub final_damage: f64,
}

/// Resolve one attack exchange between two records.
pub fn resolve_battle(attacker: &Pokemon, defender: &Pokemon) -> BattleOutcome {
    let base_damage = attacker.attack.damage;

    let resistance_offset = match &defender.resistance {
        Some(resistance) if resistance.name == attacker.attack.name => resistance.value,
        _ => 0,
    };

    let multiplier = if defender.weakness.name == attacker.attack.name {
        defender.weakness.multiplier
    } else {
        1.0
    };

    // Offset before multiplier; this order is load-bearing. Each operand
    // widens to f64 before the add so an extreme damage value cannot
    // overflow the i32 sum.
    let final_damage = (f64::from(base_damage) + f64::from(resistance_offset)) * multiplier;

    let winner = if final_damage >= f64::from(defender.health) {
        Winner::Attacker
    } else {
        Winner::Defender
    };

    BattleOutcome {
        winner,
        resistance_offset,
        multiplier,
        final_damage,
    }
}
