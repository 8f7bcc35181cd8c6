//! One round of dice combat
//!
//! Both sides roll, each side's dice are sorted ascending, and the
//! overlapping prefix is compared rank by rank. Every comparison costs
//! exactly one unit: the defender's on a strictly higher attacker die,
//! otherwise the attacker's. Ties go to the defender.

use serde::{Deserialize, Serialize};

use crate::battle::constants::{ATTACK_RESERVE, MAX_ATTACK_DICE, MAX_DEFENSE_DICE};
use crate::battle::dice::DiceSource;

/// Dice both sides rolled in one round and what came of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Attacker faces, sorted ascending
    pub attacker_rolls: Vec<u8>,
    /// Defender faces, sorted ascending
    pub defender_rolls: Vec<u8>,
    /// Number of pairwise comparisons
    pub fights: u32,
    /// Comparisons the attacker won
    pub attacker_wins: u32,
}

impl RoundResult {
    pub fn attacker_losses(&self) -> u32 {
        self.fights - self.attacker_wins
    }

    pub fn defender_losses(&self) -> u32 {
        self.attacker_wins
    }
}

/// Dice the attacker commits with `attackers` units on the field
pub fn attack_dice(attackers: u32) -> u32 {
    attackers.saturating_sub(ATTACK_RESERVE).min(MAX_ATTACK_DICE)
}

/// Dice the defender commits with `defenders` units on the field
pub fn defense_dice(defenders: u32) -> u32 {
    defenders.min(MAX_DEFENSE_DICE)
}

/// Count attacker wins over the overlapping prefix of two ascending rolls
pub fn count_wins(attacker_rolls: &[u8], defender_rolls: &[u8]) -> u32 {
    attacker_rolls
        .iter()
        .zip(defender_rolls)
        .filter(|(a, d)| a > d)
        .count() as u32
}

/// Roll and resolve one round
///
/// Attacker dice are drawn before defender dice. Callers must only invoke
/// this while combat is possible (`attackers > 1` and `defenders > 0`).
pub fn resolve_round(attackers: u32, defenders: u32, dice: &mut impl DiceSource) -> RoundResult {
    debug_assert!(attackers > ATTACK_RESERVE && defenders > 0);

    let attack = attack_dice(attackers);
    let defense = defense_dice(defenders);

    let mut attacker_rolls = dice.roll_many(attack);
    let mut defender_rolls = dice.roll_many(defense);
    attacker_rolls.sort_unstable();
    defender_rolls.sort_unstable();

    let fights = attack.min(defense);
    let attacker_wins = count_wins(&attacker_rolls, &defender_rolls);

    RoundResult {
        attacker_rolls,
        defender_rolls,
        fights,
        attacker_wins,
    }
}
