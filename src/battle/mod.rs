//! Battle system - dice attrition between an attacking and a defending force
//!
//! The attacker rolls up to three dice and always keeps one unit back; the
//! defender rolls up to two. Rolls are sorted and compared rank by rank,
//! ties favor the defender, and each comparison removes one unit from the
//! losing side.

pub mod constants;
pub mod dice;
pub mod round;
pub mod simulate;

// Re-exports for convenient access
pub use constants::*;
pub use dice::{DiceSource, RngDice, ScriptedDice};
pub use round::{attack_dice, count_wins, defense_dice, resolve_round, RoundResult};
pub use simulate::{can_fight, simulate, simulate_traced, BattleOutcome, BattleTrace, Side};
