//! Full battle simulation
//!
//! Rounds repeat until the attacker is down to its reserve unit or the
//! defender is wiped out. Every round costs exactly `fights >= 1` units,
//! so a battle never lasts more than `attackers + defenders` rounds.

use serde::{Deserialize, Serialize};

use crate::battle::constants::ATTACK_RESERVE;
use crate::battle::dice::DiceSource;
use crate::battle::round::{resolve_round, RoundResult};

/// Which side came out ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Attacker,
    Defender,
}

/// Result of a finished battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub initial_attackers: u32,
    pub initial_defenders: u32,
    pub final_attackers: u32,
    pub final_defenders: u32,
    pub rounds: u32,
}

impl BattleOutcome {
    /// The defending force was destroyed
    pub fn attackers_won(&self) -> bool {
        self.final_defenders == 0
    }

    pub fn winner(&self) -> Side {
        if self.attackers_won() {
            Side::Attacker
        } else {
            Side::Defender
        }
    }

    /// `(final attackers, final defenders, rounds)`
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.final_attackers, self.final_defenders, self.rounds)
    }

    pub fn attacker_losses(&self) -> u32 {
        self.initial_attackers - self.final_attackers
    }

    pub fn defender_losses(&self) -> u32 {
        self.initial_defenders - self.final_defenders
    }
}

/// A battle outcome together with every round that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleTrace {
    pub outcome: BattleOutcome,
    pub rounds: Vec<RoundResult>,
}

/// Whether another round can be fought
pub fn can_fight(attackers: u32, defenders: u32) -> bool {
    attackers > ATTACK_RESERVE && defenders > 0
}

/// Simulate a battle to completion
///
/// # Arguments
/// * `attackers` - Units on the attacking side, including the reserve unit
/// * `defenders` - Units on the defending side
/// * `dice` - Source of every die face rolled
///
/// # Returns
/// Remaining units on each side and the number of rounds fought. With no
/// combat possible on entry the counts come back unchanged after 0 rounds.
pub fn simulate(attackers: u32, defenders: u32, dice: &mut impl DiceSource) -> BattleOutcome {
    fight(attackers, defenders, dice, |_| {})
}

/// Simulate a battle and keep every round
pub fn simulate_traced(attackers: u32, defenders: u32, dice: &mut impl DiceSource) -> BattleTrace {
    let mut rounds = Vec::new();
    let outcome = fight(attackers, defenders, dice, |round| rounds.push(round.clone()));
    BattleTrace { outcome, rounds }
}

fn fight<F>(
    initial_attackers: u32,
    initial_defenders: u32,
    dice: &mut impl DiceSource,
    mut on_round: F,
) -> BattleOutcome
where
    F: FnMut(&RoundResult),
{
    let mut attackers = initial_attackers;
    let mut defenders = initial_defenders;
    let mut rounds = 0;

    while can_fight(attackers, defenders) {
        let round = resolve_round(attackers, defenders, dice);

        attackers -= round.attacker_losses();
        defenders -= round.defender_losses();
        rounds += 1;

        tracing::trace!(
            round = rounds,
            attacker_rolls = ?round.attacker_rolls,
            defender_rolls = ?round.defender_rolls,
            attackers,
            defenders,
            "Round resolved"
        );
        on_round(&round);
    }

    let outcome = BattleOutcome {
        initial_attackers,
        initial_defenders,
        final_attackers: attackers,
        final_defenders: defenders,
        rounds,
    };

    tracing::debug!(
        "Battle {} vs {} ended {} vs {} after {} rounds",
        initial_attackers,
        initial_defenders,
        attackers,
        defenders,
        rounds
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::dice::{RngDice, ScriptedDice};

    #[test]
    fn test_lone_attacker_cannot_fight() {
        let mut dice = ScriptedDice::constant(6);
        let outcome = simulate(1, 5, &mut dice);

        assert_eq!(outcome.as_tuple(), (1, 5, 0));
        assert_eq!(dice.rolled(), 0);
    }

    #[test]
    fn test_empty_defense_returns_immediately() {
        let mut dice = ScriptedDice::constant(1);
        let outcome = simulate(7, 0, &mut dice);

        assert_eq!(outcome.as_tuple(), (7, 0, 0));
        assert!(outcome.attackers_won());
    }

    #[test]
    fn test_two_vs_one_attacker_wins_first_roll() {
        // Attacker 5 beats defender 3
        let mut dice = ScriptedDice::new(vec![5, 3]);
        let outcome = simulate(2, 1, &mut dice);

        assert_eq!(outcome.as_tuple(), (2, 0, 1));
        assert_eq!(outcome.winner(), Side::Attacker);
    }

    #[test]
    fn test_two_vs_one_tie_loses_attacker() {
        let mut dice = ScriptedDice::new(vec![4, 4]);
        let outcome = simulate(2, 1, &mut dice);

        assert_eq!(outcome.as_tuple(), (1, 1, 1));
        assert_eq!(outcome.winner(), Side::Defender);
    }

    #[test]
    fn test_three_vs_one_trace() {
        // Round 1: attacker [2,3] vs defender [3]: 2 vs 3 loses -> 2 vs 1
        // Round 2: attacker [6] vs defender [1]: win -> 2 vs 0
        let mut dice = ScriptedDice::new(vec![3, 2, 3, 6, 1]);
        let trace = simulate_traced(3, 1, &mut dice);

        assert_eq!(trace.outcome.as_tuple(), (2, 0, 2));
        assert_eq!(trace.rounds.len(), 2);
        assert_eq!(trace.rounds[0].attacker_rolls, vec![2, 3]);
        assert_eq!(trace.rounds[0].attacker_wins, 0);
        assert_eq!(trace.rounds[1].attacker_wins, 1);
    }

    #[test]
    fn test_losses_match_outcome() {
        let mut dice = RngDice::seeded(99);
        let trace = simulate_traced(20, 15, &mut dice);

        let attacker_losses: u32 = trace.rounds.iter().map(|r| r.attacker_losses()).sum();
        let defender_losses: u32 = trace.rounds.iter().map(|r| r.defender_losses()).sum();
        assert_eq!(attacker_losses, trace.outcome.attacker_losses());
        assert_eq!(defender_losses, trace.outcome.defender_losses());
        assert_eq!(trace.rounds.len() as u32, trace.outcome.rounds);
    }

    #[test]
    fn test_seeded_battles_repeat() {
        let a = simulate(30, 30, &mut RngDice::seeded(5));
        let b = simulate(30, 30, &mut RngDice::seeded(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_battle_ends_in_terminal_state() {
        for seed in 0..50 {
            let outcome = simulate(12, 9, &mut RngDice::seeded(seed));
            assert!(outcome.final_attackers <= 1 || outcome.final_defenders == 0);
            assert!(outcome.rounds <= 21);
        }
    }
}
