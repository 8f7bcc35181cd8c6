//! Exact win probabilities for the simulator's own rule
//!
//! Every round is a Markov step from `(attackers, defenders)` to a state
//! with `fights` fewer units in total, so the whole battle can be solved by
//! filling a grid from small states upward. Per-round win distributions are
//! enumerated once over every face combination and cached.

use std::sync::OnceLock;

use crate::battle::constants::{DIE_FACES, MAX_ATTACK_DICE, MAX_DEFENSE_DICE};
use crate::battle::round::{attack_dice, count_wins, defense_dice};
use crate::battle::simulate::can_fight;

/// Largest force on either side the solver will take on
///
/// The grid holds `(attackers + 1) * (defenders + 1)` states; at this bound
/// that is about 4 million, or 32 MB.
pub const MAX_EXACT_FORCE: u32 = 2_000;

const MAX_FIGHTS: usize = MAX_DEFENSE_DICE as usize;

/// `ROUND_ODDS[attack - 1][defense - 1][wins]`
type RoundOdds = [[[f64; MAX_FIGHTS + 1]; MAX_DEFENSE_DICE as usize]; MAX_ATTACK_DICE as usize];

static ROUND_ODDS: OnceLock<RoundOdds> = OnceLock::new();

fn round_odds() -> &'static RoundOdds {
    ROUND_ODDS.get_or_init(|| {
        let mut odds = [[[0.0; MAX_FIGHTS + 1]; MAX_DEFENSE_DICE as usize]; MAX_ATTACK_DICE as usize];
        for attack in 1..=MAX_ATTACK_DICE {
            for defense in 1..=MAX_DEFENSE_DICE {
                odds[attack as usize - 1][defense as usize - 1] = win_distribution(attack, defense);
            }
        }
        odds
    })
}

/// Distribution of attacker wins when `attack` dice meet `defense` dice
fn win_distribution(attack: u32, defense: u32) -> [f64; MAX_FIGHTS + 1] {
    let faces = DIE_FACES as u32;
    let total = faces.pow(attack + defense);
    let mut counts = [0u32; MAX_FIGHTS + 1];

    for combo in 0..total {
        let mut rest = combo;
        let mut rolls: Vec<u8> = (0..attack + defense)
            .map(|_| {
                let face = (rest % faces) as u8 + 1;
                rest /= faces;
                face
            })
            .collect();

        let (attacker_rolls, defender_rolls) = rolls.split_at_mut(attack as usize);
        attacker_rolls.sort_unstable();
        defender_rolls.sort_unstable();
        counts[count_wins(attacker_rolls, defender_rolls) as usize] += 1;
    }

    counts.map(|c| c as f64 / total as f64)
}

/// Solved grid of win probabilities for every state up to a bound
///
/// Memory grows with `(attackers + 1) * (defenders + 1)`, so either bound
/// is capped at [`MAX_EXACT_FORCE`].
#[derive(Debug, Clone)]
pub struct ExactSolver {
    max_attackers: u32,
    max_defenders: u32,
    grid: Vec<f64>,
}

impl ExactSolver {
    /// Solve every state with at most `max_attackers` and `max_defenders`
    ///
    /// Returns `None` when either bound exceeds [`MAX_EXACT_FORCE`].
    pub fn new(max_attackers: u32, max_defenders: u32) -> Option<Self> {
        if max_attackers > MAX_EXACT_FORCE || max_defenders > MAX_EXACT_FORCE {
            tracing::debug!(
                "Refusing to solve {} vs {}, limit is {}",
                max_attackers,
                max_defenders,
                MAX_EXACT_FORCE
            );
            return None;
        }

        let odds = round_odds();
        let width = max_defenders as usize + 1;
        let states = (max_attackers as usize + 1).checked_mul(width)?;
        let mut grid = vec![0.0; states];

        for attackers in 0..=max_attackers {
            for defenders in 0..=max_defenders {
                let idx = attackers as usize * width + defenders as usize;

                if defenders == 0 {
                    grid[idx] = 1.0;
                    continue;
                }
                if !can_fight(attackers, defenders) {
                    continue;
                }

                let attack = attack_dice(attackers);
                let defense = defense_dice(defenders);
                let fights = attack.min(defense);
                let wins_odds = &odds[attack as usize - 1][defense as usize - 1];

                // Successor states are strictly smaller, so already solved
                let probability: f64 = (0..=fights)
                    .map(|wins| {
                        let next_attackers = (attackers - (fights - wins)) as usize;
                        let next_defenders = (defenders - wins) as usize;
                        wins_odds[wins as usize] * grid[next_attackers * width + next_defenders]
                    })
                    .sum();
                grid[idx] = probability;
            }
        }

        tracing::debug!(
            "Solved {} battle states up to {} vs {}",
            grid.len(),
            max_attackers,
            max_defenders
        );

        Some(Self {
            max_attackers,
            max_defenders,
            grid,
        })
    }

    /// Probability the attackers end the battle with the defenders wiped out
    ///
    /// `None` when the state lies outside the solved bounds.
    pub fn probability(&self, attackers: u32, defenders: u32) -> Option<f64> {
        if attackers > self.max_attackers || defenders > self.max_defenders {
            return None;
        }
        let width = self.max_defenders as usize + 1;
        Some(self.grid[attackers as usize * width + defenders as usize])
    }

    pub fn max_attackers(&self) -> u32 {
        self.max_attackers
    }

    pub fn max_defenders(&self) -> u32 {
        self.max_defenders
    }
}

/// Exact probability that [`crate::battle::simulate`] ends with no defenders
///
/// `None` when either force exceeds [`MAX_EXACT_FORCE`].
pub fn exact_win_probability(attackers: u32, defenders: u32) -> Option<f64> {
    ExactSolver::new(attackers, defenders)?.probability(attackers, defenders)
}
