//! Monte-Carlo estimates from repeated simulation
//!
//! Trials run in parallel. Trial `i` gets its own ChaCha stream seeded with
//! `seed + i`, so an estimate depends only on its inputs and never on how
//! rayon splits the work.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::battle::dice::RngDice;
use crate::battle::simulate::{simulate, BattleOutcome};
use crate::core::error::{HelperError, Result};

/// Aggregate of many simulated battles between the same two forces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub attackers: u32,
    pub defenders: u32,
    pub trials: u32,
    pub attacker_wins: u32,
    pub win_rate: f64,
    pub mean_rounds: f64,
    pub mean_attackers_remaining: f64,
    pub mean_defenders_remaining: f64,
}

impl Estimate {
    /// Standard error of `win_rate`
    pub fn standard_error(&self) -> f64 {
        (self.win_rate * (1.0 - self.win_rate) / self.trials as f64).sqrt()
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: u64,
    rounds: u64,
    attackers_remaining: u64,
    defenders_remaining: u64,
}

impl Tally {
    fn record(mut self, outcome: BattleOutcome) -> Self {
        self.wins += outcome.attackers_won() as u64;
        self.rounds += outcome.rounds as u64;
        self.attackers_remaining += outcome.final_attackers as u64;
        self.defenders_remaining += outcome.final_defenders as u64;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            rounds: self.rounds + other.rounds,
            attackers_remaining: self.attackers_remaining + other.attackers_remaining,
            defenders_remaining: self.defenders_remaining + other.defenders_remaining,
        }
    }
}

/// Estimate the attackers' chances by simulating `trials` battles
pub fn estimate(attackers: u32, defenders: u32, trials: u32, seed: u64) -> Result<Estimate> {
    if trials == 0 {
        return Err(HelperError::NoTrials);
    }

    let start = std::time::Instant::now();

    let tally = (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut dice = RngDice::seeded(seed.wrapping_add(trial as u64));
            simulate(attackers, defenders, &mut dice)
        })
        .fold(Tally::default, Tally::record)
        .reduce(Tally::default, Tally::merge);

    let n = trials as f64;
    let estimate = Estimate {
        attackers,
        defenders,
        trials,
        attacker_wins: tally.wins as u32,
        win_rate: tally.wins as f64 / n,
        mean_rounds: tally.rounds as f64 / n,
        mean_attackers_remaining: tally.attackers_remaining as f64 / n,
        mean_defenders_remaining: tally.defenders_remaining as f64 / n,
    };

    tracing::debug!(
        "Estimated {} vs {} over {} trials in {:?}: win rate {:.3}",
        attackers,
        defenders,
        trials,
        start.elapsed(),
        estimate.win_rate
    );

    Ok(estimate)
}
