//! Spoken responses for battle results
//!
//! The battle and odds modules only return numbers. This module turns them
//! into the sentences read back to the player.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::battle::simulate::BattleOutcome;
use crate::core::config::HelperConfig;
use crate::odds::estimate::Estimate;
use crate::odds::table::{
    MAX_TABLE_ATTACKERS, MAX_TABLE_DEFENDERS, MIN_TABLE_ATTACKERS, MIN_TABLE_DEFENDERS,
};

const FAVORABLE_PHRASES: &[&str] = &[
    "I suggest you attack.",
    "The odds are in favor of attacking.",
    "You are likely to win.",
];

const TOSS_UP_PHRASES: &[&str] = &[
    "The fight could go either way.",
    "There is no obvious winner.",
    "You could try your luck.",
];

const UNFAVORABLE_PHRASES: &[&str] = &[
    "I suggest you don't attack.",
    "The odds are against attacking.",
    "You are not likely to win.",
];

/// Advice derived from a win probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Attack,
    TossUp,
    HoldBack,
}

impl Recommendation {
    /// Classify a probability against the configured thresholds
    ///
    /// Returns `None` for anything outside `[0, 1]`, including the
    /// out-of-table sentinel.
    pub fn for_probability(probability: f64, config: &HelperConfig) -> Option<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return None;
        }
        Some(if probability > config.favorable_threshold {
            Recommendation::Attack
        } else if probability < config.unfavorable_threshold {
            Recommendation::HoldBack
        } else {
            Recommendation::TossUp
        })
    }

    fn phrases(self) -> &'static [&'static str] {
        match self {
            Recommendation::Attack => FAVORABLE_PHRASES,
            Recommendation::TossUp => TOSS_UP_PHRASES,
            Recommendation::HoldBack => UNFAVORABLE_PHRASES,
        }
    }

    /// Pick one of the phrases for this recommendation
    pub fn phrase(self, rng: &mut impl Rng) -> &'static str {
        self.phrases().choose(rng).copied().unwrap_or_default()
    }
}

/// Summarize a finished battle
pub fn battle_summary(outcome: &BattleOutcome) -> String {
    if outcome.attackers_won() {
        format!(
            "The attackers won a battle of {} vs {} with {} remaining.",
            outcome.initial_attackers, outcome.initial_defenders, outcome.final_attackers
        )
    } else {
        format!(
            "The defenders survived a battle of {} vs {} with {} remaining.",
            outcome.initial_attackers, outcome.initial_defenders, outcome.final_defenders
        )
    }
}

/// Describe a table probability, or explain the table's limits
pub fn probability_summary(probability: f64) -> String {
    if !(0.0..=1.0).contains(&probability) {
        return format!(
            "I can only predict battles of {} to {} attackers against {} to {} defenders. \
             In general, attackers have the advantage at higher army numbers.",
            MIN_TABLE_ATTACKERS, MAX_TABLE_ATTACKERS, MIN_TABLE_DEFENDERS, MAX_TABLE_DEFENDERS
        );
    }
    format!(
        "Attackers have a {:.1} percent chance of winning the battle.",
        probability * 100.0
    )
}

/// [`probability_summary`] followed by a recommendation, when one applies
pub fn probability_advice(probability: f64, config: &HelperConfig, rng: &mut impl Rng) -> String {
    let summary = probability_summary(probability);
    match Recommendation::for_probability(probability, config) {
        Some(recommendation) => format!("{} {}", summary, recommendation.phrase(rng)),
        None => summary,
    }
}

/// Summarize a Monte-Carlo estimate
pub fn estimate_summary(estimate: &Estimate) -> String {
    format!(
        "Over {} simulated battles of {} vs {}, the attackers won {:.1} percent of the time, \
         taking {:.1} rounds on average.",
        estimate.trials,
        estimate.attackers,
        estimate.defenders,
        estimate.win_rate * 100.0,
        estimate.mean_rounds
    )
}
