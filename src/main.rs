//! Game Helper - Entry Point
//!
//! Command-line front end over the battle core. Every subcommand prints the
//! spoken-style sentence by default, or the structured result with
//! `--format json`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use game_helper::battle::{simulate, simulate_traced, RngDice};
use game_helper::core::error::{HelperError, Result};
use game_helper::core::{config, set_config, HelperConfig};
use game_helper::odds::{
    estimate, exact_win_probability, in_table, lookup_probability, MAX_EXACT_FORCE,
};
use game_helper::speech::{
    battle_summary, estimate_summary, probability_advice, probability_summary, Recommendation,
};

/// Game Helper - dice battles and odds
#[derive(Parser, Debug)]
#[command(name = "game-helper")]
#[command(about = "Simulate dice battles and look up the attackers' chances")]
struct Args {
    /// TOML config file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a single battle
    Simulate {
        attackers: u32,
        defenders: u32,

        /// Random seed for a reproducible battle
        #[arg(long)]
        seed: Option<u64>,

        /// Include every round in the output
        #[arg(long)]
        trace: bool,
    },

    /// Look up the attackers' chance in the probability table
    Odds {
        attackers: u32,
        defenders: u32,

        /// Append advice on whether to attack
        #[arg(long)]
        recommend: bool,

        /// Random seed for picking the advice phrase
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compute the exact chance for the simulated rule
    Exact {
        #[arg(value_parser = clap::value_parser!(u32).range(0..=MAX_EXACT_FORCE as i64))]
        attackers: u32,
        #[arg(value_parser = clap::value_parser!(u32).range(0..=MAX_EXACT_FORCE as i64))]
        defenders: u32,
    },

    /// Estimate the chance by simulating many battles
    Estimate {
        attackers: u32,
        defenders: u32,

        /// Number of battles to simulate (overrides the config)
        #[arg(long)]
        trials: Option<u32>,

        /// Random seed for deterministic runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct OddsResult {
    attackers: u32,
    defenders: u32,
    probability: f64,
    in_table: bool,
    recommendation: Option<Recommendation>,
}

#[derive(Serialize)]
struct ExactResult {
    attackers: u32,
    defenders: u32,
    probability: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let loaded = HelperConfig::load(path)?;
        if set_config(loaded).is_err() {
            tracing::warn!("Config already initialized, ignoring {}", path.display());
        }
    }
    let config = config();

    match args.command {
        Command::Simulate {
            attackers,
            defenders,
            seed,
            trace,
        } => {
            let seed = resolve_seed(seed, config);
            let mut dice = RngDice::seeded(seed);

            if trace {
                let trace = simulate_traced(attackers, defenders, &mut dice);
                match args.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trace)?),
                    OutputFormat::Text => {
                        for (i, round) in trace.rounds.iter().enumerate() {
                            println!(
                                "Round {}: attacker {:?} vs defender {:?}, {} of {} won",
                                i + 1,
                                round.attacker_rolls,
                                round.defender_rolls,
                                round.attacker_wins,
                                round.fights
                            );
                        }
                        println!("{}", battle_summary(&trace.outcome));
                    }
                }
            } else {
                let outcome = simulate(attackers, defenders, &mut dice);
                match args.format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
                    OutputFormat::Text => println!("{}", battle_summary(&outcome)),
                }
            }
        }

        Command::Odds {
            attackers,
            defenders,
            recommend,
            seed,
        } => {
            let probability = lookup_probability(attackers, defenders);
            let covered = in_table(attackers, defenders);
            if !covered {
                tracing::info!("{} vs {} is outside the table", attackers, defenders);
            }

            match args.format {
                OutputFormat::Json => {
                    let result = OddsResult {
                        attackers,
                        defenders,
                        probability,
                        in_table: covered,
                        recommendation: if recommend {
                            Recommendation::for_probability(probability, config)
                        } else {
                            None
                        },
                    };
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Text if recommend => {
                    let mut rng = ChaCha8Rng::seed_from_u64(resolve_seed(seed, config));
                    println!("{}", probability_advice(probability, config, &mut rng));
                }
                OutputFormat::Text => println!("{}", probability_summary(probability)),
            }
        }

        Command::Exact {
            attackers,
            defenders,
        } => {
            let probability = exact_win_probability(attackers, defenders).ok_or(
                HelperError::ForceTooLarge {
                    attackers,
                    defenders,
                    limit: MAX_EXACT_FORCE,
                },
            )?;
            match args.format {
                OutputFormat::Json => {
                    let result = ExactResult {
                        attackers,
                        defenders,
                        probability,
                    };
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Text => println!("{}", probability_summary(probability)),
            }
        }

        Command::Estimate {
            attackers,
            defenders,
            trials,
            seed,
        } => {
            let trials = trials.unwrap_or(config.estimate_trials);
            let seed = resolve_seed(seed, config);
            tracing::info!("Simulating {} battles of {} vs {}", trials, attackers, defenders);

            let result = estimate(attackers, defenders, trials, seed)?;
            match args.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => println!("{}", estimate_summary(&result)),
            }
        }
    }

    Ok(())
}

/// Command-line seed, then configured seed, then a fresh one
fn resolve_seed(seed: Option<u64>, config: &HelperConfig) -> u64 {
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    tracing::info!("Using seed {}", seed);
    seed
}
