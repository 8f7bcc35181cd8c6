//! Precomputed win probabilities for small battles
//!
//! Rows are keyed by the number of armies able to roll dice (2 to 12),
//! columns by the number of defending armies (1 to 10). A row therefore
//! describes an attack with one more army in total, the one left behind,
//! than the same number passed to [`crate::battle::simulate`]: row 2 is a
//! three-army attack. Values are the published figures for the classic
//! pairing, where the highest attacker die meets the highest defender die,
//! rounded to three places.
//!
//! Table entries do not line up one-to-one with
//! [`crate::odds::exact_win_probability`]. For example
//! `lookup_probability(2, 1)` is 0.754 while a simulated 2 vs 1 battle is a
//! single die duel won 15 times in 36.

/// Returned by [`lookup_probability`] for battles outside the table
pub const OUT_OF_TABLE: f64 = -1.0;

pub const MIN_TABLE_ATTACKERS: u32 = 2;
pub const MAX_TABLE_ATTACKERS: u32 = 12;
pub const MIN_TABLE_DEFENDERS: u32 = 1;
pub const MAX_TABLE_DEFENDERS: u32 = 10;

const ROWS: usize = (MAX_TABLE_ATTACKERS - MIN_TABLE_ATTACKERS + 1) as usize;
const COLUMNS: usize = (MAX_TABLE_DEFENDERS - MIN_TABLE_DEFENDERS + 1) as usize;

#[rustfmt::skip]
static PROBABILITY_TABLE: [[f64; COLUMNS]; ROWS] = [
    [0.754, 0.363, 0.206, 0.091, 0.049, 0.021, 0.011, 0.005, 0.003, 0.001],
    [0.916, 0.656, 0.470, 0.315, 0.206, 0.134, 0.084, 0.054, 0.033, 0.021],
    [0.972, 0.785, 0.642, 0.477, 0.359, 0.253, 0.181, 0.123, 0.086, 0.057],
    [0.990, 0.890, 0.769, 0.638, 0.506, 0.397, 0.297, 0.224, 0.162, 0.118],
    [0.997, 0.934, 0.857, 0.745, 0.638, 0.521, 0.423, 0.329, 0.258, 0.193],
    [0.999, 0.967, 0.910, 0.834, 0.736, 0.640, 0.536, 0.446, 0.357, 0.287],
    [1.000, 0.980, 0.947, 0.888, 0.818, 0.730, 0.643, 0.547, 0.464, 0.380],
    [1.000, 0.990, 0.967, 0.930, 0.873, 0.808, 0.726, 0.646, 0.558, 0.480],
    [1.000, 0.994, 0.981, 0.954, 0.916, 0.861, 0.800, 0.724, 0.650, 0.568],
    [1.000, 0.997, 0.988, 0.972, 0.943, 0.905, 0.852, 0.794, 0.723, 0.654],
    [1.000, 0.998, 0.993, 0.982, 0.964, 0.934, 0.896, 0.845, 0.790, 0.723],
];

/// Whether the table covers this matchup
pub fn in_table(attackers: u32, defenders: u32) -> bool {
    (MIN_TABLE_ATTACKERS..=MAX_TABLE_ATTACKERS).contains(&attackers)
        && (MIN_TABLE_DEFENDERS..=MAX_TABLE_DEFENDERS).contains(&defenders)
}

/// Probability that the attackers destroy the defenders, or
/// [`OUT_OF_TABLE`] (`-1.0`) when the matchup is not covered
pub fn lookup_probability(attackers: u32, defenders: u32) -> f64 {
    win_probability(attackers, defenders).unwrap_or(OUT_OF_TABLE)
}

/// Like [`lookup_probability`], with `None` in place of the sentinel
pub fn win_probability(attackers: u32, defenders: u32) -> Option<f64> {
    if !in_table(attackers, defenders) {
        return None;
    }
    let row = (attackers - MIN_TABLE_ATTACKERS) as usize;
    let column = (defenders - MIN_TABLE_DEFENDERS) as usize;
    Some(PROBABILITY_TABLE[row][column])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_entry() {
        assert_eq!(lookup_probability(3, 2), 0.656);
        assert_eq!(lookup_probability(2, 1), 0.754);
        assert_eq!(lookup_probability(12, 10), 0.723);
    }

    #[test]
    fn test_attacker_bounds() {
        assert_eq!(lookup_probability(0, 5), OUT_OF_TABLE);
        assert_eq!(lookup_probability(1, 5), OUT_OF_TABLE);
        assert_eq!(lookup_probability(13, 5), OUT_OF_TABLE);
        assert!(lookup_probability(12, 5) >= 0.0);
    }

    #[test]
    fn test_defender_bounds() {
        assert_eq!(lookup_probability(5, 0), OUT_OF_TABLE);
        assert_eq!(lookup_probability(5, 11), OUT_OF_TABLE);
        assert!(lookup_probability(5, 10) >= 0.0);
    }

    #[test]
    fn test_option_form_matches_sentinel() {
        assert_eq!(win_probability(1, 5), None);
        assert_eq!(win_probability(4, 4), Some(lookup_probability(4, 4)));
    }

    #[test]
    fn test_coverage_matches_sentinel() {
        for attackers in 0..15 {
            for defenders in 0..13 {
                let covered = in_table(attackers, defenders);
                assert_eq!(covered, lookup_probability(attackers, defenders) != OUT_OF_TABLE);
            }
        }
    }

    #[test]
    fn test_all_entries_are_probabilities() {
        for row in PROBABILITY_TABLE.iter() {
            for &p in row {
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn test_more_attackers_never_hurts() {
        for defenders in MIN_TABLE_DEFENDERS..=MAX_TABLE_DEFENDERS {
            for attackers in MIN_TABLE_ATTACKERS..MAX_TABLE_ATTACKERS {
                assert!(
                    lookup_probability(attackers + 1, defenders)
                        >= lookup_probability(attackers, defenders)
                );
            }
        }
    }

    #[test]
    fn test_more_defenders_never_helps_attack() {
        for attackers in MIN_TABLE_ATTACKERS..=MAX_TABLE_ATTACKERS {
            for defenders in MIN_TABLE_DEFENDERS..MAX_TABLE_DEFENDERS {
                assert!(
                    lookup_probability(attackers, defenders + 1)
                        <= lookup_probability(attackers, defenders)
                );
            }
        }
    }
}
