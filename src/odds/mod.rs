//! Win probabilities: the fixed lookup table, an exact solver for the
//! simulator's rule, and Monte-Carlo estimates

pub mod estimate;
pub mod exact;
pub mod table;

pub use estimate::{estimate, Estimate};
pub use exact::{exact_win_probability, ExactSolver, MAX_EXACT_FORCE};
pub use table::{
    in_table, lookup_probability, win_probability, MAX_TABLE_ATTACKERS, MAX_TABLE_DEFENDERS,
    MIN_TABLE_ATTACKERS, MIN_TABLE_DEFENDERS, OUT_OF_TABLE,
};
