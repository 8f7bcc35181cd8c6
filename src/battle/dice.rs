//! Dice sources for battle resolution
//!
//! The simulator never touches a global generator. Callers hand in a
//! [`DiceSource`], so production code can use a seeded ChaCha stream and
//! tests can script every face.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::battle::constants::DIE_FACES;

/// Something that can roll a six-sided die
pub trait DiceSource {
    /// Roll one die, returning a face in `1..=6`
    fn roll(&mut self) -> u8;

    /// Roll `count` dice
    fn roll_many(&mut self, count: u32) -> Vec<u8> {
        (0..count).map(|_| self.roll()).collect()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Uniform dice backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<ChaCha8Rng> {
    /// Deterministic dice stream for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiceSource for RngDice<R> {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Dice that replay a fixed sequence of faces, cycling when exhausted
///
/// Faces outside `1..=6` are clamped into range.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u8>,
    index: usize,
}

impl ScriptedDice {
    /// Cycle through `faces` in order
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty.
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(!faces.is_empty(), "ScriptedDice needs at least one face");
        Self { faces, index: 0 }
    }

    /// Always rolls the same face
    pub fn constant(face: u8) -> Self {
        Self::new(vec![face])
    }

    /// Number of dice rolled so far
    pub fn rolled(&self) -> usize {
        self.index
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.index % self.faces.len()];
        self.index += 1;
        face.clamp(1, DIE_FACES)
    }
}
