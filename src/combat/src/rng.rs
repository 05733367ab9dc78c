// src/combat/src/rng.rs
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of every random decision made in combat.
///
/// Battle code only ever talks to this trait, so tests can swap in scripted
/// rolls while the game uses a seeded [`CombatRng`].
pub trait Dice {
    /// Uniform integer in `low..=high`
    fn roll(&mut self, low: u32, high: u32) -> u32;

    /// `true` with the given probability
    fn chance(&mut self, probability: f64) -> bool;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        (**self).roll(low, high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }
}

/// Deterministic PCG-backed dice
#[derive(Debug, Clone)]
pub struct CombatRng {
    rng: Pcg32,
    seed: u64,
}

impl CombatRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewind to the start of the sequence
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}

impl Dice for CombatRng {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        // an inverted range collapses onto its lower bound
        self.rng.random_range(low..=high.max(low))
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }
}
