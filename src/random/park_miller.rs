//! Park-Miller "minimal standard" linear congruential generator.

use super::VariateGenerator;

const MULTIPLIER: u64 = 16_807;
const MODULUS: u64 = 2_147_483_647; // 2^31 - 1, prime

/// MINSTD linear congruential generator parameterized by batch size.
///
/// A seed congruent to 0 mod 2^31 - 1 would lock the recurrence at zero,
/// so it is remapped to 1 at construction and on
/// [`set_seed`](VariateGenerator::set_seed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkMillerGenerator {
    state: u64,
    initial_state: u64,
    dimensionality: usize,
}

impl ParkMillerGenerator {
    /// Creates a generator emitting `dimensionality` draws per batch.
    pub fn new(dimensionality: usize, seed: u64) -> Self {
        let initial_state = remap_seed(seed);
        Self {
            state: initial_state,
            initial_state,
            dimensionality,
        }
    }

    #[inline]
    fn next_state(&mut self) -> u64 {
        // MULTIPLIER * state < 2^46, no overflow in u64.
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state
    }
}

#[inline]
fn remap_seed(seed: u64) -> u64 {
    let s = seed % MODULUS;
    if s == 0 { 1 } else { s }
}

impl VariateGenerator for ParkMillerGenerator {
    fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    fn uniforms(&mut self, out: &mut [f64]) {
        debug_assert_eq!(out.len(), self.dimensionality);
        for u in out.iter_mut() {
            // States lie in [1, MODULUS - 1], so draws are strictly
            // inside (0, 1).
            *u = self.next_state() as f64 / MODULUS as f64;
        }
    }

    fn reset(&mut self) {
        self.state = self.initial_state;
    }

    fn set_seed(&mut self, seed: u64) {
        self.initial_state = remap_seed(seed);
        self.state = self.initial_state;
    }
}
