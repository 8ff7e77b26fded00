//! Antithetic-variates decorator over any [`VariateGenerator`].

use super::VariateGenerator;

/// Emits mirrored batch pairs: a fresh inner draw, then its mirror.
///
/// The mirror of a uniform batch is `1 - u` per component; the mirror of
/// a gaussian batch is the sign-negated batch. The inner generator is
/// never consulted on the second call of a pair, so `2n` wrapped calls
/// cost `n` inner draws.
///
/// A consumer that stops after an odd number of calls leaves the wrapper
/// mid-pair with the mirror still owed; that state is legal and the next
/// call resumes it. Both halves of a pair must be drawn through the same
/// method (`uniforms` or `gaussians`) — the cached batch lives in the
/// space it was drawn in. [`reset`](VariateGenerator::reset) discards a
/// pending half-pair.
#[derive(Debug, Clone)]
pub struct Antithetic<G> {
    inner: G,
    cache: Vec<f64>,
    mirror_pending: bool,
}

impl<G: VariateGenerator> Antithetic<G> {
    /// Wraps an inner generator.
    pub fn new(inner: G) -> Self {
        let cache = vec![0.0; inner.dimensionality()];
        Self {
            inner,
            cache,
            mirror_pending: false,
        }
    }

    /// Consumes the wrapper and returns the inner generator.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: VariateGenerator> VariateGenerator for Antithetic<G> {
    fn dimensionality(&self) -> usize {
        self.inner.dimensionality()
    }

    fn uniforms(&mut self, out: &mut [f64]) {
        if self.mirror_pending {
            for (u, &cached) in out.iter_mut().zip(self.cache.iter()) {
                *u = 1.0 - cached;
            }
            self.mirror_pending = false;
        } else {
            self.inner.uniforms(out);
            self.cache.copy_from_slice(out);
            self.mirror_pending = true;
        }
    }

    fn gaussians(&mut self, out: &mut [f64]) {
        if self.mirror_pending {
            for (z, &cached) in out.iter_mut().zip(self.cache.iter()) {
                *z = -cached;
            }
            self.mirror_pending = false;
        } else {
            self.inner.gaussians(out);
            self.cache.copy_from_slice(out);
            self.mirror_pending = true;
        }
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.mirror_pending = false;
    }

    fn set_seed(&mut self, seed: u64) {
        self.inner.set_seed(seed);
        self.mirror_pending = false;
    }
}
