//! Geometric Brownian path simulator driven by parameter curves.
//!
//! Spot evolves under time-varying drift and volatility with the exact
//! log-normal stepping rule
//!
//! ```text
//! S(t_{i+1}) = S(t_i) * exp( int drift - 0.5 * int vol^2 + sqrt(int vol^2) * z_i )
//! ```
//!
//! where the integrals run over the step and `z_i` is a standard normal
//! draw. Both curve integrals are evaluated exactly once per step, at
//! construction; simulation itself touches no curve.

use crate::core::PricingError;
use crate::market::Parameter;
use crate::random::{StdRngGenerator, VariateGenerator};

/// Simulates spot values at a fixed observation schedule.
///
/// The generator is owned by value: constructing a simulator moves the
/// generator in, so no simulation ever advances a caller-held copy.
/// Scenario independence is a precondition on the generator's draws and
/// is not verified here. Extreme parameter values propagate as ordinary
/// floating-point specials through the simulated spots.
#[derive(Debug, Clone)]
pub struct GbmPathSimulator<G> {
    spot: f64,
    times: Vec<f64>,
    log_drifts: Vec<f64>,
    log_sds: Vec<f64>,
    generator: G,
    variates: Vec<f64>,
}

impl<G: VariateGenerator> GbmPathSimulator<G> {
    /// Builds a simulator over `observation_times`.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when the spot is not
    /// positive and finite, the schedule is empty, non-positive, not
    /// strictly increasing or non-finite, the integrated variance over
    /// any step is not positive and finite, or the generator's
    /// dimensionality differs from the schedule length.
    pub fn new(
        spot: f64,
        observation_times: Vec<f64>,
        drift: &dyn Parameter,
        vol: &dyn Parameter,
        generator: G,
    ) -> Result<Self, PricingError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "spot must be positive and finite".to_string(),
            ));
        }
        if observation_times.is_empty() {
            return Err(PricingError::InvalidInput(
                "observation schedule cannot be empty".to_string(),
            ));
        }
        if observation_times.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(PricingError::InvalidInput(
                "observation times must be positive and finite".to_string(),
            ));
        }
        if observation_times.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PricingError::InvalidInput(
                "observation times must be strictly increasing".to_string(),
            ));
        }
        if generator.dimensionality() != observation_times.len() {
            return Err(PricingError::InvalidInput(format!(
                "generator dimensionality {} does not match {} observation times",
                generator.dimensionality(),
                observation_times.len()
            )));
        }

        let mut log_drifts = Vec::with_capacity(observation_times.len());
        let mut log_sds = Vec::with_capacity(observation_times.len());
        let mut start = 0.0;
        for &t in &observation_times {
            let variance = vol.integral_square(start, t);
            if !variance.is_finite() || variance <= 0.0 {
                return Err(PricingError::InvalidInput(format!(
                    "integrated variance over [{start}, {t}] must be positive and finite"
                )));
            }
            let log_drift = drift.integral(start, t) - 0.5 * variance;
            if !log_drift.is_finite() {
                return Err(PricingError::NumericalError(format!(
                    "drift integral over [{start}, {t}] is not finite"
                )));
            }
            log_drifts.push(log_drift);
            log_sds.push(variance.sqrt());
            start = t;
        }

        let variates = vec![0.0; observation_times.len()];
        Ok(Self {
            spot,
            times: observation_times,
            log_drifts,
            log_sds,
            generator,
            variates,
        })
    }

    /// Single-observation simulator producing terminal spots at `expiry`.
    pub fn terminal(
        spot: f64,
        expiry: f64,
        drift: &dyn Parameter,
        vol: &dyn Parameter,
        generator: G,
    ) -> Result<Self, PricingError> {
        Self::new(spot, vec![expiry], drift, vol, generator)
    }

    /// The observation schedule.
    #[inline]
    pub fn observation_times(&self) -> &[f64] {
        &self.times
    }

    /// Initial spot level.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Simulates one path into `path`; `path[i]` is the spot at
    /// `observation_times()[i]`.
    pub fn simulate_into(&mut self, path: &mut [f64]) {
        debug_assert_eq!(path.len(), self.times.len());
        self.generator.gaussians(&mut self.variates);

        let mut s = self.spot;
        for (i, slot) in path.iter_mut().enumerate() {
            s *= self.log_sds[i].mul_add(self.variates[i], self.log_drifts[i]).exp();
            *slot = s;
        }
    }

    /// Simulates one path into fresh storage.
    pub fn simulate_path(&mut self) -> Vec<f64> {
        let mut path = vec![0.0; self.times.len()];
        self.simulate_into(&mut path);
        path
    }

    /// Simulates `n_scenarios` independent paths.
    ///
    /// `n_scenarios == 0` yields an empty set, not an error.
    pub fn simulate_paths(&mut self, n_scenarios: usize) -> Vec<Vec<f64>> {
        (0..n_scenarios).map(|_| self.simulate_path()).collect()
    }

    /// Simulates `n_scenarios` terminal spot values.
    pub fn simulate_terminals(&mut self, n_scenarios: usize) -> Vec<f64> {
        let mut path = vec![0.0; self.times.len()];
        (0..n_scenarios)
            .map(|_| {
                self.simulate_into(&mut path);
                path[path.len() - 1]
            })
            .collect()
    }
}

impl GbmPathSimulator<StdRngGenerator> {
    /// Builds a simulator with the default built-in generator.
    pub fn with_default_generator(
        spot: f64,
        observation_times: Vec<f64>,
        drift: &dyn Parameter,
        vol: &dyn Parameter,
        seed: u64,
    ) -> Result<Self, PricingError> {
        let generator = StdRngGenerator::new(observation_times.len(), seed);
        Self::new(spot, observation_times, drift, vol, generator)
    }

    /// Terminal-value simulator with the default built-in generator.
    pub fn terminal_with_default_generator(
        spot: f64,
        expiry: f64,
        drift: &dyn Parameter,
        vol: &dyn Parameter,
        seed: u64,
    ) -> Result<Self, PricingError> {
        Self::terminal(spot, expiry, drift, vol, StdRngGenerator::new(1, seed))
    }
}
