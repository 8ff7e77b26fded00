//! Terminal-value Monte Carlo engine for vanilla options.

use crate::core::PricingError;
use crate::instruments::VanillaOption;
use crate::market::Parameter;
use crate::random::{StdRngGenerator, VariateGenerator};
use crate::simulation::GbmPathSimulator;
use crate::stats::StatisticsGatherer;

/// Prices vanilla options by simulating terminal spots under the rate
/// curve as risk-neutral drift.
///
/// Each scenario's payoff is discounted by `exp(-int_0^T r)` (the rate
/// integral is evaluated once per pricing call) and pushed into the
/// caller's gatherer, so one gatherer can accumulate across calls and a
/// [`crate::stats::ConvergenceTable`] sees every scenario.
#[derive(Debug, Clone)]
pub struct VanillaMcEngine {
    spot: f64,
    rate: Box<dyn Parameter>,
    vol: Box<dyn Parameter>,
}

impl VanillaMcEngine {
    /// Builds an engine from market state.
    pub fn new<R, V>(spot: f64, rate: R, vol: V) -> Self
    where
        R: Parameter + 'static,
        V: Parameter + 'static,
    {
        Self {
            spot,
            rate: Box::new(rate),
            vol: Box::new(vol),
        }
    }

    /// Runs `n_scenarios` through the supplied generator.
    ///
    /// The generator is taken by value: the engine owns and advances its
    /// copy, never a caller-held one. `n_scenarios == 0` records
    /// nothing and succeeds.
    pub fn price<G: VariateGenerator>(
        &self,
        option: &VanillaOption,
        generator: G,
        gatherer: &mut dyn StatisticsGatherer,
        n_scenarios: usize,
    ) -> Result<(), PricingError> {
        let expiry = option.expiry();
        let mut simulator = GbmPathSimulator::terminal(
            self.spot,
            expiry,
            self.rate.as_ref(),
            self.vol.as_ref(),
            generator,
        )?;
        let discount = (-self.rate.integral(0.0, expiry)).exp();

        let mut path = [0.0];
        for _ in 0..n_scenarios {
            simulator.simulate_into(&mut path);
            gatherer.dump_one_result(discount * option.payoff(path[0]));
        }
        Ok(())
    }

    /// Runs with the default built-in generator seeded by `seed`.
    pub fn price_with_default_generator(
        &self,
        option: &VanillaOption,
        seed: u64,
        gatherer: &mut dyn StatisticsGatherer,
        n_scenarios: usize,
    ) -> Result<(), PricingError> {
        self.price(option, StdRngGenerator::new(1, seed), gatherer, n_scenarios)
    }
}
