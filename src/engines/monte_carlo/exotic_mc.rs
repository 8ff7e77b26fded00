//! Template Monte Carlo engine for path-dependent products.
//!
//! The engine drives the loop every exotic shares: simulate a path at
//! the product's look-at times, ask the product for its cash flows,
//! discount each flow to today, hand the scenario value to the gatherer.
//! Products only implement [`PathDependent`]; the engine never knows
//! which contract it is pricing.

use crate::core::PricingError;
use crate::instruments::{CashFlow, PathDependent};
use crate::market::Parameter;
use crate::random::{StdRngGenerator, VariateGenerator};
use crate::simulation::GbmPathSimulator;
use crate::stats::StatisticsGatherer;

/// Monte Carlo engine over one path-dependent product.
///
/// Owns an independent clone of the product, one discount factor per
/// possible cash-flow time (precomputed from the rate curve), and
/// reusable path/flow buffers so steady-state scenarios allocate
/// nothing.
#[derive(Debug, Clone)]
pub struct ExoticMcEngine<G> {
    product: Box<dyn PathDependent>,
    discounts: Vec<f64>,
    simulator: GbmPathSimulator<G>,
    path: Vec<f64>,
    flows: Vec<CashFlow>,
}

impl<G: VariateGenerator> ExoticMcEngine<G> {
    /// Builds an engine for `product` under the given market state.
    ///
    /// The product is cloned, so the engine's pricing never aliases the
    /// caller's instance. The rate curve doubles as risk-neutral drift
    /// and discounting curve.
    pub fn new(
        product: &dyn PathDependent,
        spot: f64,
        rate: &dyn Parameter,
        vol: &dyn Parameter,
        generator: G,
    ) -> Result<Self, PricingError> {
        let product = product.clone_box();
        let simulator =
            GbmPathSimulator::new(spot, product.look_at_times().to_vec(), rate, vol, generator)?;

        let discounts: Vec<f64> = product
            .possible_cash_flow_times()
            .iter()
            .map(|&t| (-rate.integral(0.0, t)).exp())
            .collect();
        if discounts.is_empty() {
            return Err(PricingError::InvalidInput(
                "product declares no possible cash-flow times".to_string(),
            ));
        }

        let path = vec![0.0; product.look_at_times().len()];
        let flows = Vec::with_capacity(product.max_number_of_cash_flows());
        Ok(Self {
            product,
            discounts,
            simulator,
            path,
            flows,
        })
    }

    /// The engine's independent product clone.
    pub fn product(&self) -> &dyn PathDependent {
        self.product.as_ref()
    }

    /// Runs `n_scenarios`, dumping one discounted value per scenario.
    ///
    /// # Panics
    /// Panics when the product emits more cash flows than its declared
    /// [`PathDependent::max_number_of_cash_flows`] or a `time_index`
    /// outside its declared payment dates; both are programming errors
    /// in the product, not recoverable pricing conditions.
    pub fn run(&mut self, gatherer: &mut dyn StatisticsGatherer, n_scenarios: usize) {
        let max_flows = self.product.max_number_of_cash_flows();
        for _ in 0..n_scenarios {
            self.simulator.simulate_into(&mut self.path);
            self.product.cash_flows(&self.path, &mut self.flows);
            assert!(
                self.flows.len() <= max_flows,
                "product emitted {} cash flows, more than its declared maximum {}",
                self.flows.len(),
                max_flows
            );

            let value: f64 = self
                .flows
                .iter()
                .map(|flow| flow.amount * self.discounts[flow.time_index])
                .sum();
            gatherer.dump_one_result(value);
        }
    }
}

impl ExoticMcEngine<StdRngGenerator> {
    /// Builds an engine with the default built-in generator.
    pub fn with_default_generator(
        product: &dyn PathDependent,
        spot: f64,
        rate: &dyn Parameter,
        vol: &dyn Parameter,
        seed: u64,
    ) -> Result<Self, PricingError> {
        let generator = StdRngGenerator::new(product.look_at_times().len(), seed);
        Self::new(product, spot, rate, vol, generator)
    }
}
