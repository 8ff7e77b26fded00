//! Rayon-parallel vanilla pricing with reproducible stream splitting.
//!
//! Each scenario owns a generator seeded by
//! [`stream_seed`](crate::random::stream_seed)`(base_seed, scenario_index)`,
//! so results are a function of the base seed alone, independent of
//! thread count and scheduling. Discounted payoffs are collected into a
//! scenario-indexed vector and dumped into the gatherer in index order:
//! the gatherer stays the single serialized mutable boundary and a
//! [`crate::stats::ConvergenceTable`] sees counts in the same order a
//! sequential run would produce.

use rayon::prelude::*;

use crate::core::PricingError;
use crate::instruments::VanillaOption;
use crate::market::Parameter;
use crate::random::{stream_seed, StdRngGenerator, VariateGenerator};
use crate::stats::StatisticsGatherer;

/// Prices a vanilla option across rayon workers.
///
/// Semantics match [`crate::engines::monte_carlo::VanillaMcEngine`]
/// driven by per-scenario default generators; only the schedule differs.
pub fn price_vanilla_parallel(
    option: &VanillaOption,
    spot: f64,
    rate: &dyn Parameter,
    vol: &dyn Parameter,
    base_seed: u64,
    gatherer: &mut dyn StatisticsGatherer,
    n_scenarios: usize,
) -> Result<(), PricingError> {
    let expiry = option.expiry();
    if !spot.is_finite() || spot <= 0.0 {
        return Err(PricingError::InvalidInput(
            "spot must be positive and finite".to_string(),
        ));
    }
    if !expiry.is_finite() || expiry <= 0.0 {
        return Err(PricingError::InvalidInput(
            "expiry must be positive and finite".to_string(),
        ));
    }

    let variance = vol.integral_square(0.0, expiry);
    if !variance.is_finite() || variance <= 0.0 {
        return Err(PricingError::InvalidInput(
            "integrated variance to expiry must be positive and finite".to_string(),
        ));
    }
    let rate_integral = rate.integral(0.0, expiry);
    if !rate_integral.is_finite() {
        return Err(PricingError::NumericalError(
            "rate integral to expiry is not finite".to_string(),
        ));
    }

    let log_drift = rate_integral - 0.5 * variance;
    let log_sd = variance.sqrt();
    let discount = (-rate_integral).exp();

    let discounted: Vec<f64> = (0..n_scenarios)
        .into_par_iter()
        .map(|scenario| {
            let mut generator = StdRngGenerator::new(1, stream_seed(base_seed, scenario));
            let mut z = [0.0];
            generator.gaussians(&mut z);
            let terminal = spot * log_sd.mul_add(z[0], log_drift).exp();
            discount * option.payoff(terminal)
        })
        .collect();

    for value in discounted {
        gatherer.dump_one_result(value);
    }
    Ok(())
}
