//! Arithmetic-average Asian option.

use crate::core::PricingError;

use super::path_dependent::{CashFlow, PathDependent};
use super::payoff::Payoff;

/// Fixed-schedule arithmetic Asian option.
///
/// The payoff is applied to the arithmetic mean of the spots sampled at
/// the fixing schedule, paid at a single delivery date. Cloning the
/// option deep-copies the wrapped payoff: two coexisting copies never
/// share payoff state and can be mutated or dropped independently.
#[derive(Debug, Clone)]
pub struct ArithmeticAsianOption {
    fixing_times: Vec<f64>,
    delivery_time: f64,
    payoff: Box<dyn Payoff>,
}

impl ArithmeticAsianOption {
    /// Builds an Asian option.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when the fixing schedule
    /// is empty, non-finite, non-positive, not strictly increasing, or
    /// extends past the delivery date, or when the delivery date itself
    /// is not positive and finite.
    pub fn new<P: Payoff + 'static>(
        fixing_times: Vec<f64>,
        delivery_time: f64,
        payoff: P,
    ) -> Result<Self, PricingError> {
        if !delivery_time.is_finite() || delivery_time <= 0.0 {
            return Err(PricingError::InvalidInput(
                "delivery time must be positive and finite".to_string(),
            ));
        }
        if fixing_times.is_empty() {
            return Err(PricingError::InvalidInput(
                "fixing schedule cannot be empty".to_string(),
            ));
        }
        if fixing_times.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(PricingError::InvalidInput(
                "fixing times must be positive and finite".to_string(),
            ));
        }
        if fixing_times.windows(2).any(|w| w[1] <= w[0]) {
            return Err(PricingError::InvalidInput(
                "fixing times must be strictly increasing".to_string(),
            ));
        }
        if fixing_times.iter().any(|&t| t > delivery_time) {
            return Err(PricingError::InvalidInput(
                "fixing times cannot extend past the delivery date".to_string(),
            ));
        }

        Ok(Self {
            fixing_times,
            delivery_time,
            payoff: Box::new(payoff),
        })
    }

    /// Delivery date in year fractions.
    #[inline]
    pub fn delivery_time(&self) -> f64 {
        self.delivery_time
    }
}

impl PathDependent for ArithmeticAsianOption {
    fn look_at_times(&self) -> &[f64] {
        &self.fixing_times
    }

    fn max_number_of_cash_flows(&self) -> usize {
        1
    }

    fn possible_cash_flow_times(&self) -> Vec<f64> {
        vec![self.delivery_time]
    }

    fn cash_flows(&self, spots: &[f64], flows: &mut Vec<CashFlow>) {
        debug_assert_eq!(spots.len(), self.fixing_times.len());
        let average = spots.iter().sum::<f64>() / self.fixing_times.len() as f64;
        flows.clear();
        flows.push(CashFlow::new(0, self.payoff.value(average)));
    }
}
