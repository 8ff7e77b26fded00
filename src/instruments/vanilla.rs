//! Plain-vanilla option contract: a payoff applied at a single expiry.

use super::payoff::Payoff;

/// Vanilla option owning its payoff.
///
/// Cloning the option deep-copies the payoff, so copies are independently
/// usable and droppable.
#[derive(Debug, Clone)]
pub struct VanillaOption {
    payoff: Box<dyn Payoff>,
    expiry: f64,
}

impl VanillaOption {
    /// Builds an option from a payoff and expiry in year fractions.
    pub fn new<P: Payoff + 'static>(payoff: P, expiry: f64) -> Self {
        Self {
            payoff: Box::new(payoff),
            expiry,
        }
    }

    /// Expiry in year fractions.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Payoff amount at the given terminal spot.
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        self.payoff.value(spot)
    }
}
