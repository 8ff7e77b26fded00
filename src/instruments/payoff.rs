//! Terminal payoff functions.
//!
//! A [`Payoff`] maps a spot (or spot average) to an amount. Payoffs are
//! pure and clonable behind a box: every container that owns one
//! deep-copies it on clone, so two coexisting holders never alias.

use crate::core::OptionType;

/// Clone support for boxed payoff trait objects.
pub trait PayoffClone {
    /// Clones the concrete payoff behind the trait object.
    fn clone_box(&self) -> Box<dyn Payoff>;
}

impl<T> PayoffClone for T
where
    T: 'static + Payoff + Clone,
{
    fn clone_box(&self) -> Box<dyn Payoff> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Payoff> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Pure terminal payoff function.
pub trait Payoff: std::fmt::Debug + Send + Sync + PayoffClone {
    /// Payoff amount for the given spot level.
    fn value(&self, spot: f64) -> f64;
}

/// Call/put intrinsic payoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaPayoff {
    option_type: OptionType,
    strike: f64,
}

impl VanillaPayoff {
    /// Builds a payoff with explicit side.
    pub fn new(option_type: OptionType, strike: f64) -> Self {
        Self {
            option_type,
            strike,
        }
    }

    /// Call payoff `max(spot - strike, 0)`.
    pub fn call(strike: f64) -> Self {
        Self::new(OptionType::Call, strike)
    }

    /// Put payoff `max(strike - spot, 0)`.
    pub fn put(strike: f64) -> Self {
        Self::new(OptionType::Put, strike)
    }

    /// Strike level.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Option side.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

impl Payoff for VanillaPayoff {
    #[inline]
    fn value(&self, spot: f64) -> f64 {
        (self.option_type.sign() * (spot - self.strike)).max(0.0)
    }
}

/// Cash-or-nothing digital payoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalPayoff {
    option_type: OptionType,
    strike: f64,
    cash: f64,
}

impl DigitalPayoff {
    /// Pays `cash` when the option side finishes in the money.
    pub fn new(option_type: OptionType, strike: f64, cash: f64) -> Self {
        Self {
            option_type,
            strike,
            cash,
        }
    }
}

impl Payoff for DigitalPayoff {
    #[inline]
    fn value(&self, spot: f64) -> f64 {
        if self.option_type.sign() * (spot - self.strike) > 0.0 {
            self.cash
        } else {
            0.0
        }
    }
}
