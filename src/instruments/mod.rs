//! Contract definitions: payoffs, vanilla options, and path-dependent
//! products.

pub mod asian;
pub mod path_dependent;
pub mod payoff;
pub mod vanilla;

pub use asian::ArithmeticAsianOption;
pub use path_dependent::{CashFlow, PathDependent, PathDependentClone};
pub use payoff::{DigitalPayoff, Payoff, PayoffClone, VanillaPayoff};
pub use vanilla::VanillaOption;
