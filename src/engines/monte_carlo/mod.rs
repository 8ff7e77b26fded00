//! Monte Carlo pricing engines.

pub mod exotic_mc;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod vanilla_mc;

pub use exotic_mc::ExoticMcEngine;
#[cfg(feature = "parallel")]
pub use parallel::price_vanilla_parallel;
pub use vanilla_mc::VanillaMcEngine;
