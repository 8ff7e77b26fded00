//! FerroMC prices vanilla and path-dependent equity derivatives by Monte
//! Carlo simulation: pluggable random-variate generators, a geometric
//! Brownian path simulator driven by drift/volatility curves, statistics
//! gatherers with convergence diagnostics, and a template engine that
//! turns simulated paths into discounted cash flows.
//!
//! The moving parts compose behind small traits:
//! - [`random::VariateGenerator`] — interchangeable draw algorithms
//!   (Park-Miller, the built-in default, or the [`random::Antithetic`]
//!   variance-reduction decorator over either).
//! - [`market::Parameter`] — deterministic curves consumed through their
//!   definite integrals.
//! - [`stats::StatisticsGatherer`] — result accumulation, decorated by
//!   [`stats::ConvergenceTable`] for doubling-checkpoint reports.
//! - [`instruments::PathDependent`] — contracts that turn one path into
//!   timed cash flows, priced by [`engines::monte_carlo::ExoticMcEngine`].
//!
//! Numerical considerations:
//! - Every run is reproducible: draws are pure functions of (seed, call
//!   index), and simulators own their generator by value.
//! - Estimator noise is sampling-driven; the convergence table exposes it
//!   as a function of scenario count without rerunning.
//! - Degenerate configurations (zero volatility, non-monotonic
//!   schedules, degenerate seeds) fail fast at construction rather than
//!   surfacing as NaN downstream.
//!
//! # Feature Flags
//! - `parallel`: enables the Rayon-powered scenario fan-out with
//!   reproducible per-stream seeds.
//!
//! # Quick Start
//! Price a European call and watch it converge:
//! ```rust
//! use ferromc::engines::monte_carlo::VanillaMcEngine;
//! use ferromc::instruments::{VanillaOption, VanillaPayoff};
//! use ferromc::market::ConstantParameter;
//! use ferromc::random::ParkMillerGenerator;
//! use ferromc::stats::{ConvergenceTable, MeanGatherer, StatisticsGatherer};
//!
//! let engine = VanillaMcEngine::new(
//!     100.0,
//!     ConstantParameter::new(0.02),
//!     ConstantParameter::new(0.5),
//! );
//! let option = VanillaOption::new(VanillaPayoff::call(90.0), 30.0);
//!
//! let mut gatherer = ConvergenceTable::new(Box::new(MeanGatherer::new()));
//! engine
//!     .price(&option, ParkMillerGenerator::new(1, 1), &mut gatherer, 64)
//!     .expect("pricing succeeds");
//!
//! assert_eq!(gatherer.sims_so_far(), 64);
//! // Rows at scenario counts 1, 2, 4, ..., 64.
//! assert_eq!(gatherer.results_so_far().len(), 7);
//! ```
//!
//! Price an arithmetic Asian call through the exotic engine:
//! ```rust
//! use ferromc::engines::monte_carlo::ExoticMcEngine;
//! use ferromc::instruments::{ArithmeticAsianOption, VanillaPayoff};
//! use ferromc::market::ConstantParameter;
//! use ferromc::stats::{MeanGatherer, StatisticsGatherer};
//!
//! let fixings: Vec<f64> = (1..=12).map(|m| m as f64 / 12.0).collect();
//! let option = ArithmeticAsianOption::new(fixings, 1.0, VanillaPayoff::call(100.0))
//!     .expect("valid contract");
//!
//! let rate = ConstantParameter::new(0.05);
//! let vol = ConstantParameter::new(0.2);
//! let mut engine = ExoticMcEngine::with_default_generator(&option, 100.0, &rate, &vol, 42)
//!     .expect("valid engine");
//!
//! let mut gatherer = MeanGatherer::new();
//! engine.run(&mut gatherer, 10_000);
//! let price = gatherer.results_so_far()[0][0];
//! assert!(price > 0.0 && price < 100.0);
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod market;
pub mod math;
pub mod random;
pub mod simulation;
pub mod stats;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{OptionType, PricingError};
    pub use crate::engines::monte_carlo::{ExoticMcEngine, VanillaMcEngine};
    pub use crate::instruments::{
        ArithmeticAsianOption, CashFlow, PathDependent, Payoff, VanillaOption, VanillaPayoff,
    };
    pub use crate::market::{ConstantParameter, Parameter};
    pub use crate::random::{Antithetic, ParkMillerGenerator, StdRngGenerator, VariateGenerator};
    pub use crate::simulation::GbmPathSimulator;
    pub use crate::stats::{ConvergenceTable, MeanGatherer, StatisticsGatherer};
}
