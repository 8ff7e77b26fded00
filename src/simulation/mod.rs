//! Path simulation under single-factor geometric Brownian dynamics.

pub mod gbm;

pub use gbm::GbmPathSimulator;
