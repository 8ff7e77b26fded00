//! Market parameter abstractions consumed by simulators and engines.

pub mod parameters;

pub use parameters::{ConstantParameter, Parameter};
