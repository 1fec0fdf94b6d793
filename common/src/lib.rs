//! Common utilities for the fixed-step physics demos
//!
//! This crate provides the pieces shared by the pendulum, fluid surface and
//! wave string simulations: uniformly sampled scalar fields, render geometry,
//! configuration errors, the simulation contract and a background frame driver.

pub mod driver;
pub mod equations;
pub mod error;
pub mod field;
pub mod geometry;
pub mod simulation;

pub use driver::*;
pub use equations::*;
pub use error::*;
pub use field::*;
pub use geometry::*;
pub use simulation::*;

/// Physical constants used in simulations
pub mod constants {
    /// Gravitational acceleration at the Earth's surface in m/s²
    pub const STANDARD_GRAVITY: f64 = 9.81;
}
