//! Simple pendulum simulation
//!
//! Two independent frictionless pendulums hang from a shared pivot and are
//! advanced with semi-implicit Euler at a fixed 100 ms step, whatever the
//! real frame rate.

pub mod equations;
pub mod physics;

pub use physics::{Pendulum, PendulumConfig, PendulumDemo, PendulumGeometry};
