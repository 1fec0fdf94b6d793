//! Wave-equation string simulation
//!
//! Strings of grid nodes carry displacement, velocity and tension fields.
//! A single raised-sine pulse is injected at the left end and travels along
//! each string under an explicit leapfrog-style velocity/tension scheme.
//! The demo drives five independent strings in parallel.

pub mod equations;
pub mod nodes;
pub mod physics;

pub use nodes::NodeKind;
pub use physics::{SourcePulse, WaveGeometry, WaveString, WaveStringConfig, WaveStringDemo};
