//! Shallow-water fluid surface simulation
//!
//! Two independent 1-D fluid columns, one over a sinusoidal bed and one over
//! a flat bed, advanced by an explicit finite-difference surface-gravity-wave
//! scheme with a fixed internal time step.

pub mod equations;
pub mod physics;
pub mod profile;

pub use physics::{FluidColumn, FluidColumnConfig, FluidGeometry, FluidSurfaceDemo};
pub use profile::BedProfile;
