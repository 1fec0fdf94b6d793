//! Initial bed and surface profiles

use std::f64::consts::PI;

use common::{ConfigError, Result};

/// Initial-condition generator for a fluid column, fixed at construction
///
/// Constant offsets (`height / 2`, `height / 6`) are truncated to whole
/// units; the sine terms are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BedProfile {
    /// Bed of two superposed sine harmonics over a half-period surface bump
    #[default]
    SinusoidalBed,
    /// Flat bed under a smaller full-period surface wave
    FlatBed,
}

impl BedProfile {
    pub const ALL: [BedProfile; 2] = [BedProfile::SinusoidalBed, BedProfile::FlatBed];

    /// Resolve a profile from its configuration index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ConfigError::UnknownProfile(index))
    }

    pub fn index(self) -> usize {
        match self {
            BedProfile::SinusoidalBed => 0,
            BedProfile::FlatBed => 1,
        }
    }

    /// Initial surface height of cell `i` in a domain `height` tall.
    pub fn surface_at(self, i: usize, cells: usize, height: f64) -> f64 {
        let x = i as f64;
        match self {
            BedProfile::SinusoidalBed => {
                let dr = PI / cells as f64;
                (height / 2.0).trunc() + (dr * x).sin() * height / 4.0
            }
            BedProfile::FlatBed => {
                let dr = 2.0 * PI / cells as f64;
                (height / 2.0).trunc() + (dr * x).sin() * height / 6.0
            }
        }
    }

    /// Bed height of cell `i` in a domain `height` tall.
    pub fn bed_at(self, i: usize, cells: usize, height: f64) -> f64 {
        match self {
            BedProfile::SinusoidalBed => {
                let dr = PI / cells as f64;
                let x = i as f64;
                (dr * x).sin() * height / 6.0
                    + (height / 6.0).trunc()
                    + (2.0 * dr * x).sin() * height / 6.0
            }
            BedProfile::FlatBed => 0.0,
        }
    }
}
