//! Configuration errors raised when a simulation is constructed.
//!
//! Update steps are total over their inputs, so this is the only error
//! taxonomy in the workspace: a bad configuration is rejected up front and
//! never reaches the update loop.

use thiserror::Error;

/// Result type for simulation construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Reasons a simulation configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A grid was requested with no cells.
    #[error("grid must contain at least one cell")]
    EmptyGrid,

    /// A grid has fewer cells than the scheme needs.
    #[error("grid of {cells} cells is too small, at least {min} required")]
    GridTooSmall { cells: usize, min: usize },

    /// A length, spacing or physical parameter is zero, negative or not finite.
    #[error("`{name}` must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A count that must be at least one is zero.
    #[error("`{name}` must be at least 1")]
    ZeroCount { name: &'static str },

    /// A value that may be any real number is NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// A fraction lies outside the open unit interval.
    #[error("`{name}` must lie strictly between 0 and 1, got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    /// Supplied samples do not match the configured grid.
    #[error("`{name}` has {found} samples, grid has {expected}")]
    LengthMismatch { name: &'static str, expected: usize, found: usize },

    /// An initial-condition profile index has no matching profile.
    #[error("unknown boundary profile index {0}")]
    UnknownProfile(usize),

    /// The left/right node partition leaves no consistent classification.
    #[error("invalid node partition: {left} source nodes, boundary from {right}, {nodes} nodes")]
    InvalidPartition { left: usize, right: usize, nodes: usize },
}

/// Reject zero, negative and non-finite values.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

/// Reject NaN and infinities.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("dx", 0.5), Ok(0.5));
        assert_eq!(
            ensure_positive("dx", 0.0),
            Err(ConfigError::NonPositive { name: "dx", value: 0.0 })
        );
        assert!(ensure_positive("dx", -1.0).is_err());
        assert!(ensure_positive("dx", f64::INFINITY).is_err());
        assert!(ensure_positive("dx", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_finite_accepts_negative() {
        assert_eq!(ensure_finite("theta", -3.0), Ok(-3.0));
        assert!(ensure_finite("theta", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::GridTooSmall { cells: 1, min: 2 };
        assert_eq!(err.to_string(), "grid of 1 cells is too small, at least 2 required");
        assert_eq!(
            ConfigError::UnknownProfile(7).to_string(),
            "unknown boundary profile index 7"
        );
        assert_eq!(
            ConfigError::ZeroCount { name: "pulse_steps" }.to_string(),
            "`pulse_steps` must be at least 1"
        );
    }
}
