//! Error types for configuration validation.

use thiserror::Error;

/// Rejected configuration values.
///
/// Validation happens at construction and in [`Rubber::configure`]; a
/// rejected update leaves the previous valid configuration in effect.
/// Values are never silently clamped.
///
/// [`Rubber::configure`]: crate::Rubber::configure
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `max_stretch` must be positive and finite.
    #[error("max stretch must be positive and finite, got {0}")]
    InvalidMaxStretch(f64),
    /// `resistance` must be a finite value in `[0, 1]`.
    #[error("resistance must be in [0, 1], got {0}")]
    InvalidResistance(f64),
    /// Spring stiffness must be positive and finite.
    #[error("spring stiffness must be positive and finite, got {0}")]
    InvalidStiffness(f64),
    /// Spring damping must be non-negative and finite.
    #[error("spring damping must be non-negative and finite, got {0}")]
    InvalidDamping(f64),
    /// Spring mass must be positive and finite.
    #[error("spring mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    /// Tween duration must be positive and finite.
    #[error("tween duration must be positive and finite, got {0} ms")]
    InvalidDuration(f64),
}
