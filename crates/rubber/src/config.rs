//! Interaction configuration: axis selection, limits, and the release
//! animation variant.
//!
//! The configuration is owned by a [`Rubber`] instance and replaced in
//! place through [`Rubber::configure`], which never touches numeric
//! state or phase.
//!
//! [`Rubber`]: crate::Rubber
//! [`Rubber::configure`]: crate::Rubber::configure

use crate::error::ConfigError;

/// Which stretch components respond to drag input.
///
/// The inactive component stays at zero and is excluded from progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal only.
    X,
    /// Vertical only (the common pull-to-stretch case).
    #[default]
    Y,
    /// Both components are live.
    Both,
}

impl Axis {
    /// Whether the X component is live.
    #[must_use]
    pub const fn includes_x(self) -> bool {
        matches!(self, Self::X | Self::Both)
    }

    /// Whether the Y component is live.
    #[must_use]
    pub const fn includes_y(self) -> bool {
        matches!(self, Self::Y | Self::Both)
    }
}

/// Damped harmonic oscillator parameters for the spring release.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringParams {
    /// Spring constant. Must be positive.
    pub stiffness: f64,
    /// Damping coefficient. Must be non-negative.
    pub damping: f64,
    /// Oscillator mass. Must be positive.
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 20.0,
            mass: 1.0,
        }
    }
}

impl SpringParams {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ConfigError::InvalidStiffness(self.stiffness));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        Ok(())
    }
}

/// Time-based tween parameters for the eased and linear releases.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenParams {
    /// Total tween duration in milliseconds. Must be positive.
    pub duration_ms: f64,
}

impl Default for TweenParams {
    fn default() -> Self {
        Self { duration_ms: 300.0 }
    }
}

impl TweenParams {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(ConfigError::InvalidDuration(self.duration_ms));
        }
        Ok(())
    }
}

/// The release animation, as a tagged union.
///
/// Each variant carries only its own parameters, so switching variants
/// at runtime can never leave stale parameters from a previous variant
/// ambiguously interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Animation {
    /// Physically-modeled damped spring.
    Spring(SpringParams),
    /// Time-based tween with cubic ease-out.
    Ease(TweenParams),
    /// Time-based tween with no easing.
    Linear(TweenParams),
    /// Instant snap back to rest on release.
    #[default]
    None,
}

impl Animation {
    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Spring(params) => params.validate(),
            Self::Ease(params) | Self::Linear(params) => params.validate(),
            Self::None => Ok(()),
        }
    }
}

/// Full interaction configuration.
///
/// # Example
///
/// ```rust
/// use rubber::{Animation, Axis, RubberConfig, SpringParams};
///
/// let config = RubberConfig::new()
///     .with_axis(Axis::Both)
///     .with_max_stretch(120.0)
///     .with_resistance(0.5)
///     .with_animation(Animation::Spring(SpringParams::default()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RubberConfig {
    /// Which axes respond to drag input.
    pub axis: Axis,
    /// Stretch magnitude at which progress saturates. Must be positive.
    pub max_stretch: f64,
    /// How strongly damping grows toward the limit, in `[0, 1]`.
    pub resistance: f64,
    /// Release animation variant.
    pub animation: Animation,
}

impl Default for RubberConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            max_stretch: 80.0,
            resistance: 0.6,
            animation: Animation::None,
        }
    }
}

impl RubberConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the maximum stretch.
    #[must_use]
    pub const fn with_max_stretch(mut self, max_stretch: f64) -> Self {
        self.max_stretch = max_stretch;
        self
    }

    /// Sets the resistance coefficient.
    #[must_use]
    pub const fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = resistance;
        self
    }

    /// Sets the release animation.
    #[must_use]
    pub const fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// Checks every field, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_stretch.is_finite() && self.max_stretch > 0.0) {
            return Err(ConfigError::InvalidMaxStretch(self.max_stretch));
        }
        if !(self.resistance.is_finite() && (0.0..=1.0).contains(&self.resistance)) {
            return Err(ConfigError::InvalidResistance(self.resistance));
        }
        self.animation.validate()
    }

    /// Returns a copy with the update's present fields merged in.
    #[must_use]
    pub(crate) fn merged(&self, update: &ConfigUpdate) -> Self {
        Self {
            axis: update.axis.unwrap_or(self.axis),
            max_stretch: update.max_stretch.unwrap_or(self.max_stretch),
            resistance: update.resistance.unwrap_or(self.resistance),
            animation: update.animation.unwrap_or(self.animation),
        }
    }
}

/// A partial configuration for [`Rubber::configure`]: absent fields keep
/// their current values.
///
/// [`Rubber::configure`]: crate::Rubber::configure
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigUpdate {
    /// New axis, if changing.
    pub axis: Option<Axis>,
    /// New maximum stretch, if changing.
    pub max_stretch: Option<f64>,
    /// New resistance coefficient, if changing.
    pub resistance: Option<f64>,
    /// New release animation, if changing.
    pub animation: Option<Animation>,
}

impl ConfigUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the active axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Updates the maximum stretch.
    #[must_use]
    pub const fn with_max_stretch(mut self, max_stretch: f64) -> Self {
        self.max_stretch = Some(max_stretch);
        self
    }

    /// Updates the resistance coefficient.
    #[must_use]
    pub const fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = Some(resistance);
        self
    }

    /// Updates the release animation.
    #[must_use]
    pub const fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }
}
