//! Interaction state snapshots emitted to the host.

/// A two-component vector in host units (typically pixels).
///
/// Used for both stretch (displacement from rest) and velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// The discrete interaction phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No active interaction; stretch is conceptually at rest.
    #[default]
    Idle,
    /// User input is live; any pending animation has been cancelled.
    Dragging,
    /// An integrator is advancing the stretch back toward rest.
    Animating,
}

/// Read-only snapshot of the interaction, built on every emission.
///
/// `progress` is the normalized stretch magnitude over the active axes,
/// clamped to `[0, 1]`. Components on an inactive axis are excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RubberState {
    /// Displacement from rest, per axis.
    pub stretch: Vec2,
    /// Rate of change of `stretch`. Zero while dragging and during tweens.
    pub velocity: Vec2,
    /// Normalized stretch magnitude in `[0, 1]`.
    pub progress: f64,
    /// Current interaction phase.
    pub phase: Phase,
}

/// What the output callback receives: the numeric snapshot plus the
/// host-defined shape produced by the deform mapper, when one is set.
#[derive(Debug, Clone)]
pub struct RubberOutput<S> {
    /// The numeric snapshot.
    pub state: RubberState,
    /// The deform mapper's result for this snapshot, if a mapper is set.
    pub shape: Option<S>,
}
