//! Wall-clock tween driving the eased and linear releases.
//!
//! A tween is kinematic, not physical: velocity is zero throughout and
//! the stretch decays from its start value to zero over a fixed
//! duration, shaped by an easing curve.

use crate::config::TweenParams;
use crate::state::Vec2;

/// Easing curve over normalized progress in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Identity: constant rate of change.
    Linear,
    /// Cubic ease-out: `1 - (1 - t)^3`, fast start and gentle landing.
    EaseOutCubic,
}

impl Easing {
    /// Evaluates the curve at normalized progress `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Result of one tween step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    /// First frame: the timestamp became the epoch, nothing to show yet.
    Pending,
    /// The tween advanced to the given stretch.
    Running(Vec2),
    /// The duration elapsed; the tween is done. The caller must force
    /// stretch to exactly zero, floating point may leave residue.
    Complete(Vec2),
}

/// Decay-to-zero animator over caller-supplied timestamps.
#[derive(Debug, Clone)]
pub struct Tween {
    start: Vec2,
    epoch_ms: Option<f64>,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    /// Creates an idle tween.
    #[must_use]
    pub const fn new(params: TweenParams, easing: Easing) -> Self {
        Self {
            start: Vec2::ZERO,
            epoch_ms: None,
            duration_ms: params.duration_ms,
            easing,
        }
    }

    /// Records the start stretch. The epoch stays unset until the first
    /// [`step`](Self::step) call establishes it.
    pub fn start(&mut self, from: Vec2) {
        self.start = from;
        self.epoch_ms = None;
    }

    /// Advances to the given timestamp (milliseconds).
    pub fn step(&mut self, timestamp_ms: f64) -> TweenStep {
        let Some(epoch) = self.epoch_ms else {
            self.epoch_ms = Some(timestamp_ms);
            return TweenStep::Pending;
        };

        let elapsed = timestamp_ms - epoch;
        let raw = (elapsed / self.duration_ms).clamp(0.0, 1.0);
        let eased = self.easing.apply(raw);
        let stretch = Vec2::new(self.start.x * (1.0 - eased), self.start.y * (1.0 - eased));

        if raw >= 1.0 {
            TweenStep::Complete(stretch)
        } else {
            TweenStep::Running(stretch)
        }
    }
}
