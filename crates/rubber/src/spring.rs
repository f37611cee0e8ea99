//! Damped harmonic oscillator driving the spring release.
//!
//! Both axes are integrated independently with semi-implicit Euler:
//!
//! ```text
//! a = (-stiffness * value - damping * velocity) / mass
//! velocity += a * dt
//! value    += velocity * dt
//! ```
//!
//! The integrator does not clamp `dt`; the state machine caps the frame
//! delta before calling [`Spring::step`] to stay stable across frame
//! hitches.

use crate::config::SpringParams;
use crate::state::Vec2;

/// At-rest threshold for both value and velocity, in stretch units.
pub const REST_EPSILON: f64 = 0.5;

/// Result of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStep {
    /// Current displacement per axis.
    pub stretch: Vec2,
    /// Current velocity per axis.
    pub velocity: Vec2,
    /// Whether the oscillator reached rest during this step. Once true,
    /// stretch and velocity are exactly zero.
    pub at_rest: bool,
}

/// Per-axis damped spring state.
#[derive(Debug, Clone)]
pub struct Spring {
    params: SpringParams,
    value: Vec2,
    velocity: Vec2,
    active: bool,
}

impl Spring {
    /// Creates an inactive spring with the given parameters.
    ///
    /// Parameters are assumed valid; they are checked by
    /// [`RubberConfig::validate`](crate::RubberConfig::validate) before
    /// they reach the integrator.
    #[must_use]
    pub fn new(params: SpringParams) -> Self {
        Self {
            params,
            value: Vec2::ZERO,
            velocity: Vec2::ZERO,
            active: false,
        }
    }

    /// Replaces the oscillator parameters.
    pub fn set_params(&mut self, params: SpringParams) {
        self.params = params;
    }

    /// Seeds the oscillator and activates it.
    pub fn start(&mut self, from: Vec2, velocity: Vec2) {
        self.value = from;
        self.velocity = velocity;
        self.active = true;
    }

    /// Whether the oscillator is currently running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Advances the oscillator by `dt` seconds.
    ///
    /// An inactive spring returns an at-rest zero result without
    /// mutating anything. On reaching rest, value and velocity snap to
    /// exactly zero and the spring deactivates.
    pub fn step(&mut self, dt: f64) -> SpringStep {
        if !self.active {
            return SpringStep {
                stretch: Vec2::ZERO,
                velocity: Vec2::ZERO,
                at_rest: true,
            };
        }

        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;

        let accel_x = (-stiffness * self.value.x - damping * self.velocity.x) / mass;
        self.velocity.x += accel_x * dt;
        self.value.x += self.velocity.x * dt;

        let accel_y = (-stiffness * self.value.y - damping * self.velocity.y) / mass;
        self.velocity.y += accel_y * dt;
        self.value.y += self.velocity.y * dt;

        let at_rest = self.is_at_rest();
        if at_rest {
            self.value = Vec2::ZERO;
            self.velocity = Vec2::ZERO;
            self.active = false;
        }

        SpringStep {
            stretch: self.value,
            velocity: self.velocity,
            at_rest,
        }
    }

    fn is_at_rest(&self) -> bool {
        self.value.x.abs() < REST_EPSILON
            && self.value.y.abs() < REST_EPSILON
            && self.velocity.x.abs() < REST_EPSILON
            && self.velocity.y.abs() < REST_EPSILON
    }
}
