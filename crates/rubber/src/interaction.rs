//! The interaction state machine.
//!
//! A [`Rubber`] owns the current stretch/velocity, the discrete phase,
//! and the two integrators. The host feeds it `drag` deltas, calls
//! `release` when the gesture ends, and then drives `advance` once per
//! frame until it reports termination. Every state-changing operation
//! emits a [`RubberState`] snapshot through the output callback, after
//! optionally running the pluggable deform mapper.

use tracing::{trace, warn};

use crate::config::{Animation, ConfigUpdate, RubberConfig, SpringParams, TweenParams};
use crate::error::ConfigError;
use crate::resistance::apply_resistance;
use crate::spring::Spring;
use crate::state::{Phase, RubberOutput, RubberState, Vec2};
use crate::tween::{Easing, Tween, TweenStep};

/// Upper bound on the spring frame delta in seconds. A backgrounded
/// host resuming after a long gap must not destabilize the integrator.
const MAX_FRAME_DT: f64 = 0.064;

/// Per-call drag input. Absent components leave that axis untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragDelta {
    /// Horizontal delta, in the same units as `max_stretch`.
    pub x: Option<f64>,
    /// Vertical delta, in the same units as `max_stretch`.
    pub y: Option<f64>,
}

impl DragDelta {
    /// A horizontal-only delta.
    #[must_use]
    pub const fn x(dx: f64) -> Self {
        Self {
            x: Some(dx),
            y: None,
        }
    }

    /// A vertical-only delta.
    #[must_use]
    pub const fn y(dy: f64) -> Self {
        Self {
            x: None,
            y: Some(dy),
        }
    }

    /// A delta on both axes.
    #[must_use]
    pub const fn xy(dx: f64, dy: f64) -> Self {
        Self {
            x: Some(dx),
            y: Some(dy),
        }
    }
}

/// Result of a scheduler-driven [`Rubber::advance`] call.
///
/// `terminated` tells the host's frame loop to stop requesting frames;
/// it is also true for stale calls that arrive while no animation is
/// running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    /// Snapshot after this frame.
    pub state: RubberState,
    /// Whether the animation has ended (or none was running).
    pub terminated: bool,
}

/// Which integrator was latched at release time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveIntegrator {
    Spring,
    Tween,
}

/// The elastic interaction state machine.
///
/// Generic over the shape type `S` produced by the optional deform
/// mapper; plain numeric consumers can leave it at the default `()`.
///
/// See the [crate docs](crate) for a worked example.
pub struct Rubber<S = ()> {
    config: RubberConfig,
    stretch: Vec2,
    velocity: Vec2,
    phase: Phase,
    spring: Spring,
    tween: Tween,
    running: Option<ActiveIntegrator>,
    last_time_ms: Option<f64>,
    deform: Option<Box<dyn Fn(&RubberState) -> S>>,
    on_update: Option<Box<dyn FnMut(RubberOutput<S>)>>,
}

impl<S> Rubber<S> {
    /// Creates an idle instance with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any configuration value is out of
    /// range.
    pub fn new(config: RubberConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spring_params = match config.animation {
            Animation::Spring(params) => params,
            _ => SpringParams::default(),
        };
        Ok(Self {
            config,
            stretch: Vec2::ZERO,
            velocity: Vec2::ZERO,
            phase: Phase::Idle,
            spring: Spring::new(spring_params),
            tween: Tween::new(TweenParams::default(), Easing::Linear),
            running: None,
            last_time_ms: None,
            deform: None,
            on_update: None,
        })
    }

    /// Installs the deform mapper, a pure function from the numeric
    /// snapshot to a host-defined shape. Called synchronously inside
    /// every emission.
    #[must_use]
    pub fn with_deform(mut self, deform: impl Fn(&RubberState) -> S + 'static) -> Self {
        self.deform = Some(Box::new(deform));
        self
    }

    /// Installs the output callback, invoked synchronously on every
    /// emission. Must not block.
    #[must_use]
    pub fn with_on_update(mut self, on_update: impl FnMut(RubberOutput<S>) + 'static) -> Self {
        self.on_update = Some(Box::new(on_update));
        self
    }

    /// The current configuration.
    #[must_use]
    pub const fn config(&self) -> &RubberConfig {
        &self.config
    }

    /// A snapshot of the current numeric state.
    #[must_use]
    pub fn state(&self) -> RubberState {
        RubberState {
            stretch: self.stretch,
            velocity: self.velocity,
            progress: self.progress(),
            phase: self.phase,
        }
    }

    /// Accumulates a drag delta through the resistance function.
    ///
    /// Pre-empts any in-flight animation (without an emission for the
    /// cancellation itself) and resumes dragging from the current
    /// numeric state. Non-finite deltas are treated as zero. Always
    /// emits once before returning.
    pub fn drag(&mut self, delta: DragDelta) {
        if self.running.is_some() {
            trace!(phase = ?self.phase, "drag pre-empts in-flight animation");
            self.running = None;
            self.last_time_ms = None;
        }
        self.phase = Phase::Dragging;

        if self.config.axis.includes_x() {
            if let Some(dx) = delta.x {
                let dx = sanitize_delta(dx);
                self.stretch.x += apply_resistance(
                    dx,
                    self.stretch.x,
                    self.config.max_stretch,
                    self.config.resistance,
                );
            }
        }
        if self.config.axis.includes_y() {
            if let Some(dy) = delta.y {
                let dy = sanitize_delta(dy);
                self.stretch.y += apply_resistance(
                    dy,
                    self.stretch.y,
                    self.config.max_stretch,
                    self.config.resistance,
                );
            }
        }

        self.emit();
    }

    /// Ends the gesture and starts the configured release behavior.
    ///
    /// A no-op unless the phase is `Dragging`, so racing callers cannot
    /// double-start an animation.
    pub fn release(&mut self) {
        if self.phase != Phase::Dragging {
            trace!(phase = ?self.phase, "release ignored outside of a drag");
            return;
        }

        match self.config.animation {
            Animation::Spring(params) => {
                self.phase = Phase::Animating;
                self.spring.set_params(params);
                self.spring.start(self.stretch, self.velocity);
                self.running = Some(ActiveIntegrator::Spring);
                self.last_time_ms = None;
                trace!(stretch = ?self.stretch, "released into spring");
            }
            Animation::Ease(params) | Animation::Linear(params) => {
                let easing = match self.config.animation {
                    Animation::Ease(_) => Easing::EaseOutCubic,
                    _ => Easing::Linear,
                };
                self.phase = Phase::Animating;
                self.tween = Tween::new(params, easing);
                self.tween.start(self.stretch);
                self.running = Some(ActiveIntegrator::Tween);
                self.last_time_ms = None;
                trace!(stretch = ?self.stretch, ?easing, "released into tween");
            }
            Animation::None => {
                self.stretch = Vec2::ZERO;
                self.velocity = Vec2::ZERO;
                self.phase = Phase::Idle;
                trace!("released with instant reset");
                self.emit();
            }
        }
    }

    /// Advances the in-flight animation to the given timestamp
    /// (milliseconds, monotonically increasing).
    ///
    /// Stale calls arriving while nothing is animating return the
    /// current snapshot with `terminated = true` and no emission. The
    /// first frame after a release only establishes the time epoch.
    pub fn advance(&mut self, timestamp_ms: f64) -> Advance {
        let Some(integrator) = self.running else {
            return Advance {
                state: self.state(),
                terminated: true,
            };
        };

        if !timestamp_ms.is_finite() {
            warn!(timestamp_ms, "ignoring non-finite frame timestamp");
            return Advance {
                state: self.state(),
                terminated: false,
            };
        }

        match integrator {
            ActiveIntegrator::Spring => self.advance_spring(timestamp_ms),
            ActiveIntegrator::Tween => self.advance_tween(timestamp_ms),
        }
    }

    fn advance_spring(&mut self, timestamp_ms: f64) -> Advance {
        let Some(last) = self.last_time_ms else {
            self.last_time_ms = Some(timestamp_ms);
            return Advance {
                state: self.state(),
                terminated: false,
            };
        };

        let dt = ((timestamp_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT);
        self.last_time_ms = Some(timestamp_ms);

        let step = self.spring.step(dt);
        self.stretch = step.stretch;
        self.velocity = step.velocity;

        if step.at_rest {
            self.phase = Phase::Idle;
            self.running = None;
            self.last_time_ms = None;
            trace!("spring at rest");
        }
        self.emit();

        Advance {
            state: self.state(),
            terminated: step.at_rest,
        }
    }

    fn advance_tween(&mut self, timestamp_ms: f64) -> Advance {
        match self.tween.step(timestamp_ms) {
            TweenStep::Pending => Advance {
                state: self.state(),
                terminated: false,
            },
            TweenStep::Running(stretch) => {
                self.stretch = stretch;
                self.velocity = Vec2::ZERO;
                self.emit();
                Advance {
                    state: self.state(),
                    terminated: false,
                }
            }
            TweenStep::Complete(stretch) => {
                self.stretch = stretch;
                self.velocity = Vec2::ZERO;
                self.emit();

                // Force exact rest, then report the idle frame.
                self.stretch = Vec2::ZERO;
                self.phase = Phase::Idle;
                self.running = None;
                trace!("tween complete");
                self.emit();

                Advance {
                    state: self.state(),
                    terminated: true,
                }
            }
        }
    }

    /// Merges a partial update into the configuration.
    ///
    /// Numeric state and phase are never touched; the update takes
    /// effect on the next drag, release, or advance. An in-flight
    /// animation keeps the integrator and parameters it was started
    /// with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the merged configuration is
    /// invalid, leaving the previous configuration in effect.
    pub fn configure(&mut self, update: ConfigUpdate) -> Result<(), ConfigError> {
        let merged = self.config.merged(&update);
        merged.validate()?;
        trace!(config = ?merged, "reconfigured");
        self.config = merged;
        Ok(())
    }

    /// Tears the interaction down: cancels any in-flight animation,
    /// zeroes numeric state, and forces `Idle`. No emission. Dropping
    /// the instance is equivalent.
    pub fn destroy(&mut self) {
        self.running = None;
        self.last_time_ms = None;
        self.stretch = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.phase = Phase::Idle;
        trace!("destroyed");
    }

    fn progress(&self) -> f64 {
        let sx = if self.config.axis.includes_x() {
            self.stretch.x
        } else {
            0.0
        };
        let sy = if self.config.axis.includes_y() {
            self.stretch.y
        } else {
            0.0
        };
        (Vec2::new(sx, sy).magnitude() / self.config.max_stretch).min(1.0)
    }

    fn emit(&mut self) {
        let state = self.state();
        let shape = self.deform.as_ref().map(|deform| deform(&state));
        if let Some(on_update) = self.on_update.as_mut() {
            on_update(RubberOutput { state, shape });
        }
    }
}

impl<S> std::fmt::Debug for Rubber<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rubber")
            .field("config", &self.config)
            .field("stretch", &self.stretch)
            .field("velocity", &self.velocity)
            .field("phase", &self.phase)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

fn sanitize_delta(delta: f64) -> f64 {
    if delta.is_finite() {
        delta
    } else {
        warn!(delta, "treating non-finite drag delta as zero");
        0.0
    }
}
