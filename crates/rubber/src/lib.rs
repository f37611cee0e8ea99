#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! # Rubber
//!
//! An elastic "rubber-band" interaction core: a draggable one- or
//! two-dimensional value that resists displacement progressively as it
//! approaches a configured limit, and returns to rest through a damped
//! spring, an eased or linear tween, or an instant snap.
//!
//! The crate is pure interaction math. Pointer capture, schedulers, and
//! rendering live in the host: it feeds [`Rubber::drag`] deltas, calls
//! [`Rubber::release`], and then drives [`Rubber::advance`] once per
//! frame (with its own timestamps) until the result says `terminated`.
//!
//! ## Dragging and instant release
//!
//! ```rust
//! use rubber::{Axis, DragDelta, Rubber, RubberConfig};
//!
//! let config = RubberConfig::new()
//!     .with_axis(Axis::Y)
//!     .with_max_stretch(80.0)
//!     .with_resistance(0.6);
//! let mut rubber: Rubber = Rubber::new(config).unwrap();
//!
//! rubber.drag(DragDelta::y(40.0));
//! assert_eq!(rubber.state().progress, 0.5);
//!
//! // The default animation is `None`: release snaps straight back.
//! rubber.release();
//! assert_eq!(rubber.state().stretch.y, 0.0);
//! ```
//!
//! ## Spring release driven by a frame loop
//!
//! ```rust
//! use rubber::{Animation, DragDelta, Rubber, RubberConfig, SpringParams};
//!
//! let config = RubberConfig::new()
//!     .with_animation(Animation::Spring(SpringParams::default()));
//! let mut rubber: Rubber = Rubber::new(config).unwrap();
//!
//! rubber.drag(DragDelta::y(60.0));
//! rubber.release();
//!
//! // The host scheduler supplies monotonically increasing timestamps.
//! let mut t = 0.0;
//! for _ in 0..600 {
//!     t += 16.0;
//!     if rubber.advance(t).terminated {
//!         break;
//!     }
//! }
//! assert_eq!(rubber.state().stretch.y, 0.0);
//! assert_eq!(rubber.state().velocity.y, 0.0);
//! ```
//!
//! ## Output callback and deform mapping
//!
//! Every state-changing operation emits a [`RubberState`] snapshot. An
//! optional deform mapper turns the snapshot into a host-defined shape
//! (an SVG path, a scale factor, anything) before it reaches the output
//! callback; see the [`deform`] module for a stock pill mapper.

pub mod config;
pub mod deform;
pub mod error;
pub mod resistance;
pub mod interaction;
pub mod spring;
pub mod state;
pub mod tween;

// Re-export primary API
pub use config::{Animation, Axis, ConfigUpdate, RubberConfig, SpringParams, TweenParams};
pub use error::ConfigError;
pub use resistance::apply_resistance;
pub use interaction::{Advance, DragDelta, Rubber};
pub use spring::{REST_EPSILON, Spring, SpringStep};
pub use state::{Phase, RubberOutput, RubberState, Vec2};
pub use tween::{Easing, Tween, TweenStep};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{Animation, Axis, ConfigUpdate, RubberConfig, SpringParams, TweenParams};
    pub use crate::error::ConfigError;
    pub use crate::interaction::{Advance, DragDelta, Rubber};
    pub use crate::state::{Phase, RubberOutput, RubberState, Vec2};
}
