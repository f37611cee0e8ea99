//! Stock deform mappers.
//!
//! A deform mapper is any `Fn(&RubberState) -> S`; this module ships
//! one ready-made mapper for the common pill-that-bulges case. Hosts
//! with their own geometry simply pass their own closure to
//! [`Rubber::with_deform`](crate::Rubber::with_deform).

use std::f64::consts::PI;

use crate::state::RubberState;

/// Geometry for the [`pill`] mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillOptions {
    /// Pill width in host units.
    pub width: f64,
    /// Pill height in host units.
    pub height: f64,
    /// Maximum sideways bulge at full progress.
    pub max_bulge: f64,
}

impl PillOptions {
    /// Creates pill geometry with the default bulge of 35% of the width.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            max_bulge: width * 0.35,
        }
    }

    /// Overrides the maximum bulge.
    #[must_use]
    pub const fn with_max_bulge(mut self, max_bulge: f64) -> Self {
        self.max_bulge = max_bulge;
        self
    }
}

/// Builds a mapper producing an SVG path for a pill whose sides bulge
/// with `sin(progress * π / 2)`.
///
/// # Example
///
/// ```rust
/// use rubber::deform::{pill, PillOptions};
/// use rubber::{Rubber, RubberConfig};
///
/// let mut rubber = Rubber::new(RubberConfig::default())
///     .unwrap()
///     .with_deform(pill(PillOptions::new(40.0, 200.0)))
///     .with_on_update(|out| {
///         let path: &str = out.shape.as_deref().unwrap();
///         assert!(path.starts_with("M "));
///     });
/// rubber.drag(rubber::DragDelta::y(30.0));
/// ```
pub fn pill(options: PillOptions) -> impl Fn(&RubberState) -> String {
    let PillOptions {
        width,
        height,
        max_bulge,
    } = options;
    let r = width / 2.0;
    let mid_y = height / 2.0;

    move |state| {
        let bulge = max_bulge * (state.progress * PI / 2.0).sin();
        let left = r - bulge;
        let right = r + bulge;

        format!(
            "M {r} 0 \
             Q {width} 0 {width} {r} \
             L {width} {top} \
             Q {right} {mid_y} {width} {bottom} \
             L {width} {lower} \
             Q {width} {height} {r} {height} \
             L {r} {height} \
             Q 0 {height} 0 {lower} \
             L 0 {bottom} \
             Q {left} {mid_y} 0 {top} \
             L 0 {r} \
             Q 0 0 {r} 0 \
             Z",
            top = mid_y - r,
            bottom = mid_y + r,
            lower = height - r,
        )
    }
}
