//! The resistance function: progressive damping of drag deltas.

/// Damps a raw drag delta based on how far the current stretch already
/// is from rest.
///
/// The damping factor is `1 - progress * resistance`, where `progress`
/// is `min(|stretch| / max_stretch, 1)`. At rest the delta passes
/// through unchanged; at the limit it is scaled by `1 - resistance`,
/// which only fully blocks motion when `resistance` is exactly 1.
///
/// The caller must guarantee `max_stretch > 0` (enforced at
/// configuration time) and a finite `delta`.
///
/// # Example
///
/// ```rust
/// use rubber::resistance::apply_resistance;
///
/// // No resistance at rest.
/// assert_eq!(apply_resistance(10.0, 0.0, 80.0, 0.6), 10.0);
///
/// // At the limit, only 40% of the delta gets through.
/// assert_eq!(apply_resistance(10.0, 80.0, 80.0, 0.6), 4.0);
/// ```
#[inline]
#[must_use]
pub fn apply_resistance(delta: f64, stretch: f64, max_stretch: f64, resistance: f64) -> f64 {
    let progress = (stretch.abs() / max_stretch).min(1.0);
    let damping = 1.0 - progress * resistance;
    delta * damping
}
