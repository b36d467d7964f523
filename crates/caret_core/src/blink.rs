//! Caret blink timing.
//!
//! The caret holds solid for a window after every edit, then oscillates on a
//! fixed period. Opacity is smoothed with an exponential damp so the square
//! wave renders as a fade rather than a hard toggle.

/// Full blink cycle length in seconds.
pub const BLINK_PERIOD_S: f64 = 2.0;

/// Portion of the cycle the caret stays visible, in seconds.
pub const BLINK_SOLID_S: f64 = 1.25;

/// Damping rate constant for the opacity fade.
pub const BLINK_LAMBDA: f32 = 24.0;

/// Exponential damp of `current` toward `target` over a `dt` step.
///
/// Frame-rate independent: damping twice with `dt/2` lands where damping
/// once with `dt` does. `dt = 0` returns `current` unchanged.
///
/// # Examples
///
/// ```
/// use caret_core::damp;
///
/// let v = damp(0.0, 1.0, 24.0, 0.1);
/// assert!(v > 0.9);
/// assert_eq!(damp(0.5, 1.0, 24.0, 0.0), 0.5);
/// ```
#[inline]
pub fn damp(current: f32, target: f32, lambda: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-lambda * dt).exp())
}

/// Target caret opacity at clock time `now_s`, phased from the last edit.
///
/// The cycle restarts at every edit, so typing keeps the caret solid.
#[inline]
pub fn blink_target(now_s: f64, last_edit_s: f64) -> f32 {
    let t = (now_s - last_edit_s).rem_euclid(BLINK_PERIOD_S);
    if t <= BLINK_SOLID_S { 1.0 } else { 0.0 }
}

/// Smoothed caret opacity, advanced once per rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlinkState {
    pub opacity: f32,
}

impl Default for BlinkState {
    fn default() -> Self {
        // Fresh carets appear solid immediately.
        Self { opacity: 1.0 }
    }
}

impl BlinkState {
    /// Pure per-frame step: damp the opacity toward the phase target.
    #[must_use]
    pub fn step(self, now_s: f64, last_edit_s: f64, dt: f32) -> Self {
        let target = blink_target(now_s, last_edit_s);
        Self {
            opacity: damp(self.opacity, target, BLINK_LAMBDA, dt),
        }
    }
}
