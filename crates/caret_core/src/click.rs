//! Click multiplicity tracking.
//!
//! Pointer hosts deliver plain press events; double and triple clicks are
//! derived here from press timing and travel so every host behaves the same
//! way. Counts cycle 1 -> 2 -> 3 -> 1.

/// Maximum gap between presses that still chains a multi-click, in seconds.
pub const MULTI_CLICK_INTERVAL_S: f64 = 0.5;

/// Maximum travel between chained presses, in local scene units.
pub const MULTI_CLICK_SLOP: f32 = 0.025;

/// Tracks successive pointer presses and reports their multiplicity.
#[derive(Clone, Copy, Debug)]
pub struct ClickTracker {
    pub max_interval_s: f64,
    pub max_travel: f32,
    last_press_s: f64,
    last_point: (f32, f32),
    count: u8,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self {
            max_interval_s: MULTI_CLICK_INTERVAL_S,
            max_travel: MULTI_CLICK_SLOP,
            last_press_s: f64::NEG_INFINITY,
            last_point: (0.0, 0.0),
            count: 0,
        }
    }
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press at `(x, y)` and return its multiplicity (1, 2 or 3).
    pub fn register(&mut self, x: f32, y: f32, now_s: f64) -> u8 {
        let dx = x - self.last_point.0;
        let dy = y - self.last_point.1;
        let chained = self.count > 0
            && now_s - self.last_press_s <= self.max_interval_s
            && (dx * dx + dy * dy).sqrt() <= self.max_travel;

        self.count = if chained {
            if self.count >= 3 { 1 } else { self.count + 1 }
        } else {
            1
        };
        self.last_press_s = now_s;
        self.last_point = (x, y);
        self.count
    }

    /// Forget the chain (focus loss, content swap).
    pub fn reset(&mut self) {
        self.count = 0;
        self.last_press_s = f64::NEG_INFINITY;
    }
}
