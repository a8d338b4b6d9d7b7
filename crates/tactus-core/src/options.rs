//! Engine configuration.

use std::time::Duration;

/// Tunable thresholds for gesture recognition.
///
/// Defaults match common touch-platform feel: 50 px before a release reads
/// as a swipe, 500 ms for a long-press, 300 ms for double-tap pairing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchOptions {
    /// Minimum travel in logical pixels for a release to classify as a swipe.
    pub swipe_threshold: f32,
    /// How long a still contact must be held before a long-press fires.
    pub long_press_delay: Duration,
    /// Maximum gap between two taps for them to pair into a double-tap.
    /// Also how long an isolated tap is debounced before delivery.
    pub double_tap_delay: Duration,
    /// Advisory flag for the host: suppress native scrolling while a session
    /// is tracking. The engine itself never consults it.
    pub prevent_default_scroll: bool,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            long_press_delay: Duration::from_millis(500),
            double_tap_delay: Duration::from_millis(300),
            prevent_default_scroll: false,
        }
    }
}

impl TouchOptions {
    pub fn with_swipe_threshold(mut self, px: f32) -> Self {
        self.swipe_threshold = px;
        self
    }

    pub fn with_long_press_delay(mut self, delay: Duration) -> Self {
        self.long_press_delay = delay;
        self
    }

    pub fn with_double_tap_delay(mut self, delay: Duration) -> Self {
        self.double_tap_delay = delay;
        self
    }

    pub fn with_prevent_default_scroll(mut self, prevent: bool) -> Self {
        self.prevent_default_scroll = prevent;
        self
    }
}
