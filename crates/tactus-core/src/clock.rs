//! Monotonic time source for the engine.
//!
//! `web_time` keeps the `Instant` API working on wasm targets, so the same
//! engine runs under a browser host without a separate clock path.

use web_time::Instant;

/// Monotonic clock the engine reads for every timestamp.
///
/// Injected at construction so tests can drive time by hand; production
/// engines use [`SystemClock`].
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Real clock backed by [`web_time::Instant`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
