//! Mutable state for one in-progress gesture sequence.

use std::time::Duration;
use tactus_geometry::{delta, Delta, Point};
use web_time::Instant;

/// Tracks a single contact sequence from first touch to release.
///
/// Exactly one session is live per engine at a time. A second finger landing
/// mid-session extends this session (pinch) rather than opening a new one:
/// the start position and start time are never reset while tracking.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TouchSession {
    start_position: Point,
    current_position: Point,
    start_time: Instant,
    contact_count: usize,
}

impl TouchSession {
    pub fn begin(position: Point, contact_count: usize, now: Instant) -> Self {
        Self {
            start_position: position,
            current_position: position,
            start_time: now,
            contact_count,
        }
    }

    pub fn move_to(&mut self, position: Point) {
        self.current_position = position;
    }

    pub fn set_contact_count(&mut self, count: usize) {
        self.contact_count = count;
    }

    pub fn current_position(&self) -> Point {
        self.current_position
    }

    pub fn contact_count(&self) -> usize {
        self.contact_count
    }

    /// Total displacement since the session started.
    pub fn travel(&self) -> Delta {
        delta(self.start_position, self.current_position)
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.duration_since(self.start_time)
    }
}
