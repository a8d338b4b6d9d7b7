//! Scripted touch input driver.
//!
//! Owns an engine on a manual clock and replays interaction sequences
//! deterministically: taps, holds, stepped drags, two-finger pinches.

use std::rc::Rc;
use std::time::Duration;

use tactus_core::{GestureEngine, TouchOptions};
use tactus_geometry::Point;

use crate::clock::ManualClock;

const DRAG_STEPS: u32 = 10;
const PINCH_STEPS: u32 = 5;

/// Robot driving a [`GestureEngine`] with scripted contact sequences.
pub struct TouchRobot {
    engine: GestureEngine,
    clock: ManualClock,
}

impl TouchRobot {
    pub fn new(options: TouchOptions) -> Self {
        let clock = ManualClock::new();
        let engine = GestureEngine::with_clock(options, Rc::new(clock.clone()));
        Self { engine, clock }
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Advances time and pumps the engine's timers, like a host frame loop
    /// that slept for `by`.
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
        self.engine.poll_timers();
    }

    /// A quick touch: down, 50 ms hold, up.
    pub fn tap_at(&self, position: Point) {
        self.engine.on_contact_start(&[position]);
        self.advance(Duration::from_millis(50));
        self.engine.on_contact_end(&[], 1);
    }

    /// Two taps 100 ms apart, inside the default pairing window.
    pub fn double_tap_at(&self, position: Point) {
        self.tap_at(position);
        self.advance(Duration::from_millis(100));
        self.tap_at(position);
    }

    /// Presses, holds perfectly still for `hold`, then releases.
    pub fn press_hold(&self, position: Point, hold: Duration) {
        self.engine.on_contact_start(&[position]);
        self.advance(hold);
        self.engine.on_contact_end(&[], 1);
    }

    /// Stepped drag from `from` to `to` over `total`, pumping between steps.
    pub fn drag(&self, from: Point, to: Point, total: Duration) {
        self.engine.on_contact_start(&[from]);
        for i in 1..=DRAG_STEPS {
            let t = i as f32 / DRAG_STEPS as f32;
            let position = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.advance(total / DRAG_STEPS);
            self.engine.on_contact_move(&[position]);
        }
        self.engine.on_contact_end(&[], 1);
    }

    /// Two-finger pinch around `center`: the finger gap interpolates from
    /// `start_gap` to `end_gap`, then both fingers lift together.
    pub fn pinch(&self, center: Point, start_gap: f32, end_gap: f32) {
        self.engine.on_contact_start(&fingers(center, start_gap));
        for i in 1..=PINCH_STEPS {
            let gap = start_gap + (end_gap - start_gap) * (i as f32 / PINCH_STEPS as f32);
            self.advance(Duration::from_millis(16));
            self.engine.on_contact_move(&fingers(center, gap));
        }
        self.engine.on_contact_end(&[], 2);
    }
}

/// Two horizontally opposed contacts `gap` apart around `center`.
fn fingers(center: Point, gap: f32) -> [Point; 2] {
    [
        Point::new(center.x - gap / 2.0, center.y),
        Point::new(center.x + gap / 2.0, center.y),
    ]
}
