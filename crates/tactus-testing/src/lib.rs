//! Deterministic test harness for the Tactus gesture engine.
//!
//! Provides a manual clock, an event recorder, and a robot-style driver for
//! scripting touch interactions:
//!
//! ```
//! use std::time::Duration;
//! use tactus_core::{GestureKind, TouchOptions};
//! use tactus_geometry::Point;
//! use tactus_testing::{GestureRecorder, TouchRobot};
//!
//! let robot = TouchRobot::new(TouchOptions::default());
//! let recorder = GestureRecorder::attach(robot.engine());
//!
//! robot.tap_at(Point::new(10.0, 10.0));
//! robot.advance(Duration::from_millis(350));
//!
//! assert_eq!(recorder.count(GestureKind::Tap), 1);
//! ```

mod clock;
mod recorder;
mod robot;

pub use clock::ManualClock;
pub use recorder::GestureRecorder;
pub use robot::TouchRobot;
