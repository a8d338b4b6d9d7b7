//! Touch-gesture recognition engine.
//!
//! Feed raw contact events through [`GestureEngine`]'s entry points and
//! subscribe to the classified gestures it produces: taps, double-taps,
//! long-presses, directional swipes, and pinch start/move/end. The engine
//! knows nothing about rendering or hit-testing; it sees only the
//! coordinates the host hands it.

mod classifier;
mod clock;
mod engine;
mod event;
mod options;
mod registry;
mod session;
mod timer;

pub use clock::{Clock, SystemClock};
pub use engine::GestureEngine;
pub use event::{
    DoubleTapEvent, GestureEvent, GestureKind, LongPressEvent, PinchEvent, SwipeDirection,
    SwipeEvent, TapEvent, TouchEndEvent, TouchMoveEvent, TouchStartEvent,
};
pub use options::TouchOptions;
pub use registry::Subscription;
pub use timer::{FiredTimer, TimerHandle, TimerQueue, TimerSlot};

pub mod prelude {
    pub use crate::engine::GestureEngine;
    pub use crate::event::{GestureEvent, GestureKind, SwipeDirection};
    pub use crate::options::TouchOptions;
    pub use tactus_geometry::{Delta, Point};
}
