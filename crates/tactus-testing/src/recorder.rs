//! Records everything an engine dispatches.

use std::cell::RefCell;
use std::rc::Rc;

use tactus_core::{GestureEngine, GestureEvent, GestureKind};

/// Subscribes to every gesture kind and records dispatched events in order.
#[derive(Clone, Default)]
pub struct GestureRecorder {
    events: Rc<RefCell<Vec<GestureEvent>>>,
}

impl GestureRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a fresh recorder to `engine` for every gesture kind.
    pub fn attach(engine: &GestureEngine) -> Self {
        let recorder = Self::new();
        for kind in GestureKind::ALL {
            let events = recorder.events.clone();
            engine.on(kind, move |event| events.borrow_mut().push(*event));
        }
        recorder
    }

    /// Everything recorded so far, in dispatch order.
    pub fn events(&self) -> Vec<GestureEvent> {
        self.events.borrow().clone()
    }

    /// The kinds recorded so far, in dispatch order.
    pub fn kinds(&self) -> Vec<GestureKind> {
        self.events.borrow().iter().map(GestureEvent::kind).collect()
    }

    pub fn count(&self, kind: GestureKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    /// Gestures subject to the one-per-sequence rule: taps, double-taps,
    /// long-presses and swipes. Raw passthroughs and pinch phases excluded.
    pub fn classified_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| {
                matches!(
                    event.kind(),
                    GestureKind::Tap
                        | GestureKind::DoubleTap
                        | GestureKind::LongPress
                        | GestureKind::SwipeLeft
                        | GestureKind::SwipeRight
                        | GestureKind::SwipeUp
                        | GestureKind::SwipeDown
                )
            })
            .count()
    }

    pub fn last(&self) -> Option<GestureEvent> {
        self.events.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
