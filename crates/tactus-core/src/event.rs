//! Gesture kinds and the payloads dispatched to subscribers.
//!
//! Payloads are plain value copies of engine state; a subscriber can keep
//! them around but can never mutate the engine through them.

use std::time::Duration;
use tactus_geometry::{Delta, Point};

/// Everything the engine can notify about: three raw passthroughs and ten
/// classified gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    TouchStart,
    TouchMove,
    TouchEnd,
    Tap,
    DoubleTap,
    LongPress,
    SwipeLeft,
    SwipeRight,
    SwipeUp,
    SwipeDown,
    PinchStart,
    PinchMove,
    PinchEnd,
}

impl GestureKind {
    pub(crate) const COUNT: usize = 13;

    /// Every kind, in a stable order. Handy for blanket subscriptions.
    pub const ALL: [Self; Self::COUNT] = [
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::Tap,
        Self::DoubleTap,
        Self::LongPress,
        Self::SwipeLeft,
        Self::SwipeRight,
        Self::SwipeUp,
        Self::SwipeDown,
        Self::PinchStart,
        Self::PinchMove,
        Self::PinchEnd,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Which way a swipe traveled. The dominant axis of the total displacement
/// picks horizontal vs vertical; the sign picks the side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// The subscription kind a swipe in this direction dispatches under.
    pub fn kind(self) -> GestureKind {
        match self {
            Self::Left => GestureKind::SwipeLeft,
            Self::Right => GestureKind::SwipeRight,
            Self::Up => GestureKind::SwipeUp,
            Self::Down => GestureKind::SwipeDown,
        }
    }
}

/// Raw passthrough: a contact landed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchStartEvent {
    pub position: Point,
    /// Simultaneous contacts down after this event.
    pub touches: usize,
}

/// Raw passthrough: the primary contact moved. Fires on every move while a
/// session tracks, unclassified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchMoveEvent {
    pub position: Point,
    /// Total displacement since the session started.
    pub delta: Delta,
    pub distance: f32,
}

/// Raw passthrough: the session closed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEndEvent {
    pub position: Point,
    pub delta: Delta,
    pub distance: f32,
    pub duration: Duration,
    /// How many contacts ceased in the closing event.
    pub changed: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoubleTapEvent {
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongPressEvent {
    pub position: Point,
    /// Contact time when the press fired; at least the configured delay.
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeEvent {
    pub direction: SwipeDirection,
    /// Magnitude along the dominant axis, not the Euclidean travel.
    pub distance: f32,
    pub duration: Duration,
}

/// Shared payload for pinch start and move: current finger gap and center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEvent {
    pub distance: f32,
    pub center: Point,
}

/// One dispatched notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    TouchStart(TouchStartEvent),
    TouchMove(TouchMoveEvent),
    TouchEnd(TouchEndEvent),
    Tap(TapEvent),
    DoubleTap(DoubleTapEvent),
    LongPress(LongPressEvent),
    Swipe(SwipeEvent),
    PinchStart(PinchEvent),
    PinchMove(PinchEvent),
    PinchEnd,
}

impl GestureEvent {
    /// The subscription kind this event dispatches under.
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::TouchStart(_) => GestureKind::TouchStart,
            Self::TouchMove(_) => GestureKind::TouchMove,
            Self::TouchEnd(_) => GestureKind::TouchEnd,
            Self::Tap(_) => GestureKind::Tap,
            Self::DoubleTap(_) => GestureKind::DoubleTap,
            Self::LongPress(_) => GestureKind::LongPress,
            Self::Swipe(swipe) => swipe.direction.kind(),
            Self::PinchStart(_) => GestureKind::PinchStart,
            Self::PinchMove(_) => GestureKind::PinchMove,
            Self::PinchEnd => GestureKind::PinchEnd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_kind_once() {
        for (i, kind) in GestureKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_swipe_event_kind_follows_direction() {
        let event = GestureEvent::Swipe(SwipeEvent {
            direction: SwipeDirection::Up,
            distance: 80.0,
            duration: Duration::from_millis(120),
        });
        assert_eq!(event.kind(), GestureKind::SwipeUp);
    }
}
