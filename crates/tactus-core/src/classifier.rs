//! End-of-sequence classification.
//!
//! Pure decision logic: given what a session measured, decide whether the
//! release reads as a swipe, a tap candidate, or nothing. The single-tap /
//! double-tap split happens in the engine, because it needs the previous tap
//! timestamp and a timer.

use std::time::Duration;
use tactus_geometry::Delta;

use crate::event::SwipeDirection;
use crate::options::TouchOptions;

/// Maximum travel in logical pixels for a release to count as a tap.
pub(crate) const TAP_MAX_DISTANCE: f32 = 10.0;

/// Maximum contact time for a release to count as a tap.
///
/// Fixed on purpose: the configurable double-tap delay controls pairing,
/// not what counts as a tap in the first place.
pub(crate) const TAP_MAX_DURATION: Duration = Duration::from_millis(300);

/// What a completed sequence classifies as, before double-tap pairing.
/// At most one verdict per release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum EndVerdict {
    Swipe {
        direction: SwipeDirection,
        /// Magnitude along the dominant axis.
        distance: f32,
    },
    TapCandidate,
    Unclassified,
}

pub(crate) fn classify_end(
    travel: Delta,
    distance: f32,
    duration: Duration,
    options: &TouchOptions,
) -> EndVerdict {
    if distance > options.swipe_threshold {
        let direction = swipe_direction(travel);
        let axis_distance = match direction {
            SwipeDirection::Left | SwipeDirection::Right => travel.dx.abs(),
            SwipeDirection::Up | SwipeDirection::Down => travel.dy.abs(),
        };
        return EndVerdict::Swipe {
            direction,
            distance: axis_distance,
        };
    }
    if distance < TAP_MAX_DISTANCE && duration < TAP_MAX_DURATION {
        return EndVerdict::TapCandidate;
    }
    EndVerdict::Unclassified
}

/// The larger of |dx| and |dy| picks the axis; the sign picks the side.
/// An exact tie reads as vertical.
pub(crate) fn swipe_direction(travel: Delta) -> SwipeDirection {
    if travel.dx.abs() > travel.dy.abs() {
        if travel.dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if travel.dy > 0.0 {
        SwipeDirection::Down
    } else {
        SwipeDirection::Up
    }
}
