//! The gesture engine facade.
//!
//! Wires the three contact entry points to session updates, timer management,
//! and classification, and owns the subscriber registry. One engine per
//! attached interaction surface; clones are handles to the same engine.
//!
//! Timers are host-pumped: [`GestureEngine::poll_timers`] fires everything
//! due, and every entry point flushes due timers before applying its own
//! transition, so timer-vs-input ordering is deterministic. A host that never
//! pumps degrades to late long-press and tap delivery, nothing worse.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;
use tactus_geometry::{distance, midpoint, Point};
use web_time::Instant;

use crate::classifier::{self, EndVerdict};
use crate::clock::{Clock, SystemClock};
use crate::event::{
    DoubleTapEvent, GestureEvent, GestureKind, LongPressEvent, PinchEvent, SwipeEvent, TapEvent,
    TouchEndEvent, TouchMoveEvent, TouchStartEvent,
};
use crate::options::TouchOptions;
use crate::registry::{dispatch_to, SubscriberRegistry, Subscription};
use crate::session::TouchSession;
use crate::timer::{TimerQueue, TimerSlot};

/// A single tap waiting out the double-tap window before delivery.
#[derive(Clone, Copy, Debug)]
struct PendingTap {
    position: Point,
}

struct EngineInner {
    options: TouchOptions,
    clock: Rc<dyn Clock>,
    session: Option<TouchSession>,
    timers: TimerQueue,
    /// End time of the most recently completed single-tap candidate.
    /// Consumed (reset to `None`) when a double-tap pairs with it.
    last_tap: Option<Instant>,
    pending_tap: Option<PendingTap>,
    subscribers: SubscriberRegistry,
    detached: bool,
}

type EventBatch = SmallVec<[GestureEvent; 4]>;

/// Touch-gesture recognition engine.
///
/// Feed it raw contact events via [`on_contact_start`](Self::on_contact_start),
/// [`on_contact_move`](Self::on_contact_move) and
/// [`on_contact_end`](Self::on_contact_end); subscribe to classified gestures
/// with [`on`](Self::on) or the typed helpers.
///
/// # Example
///
/// ```
/// use tactus_core::{GestureEngine, TouchOptions};
/// use tactus_geometry::Point;
///
/// let engine = GestureEngine::new(TouchOptions::default());
/// engine.on_tap(|tap| println!("tap at {:?}", tap.position));
///
/// engine.on_contact_start(&[Point::new(10.0, 10.0)]);
/// engine.on_contact_end(&[], 1);
/// // Pump from the host's frame loop; the tap arrives once the
/// // double-tap window has closed:
/// engine.poll_timers();
/// ```
///
/// # Thread Safety
///
/// `GestureEngine` uses `Rc<RefCell<...>>` internally and is not thread-safe.
/// It should only be used from the main thread.
#[derive(Clone)]
pub struct GestureEngine {
    inner: Rc<RefCell<EngineInner>>,
}

impl GestureEngine {
    /// Creates an engine on the system clock.
    pub fn new(options: TouchOptions) -> Self {
        Self::with_clock(options, Rc::new(SystemClock))
    }

    /// Creates an engine reading time from `clock`. Test harnesses pass a
    /// manual clock here.
    pub fn with_clock(options: TouchOptions, clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EngineInner {
                options,
                clock,
                session: None,
                timers: TimerQueue::new(),
                last_tap: None,
                pending_tap: None,
                subscribers: SubscriberRegistry::new(),
                detached: false,
            })),
        }
    }

    pub fn options(&self) -> TouchOptions {
        self.inner.borrow().options
    }

    /// Advisory for the host: whether it should suppress native scrolling
    /// while this engine tracks a session. Engine logic never consults it.
    pub fn prevent_default_scroll(&self) -> bool {
        self.inner.borrow().options.prevent_default_scroll
    }

    /// Whether a session is currently tracking.
    pub fn is_tracking(&self) -> bool {
        self.inner.borrow().session.is_some()
    }

    /// Registers `callback` for `kind`. Registration order is notification
    /// order; registering twice fires twice.
    pub fn on(
        &self,
        kind: GestureKind,
        callback: impl FnMut(&GestureEvent) + 'static,
    ) -> Subscription {
        self.inner
            .borrow_mut()
            .subscribers
            .subscribe(kind, Rc::new(RefCell::new(callback)))
    }

    /// Removes the registration identified by `subscription`.
    pub fn off(&self, subscription: Subscription) {
        self.inner.borrow_mut().subscribers.unsubscribe(subscription);
    }

    /// Fires every due timer. Hosts call this from their frame loop so
    /// long-presses and debounced taps fire without further input.
    pub fn poll_timers(&self) {
        self.process(|inner, out| {
            let now = inner.clock.now();
            flush_due_timers(inner, now, out);
        });
    }

    /// A contact landed. Opens a session when idle; while tracking, a further
    /// contact extends the live session (pinch) without resetting its origin.
    pub fn on_contact_start(&self, points: &[Point]) {
        self.process(|inner, out| {
            let now = inner.clock.now();
            flush_due_timers(inner, now, out);
            if points.is_empty() {
                log::trace!("ignoring contact start with no points");
                return;
            }
            let position = points[0];
            if inner.session.is_none() {
                inner.session = Some(TouchSession::begin(position, points.len(), now));
                inner
                    .timers
                    .schedule(TimerSlot::LongPress, now + inner.options.long_press_delay);
            } else if let Some(session) = inner.session.as_mut() {
                // A further finger extends the live session; origin stays put.
                session.set_contact_count(points.len());
            }
            out.push(GestureEvent::TouchStart(TouchStartEvent {
                position,
                touches: points.len(),
            }));
            if let [a, b] = points {
                out.push(GestureEvent::PinchStart(PinchEvent {
                    distance: distance(*a, *b),
                    center: midpoint(*a, *b),
                }));
            }
        });
    }

    /// The primary contact moved. Any movement, however small, ends
    /// long-press candidacy for this session.
    pub fn on_contact_move(&self, points: &[Point]) {
        self.process(|inner, out| {
            let now = inner.clock.now();
            flush_due_timers(inner, now, out);
            if points.is_empty() {
                log::trace!("ignoring contact move with no points");
                return;
            }
            let Some(session) = inner.session.as_mut() else {
                return;
            };
            session.move_to(points[0]);
            let travel = session.travel();
            let position = session.current_position();
            inner.timers.cancel(TimerSlot::LongPress);

            out.push(GestureEvent::TouchMove(TouchMoveEvent {
                position,
                delta: travel,
                distance: travel.length(),
            }));
            if let [a, b] = points {
                out.push(GestureEvent::PinchMove(PinchEvent {
                    distance: distance(*a, *b),
                    center: midpoint(*a, *b),
                }));
            }
        });
    }

    /// Contacts lifted. `remaining` holds the contacts still down after the
    /// event, `changed` how many just ceased. Closes the session and runs
    /// classification; at most one of swipe/tap/double-tap fires per session.
    pub fn on_contact_end(&self, remaining: &[Point], changed: usize) {
        self.process(|inner, out| {
            let now = inner.clock.now();
            flush_due_timers(inner, now, out);
            let Some(session) = inner.session.take() else {
                return;
            };
            inner.timers.cancel(TimerSlot::LongPress);

            let travel = session.travel();
            let travel_distance = travel.length();
            let duration = session.elapsed(now);
            let position = session.current_position();

            out.push(GestureEvent::TouchEnd(TouchEndEvent {
                position,
                delta: travel,
                distance: travel_distance,
                duration,
                changed,
            }));

            match classifier::classify_end(travel, travel_distance, duration, &inner.options) {
                EndVerdict::Swipe {
                    direction,
                    distance,
                } => {
                    out.push(GestureEvent::Swipe(SwipeEvent {
                        direction,
                        distance,
                        duration,
                    }));
                }
                EndVerdict::TapCandidate => {
                    let pairs = inner
                        .last_tap
                        .is_some_and(|last| now.duration_since(last) < inner.options.double_tap_delay);
                    if pairs {
                        // Second half of a double-tap: the pending single tap
                        // must never fire, and a third rapid tap cannot pair
                        // with this one.
                        inner.timers.cancel(TimerSlot::TapDebounce);
                        inner.pending_tap = None;
                        inner.last_tap = None;
                        out.push(GestureEvent::DoubleTap(DoubleTapEvent { position }));
                    } else {
                        inner.last_tap = Some(now);
                        inner.pending_tap = Some(PendingTap { position });
                        inner
                            .timers
                            .schedule(TimerSlot::TapDebounce, now + inner.options.double_tap_delay);
                    }
                }
                EndVerdict::Unclassified => {}
            }

            // Pinch ends exactly once, when the active contact count drops
            // below two.
            if session.contact_count() >= 2 && remaining.len() < 2 {
                out.push(GestureEvent::PinchEnd);
            }
        });
    }

    /// Cancelled contacts run the same close-out as an ordinary end; the
    /// producer of the stream decides what "cancel" means.
    pub fn on_contact_cancel(&self, remaining: &[Point], changed: usize) {
        self.on_contact_end(remaining, changed);
    }

    /// Detaches the engine from its surface: cancels every outstanding timer,
    /// drops the live session and all subscribers. Entry points become no-ops
    /// so nothing can be dispatched to a dead surface.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.detached = true;
        inner.timers.clear();
        inner.pending_tap = None;
        inner.session = None;
        inner.subscribers.clear();
    }

    /// Runs `transition` against the engine state, then dispatches whatever
    /// events it produced. Dispatch happens outside the state borrow, against
    /// a per-event snapshot of the subscriber list, so callbacks may freely
    /// call `on`/`off` on this engine.
    fn process(&self, transition: impl FnOnce(&mut EngineInner, &mut EventBatch)) {
        let mut events = EventBatch::new();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.detached {
                return;
            }
            transition(&mut inner, &mut events);
        }
        for event in events {
            let snapshot = self.inner.borrow().subscribers.snapshot(event.kind());
            dispatch_to(&snapshot, &event);
        }
    }
}

/// Typed subscription helpers, mirroring the engine's gesture vocabulary.
impl GestureEngine {
    pub fn on_tap(&self, mut f: impl FnMut(&TapEvent) + 'static) -> Subscription {
        self.on(GestureKind::Tap, move |event| {
            if let GestureEvent::Tap(tap) = event {
                f(tap);
            }
        })
    }

    pub fn on_double_tap(&self, mut f: impl FnMut(&DoubleTapEvent) + 'static) -> Subscription {
        self.on(GestureKind::DoubleTap, move |event| {
            if let GestureEvent::DoubleTap(double_tap) = event {
                f(double_tap);
            }
        })
    }

    pub fn on_long_press(&self, mut f: impl FnMut(&LongPressEvent) + 'static) -> Subscription {
        self.on(GestureKind::LongPress, move |event| {
            if let GestureEvent::LongPress(long_press) = event {
                f(long_press);
            }
        })
    }

    pub fn on_swipe_left(&self, f: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        self.on_swipe(GestureKind::SwipeLeft, f)
    }

    pub fn on_swipe_right(&self, f: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        self.on_swipe(GestureKind::SwipeRight, f)
    }

    pub fn on_swipe_up(&self, f: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        self.on_swipe(GestureKind::SwipeUp, f)
    }

    pub fn on_swipe_down(&self, f: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        self.on_swipe(GestureKind::SwipeDown, f)
    }

    fn on_swipe(&self, kind: GestureKind, mut f: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        self.on(kind, move |event| {
            if let GestureEvent::Swipe(swipe) = event {
                f(swipe);
            }
        })
    }
}

/// Fires every timer whose deadline has passed, in deadline order.
fn flush_due_timers(inner: &mut EngineInner, now: Instant, out: &mut EventBatch) {
    for fired in inner.timers.due(now) {
        match fired.slot {
            TimerSlot::LongPress => {
                // Only a session that is still tracking long-presses; an end
                // or cancel already removed this timer otherwise.
                if let Some(session) = inner.session.as_ref() {
                    out.push(GestureEvent::LongPress(LongPressEvent {
                        position: session.current_position(),
                        duration: session.elapsed(now),
                    }));
                }
            }
            TimerSlot::TapDebounce => {
                if let Some(pending) = inner.pending_tap.take() {
                    out.push(GestureEvent::Tap(TapEvent {
                        position: pending.position,
                    }));
                }
            }
        }
    }
}
