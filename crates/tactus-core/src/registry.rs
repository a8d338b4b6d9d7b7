//! Subscriber bookkeeping and dispatch.
//!
//! Registration order is notification order, duplicates are allowed, and
//! dispatch always iterates a snapshot taken at dispatch time, so a callback
//! unsubscribing (or subscribing) mid-dispatch never invalidates iteration.

use std::cell::RefCell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use smallvec::SmallVec;

use crate::event::{GestureEvent, GestureKind};

pub(crate) type Callback = Rc<RefCell<dyn FnMut(&GestureEvent)>>;

/// Token returned by `on`; hand it back to `off` to remove exactly that
/// registration. Closures have no identity in Rust, so removal is token-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription {
    kind: GestureKind,
    id: u64,
}

impl Subscription {
    pub fn kind(&self) -> GestureKind {
        self.kind
    }
}

pub(crate) struct SubscriberRegistry {
    lists: [Vec<(u64, Callback)>; GestureKind::COUNT],
    next_id: u64,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self {
            lists: std::array::from_fn(|_| Vec::new()),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, kind: GestureKind, callback: Callback) -> Subscription {
        self.next_id += 1;
        let id = self.next_id;
        self.lists[kind.index()].push((id, callback));
        Subscription { kind, id }
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.lists[subscription.kind.index()].retain(|(id, _)| *id != subscription.id);
    }

    /// Current list for `kind`, in registration order.
    pub fn snapshot(&self, kind: GestureKind) -> SmallVec<[Callback; 4]> {
        self.lists[kind.index()]
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect()
    }

    pub fn clear(&mut self) {
        for list in &mut self.lists {
            list.clear();
        }
    }
}

/// Runs every callback in `snapshot` against `event`, isolating panics so one
/// failing subscriber cannot starve the rest or stall the engine.
pub(crate) fn dispatch_to(snapshot: &[Callback], event: &GestureEvent) {
    for callback in snapshot {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            (&mut *callback.borrow_mut())(event);
        }));
        if let Err(payload) = outcome {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_owned())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_owned());
            log::error!(
                "gesture subscriber panicked during {:?} dispatch: {}",
                event.kind(),
                message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TapEvent;
    use tactus_geometry::Point;

    fn tap_event() -> GestureEvent {
        GestureEvent::Tap(TapEvent {
            position: Point::ZERO,
        })
    }

    fn counting_callback(log: Rc<RefCell<Vec<u32>>>, marker: u32) -> Callback {
        Rc::new(RefCell::new(move |_: &GestureEvent| {
            log.borrow_mut().push(marker);
        }))
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let mut registry = SubscriberRegistry::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        registry.subscribe(GestureKind::Tap, counting_callback(calls.clone(), 1));
        registry.subscribe(GestureKind::Tap, counting_callback(calls.clone(), 2));
        registry.subscribe(GestureKind::Tap, counting_callback(calls.clone(), 3));

        dispatch_to(&registry.snapshot(GestureKind::Tap), &tap_event());
        assert_eq!(*calls.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_registration() {
        let mut registry = SubscriberRegistry::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let first = registry.subscribe(GestureKind::Tap, counting_callback(calls.clone(), 1));
        registry.subscribe(GestureKind::Tap, counting_callback(calls.clone(), 2));

        registry.unsubscribe(first);
        dispatch_to(&registry.snapshot(GestureKind::Tap), &tap_event());
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn test_panicking_callback_does_not_starve_later_ones() {
        let mut registry = SubscriberRegistry::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        registry.subscribe(
            GestureKind::Tap,
            Rc::new(RefCell::new(|_: &GestureEvent| {
                panic!("subscriber bug");
            })),
        );
        registry.subscribe(GestureKind::Tap, counting_callback(calls.clone(), 2));

        dispatch_to(&registry.snapshot(GestureKind::Tap), &tap_event());
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn test_kinds_are_independent() {
        let mut registry = SubscriberRegistry::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        registry.subscribe(GestureKind::DoubleTap, counting_callback(calls.clone(), 1));

        dispatch_to(&registry.snapshot(GestureKind::Tap), &tap_event());
        assert!(calls.borrow().is_empty());
    }
}
