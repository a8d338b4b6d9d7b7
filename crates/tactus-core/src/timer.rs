//! Slot-keyed timers for gesture deadlines.
//!
//! The engine owns at most one long-press timer and one tap-debounce timer
//! at any instant. Scheduling into an occupied slot replaces the old timer,
//! and cancellation is authoritative: a canceled timer never fires, even if
//! its deadline already elapsed by the time `due` is called.

use smallvec::SmallVec;
use web_time::Instant;

/// Logical timer identity. One slot, one outstanding timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerSlot {
    LongPress,
    TapDebounce,
}

const SLOTS: [TimerSlot; 2] = [TimerSlot::LongPress, TimerSlot::TapDebounce];

/// Identifies one scheduled timer. A handle goes stale when its slot is
/// replaced or canceled; stale handles cancel nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    slot: TimerSlot,
    generation: u64,
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    deadline: Instant,
    generation: u64,
}

/// A timer that reached its deadline and left the queue.
#[derive(Clone, Copy, Debug)]
pub struct FiredTimer {
    pub slot: TimerSlot,
    pub deadline: Instant,
}

/// Engine-instance-owned timer storage. Nothing here is process-global:
/// two engines never share timer state.
#[derive(Debug, Default)]
pub struct TimerQueue {
    long_press: Option<Scheduled>,
    tap_debounce: Option<Scheduled>,
    next_generation: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `slot` to fire at `deadline`, replacing any outstanding
    /// timer in that slot.
    pub fn schedule(&mut self, slot: TimerSlot, deadline: Instant) -> TimerHandle {
        self.next_generation += 1;
        let generation = self.next_generation;
        *self.entry(slot) = Some(Scheduled {
            deadline,
            generation,
        });
        TimerHandle { slot, generation }
    }

    /// Cancels whatever is scheduled in `slot`. Idempotent.
    pub fn cancel(&mut self, slot: TimerSlot) {
        *self.entry(slot) = None;
    }

    /// Cancels only if `handle` still identifies the outstanding timer in its
    /// slot; a handle invalidated by a later `schedule` does nothing.
    pub fn cancel_handle(&mut self, handle: TimerHandle) {
        let entry = self.entry(handle.slot);
        if entry.is_some_and(|s| s.generation == handle.generation) {
            *entry = None;
        }
    }

    pub fn is_scheduled(&self, slot: TimerSlot) -> bool {
        match slot {
            TimerSlot::LongPress => self.long_press.is_some(),
            TimerSlot::TapDebounce => self.tap_debounce.is_some(),
        }
    }

    /// Drains every timer whose deadline has passed, earliest deadline first.
    pub fn due(&mut self, now: Instant) -> SmallVec<[FiredTimer; 2]> {
        let mut fired: SmallVec<[FiredTimer; 2]> = SmallVec::new();
        for slot in SLOTS {
            let entry = self.entry(slot);
            if let Some(scheduled) = *entry {
                if scheduled.deadline <= now {
                    *entry = None;
                    fired.push(FiredTimer {
                        slot,
                        deadline: scheduled.deadline,
                    });
                }
            }
        }
        fired.sort_by_key(|f| f.deadline);
        fired
    }

    /// Drops every outstanding timer. Used on detach.
    pub fn clear(&mut self) {
        self.long_press = None;
        self.tap_debounce = None;
    }

    fn entry(&mut self, slot: TimerSlot) -> &mut Option<Scheduled> {
        match slot {
            TimerSlot::LongPress => &mut self.long_press,
            TimerSlot::TapDebounce => &mut self.tap_debounce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_due_fires_at_deadline() {
        let mut queue = TimerQueue::new();
        let t0 = base();
        queue.schedule(TimerSlot::LongPress, t0 + Duration::from_millis(500));

        assert!(queue.due(t0 + Duration::from_millis(499)).is_empty());
        let fired = queue.due(t0 + Duration::from_millis(500));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].slot, TimerSlot::LongPress);
        // Fired timers leave the queue.
        assert!(queue.due(t0 + Duration::from_millis(600)).is_empty());
    }

    #[test]
    fn test_cancel_prevents_fire_even_past_deadline() {
        let mut queue = TimerQueue::new();
        let t0 = base();
        queue.schedule(TimerSlot::TapDebounce, t0 + Duration::from_millis(300));
        queue.cancel(TimerSlot::TapDebounce);

        assert!(queue.due(t0 + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_schedule_replaces_same_slot() {
        let mut queue = TimerQueue::new();
        let t0 = base();
        queue.schedule(TimerSlot::LongPress, t0 + Duration::from_millis(100));
        queue.schedule(TimerSlot::LongPress, t0 + Duration::from_millis(800));

        // The first deadline no longer exists.
        assert!(queue.due(t0 + Duration::from_millis(500)).is_empty());
        assert_eq!(queue.due(t0 + Duration::from_millis(800)).len(), 1);
    }

    #[test]
    fn test_stale_handle_cancels_nothing() {
        let mut queue = TimerQueue::new();
        let t0 = base();
        let old = queue.schedule(TimerSlot::LongPress, t0 + Duration::from_millis(100));
        queue.schedule(TimerSlot::LongPress, t0 + Duration::from_millis(200));

        queue.cancel_handle(old);
        assert!(queue.is_scheduled(TimerSlot::LongPress));
    }

    #[test]
    fn test_live_handle_cancels() {
        let mut queue = TimerQueue::new();
        let t0 = base();
        let handle = queue.schedule(TimerSlot::TapDebounce, t0 + Duration::from_millis(100));

        queue.cancel_handle(handle);
        assert!(!queue.is_scheduled(TimerSlot::TapDebounce));
    }

    #[test]
    fn test_due_orders_by_deadline() {
        let mut queue = TimerQueue::new();
        let t0 = base();
        queue.schedule(TimerSlot::LongPress, t0 + Duration::from_millis(500));
        queue.schedule(TimerSlot::TapDebounce, t0 + Duration::from_millis(300));

        let fired = queue.due(t0 + Duration::from_millis(600));
        assert_eq!(fired.len(), 2);
        assert_eq!(fired[0].slot, TimerSlot::TapDebounce);
        assert_eq!(fired[1].slot, TimerSlot::LongPress);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut queue = TimerQueue::new();
        let t0 = base();
        queue.schedule(TimerSlot::LongPress, t0);
        queue.schedule(TimerSlot::TapDebounce, t0);

        queue.clear();
        assert!(queue.due(t0 + Duration::from_secs(1)).is_empty());
    }
}
