use crate::scheduler::{Scheduler, Task, TimerHandle};
use fxhash::FxHashMap;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::trace;

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    /// Keyed by `(deadline, id)`: deadline order, FIFO among equal deadlines.
    timers: BTreeMap<(Duration, u64), Task>,
    deadlines: FxHashMap<u64, Duration>,
    frames: VecDeque<(u64, Task)>,
}

impl ClockState {
    const fn next_handle(&mut self) -> TimerHandle {
        self.next_id += 1;
        TimerHandle::new(self.next_id)
    }

    /// Removes the earliest timer due at or before `limit`.
    fn pop_due(&mut self, limit: Duration) -> Option<(Duration, Task)> {
        let entry = self.timers.first_entry().filter(|e| e.key().0 <= limit)?;
        let ((deadline, id), task) = entry.remove_entry();
        self.deadlines.remove(&id);
        Some((deadline, task))
    }
}

/// Deterministic scheduler driven by hand.
///
/// Time only moves through [`advance`](Self::advance) and frames only fire through
/// [`tick_frame`](Self::tick_frame). Clones share the same clock.
///
/// # Examples
/// ```rust
/// use elemental_timing::{Scheduler, VirtualScheduler};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let clock = VirtualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&fired);
/// clock.set_timer(Box::new(move || flag.set(true)), Duration::from_millis(10));
///
/// clock.advance(Duration::from_millis(9));
/// assert!(!fired.get());
/// clock.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    state: Rc<RefCell<ClockState>>,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by`, running every timer that falls due on the way.
    ///
    /// Timers run in deadline order with the clock set to their deadline. Timers scheduled
    /// by a callback also run when they fall inside the advanced span. Returns the number
    /// of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.borrow().now.saturating_add(by);
        let mut ran = 0;

        loop {
            let due = {
                let mut state = self.state.borrow_mut();
                let due = state.pop_due(target);
                if let Some((deadline, _)) = &due {
                    state.now = *deadline;
                }
                due
            };
            let Some((_, task)) = due else { break };
            task();
            ran += 1;
        }

        self.state.borrow_mut().now = target;
        trace!(now = ?target, ran, "Virtual clock advanced");
        ran
    }

    /// Runs the frame callbacks queued before this call.
    ///
    /// Callbacks requested while the frame runs wait for the next tick. Returns the number
    /// of callbacks run.
    pub fn tick_frame(&self) -> usize {
        let frame: Vec<_> = self.state.borrow_mut().frames.drain(..).collect();
        let ran = frame.len();
        for (_, task) in frame {
            task();
        }
        trace!(ran, "Virtual frame ticked");
        ran
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.borrow().timers.keys().next().map(|(deadline, _)| *deadline)
    }
}

impl Scheduler for VirtualScheduler {
    fn set_timer(&self, task: Task, delay: Duration) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        let handle = state.next_handle();
        let deadline = state.now.saturating_add(delay);
        state.timers.insert((deadline, handle.id()), task);
        state.deadlines.insert(handle.id(), deadline);
        trace!(%handle, ?deadline, "Timer scheduled");
        handle
    }

    fn cancel_timer(&self, handle: TimerHandle) {
        let mut state = self.state.borrow_mut();
        if let Some(deadline) = state.deadlines.remove(&handle.id()) {
            state.timers.remove(&(deadline, handle.id()));
            trace!(%handle, "Timer cancelled");
        } else if let Some(pos) = state.frames.iter().position(|(id, _)| *id == handle.id()) {
            state.frames.remove(pos);
            trace!(%handle, "Frame callback cancelled");
        }
    }

    fn request_frame(&self, task: Task) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        let handle = state.next_handle();
        state.frames.push_back((handle.id(), task));
        trace!(%handle, "Frame requested");
        handle
    }

    fn now(&self) -> Duration {
        self.state.borrow().now
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("VirtualScheduler")
            .field("now", &state.now)
            .field("pending_timers", &state.timers.len())
            .field("pending_frames", &state.frames.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |label: &'static str| -> Task {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn timers_fire_in_deadline_then_fifo_order() {
        let clock = VirtualScheduler::new();
        let (log, task) = recorder();

        clock.set_timer(task("late"), MS * 30);
        clock.set_timer(task("first"), MS * 10);
        clock.set_timer(task("second"), MS * 10);

        assert_eq!(clock.next_deadline(), Some(MS * 10));
        assert_eq!(clock.advance(MS * 30), 3);
        assert_eq!(*log.borrow(), ["first", "second", "late"]);
        assert_eq!(clock.now(), MS * 30);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let clock = VirtualScheduler::new();
        let (log, task) = recorder();

        let handle = clock.set_timer(task("cancelled"), MS * 5);
        clock.cancel_timer(handle);
        clock.cancel_timer(handle);

        assert_eq!(clock.advance(MS * 10), 0);
        assert!(log.borrow().is_empty());
        assert_eq!(clock.pending_timers(), 0);
    }

    #[test]
    fn nested_timers_inside_the_span_fire() {
        let clock = VirtualScheduler::new();
        let (log, task) = recorder();
        let inner = clock.clone();
        let nested = task("nested");

        clock.set_timer(
            Box::new(move || {
                inner.set_timer(nested, MS * 5);
            }),
            MS * 10,
        );

        assert_eq!(clock.advance(MS * 15), 2);
        assert_eq!(*log.borrow(), ["nested"]);
        assert_eq!(clock.pending_timers(), 0);
    }

    #[test]
    fn callbacks_see_their_own_deadline() {
        let clock = VirtualScheduler::new();
        let seen = Rc::new(RefCell::new(None));
        let (inner, sink) = (clock.clone(), Rc::clone(&seen));
        clock.set_timer(Box::new(move || *sink.borrow_mut() = Some(inner.now())), MS * 7);

        clock.advance(MS * 100);
        assert_eq!(*seen.borrow(), Some(MS * 7));
    }

    #[test]
    fn frames_requested_during_a_tick_wait_for_the_next() {
        let clock = VirtualScheduler::new();
        let (log, task) = recorder();
        let inner = clock.clone();
        let again = task("second frame");

        clock.request_frame(task("first frame"));
        clock.request_frame(Box::new(move || {
            inner.request_frame(again);
        }));
        let dropped = clock.request_frame(task("cancelled"));
        clock.cancel_timer(dropped);

        assert_eq!(clock.tick_frame(), 2);
        assert_eq!(*log.borrow(), ["first frame"]);
        assert_eq!(clock.pending_frames(), 1);

        assert_eq!(clock.tick_frame(), 1);
        assert_eq!(*log.borrow(), ["first frame", "second frame"]);
    }
}
