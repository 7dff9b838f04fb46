use crate::scheduler::{Scheduler, Task, TimerHandle};
use elemental_domain::config::TimingConfig;
use elemental_domain::constants::DEFAULT_FRAME_INTERVAL_MS;
use fxhash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::trace;

/// Deadline used when `now + delay` overflows `Instant`, about 30 years out.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

struct Timers {
    origin: Instant,
    frame_interval: Duration,
    next_id: Cell<u64>,
    pending: RefCell<FxHashMap<u64, AbortHandle>>,
}

impl Timers {
    fn next_handle(&self) -> TimerHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        TimerHandle::new(id)
    }

    /// First frame boundary strictly after the current instant.
    fn next_frame(&self) -> Instant {
        let elapsed = Instant::now().saturating_duration_since(self.origin);
        let frames = elapsed.as_nanos() / self.frame_interval.as_nanos() + 1;
        let frames = u32::try_from(frames).unwrap_or(u32::MAX);
        self.origin + self.frame_interval.saturating_mul(frames)
    }
}

/// Scheduler over `tokio::time`, running callbacks as local tasks.
///
/// Must be used from inside a [`tokio::task::LocalSet`]; callbacks are spawned with
/// [`tokio::task::spawn_local`]. Works with paused time, which makes it usable in tests.
///
/// Frame callbacks fire on a fixed grid of `frame_interval` measured from the moment the
/// scheduler was created.
#[derive(Clone)]
pub struct TokioScheduler {
    timers: Rc<Timers>,
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS))
    }
}

impl TokioScheduler {
    /// Creates a scheduler whose frames are `frame_interval` apart (at least 1 ms).
    #[must_use]
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            timers: Rc::new(Timers {
                origin: Instant::now(),
                frame_interval: frame_interval.max(Duration::from_millis(1)),
                next_id: Cell::new(0),
                pending: RefCell::new(FxHashMap::default()),
            }),
        }
    }

    #[must_use]
    pub fn from_config(config: &TimingConfig) -> Self {
        Self::new(config.frame_interval())
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.timers.frame_interval
    }

    /// Number of callbacks that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.pending.borrow().len()
    }

    fn spawn_at(&self, deadline: Instant, task: Task) -> TimerHandle {
        let handle = self.timers.next_handle();
        let timers: Weak<Timers> = Rc::downgrade(&self.timers);

        let join = tokio::task::spawn_local(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(timers) = timers.upgrade() {
                timers.pending.borrow_mut().remove(&handle.id());
            }
            task();
        });

        self.timers.pending.borrow_mut().insert(handle.id(), join.abort_handle());
        handle
    }
}

impl Scheduler for TokioScheduler {
    /// # Panics
    /// Panics when called outside a `LocalSet`.
    fn set_timer(&self, task: Task, delay: Duration) -> TimerHandle {
        let now = Instant::now();
        let deadline = now.checked_add(delay).unwrap_or_else(|| now + FAR_FUTURE);
        let handle = self.spawn_at(deadline, task);
        trace!(%handle, ?delay, "Timer scheduled");
        handle
    }

    fn cancel_timer(&self, handle: TimerHandle) {
        if let Some(abort) = self.timers.pending.borrow_mut().remove(&handle.id()) {
            abort.abort();
            trace!(%handle, "Timer cancelled");
        }
    }

    /// # Panics
    /// Panics when called outside a `LocalSet`.
    fn request_frame(&self, task: Task) -> TimerHandle {
        let deadline = self.timers.next_frame();
        let handle = self.spawn_at(deadline, task);
        trace!(%handle, "Frame requested");
        handle
    }

    fn now(&self) -> Duration {
        Instant::now().saturating_duration_since(self.timers.origin)
    }
}

impl fmt::Debug for TokioScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioScheduler")
            .field("frame_interval", &self.timers.frame_interval)
            .field("pending", &self.pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::LocalSet;

    const MS: Duration = Duration::from_millis(1);

    #[tokio::test(start_paused = true)]
    async fn timers_fire_after_their_delay() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TokioScheduler::default();
                let log = Rc::new(RefCell::new(Vec::new()));

                for (label, delay) in [("b", 20), ("a", 10)] {
                    let (log, clock) = (Rc::clone(&log), scheduler.clone());
                    scheduler.set_timer(
                        Box::new(move || log.borrow_mut().push((label, clock.now()))),
                        MS * delay,
                    );
                }
                assert_eq!(scheduler.pending(), 2);

                tokio::time::sleep(MS * 25).await;
                assert_eq!(*log.borrow(), [("a", MS * 10), ("b", MS * 20)]);
                assert_eq!(scheduler.pending(), 0);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timers_are_aborted() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TokioScheduler::default();
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);

                let handle = scheduler.set_timer(Box::new(move || flag.set(true)), MS * 10);
                scheduler.cancel_timer(handle);

                tokio::time::sleep(MS * 50).await;
                assert!(!fired.get());
                assert_eq!(scheduler.pending(), 0);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn frames_land_on_the_frame_grid() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TokioScheduler::from_config(&TimingConfig {
                    frame_interval_ms: 10,
                    ..TimingConfig::default()
                });
                let at = Rc::new(Cell::new(None));

                tokio::time::sleep(MS * 3).await;
                let (sink, clock) = (Rc::clone(&at), scheduler.clone());
                scheduler.request_frame(Box::new(move || sink.set(Some(clock.now()))));

                tokio::time::sleep(MS * 20).await;
                assert_eq!(at.get(), Some(MS * 10));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn huge_delays_do_not_overflow() {
        LocalSet::new()
            .run_until(async {
                let scheduler = TokioScheduler::default();
                let fired = Rc::new(Cell::new(false));
                let flag = Rc::clone(&fired);

                let handle = scheduler.set_timer(Box::new(move || flag.set(true)), Duration::MAX);
                assert_eq!(scheduler.pending(), 1);

                tokio::time::sleep(Duration::from_secs(86_400)).await;
                assert!(!fired.get());
                scheduler.cancel_timer(handle);
                assert_eq!(scheduler.pending(), 0);
            })
            .await;
    }

    #[test]
    fn frame_interval_is_never_zero() {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
        let _guard = runtime.enter();
        assert_eq!(TokioScheduler::new(Duration::ZERO).frame_interval(), MS);
    }
}
