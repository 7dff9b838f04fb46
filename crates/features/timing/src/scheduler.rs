use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// A callback handed to the scheduler.
pub type Task = Box<dyn FnOnce()>;

/// Identifies a pending timer or frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The host timer service.
///
/// Callbacks run on the scheduler's own thread, one at a time. A callback may schedule
/// or cancel other callbacks.
pub trait Scheduler {
    /// Runs `task` once `delay` has elapsed.
    fn set_timer(&self, task: Task, delay: Duration) -> TimerHandle;

    /// Drops a pending timer or frame callback. Unknown or fired handles are ignored.
    fn cancel_timer(&self, handle: TimerHandle);

    /// Runs `task` at the next animation frame.
    fn request_frame(&self, task: Task) -> TimerHandle;

    /// Time elapsed since the scheduler was created.
    fn now(&self) -> Duration;
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn set_timer(&self, task: Task, delay: Duration) -> TimerHandle {
        (**self).set_timer(task, delay)
    }

    fn cancel_timer(&self, handle: TimerHandle) {
        (**self).cancel_timer(handle);
    }

    fn request_frame(&self, task: Task) -> TimerHandle {
        (**self).request_frame(task)
    }

    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Shared scheduler reference held by the rate limiters.
pub(crate) type SharedScheduler = Rc<dyn Scheduler>;

pub(crate) fn share(scheduler: impl Scheduler + 'static) -> SharedScheduler {
    Rc::new(scheduler)
}
