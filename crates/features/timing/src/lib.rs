//! # Timing
//!
//! Rate limiters for event handlers, driven by an injected [`Scheduler`].
//!
//! * [`debounce`] collapses a burst of calls into one.
//! * [`throttle`] runs at most once per time window.
//! * [`raf_throttle`] runs at most once per animation frame.
//!
//! Every limiter takes an `immediate` switch choosing whether the function runs
//! at the start of a burst or once it settles. Limiters are single-threaded handles (`!Send`)
//! and keep at most one pending callback each.
//!
//! [`VirtualScheduler`] is a hand-driven clock for tests and headless hosts;
//! [`TokioScheduler`] (feature `tokio`, on by default) runs on `tokio::time` inside a
//! `LocalSet`.

mod debounce;
mod scheduler;
mod throttle;
#[cfg(feature = "tokio")]
mod tokio_scheduler;
mod virtual_clock;

pub use debounce::{Debounce, DebounceBuilder, debounce};
pub use scheduler::{Scheduler, Task, TimerHandle};
pub use throttle::{FrameThrottle, FrameThrottleBuilder, Throttle, ThrottleBuilder, raf_throttle, throttle};
#[cfg(feature = "tokio")]
pub use tokio_scheduler::TokioScheduler;
pub use virtual_clock::VirtualScheduler;
