use crate::scheduler::{Scheduler, SharedScheduler, TimerHandle, share};
use elemental_domain::config::TimingConfig;
use elemental_domain::constants::DEFAULT_WAIT_MS;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;

struct DebounceState<A, F> {
    scheduler: SharedScheduler,
    func: RefCell<F>,
    wait: Duration,
    immediate: bool,
    pending: Cell<Option<TimerHandle>>,
    latest: RefCell<Option<A>>,
}

impl<A: 'static, F: FnMut(A) + 'static> DebounceState<A, F> {
    fn fire(&self) {
        self.pending.set(None);
        if self.immediate {
            return;
        }
        let args = self.latest.borrow_mut().take();
        if let Some(args) = args {
            (self.func.borrow_mut())(args);
        }
    }
}

/// Collapses a burst of calls into one.
///
/// Every call restarts the `wait` timer. In trailing mode the function runs once the
/// timer expires, with the arguments of the last call. In immediate mode it runs on the
/// first call of a burst and the expiring timer only closes the burst.
///
/// Handles are cheap to clone; clones share the same timer.
///
/// # Examples
/// ```rust
/// use elemental_timing::{VirtualScheduler, debounce};
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let clock = VirtualScheduler::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let wait = Duration::from_millis(100);
/// let search = debounce(clock.clone(), move |query: &'static str| sink.borrow_mut().push(query), wait, false);
///
/// search.call("r");
/// search.call("ru");
/// search.call("rust");
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(*seen.borrow(), ["rust"]);
/// ```
pub struct Debounce<A, F> {
    state: Rc<DebounceState<A, F>>,
}

/// Builds a [`Debounce`] around `func`.
pub fn debounce<A, F>(
    scheduler: impl Scheduler + 'static,
    func: F,
    wait: Duration,
    immediate: bool,
) -> Debounce<A, F>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Debounce::builder(func).wait(wait).immediate(immediate).build(scheduler)
}

impl<A: 'static, F: FnMut(A) + 'static> Debounce<A, F> {
    #[must_use]
    pub fn builder(func: F) -> DebounceBuilder<A, F> {
        DebounceBuilder {
            func,
            wait: Duration::from_millis(DEFAULT_WAIT_MS),
            immediate: false,
            args: PhantomData,
        }
    }

    /// Registers a call with `args`.
    pub fn call(&self, args: A) {
        let state = &self.state;
        let leading = if state.immediate {
            state.pending.get().is_none().then_some(args)
        } else {
            *state.latest.borrow_mut() = Some(args);
            None
        };

        if let Some(previous) = state.pending.take() {
            state.scheduler.cancel_timer(previous);
        }
        let timer = Rc::clone(state);
        let handle = state.scheduler.set_timer(Box::new(move || timer.fire()), state.wait);
        state.pending.set(Some(handle));

        if let Some(args) = leading {
            (state.func.borrow_mut())(args);
        }
    }

    /// Whether a timer is running, i.e. a burst is in progress.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.pending.get().is_some()
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        self.state.wait
    }

    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.state.immediate
    }
}

impl<A, F> Clone for Debounce<A, F> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<A, F> fmt::Debug for Debounce<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("wait", &self.state.wait)
            .field("immediate", &self.state.immediate)
            .field("pending", &self.state.pending.get())
            .finish_non_exhaustive()
    }
}

/// Configures a [`Debounce`]; `wait` defaults to 100 ms and `immediate` to `false`.
pub struct DebounceBuilder<A, F> {
    func: F,
    wait: Duration,
    immediate: bool,
    args: PhantomData<fn(A)>,
}

impl<A, F> fmt::Debug for DebounceBuilder<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebounceBuilder")
            .field("wait", &self.wait)
            .field("immediate", &self.immediate)
            .finish_non_exhaustive()
    }
}

impl<A: 'static, F: FnMut(A) + 'static> DebounceBuilder<A, F> {
    /// Takes `wait` from the configured `default_wait_ms`.
    #[must_use = "The builder must be finished with `build()`"]
    pub const fn with_config(mut self, config: &TimingConfig) -> Self {
        self.wait = config.default_wait();
        self
    }

    #[must_use = "The builder must be finished with `build()`"]
    pub const fn wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    #[must_use = "The builder must be finished with `build()`"]
    pub const fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub fn build(self, scheduler: impl Scheduler + 'static) -> Debounce<A, F> {
        Debounce {
            state: Rc::new(DebounceState {
                scheduler: share(scheduler),
                func: RefCell::new(self.func),
                wait: self.wait,
                immediate: self.immediate,
                pending: Cell::new(None),
                latest: RefCell::new(None),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VirtualScheduler;

    const MS: Duration = Duration::from_millis(1);

    type Calls = Rc<RefCell<Vec<u32>>>;

    fn counting(clock: VirtualScheduler, immediate: bool) -> (Debounce<u32, impl FnMut(u32)>, Calls) {
        let calls = Calls::default();
        let sink = Rc::clone(&calls);
        let debounced = debounce(clock, move |n| sink.borrow_mut().push(n), MS * 100, immediate);
        (debounced, calls)
    }

    #[test]
    fn trailing_call_uses_the_latest_arguments() {
        let clock = VirtualScheduler::new();
        let (debounced, calls) = counting(clock.clone(), false);

        for n in 1..=5 {
            debounced.call(n);
            clock.advance(MS * 10);
        }
        assert!(calls.borrow().is_empty());
        assert!(debounced.is_pending());

        clock.advance(MS * 150);
        assert_eq!(*calls.borrow(), [5]);
        assert!(!debounced.is_pending());
    }

    #[test]
    fn every_call_restarts_the_timer() {
        let clock = VirtualScheduler::new();
        let (debounced, calls) = counting(clock.clone(), false);

        debounced.call(1);
        clock.advance(MS * 99);
        debounced.call(2);
        clock.advance(MS * 99);
        assert!(calls.borrow().is_empty());
        assert_eq!(clock.pending_timers(), 1);

        clock.advance(MS);
        assert_eq!(*calls.borrow(), [2]);
    }

    #[test]
    fn immediate_mode_fires_on_the_leading_edge_only() {
        let clock = VirtualScheduler::new();
        let (debounced, calls) = counting(clock.clone(), true);

        for n in 1..=5 {
            debounced.call(n);
            clock.advance(MS * 10);
        }
        assert_eq!(*calls.borrow(), [1]);

        clock.advance(MS * 150);
        assert_eq!(*calls.borrow(), [1]);

        debounced.call(6);
        assert_eq!(*calls.borrow(), [1, 6]);
    }

    #[test]
    fn configured_default_wait() {
        let clock = VirtualScheduler::new();
        let config = TimingConfig { default_wait_ms: 40, ..TimingConfig::default() };
        let calls = Rc::new(Cell::new(0));
        let sink = Rc::clone(&calls);
        let debounced = Debounce::builder(move |(): ()| sink.set(sink.get() + 1))
            .with_config(&config)
            .build(clock.clone());

        assert_eq!(debounced.wait(), MS * 40);
        debounced.call(());
        clock.advance(MS * 39);
        assert_eq!(calls.get(), 0);
        clock.advance(MS);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn builder_defaults_and_clones() {
        let clock = VirtualScheduler::new();
        let debounced = Debounce::builder(|(): ()| {}).build(clock.clone());
        let twin = debounced.clone();

        assert_eq!(debounced.wait(), MS * 100);
        assert!(!debounced.is_immediate());

        twin.call(());
        assert!(debounced.is_pending());
        clock.advance(MS * 100);
        assert!(!debounced.is_pending());
    }
}
