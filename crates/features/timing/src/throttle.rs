use crate::scheduler::{Scheduler, SharedScheduler, Task, TimerHandle, share};
use elemental_domain::config::TimingConfig;
use elemental_domain::constants::DEFAULT_WAIT_MS;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;

/// What closes a throttle window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    Timer(Duration),
    Frame,
}

struct ThrottleState<A, F> {
    scheduler: SharedScheduler,
    func: RefCell<F>,
    window: Window,
    immediate: bool,
    pending: Cell<Option<TimerHandle>>,
    opening_args: RefCell<Option<A>>,
}

impl<A: 'static, F: FnMut(A) + 'static> ThrottleState<A, F> {
    fn new(scheduler: SharedScheduler, func: F, window: Window, immediate: bool) -> Rc<Self> {
        Rc::new(Self {
            scheduler,
            func: RefCell::new(func),
            window,
            immediate,
            pending: Cell::new(None),
            opening_args: RefCell::new(None),
        })
    }

    fn call(self: &Rc<Self>, args: A) {
        let opening = self.pending.get().is_none();
        if opening {
            let state = Rc::clone(self);
            let close: Task = Box::new(move || state.close());
            let handle = match self.window {
                Window::Timer(wait) => self.scheduler.set_timer(close, wait),
                Window::Frame => self.scheduler.request_frame(close),
            };
            self.pending.set(Some(handle));
        }

        match (self.immediate, opening) {
            (false, true) => *self.opening_args.borrow_mut() = Some(args),
            (true, true) => (self.func.borrow_mut())(args),
            (_, false) => {},
        }
    }

    fn close(&self) {
        self.pending.set(None);
        if self.immediate {
            return;
        }
        let args = self.opening_args.borrow_mut().take();
        if let Some(args) = args {
            (self.func.borrow_mut())(args);
        }
    }
}

/// Runs a function at most once per `wait` window.
///
/// The first call of a window opens it; later calls do not extend it. In trailing mode the
/// function runs when the window closes, with the arguments of the call that opened it;
/// arguments of later calls in the window are dropped. In immediate mode it runs on the call
/// that opens the window and nothing happens at the end.
///
/// # Examples
/// ```rust
/// use elemental_timing::{VirtualScheduler, throttle};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let clock = VirtualScheduler::new();
/// let last = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&last);
/// let on_scroll = throttle(clock.clone(), move |y: u32| sink.set(y), Duration::from_millis(100), false);
///
/// on_scroll.call(10);
/// on_scroll.call(40);
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(last.get(), 10);
/// ```
pub struct Throttle<A, F> {
    state: Rc<ThrottleState<A, F>>,
}

/// Builds a [`Throttle`] around `func`.
pub fn throttle<A, F>(
    scheduler: impl Scheduler + 'static,
    func: F,
    wait: Duration,
    immediate: bool,
) -> Throttle<A, F>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    Throttle::builder(func).wait(wait).immediate(immediate).build(scheduler)
}

impl<A: 'static, F: FnMut(A) + 'static> Throttle<A, F> {
    #[must_use]
    pub fn builder(func: F) -> ThrottleBuilder<A, F> {
        ThrottleBuilder {
            func,
            wait: Duration::from_millis(DEFAULT_WAIT_MS),
            immediate: false,
            args: PhantomData,
        }
    }

    /// Registers a call with `args`.
    pub fn call(&self, args: A) {
        self.state.call(args);
    }

    /// Whether a window is open.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.pending.get().is_some()
    }

    #[must_use]
    pub fn wait(&self) -> Duration {
        match self.state.window {
            Window::Timer(wait) => wait,
            Window::Frame => Duration::ZERO,
        }
    }

    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.state.immediate
    }
}

/// Configures a [`Throttle`]; `wait` defaults to 100 ms and `immediate` to `false`.
pub struct ThrottleBuilder<A, F> {
    func: F,
    wait: Duration,
    immediate: bool,
    args: PhantomData<fn(A)>,
}

impl<A: 'static, F: FnMut(A) + 'static> ThrottleBuilder<A, F> {
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

    pub fn build(self, scheduler: impl Scheduler + 'static) -> Throttle<A, F> {
        let window = Window::Timer(self.wait);
        Throttle { state: ThrottleState::new(share(scheduler), self.func, window, self.immediate) }
    }
}

/// Runs a function at most once per animation frame.
///
/// Same as [`Throttle`], with the window closing at the next frame callback instead of
/// after a fixed delay.
///
/// # Examples
/// ```rust
/// use elemental_timing::{VirtualScheduler, raf_throttle};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let clock = VirtualScheduler::new();
/// let frames = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&frames);
/// let redraw = raf_throttle(clock.clone(), move |(): ()| sink.set(sink.get() + 1), false);
///
/// redraw.call(());
/// redraw.call(());
/// clock.tick_frame();
/// assert_eq!(frames.get(), 1);
/// ```
pub struct FrameThrottle<A, F> {
    state: Rc<ThrottleState<A, F>>,
}

/// Builds a [`FrameThrottle`] around `func`.
pub fn raf_throttle<A, F>(
    scheduler: impl Scheduler + 'static,
    func: F,
    immediate: bool,
) -> FrameThrottle<A, F>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    FrameThrottle::builder(func).immediate(immediate).build(scheduler)
}

impl<A: 'static, F: FnMut(A) + 'static> FrameThrottle<A, F> {
    #[must_use]
    pub const fn builder(func: F) -> FrameThrottleBuilder<A, F> {
        FrameThrottleBuilder { func, immediate: false, args: PhantomData }
    }

    /// Registers a call with `args`.
    pub fn call(&self, args: A) {
        self.state.call(args);
    }

    /// Whether a frame callback is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.pending.get().is_some()
    }

    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.state.immediate
    }
}

/// Configures a [`FrameThrottle`]; `immediate` defaults to `false`.
pub struct FrameThrottleBuilder<A, F> {
    func: F,
    immediate: bool,
    args: PhantomData<fn(A)>,
}

impl<A: 'static, F: FnMut(A) + 'static> FrameThrottleBuilder<A, F> {
    #[must_use = "The builder must be finished with `build()`"]
    pub const fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub fn build(self, scheduler: impl Scheduler + 'static) -> FrameThrottle<A, F> {
        FrameThrottle {
            state: ThrottleState::new(share(scheduler), self.func, Window::Frame, self.immediate),
        }
    }
}

macro_rules! handle_impls {
    ($($handle:ident),*) => {
        $(
            impl<A, F> Clone for $handle<A, F> {
                fn clone(&self) -> Self {
                    Self { state: Rc::clone(&self.state) }
                }
            }

            impl<A, F> fmt::Debug for $handle<A, F> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($handle))
                        .field("window", &self.state.window)
                        .field("immediate", &self.state.immediate)
                        .field("pending", &self.state.pending.get())
                        .finish_non_exhaustive()
                }
            }
        )*
    };
}

handle_impls!(Throttle, FrameThrottle);

impl<A, F> fmt::Debug for ThrottleBuilder<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottleBuilder")
            .field("wait", &self.wait)
            .field("immediate", &self.immediate)
            .finish_non_exhaustive()
    }
}

impl<A, F> fmt::Debug for FrameThrottleBuilder<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameThrottleBuilder")
            .field("immediate", &self.immediate)
            .finish_non_exhaustive()
    }
}
