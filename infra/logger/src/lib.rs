//! # Logger
//!
//! Process-wide `tracing` setup for applications embedding the elemental crates.
//!
//! The library crates only emit events (`debug!` for definitions and property tables,
//! `trace!` for scheduler activity, `warn!` for rejected registrations); this crate
//! decides where they go. It installs a `tracing-subscriber` registry with an
//! [`EnvFilter`], a compact console layer and an optional non-blocking rolling file layer.
//!
//! * [`LoggerBuilder::env_filter`] sets module directives such as
//!   `"elemental_registry=debug"`. Without it `RUST_LOG` is honored.
//! * [`Logger::from_config`] builds the same setup from a [`LoggingConfig`].
//! * JSON file output needs the `json` feature.
//!
//! ## Example
//!
//! ```rust
//! # use elemental_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use elemental_domain::config::LoggingConfig;
use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug)]
struct LoggerOptions {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Configures and installs the global subscriber.
///
/// A name is required before anything else; file specific settings only become available
/// once a log directory is set with [`path`](LoggerBuilder::path).
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    options: LoggerOptions,
    name: N,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the application; also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), options: self.options, file_state: PhantomData }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Number of rotated files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.options.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.options.rotation = rotation;
        self
    }

    /// JSON formatted file output. Requires the `json` feature at `init`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.options.json = enabled;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Minimum level emitted when no directive says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.options.level = level;
        self
    }

    /// Explicit filter directives (e.g. `elemental_registry=debug,elemental_timing=trace`).
    ///
    /// Replaces `RUST_LOG`. Invalid directives make [`init`](Self::init) fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.options.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.options.console = enabled;
        self
    }

    /// Directory for rolling log files.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut options = self.options;
        options.path = Some(path.into());
        LoggerBuilder { options, name: self.name, file_state: PhantomData }
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive: it owns the file writer's [`WorkerGuard`], and
    /// buffered lines are flushed when it drops.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`,
    ///   malformed filter directives, JSON output without the `json` feature, or when
    ///   neither console nor file output is enabled.
    /// * [`LoggerError::Appender`] when the rolling file appender cannot be created.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        validate(&self.options, &name)?;

        let env_filter = build_env_filter(&self.options)?;
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if self.options.console {
            layers.push(layer().compact().with_ansi(true).with_target(true).boxed());
        }

        let guard = if let Some(path) = &self.options.path {
            let (file_layer, guard) = file_layer(&self.options, path.as_path(), &name)?;
            layers.push(file_layer);
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(layers).with(env_filter).try_init()?;
        tracing::debug!(logger = %name, level = %self.options.level, "Logger initialized");

        Ok(Logger { guard })
    }
}

/// Handle to the installed logging system.
///
/// Holds the background writer guard; drop it only when the application shuts down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use elemental_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("my-app")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { options: LoggerOptions::default(), name: NoName, file_state: PhantomData }
    }

    /// Installs the subscriber described by the `logging` configuration section.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an unknown level name, plus everything
    /// [`LoggerBuilder::init`] reports.
    pub fn from_config(name: impl Into<String>, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let level = parse_level(&config.level)?;
        let builder = Self::builder().name(name).level(level);
        let builder = match &config.filter {
            Some(filter) => builder.env_filter(filter.as_str()),
            None => builder,
        };

        match &config.directory {
            Some(directory) => builder.path(directory).json(config.json).init(),
            None if config.json => Err(LoggerError::InvalidConfiguration {
                message: "JSON output needs a log directory".into(),
                context: None,
            }),
            None => builder.init(),
        }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses `trace`, `debug`, `info`, `warn`, `error` or `off`, case-insensitively.
///
/// # Errors
/// [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}': {e}").into(),
        context: None,
    })
}

fn validate(options: &LoggerOptions, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if options.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    if options.json && !cfg!(feature = "json") {
        return Err(LoggerError::InvalidConfiguration {
            message: "JSON output requires the `json` feature".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(options: &LoggerOptions) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(options.level.into());
    options.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

fn file_layer(
    options: &LoggerOptions,
    path: &Path,
    name: &str,
) -> Result<(BoxedLayer, WorkerGuard), LoggerError> {
    fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create path: {}", path.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(options.rotation.clone())
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(options.max_files)
        .build(path)?;

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let plain = layer().with_writer(writer).with_ansi(false);

    #[cfg(feature = "json")]
    let boxed = if options.json { plain.json().boxed() } else { plain.boxed() };
    #[cfg(not(feature = "json"))]
    let boxed = plain.boxed();

    Ok((boxed, guard))
}
