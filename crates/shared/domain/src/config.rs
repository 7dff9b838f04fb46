use crate::constants::{DEFAULT_FRAME_INTERVAL_MS, DEFAULT_WAIT_MS};
use serde::Deserialize;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level configuration shared across crates.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ElementalConfigInner {
    pub timing: TimingConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ElementalConfig {
    #[serde(flatten, default)]
    inner: Arc<ElementalConfigInner>,
}

impl Deref for ElementalConfig {
    type Target = ElementalConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ElementalConfigInner> for ElementalConfig {
    fn from(inner: ElementalConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

/// Host scheduling knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Interval between animation frames.
    pub frame_interval_ms: u64,
    /// Rate limiter window applied by the `with_config` builder step.
    pub default_wait_ms: u64,
}

impl TimingConfig {
    #[must_use]
    pub const fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    #[must_use]
    pub const fn default_wait(&self) -> Duration {
        Duration::from_millis(self.default_wait_ms)
    }
}

/// Logging setup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    /// Optional `EnvFilter` directives, e.g. `elemental_registry=debug`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    /// JSON formatted file output.
    pub json: bool,
}

// --- Default ---

impl Default for TimingConfig {
    fn default() -> Self {
        Self { frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS, default_wait_ms: DEFAULT_WAIT_MS }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}
