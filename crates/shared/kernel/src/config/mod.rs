use config::{Config, Environment, File};
use elemental_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX, ENV_SEPARATOR};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[elemental_derive::elemental_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a required file overlaid with environment overrides.
///
/// 1. **Base File**: `path` (any format the `config` crate detects from the extension, or
///    the bare stem). Defaults to `elemental` in the current working directory.
/// 2. **Environment Overrides**: variables prefixed with `ELEMENTAL__`; nested keys use
///    double underscores (`ELEMENTAL__TIMING__FRAME_INTERVAL_MS` maps to
///    `timing.frame_interval_ms`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or malformed, or when the
/// merged document does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use elemental_kernel::config::load_config;
/// use elemental_kernel::domain::config::ElementalConfig;
///
/// let cfg: ElementalConfig = load_config(Some("config/local")).unwrap_or_default();
/// assert!(cfg.timing.frame_interval_ms > 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
