/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "ELEMENTAL";
/// Separator for nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Default configuration file stem.
pub const DEFAULT_CONFIG_FILE: &str = "elemental";

/// Frame interval of a 60 Hz display, in milliseconds.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
/// Default debounce/throttle window, in milliseconds.
pub const DEFAULT_WAIT_MS: u64 = 100;

/// Names the HTML standard reserves even though they look like custom element names.
pub const RESERVED_ELEMENT_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];
