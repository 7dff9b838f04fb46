use elemental_domain::config::LoggingConfig;
use elemental_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn only_one_global_subscriber_can_be_installed() {
    let _logger = Logger::builder()
        .name("first")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::from_config("second", &LoggingConfig::default())
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}

#[test]
fn unknown_level_is_rejected() {
    let config = LoggingConfig { level: "verbose".to_owned(), ..LoggingConfig::default() };

    let err = Logger::from_config("levels", &config).expect_err("level should be rejected");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("verbose"));
}
