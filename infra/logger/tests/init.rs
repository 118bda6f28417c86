use numclass_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;

#[test]
#[serial]
fn empty_name_is_rejected() {
    let err = Logger::builder().name("   ").init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
#[serial]
fn zero_max_files_is_rejected() {
    let err = Logger::builder().name("numclass").file("/tmp").max_files(0).init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
#[serial]
fn bad_env_filter_is_rejected() {
    let err = Logger::builder().name("numclass").env_filter("not==valid==").init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

// The single test in this file that installs the global subscriber.
#[test]
#[serial]
fn file_logging_creates_log_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let logs = dir.path().join("logs");

    let logger = Logger::builder()
        .name("numclass-test")
        .console(false)
        .level(LevelFilter::DEBUG)
        .file(&logs)
        .json()
        .init()
        .expect("logger init");

    tracing::info!("hello from the logger test");
    assert!(logger.guard().is_some());
    assert!(logs.is_dir());
}
