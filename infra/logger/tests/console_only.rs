use ashy_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_writer() {
    let logger = Logger::builder()
        .name("ashy-console-only")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!(strokes = 12, "console logging works");
    assert!(!logger.writes_to_file());
}
