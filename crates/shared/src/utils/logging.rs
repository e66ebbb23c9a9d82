use log::LevelFilter;

/// Maps a CLI log level onto a filter, defaulting to `Info` when the level is
/// unrecognised.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn init(level: &str) -> LevelFilter {
    let log_level = parse_level(level);
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();
    log_level
}
