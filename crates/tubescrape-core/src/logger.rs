//! Console logger
//!
//! Installs a `log::Log` implementation that prints `"{marker}/ {tag}: {msg}"`
//! lines to stdout. The tag is the log target, so call sites write
//! `log::debug!(target: "UserAgent::get_random", ...)`.
//!
//! Levels map as: verbose = `trace`, debug = `debug`, info = `info`,
//! error = `error`.

use std::fmt::Display;
use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Verbosity switches, set once from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub debug: bool,
    pub verbose: bool,
}

impl LogConfig {
    pub fn new(debug: bool, verbose: bool) -> Self {
        Self { debug, verbose }
    }

    /// Verbose output implies debug output
    pub fn debug_enabled(&self) -> bool {
        self.debug || self.verbose
    }

    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Trace
        } else if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Level marker: spelled out in verbose mode, a single letter otherwise
fn marker(level: Level, verbose: bool) -> &'static str {
    match (level, verbose) {
        (Level::Trace, true) => "verbose",
        (Level::Trace, false) => "V",
        (Level::Debug, true) => "debug",
        (Level::Debug, false) => "D",
        (Level::Info, true) => "info",
        (Level::Info, false) => "I",
        (Level::Warn, true) => "warn",
        (Level::Warn, false) => "W",
        (Level::Error, true) => "error",
        (Level::Error, false) => "E",
    }
}

/// Formats one log line
///
/// # Example
/// ```
/// use log::Level;
/// use tubescrape_core::logger::format_line;
/// assert_eq!(format_line(Level::Info, false, "main", "hello"), "I/ main: hello");
/// assert_eq!(format_line(Level::Info, true, "main", "hello"), "info/ main: hello");
/// ```
pub fn format_line(level: Level, verbose: bool, tag: &str, message: impl Display) -> String {
    format!("{}/ {}: {}", marker(level, verbose), tag, message)
}

struct Logger {
    config: LogConfig,
}

impl Logger {
    // Dependencies (hyper, html5ever, ...) only get through at info and above.
    fn is_own_record(record: &Record) -> bool {
        record
            .module_path()
            .map_or(true, |path| path.starts_with("tubescrape"))
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level_filter()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if record.level() > Level::Info && !Self::is_own_record(record) {
            return;
        }
        println!(
            "{}",
            format_line(record.level(), self.config.verbose, record.target(), record.args())
        );
    }

    fn flush(&self) {}
}

/// Initializes the logger
///
/// Only the first call takes effect; later calls keep the installed config.
pub fn init_logger(config: LogConfig) {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    let logger = LOGGER.get_or_init(|| Logger { config });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.config.level_filter());
    }
}

/// Logs an error under `tag` and terminates the process with `code`
pub fn fatal(tag: &str, message: impl Display, code: i32) -> ! {
    log::error!(target: tag, "{}", message);
    std::process::exit(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::MetadataBuilder;

    #[test]
    fn test_format_line_letter_markers() {
        assert_eq!(format_line(Level::Trace, false, "t", "m"), "V/ t: m");
        assert_eq!(format_line(Level::Debug, false, "t", "m"), "D/ t: m");
        assert_eq!(format_line(Level::Info, false, "t", "m"), "I/ t: m");
        assert_eq!(format_line(Level::Error, false, "t", "m"), "E/ t: m");
    }

    #[test]
    fn test_format_line_spelled_markers() {
        assert_eq!(
            format_line(Level::Trace, true, "Record::new", "created"),
            "verbose/ Record::new: created"
        );
        assert_eq!(format_line(Level::Debug, true, "t", "m"), "debug/ t: m");
        assert_eq!(format_line(Level::Info, true, "t", "m"), "info/ t: m");
        assert_eq!(format_line(Level::Error, true, "t", "m"), "error/ t: m");
    }

    #[test]
    fn test_level_filter_from_flags() {
        assert_eq!(LogConfig::new(false, false).level_filter(), LevelFilter::Info);
        assert_eq!(LogConfig::new(true, false).level_filter(), LevelFilter::Debug);
        assert_eq!(LogConfig::new(false, true).level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_verbose_implies_debug() {
        assert!(LogConfig::new(false, true).debug_enabled());
        assert!(!LogConfig::default().debug_enabled());
    }

    fn enabled(config: LogConfig, level: Level) -> bool {
        let logger = Logger { config };
        logger.enabled(&MetadataBuilder::new().level(level).target("t").build())
    }

    #[test]
    fn test_info_and_error_always_enabled() {
        let quiet = LogConfig::default();
        assert!(enabled(quiet, Level::Info));
        assert!(enabled(quiet, Level::Error));
        assert!(!enabled(quiet, Level::Debug));
        assert!(!enabled(quiet, Level::Trace));
    }

    #[test]
    fn test_debug_without_verbose_skips_trace() {
        let config = LogConfig::new(true, false);
        assert!(enabled(config, Level::Debug));
        assert!(!enabled(config, Level::Trace));
    }
}
