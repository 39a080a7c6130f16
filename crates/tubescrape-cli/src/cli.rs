//! Command-line argument scanning
//!
//! Arguments are scanned left to right. Unrecognized arguments are ignored
//! and the last `--query=` wins.

use tubescrape_core::LogConfig;

/// Script parameters taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// `-d`, `--debug`
    pub debug: bool,
    /// `-vv`, `--verbose`
    pub verbose: bool,
    /// `-q=<text>`, `--query=<text>`; selects query mode when set
    pub query: Option<String>,
}

impl Args {
    /// Scans the process arguments
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Scans an explicit argument list (program name excluded)
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Args::default();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "-d" | "--debug" => parsed.debug = true,
                "-vv" | "--verbose" => parsed.verbose = true,
                _ => {
                    if let Some(value) = arg
                        .strip_prefix("-q=")
                        .or_else(|| arg.strip_prefix("--query="))
                    {
                        parsed.query = parse_query(value);
                    }
                }
            }
        }

        parsed
    }

    /// Logger switches; verbose implies debug
    pub fn log_config(&self) -> LogConfig {
        LogConfig::new(self.debug || self.verbose, self.verbose)
    }
}

// Shells sometimes pass the quotes through; an empty value means homepage mode.
fn parse_query(value: &str) -> Option<String> {
    let query = value.replace('"', "");
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_homepage_mode() {
        let args = Args::parse_from(Vec::<String>::new());
        assert_eq!(args, Args::default());
    }

    #[test]
    fn test_debug_flags() {
        assert!(Args::parse_from(["-d"]).debug);
        assert!(Args::parse_from(["--debug"]).debug);
    }

    #[test]
    fn test_verbose_flags() {
        assert!(Args::parse_from(["-vv"]).verbose);
        assert!(Args::parse_from(["--verbose"]).verbose);
        assert!(!Args::parse_from(["-v"]).verbose);
    }

    #[test]
    fn test_verbose_implies_debug_logging() {
        let config = Args::parse_from(["--verbose"]).log_config();
        assert!(config.debug);
        assert!(config.verbose);
    }

    #[test]
    fn test_query_short_and_long() {
        assert_eq!(Args::parse_from(["-q=cats"]).query.as_deref(), Some("cats"));
        assert_eq!(
            Args::parse_from(["--query=cat videos"]).query.as_deref(),
            Some("cat videos")
        );
    }

    #[test]
    fn test_last_query_wins() {
        let args = Args::parse_from(["-q=dogs", "-d", "--query=cats"]);
        assert_eq!(args.query.as_deref(), Some("cats"));
        assert!(args.debug);
    }

    #[test]
    fn test_query_quotes_stripped() {
        let args = Args::parse_from(["--query=\"lofi beats\""]);
        assert_eq!(args.query.as_deref(), Some("lofi beats"));
    }

    #[test]
    fn test_query_keeps_later_equals_signs() {
        let args = Args::parse_from(["-q=a=b"]);
        assert_eq!(args.query.as_deref(), Some("a=b"));
    }

    #[test]
    fn test_empty_query_is_homepage_mode() {
        assert_eq!(Args::parse_from(["-q="]).query, None);
    }

    #[test]
    fn test_unrecognized_arguments_ignored() {
        let args = Args::parse_from(["--help", "foo", "-x", "-vv"]);
        assert!(args.verbose);
        assert!(!args.debug);
        assert_eq!(args.query, None);
    }
}
