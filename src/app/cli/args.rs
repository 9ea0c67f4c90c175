//! Command-line arguments
//!
//! The pipeline core has no command surface of its own; these flags cover
//! the ambient concerns (logging, color) and the two period overrides the
//! compiled-in producer configuration allows.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "blinkpipe")]
#[command(about = "Periodic blink producers feeding a blocking FIFO reporter")]
#[command(version)]
pub struct Args {
    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored log output even without a TTY
    #[arg(long = "color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Period of the fast producer (source 0) in milliseconds
    #[arg(long = "fast-period-ms", value_name = "MS", default_value_t = 100)]
    pub fast_period_ms: u64,

    /// Period of the slow producer (source 1) in milliseconds
    #[arg(long = "slow-period-ms", value_name = "MS", default_value_t = 1000)]
    pub slow_period_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_configuration() {
        let args = Args::parse_from(["blinkpipe"]);

        assert_eq!(args.fast_period_ms, 100);
        assert_eq!(args.slow_period_ms, 1000);
        assert!(args.log_level.is_none());
        assert!(!args.color);
        assert!(!args.no_color);
    }

    #[test]
    fn test_period_overrides() {
        let args = Args::parse_from([
            "blinkpipe",
            "--fast-period-ms",
            "10",
            "--slow-period-ms",
            "50",
        ]);

        assert_eq!(args.fast_period_ms, 10);
        assert_eq!(args.slow_period_ms, 50);
    }

    #[test]
    fn test_log_level_is_validated() {
        assert!(Args::try_parse_from(["blinkpipe", "--log-level", "verbose"]).is_err());
        assert!(Args::try_parse_from(["blinkpipe", "--log-level", "debug"]).is_ok());
    }
}
