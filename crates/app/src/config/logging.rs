//! Logging Config
//!
//! Logs always go to stderr; stdout belongs to the shell.

use clap::Args;

/// How log lines on stderr are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One short line per event, for a terminal next to the shell.
    #[default]
    Compact,

    /// One JSON object per event, for piping stderr into a collector.
    Json,
}

/// Diagnostic logging for a shell session.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Filter directive for stderr logs, e.g. `info` or `mercatus_app=debug`
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Layout of stderr log lines
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,
}
