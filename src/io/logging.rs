//! Logger initialisation for the command-line tool

use crate::io::error::Result;
use flexi_logger::{Logger, LoggerHandle};

/// Log specification for the given verbosity flags
///
/// Quiet wins over verbose; each `-v` raises the level by one step.
pub const fn log_specification(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Start logging to stderr, honouring `RUST_LOG` when it is set
///
/// The returned handle must be kept alive for the lifetime of the program.
///
/// # Errors
///
/// Returns an error if the specification is invalid or a logger is already
/// installed
pub fn setup_logging(spec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(spec)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}
