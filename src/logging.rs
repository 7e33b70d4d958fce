//! Logging setup for the verbsh binary.
//!
//! The library only emits `tracing` events: duplicate catalog keys at `warn`,
//! routing decisions at `debug`, handler failures at `warn`. The binary picks
//! the sink. An interactive console owns the terminal, so its log goes to a
//! file; `--command` and `--script` runs write rendered output to stdout and
//! send the log to stderr. `RUST_LOG` overrides the default `info` level.

use std::fs::{self, File};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set and valid, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Routes the log of an interactive session to [`get_log_path`].
///
/// Failures to create the file are reported on stderr and leave the console
/// running without a subscriber.
pub fn init_file_logging() {
    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    // One session per file; the previous session's log is replaced.
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Routes the log of a `--command` or `--script` run to stderr, keeping
/// stdout for rendered command output.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `verbsh/verbsh.log` under the state directory, falling back to the
/// config directory and then the temp directory on platforms without one.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("verbsh").join("verbsh.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("verbsh").join("verbsh.log");
    }

    std::env::temp_dir().join("verbsh.log")
}
