use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file for TUI mode.
pub const LOG_FILE_ENV: &str = "YAC_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default for TUI mode.
/// Set `YAC_LOG` env var to a file path to enable logging.
///
/// Log files are created with unique names to prevent conflicts when
/// multiple instances run simultaneously: `{path}.{timestamp}.{pid}`
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok() else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(default_filter())
        .with(file_layer)
        .try_init();
}

/// Initialize tracing on stderr for headless commands.
///
/// Only active when `RUST_LOG` is set, so JSON output on stdout stays clean.
pub fn init_stderr_tracing() {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        return;
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_pid() {
        let path = unique_log_path("/tmp/yac.log");
        assert!(path.starts_with("/tmp/yac.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
