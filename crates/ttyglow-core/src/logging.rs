use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "ttyglow.log";
const LOG_RETENTION_DAYS: u64 = 7;

/// Return the log directory path.
///
/// Precedence: `TTYGLOW_LOG_DIR` env var > `configured` > platform default.
/// macOS: `~/Library/Logs/ttyglow/`
/// Linux: `$XDG_DATA_HOME/ttyglow/logs/` or `~/.local/share/ttyglow/logs/`
pub fn log_dir(configured: Option<&Path>) -> PathBuf {
    if let Ok(dir) = std::env::var("TTYGLOW_LOG_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(dir) = configured {
        return dir.to_path_buf();
    }

    default_log_dir()
}

/// Platform log directory, ignoring env and configuration.
fn default_log_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join("Library").join("Logs").join("ttyglow");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        if let Some(data) = dirs::data_dir() {
            return data.join("ttyglow").join("logs");
        }
    }

    PathBuf::from("logs")
}

/// Remove ttyglow log files older than `max_age_days` from the given directory.
///
/// Only deletes files whose name starts with `ttyglow.log` (the prefix used by
/// the daily rolling appender) so a shared log directory is left alone.
fn cleanup_old_logs(log_path: &Path, max_age_days: u64) {
    let cutoff = SystemTime::now() - Duration::from_secs(max_age_days * 86400);
    let Ok(entries) = std::fs::read_dir(log_path) else {
        return;
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        if !name.to_string_lossy().starts_with(LOG_FILE_PREFIX) {
            continue;
        }
        let modified = entry.metadata().and_then(|meta| meta.modified());
        if matches!(modified, Ok(modified) if modified < cutoff) {
            let _ = std::fs::remove_file(entry.path());
        }
    }
}

/// Build the level filter from `TTYGLOW_LOG`, then `RUST_LOG`, default `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("TTYGLOW_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Daily appender writing `ttyglow.log.<date>` files into `dir`.
///
/// The directory is created if needed.
fn open_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
}

/// Open an appender in the first usable directory of `candidates`.
fn first_usable(candidates: &[PathBuf]) -> Option<(PathBuf, RollingFileAppender)> {
    for dir in candidates {
        match open_appender(dir) {
            Ok(appender) => return Some((dir.clone(), appender)),
            Err(e) => eprintln!("warning: cannot log to {:?}: {}", dir, e),
        }
    }
    None
}

/// Initialize the logging subsystem.
///
/// Output goes to a daily-rotated file in [`log_dir`] with 7-day retention.
/// If that directory is unusable the platform default and then `./logs` are
/// tried; when none works logging is disabled rather than aborting startup.
/// The terminal belongs to the dashboard while it runs, so nothing is written
/// to stdout or stderr. Returns the directory actually used.
pub fn init(configured_dir: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = vec![log_dir(configured_dir), default_log_dir(), PathBuf::from("logs")];
    candidates.dedup();

    let opened = first_usable(&candidates);
    if let Some((dir, _)) = &opened {
        cleanup_old_logs(dir, LOG_RETENTION_DAYS);
    }
    let (log_path, file_appender) = opened.unzip();

    let file_layer = file_appender.map(|appender| {
        tracing_subscriber::fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true)
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
    {
        eprintln!("warning: failed to install log subscriber: {}", e);
    }

    log_path
}
