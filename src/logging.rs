use crate::config::APP_NAME;
use directories::ProjectDirs;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

/// Filter directives are read from this variable, e.g. `SKIM_LOG=player=debug`.
pub const LOG_ENV: &str = "SKIM_LOG";
const LOG_FILE: &str = "skim.log";
const DEFAULT_FILTER: &str = "warn";

/// Installs a file-backed subscriber; the terminal belongs to the UI so
/// nothing is written to stdout or stderr. Keep the guard alive until exit
/// or buffered lines are lost. Returns `None` when no log directory is
/// available.
pub fn init() -> Option<WorkerGuard> {
    let dirs = ProjectDirs::from("", "", APP_NAME)?;
    let log_dir = dirs.data_local_dir();
    fs::create_dir_all(log_dir).ok()?;

    let (writer, guard) = file_writer(log_dir);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}

/// Lines reach `skim.log` in `dir` from a worker thread; dropping the guard
/// flushes whatever is still queued.
fn file_writer(dir: &Path) -> (NonBlocking, WorkerGuard) {
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    tracing_appender::non_blocking(appender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_the_guard_flushes_queued_lines() {
        let dir = tempfile::tempdir().unwrap();
        let (writer, guard) = file_writer(dir.path());
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
            .with_writer(writer)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(target: "source", "startup load failed");
            tracing::info!(target: "runtime", "filtered out");
        });
        drop(guard);

        let logged = fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
        assert!(logged.contains("startup load failed"), "{logged}");
        assert!(!logged.contains("filtered out"));
    }
}
