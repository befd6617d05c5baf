use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "benefit_report=info";
const LOG_FILE_PREFIX: &str = "benefit-report.log";

/// Initializes console logging plus a daily-rotated JSON log under `log_dir`.
///
/// When the log directory cannot be created or opened the process keeps
/// running with console logging only and `None` is returned. Otherwise the
/// returned guard flushes the file writer on drop; hold it for the life of
/// the process.
pub fn init_logging(log_dir: &Path) -> Option<WorkerGuard> {
    let (file_layer, guard, file_error) = match file_appender(log_dir) {
        Ok(appender) => {
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(non_blocking_writer);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(console_layer)
        .init();

    if let Some(e) = file_error {
        warn!("File logging disabled: {:#}", e);
    }
    guard
}

fn file_appender(log_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("cannot create log directory {}", log_dir.display()))?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
        .with_context(|| format!("cannot open log file in {}", log_dir.display()))?;
    Ok(appender)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_file_appender_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");

        assert!(file_appender(&log_dir).is_ok());
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_file_appender_under_a_regular_file_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        let log_dir = file.path().join("logs");

        let err = file_appender(&log_dir).unwrap_err();
        assert!(err.to_string().contains("cannot create log directory"), "{err}");
    }
}
