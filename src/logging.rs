//! Structured logging setup.
//!
//! [`init`] installs the global `tracing` subscriber once at startup from
//! [`LogSettings`]: an env-filter, a console layer (`text` or `json`), and an
//! optional daily-rotating file layer. Request context (method, URI, status,
//! latency) is attached by the HTTP tracing middleware.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Logging configuration, normally derived from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Filter directive, e.g. `info` or `posts_service=debug,tower_http=info`.
    pub level: String,
    /// `text` or `json`.
    pub format: String,
    pub dir: String,
    /// File name prefix; `None` keeps logging on the console only.
    pub file: Option<String>,
    /// Rotated files kept on disk.
    pub backup_count: usize,
}

/// Keeps the background file writer alive. Dropping it flushes pending lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Installs the global subscriber.
///
/// A log file that cannot be opened is reported on the console and logging
/// continues there.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(settings: &LogSettings) -> Result<LogGuard> {
    let (file_layer, file_guard, file_error) = match &settings.file {
        Some(file) => match file_appender(&settings.dir, file, settings.backup_count) {
            Ok(appender) => {
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = format_layer(&settings.format, false, writer);
                (Some(layer), Some(guard), None)
            }
            Err(e) => (None, None, Some(e)),
        },
        None => (None, None, None),
    };

    let mut layers = vec![format_layer(&settings.format, true, std::io::stdout)];
    layers.extend(file_layer);

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter(&settings.level))
        .try_init()?;

    if let Some(e) = file_error {
        tracing::warn!(error = %e, dir = %settings.dir, "Log file unavailable, logging to console only");
    }

    Ok(LogGuard { _file: file_guard })
}

/// Builds the filter from a directive, falling back to `info` when it does not parse.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn format_layer<W>(format: &str, ansi: bool, writer: W) -> BoxedLayer
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    if format == "json" {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_ansi(ansi)
            .with_target(true)
            .with_writer(writer)
            .boxed()
    }
}

/// Opens a daily-rotating appender, creating the directory if needed.
pub fn file_appender(
    dir: &str,
    file: &str,
    backup_count: usize,
) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(Path::new(dir))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file)
        .max_log_files(backup_count.max(1))
        .build(dir)?;

    Ok(appender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_appender_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");

        let mut appender = file_appender(dir.to_str().unwrap(), "app.log", 2).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        assert!(dir.exists());
        let written: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("app.log"))
            .collect();
        assert_eq!(written.len(), 1);
    }

    #[test]
    fn test_file_appender_rejects_unwritable_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let result = file_appender(blocker.join("logs").to_str().unwrap(), "app.log", 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_layer_writes_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap().to_string();
        let appender = file_appender(&dir, "fmt.log", 1).unwrap();
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let subscriber = tracing_subscriber::registry()
            .with(format_layer("text", false, writer))
            .with(env_filter("warn"));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Should not appear");
            tracing::warn!("Should appear");
        });
        drop(guard);

        let content: String = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| std::fs::read_to_string(e.path()).unwrap_or_default())
            .collect();
        assert!(content.contains("Should appear"));
        assert!(!content.contains("Should not appear"));
        assert!(content.contains("WARN"));
    }
}
