use std::{
    fs, panic,
    path::{Path, PathBuf},
    thread,
    time::{Duration, SystemTime},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::env::env_or;

const DEFAULT_LOG_DIR: &str = "/var/log/streaming-gateway";

/// Keeps the file writer alive; dropping it flushes buffered lines.
pub struct TracingGuards {
    _file_guard: Option<WorkerGuard>,
}

pub fn init_tracing(service_name: &str) -> TracingGuards {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    let log_root = PathBuf::from(log_dir).join(service_name);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    // Fall back to stdout only when the log directory is not writable.
    let file_sink = fs::create_dir_all(&log_root)
        .ok()
        .and_then(|_| {
            panic::catch_unwind(|| {
                tracing_appender::rolling::daily(&log_root, format!("{service_name}.log"))
            })
            .ok()
        })
        .map(tracing_appender::non_blocking);

    let file_guard = match file_sink {
        Some((writer, guard)) => {
            let subscriber = Registry::default()
                .with(filter)
                .with(stdout_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer));
            let _ = tracing::subscriber::set_global_default(subscriber);
            Some(guard)
        }
        None => {
            let subscriber = Registry::default().with(filter).with(stdout_layer);
            let _ = tracing::subscriber::set_global_default(subscriber);
            None
        }
    };

    if file_guard.is_some() {
        let retention_days = env_or("LOG_RETENTION_DAYS", 14u64);
        let cleanup_interval = env_or("LOG_CLEANUP_INTERVAL_MINUTES", 360u64);
        spawn_log_cleanup(log_root, retention_days, cleanup_interval);
    } else {
        tracing::warn!(path = %log_root.display(), "file logging disabled");
    }

    TracingGuards {
        _file_guard: file_guard,
    }
}

fn spawn_log_cleanup(log_root: PathBuf, retention_days: u64, cleanup_interval_minutes: u64) {
    if retention_days == 0 || cleanup_interval_minutes == 0 {
        return;
    }

    let retention = Duration::from_secs(retention_days * 24 * 60 * 60);
    let interval = Duration::from_secs(cleanup_interval_minutes * 60);

    thread::spawn(move || loop {
        if let Some(cutoff) = SystemTime::now().checked_sub(retention) {
            remove_logs_older_than(&log_root, cutoff);
        }
        thread::sleep(interval);
    });
}

/// Returns the number of files removed under `root`.
fn remove_logs_older_than(root: &Path, cutoff: SystemTime) -> usize {
    let Ok(entries) = fs::read_dir(root) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            removed += remove_logs_older_than(&path, cutoff);
            continue;
        }
        let modified = fs::metadata(&path).and_then(|metadata| metadata.modified());
        match modified {
            Ok(modified) if modified < cutoff => {
                if fs::remove_file(&path).is_ok() {
                    removed += 1;
                }
            }
            _ => {}
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gateway-common-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("nested")).unwrap();
        dir
    }

    #[test]
    fn sweep_removes_files_older_than_cutoff() {
        let dir = scratch_dir("sweep-old");
        fs::write(dir.join("a.log"), b"a").unwrap();
        fs::write(dir.join("nested").join("b.log"), b"b").unwrap();

        let cutoff = SystemTime::now() + Duration::from_secs(60);
        assert_eq!(remove_logs_older_than(&dir, cutoff), 2);
        assert!(!dir.join("a.log").exists());
        assert!(!dir.join("nested").join("b.log").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn sweep_keeps_recent_files() {
        let dir = scratch_dir("sweep-recent");
        fs::write(dir.join("today.log"), b"today").unwrap();

        let cutoff = SystemTime::now() - Duration::from_secs(24 * 60 * 60);
        assert_eq!(remove_logs_older_than(&dir, cutoff), 0);
        assert!(dir.join("today.log").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn sweep_of_missing_dir_is_noop() {
        let dir = std::env::temp_dir().join("gateway-common-does-not-exist");
        assert_eq!(remove_logs_older_than(&dir, SystemTime::now()), 0);
    }
}
