use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::{fs::File, io::Write, path::PathBuf, sync::Mutex};

use crate::error::{InfoError, InfoResult};

/// Environment variable overriding the diagnostics log file path.
pub const LOG_PATH_ENV_VAR: &str = "TS3_MOREINFO_LOG";
/// Environment variable overriding the diagnostics log level.
pub const LOG_LEVEL_ENV_VAR: &str = "TS3_MOREINFO_LOG_LEVEL";

/// Diagnostics logger for the plugin.
///
/// The TeamSpeak client gives plugins no stdout/stderr of their own, so all
/// diagnostics go to a file.
pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    pub fn new(file: File, level: LevelFilter) -> Self {
        Self {
            level,
            file: Mutex::new(file),
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = Utc::now();
        let mut file = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let _ = writeln!(
            &mut *file,
            "[{}][{:>5}] {}: {}",
            now.to_rfc3339(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Default path for the diagnostics log file.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("ts3_moreinfo.log")
}

pub fn init_logging(
    path_env_var: &str,
    default_path: PathBuf,
    level_env_var: &str,
    default_level: LevelFilter,
) -> InfoResult<()> {
    let level = std::env::var(level_env_var)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(default_level);

    let path = std::env::var(path_env_var)
        .ok()
        .unwrap_or(default_path.to_string_lossy().to_string());

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| InfoError::new(format!("Failed to open log file: {e}"), 1))?;

    let logger = FileLogger::new(file, level);

    log::set_max_level(level);
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| InfoError::new(format!("Failed to create logger: {e}"), 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_logger_writes_level_and_message() -> InfoResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("diag.log");
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let logger = FileLogger::new(file, LevelFilter::Info);
        logger.log(
            &Record::builder()
                .args(format_args!("hello from test"))
                .level(log::Level::Warn)
                .target("ts3_moreinfo::tests")
                .build(),
        );
        logger.flush();

        let contents = fs::read_to_string(&path)?;
        assert!(contents.contains("WARN"));
        assert!(contents.contains("hello from test"));
        Ok(())
    }

    #[test]
    fn file_logger_filters_below_level() -> InfoResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("diag.log");
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let logger = FileLogger::new(file, LevelFilter::Warn);
        logger.log(
            &Record::builder()
                .args(format_args!("too quiet"))
                .level(log::Level::Debug)
                .target("ts3_moreinfo::tests")
                .build(),
        );
        logger.flush();

        let contents = fs::read_to_string(&path)?;
        assert!(contents.is_empty());
        Ok(())
    }
}
