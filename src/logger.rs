use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Path of the log file the process-wide `fern` dispatcher writes to, once installed.
static FILE_LOGGER: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Every entry is kept in memory for the Logs dialog and forwarded to the `log`
/// facade, which reaches a file when file logging has been installed.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_logging: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_logging: false,
        }
    }

    /// Build a logger from configuration, installing file logging when enabled
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();
        if config.enabled {
            let path = Self::get_log_file_path()?;
            install_file_logger(&path, config.level_filter())?;
            logger.file_logging = true;
        }
        Ok(logger)
    }

    /// Build a logger that writes to a specific file
    pub fn with_log_file<P: AsRef<Path>>(path: P, level: log::LevelFilter) -> Result<Self> {
        install_file_logger(path.as_ref(), level)?;
        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_logging: true,
        })
    }

    pub fn is_file_logging(&self) -> bool {
        self.file_logging
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Default log file location inside the user's data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        let dir = dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
            .join(CONFIG_DIR_NAME);
        Ok(dir.join(LOG_FILE_NAME))
    }

    /// Path the installed file logger writes to, if any
    pub fn installed_log_file() -> Option<&'static Path> {
        FILE_LOGGER.get().map(PathBuf::as_path)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the process-wide `fern` dispatcher.
///
/// Installing again for the same path is a no-op; a different path is an error
/// since `log` accepts only one global logger per process.
fn install_file_logger(path: &Path, level: log::LevelFilter) -> Result<()> {
    let installed = FILE_LOGGER.get_or_try_init(|| {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{}] {}: {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(file)
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install file logger: {}", e))?;

        Ok::<PathBuf, anyhow::Error>(path.to_path_buf())
    })?;

    if installed.as_path() != path {
        anyhow::bail!(
            "File logging already goes to {}, cannot switch to {}",
            installed.display(),
            path.display()
        );
    }
    Ok(())
}
