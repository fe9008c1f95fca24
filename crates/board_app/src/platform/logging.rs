//! Platform logging initialization for board_app.
//!
//! The `log` section of the config picks the destination, the level and the
//! log file path (`./board.log` unless overridden).

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogDestination {
    File,
    /// Stderr, so board renders on stdout stay clean.
    #[default]
    Terminal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LogLevel,
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogDestination::default(),
            level: LogLevel::default(),
            file: PathBuf::from("./board.log"),
        }
    }
}

/// Installs the global logger described by `settings`. Does nothing if a
/// logger is already installed.
pub fn initialize(settings: &LogSettings) {
    let loggers = build_loggers(settings);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(settings: &LogSettings) -> Vec<Box<dyn SharedLogger>> {
    let level = LevelFilter::from(settings.level);
    if level == LevelFilter::Off {
        return Vec::new();
    }
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(
        settings.destination,
        LogDestination::Terminal | LogDestination::Both
    ) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if matches!(
        settings.destination,
        LogDestination::File | LogDestination::Both
    ) {
        if let Some(file_logger) = create_file_logger(&settings.file, level, config) {
            loggers.push(file_logger);
        }
    }
    loggers
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
