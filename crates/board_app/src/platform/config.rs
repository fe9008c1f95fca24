use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use board_core::BoardConfig;
use serde::Deserialize;

use super::logging::LogSettings;
use super::script::Gesture;

/// Contents of the optional RON file passed as the first argument.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub log: LogSettings,
    /// Gestures to replay; the built-in walk-through when absent.
    pub script: Option<Vec<Gesture>>,
}

pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}
