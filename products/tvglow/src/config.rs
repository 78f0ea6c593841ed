use glow_camera::CameraConfig;
use glow_pipeline::PipelineConfig;
use log::LevelFilter;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    InvalidLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "unable to read config: {err}"),
            ConfigError::Parse(err) => write!(f, "unable to parse config: {err}"),
            ConfigError::InvalidLevel(level) => write!(f, "unknown log level {level:?}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::InvalidLevel(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Top-level settings file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// "error", "warn", "info", "debug" or "trace". Unset picks the build default.
    pub log_level: Option<String>,
    /// Log into daily files here instead of stdout.
    pub log_dir: Option<PathBuf>,
    pub camera: CameraConfig,
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn level(&self) -> Result<LevelFilter, ConfigError> {
        match &self.log_level {
            None => Ok(glow_base::default_level()),
            Some(level) => LevelFilter::from_str(level)
                .map_err(|_| ConfigError::InvalidLevel(level.clone())),
        }
    }
}
