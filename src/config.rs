use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::groundtrack::chart::DEFAULT_HEIGHT_TIME_STEPS;
use crate::groundtrack::segmenter::DEFAULT_LONGITUDE_JUMP_CUTOFF;
use crate::groundtrack::Rgb;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plot: PlotSettings,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlotSettings {
    /// Largest longitude jump between two samples still drawn as one line.
    #[serde(default = "default_cutoff")]
    pub longitude_jump_cutoff: f64,
    #[serde(default = "default_arrow_size")]
    pub arrow_size: f64,
    /// Number of intervals on the altitude chart time axis.
    #[serde(default = "default_height_time_steps")]
    pub height_time_steps: u32,
    /// Track color when the speed gradient is off.
    #[serde(default = "default_color", deserialize_with = "deserialize_color")]
    pub color: Rgb,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            longitude_jump_cutoff: default_cutoff(),
            arrow_size: default_arrow_size(),
            height_time_steps: default_height_time_steps(),
            color: default_color(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_cutoff() -> f64 {
    DEFAULT_LONGITUDE_JUMP_CUTOFF
}

fn default_arrow_size() -> f64 {
    10.0
}

fn default_height_time_steps() -> u32 {
    DEFAULT_HEIGHT_TIME_STEPS
}

fn default_color() -> Rgb {
    Rgb::BLACK
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Rgb::from_hex(&s).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
