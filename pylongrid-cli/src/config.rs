//! JSON configuration accepted by the CLI.

use pylongrid::{DetectorConfig, FilterConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfigJson {
    pub radius: usize,
    pub quantile: f64,
    pub step: usize,
}

impl Default for FilterConfigJson {
    fn default() -> Self {
        let cfg = FilterConfig::default();
        Self {
            radius: cfg.radius,
            quantile: cfg.quantile,
            step: cfg.step,
        }
    }
}

impl From<&FilterConfigJson> for FilterConfig {
    fn from(value: &FilterConfigJson) -> Self {
        Self {
            radius: value.radius,
            quantile: value.quantile,
            step: value.step,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub image_path: String,
    pub output_path: Option<String>,
    pub overlay_path: Option<String>,
    pub step: usize,
    pub filter: Option<FilterConfigJson>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            output_path: None,
            overlay_path: None,
            step: DetectorConfig::default().step,
            filter: None,
        }
    }
}

impl Config {
    /// Parses a config and checks that an input image is named.
    pub fn from_json(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = serde_json::from_str(text)?;
        if config.image_path.is_empty() {
            return Err("image_path must be set in the config".into());
        }
        Ok(config)
    }

    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig {
            step: self.step,
            filter: self.filter.as_ref().map(FilterConfig::from),
        }
    }
}
