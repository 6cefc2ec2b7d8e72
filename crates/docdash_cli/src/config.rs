use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use docdash_transfer::SimulatorConfig;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    pub upload: UploadSection,
    pub reports: ReportsSection,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UploadSection {
    pub tick_interval_ms: u64,
    pub max_increment: f64,
}

impl Default for UploadSection {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            max_increment: 20.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportsSection {
    pub generation_delay_ms: u64,
}

impl Default for ReportsSection {
    fn default() -> Self {
        Self {
            generation_delay_ms: 1500,
        }
    }
}

impl RuntimeConfig {
    /// Reads `path` if it exists; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("invalid config TOML at {}", path.display()))
    }

    pub fn parse(source: &str) -> Result<Self> {
        let config: RuntimeConfig = toml::from_str(source)?;
        config.simulator().validate()?;
        Ok(config)
    }

    pub fn simulator(&self) -> SimulatorConfig {
        SimulatorConfig {
            tick_interval: Duration::from_millis(self.upload.tick_interval_ms),
            max_increment: self.upload.max_increment,
        }
    }

    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.reports.generation_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::RuntimeConfig;
    use std::time::Duration;

    #[test]
    fn empty_source_uses_defaults() {
        let config = RuntimeConfig::parse("").expect("config");
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.simulator().tick_interval, Duration::from_millis(200));
        assert_eq!(config.report_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = RuntimeConfig::parse("[upload]\ntick_interval_ms = 50\n").expect("config");
        assert_eq!(config.upload.tick_interval_ms, 50);
        assert_eq!(config.upload.max_increment, 20.0);
    }

    #[test]
    fn rejects_zero_increment() {
        assert!(RuntimeConfig::parse("[upload]\nmax_increment = 0.0\n").is_err());
    }

    #[test]
    fn bundled_config_parses() {
        let source = include_str!("../../../config/docdash.toml");
        assert_eq!(
            RuntimeConfig::parse(source).expect("config"),
            RuntimeConfig::default()
        );
    }
}
