//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings and baseline standards from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{BaselineRevenueStandard, ForecastPeriod};

use super::types::{ForecastSettings, SalonConfig, StandardsConfig};
use crate::calculation::ForecastOptions;

/// Loads and provides access to the forecast configuration.
///
/// # Directory Structure
///
/// ```text
/// config/salon/
/// ├── settings.yaml         # Engine settings and default policies
/// └── sales_standards.yaml  # Baseline revenue per role, rank and season
/// ```
///
/// # Example
///
/// ```no_run
/// use salon_forecast::config::ConfigLoader;
/// use salon_forecast::models::ForecastPeriod;
///
/// let loader = ConfigLoader::load("./config/salon").unwrap();
/// println!("Loaded {} standards", loader.standards().len());
///
/// let options = loader.options_for(ForecastPeriod::new(2026, 7).unwrap());
/// println!("Activity policy: {:?}", options.activity_policy);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SalonConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<ForecastSettings>(&path.join("settings.yaml"))?;
        let standards = Self::load_yaml::<StandardsConfig>(&path.join("sales_standards.yaml"))?;

        info!(
            path = %path.display(),
            name = %settings.name,
            standards = standards.standards.len(),
            "Loaded forecast configuration"
        );

        Ok(Self {
            config: SalonConfig::new(settings, standards.standards),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &ForecastSettings {
        self.config.settings()
    }

    /// Returns the configured baseline standards.
    pub fn standards(&self) -> &[BaselineRevenueStandard] {
        self.config.standards()
    }

    /// Builds forecast options for a period from the configured defaults.
    pub fn options_for(&self, period: ForecastPeriod) -> ForecastOptions {
        self.config.options_for(period)
    }
}
