//! Configuration loading and management for the forecast engine.
//!
//! This module loads engine settings and the baseline revenue standards
//! table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salon_forecast::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salon").unwrap();
//! println!("Loaded: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ForecastSettings, SalonConfig, StandardsConfig};
