//! Monthly revenue forecasting for a multi-location salon chain.
//!
//! This crate projects each location's sales for a month from baseline
//! standards per role, rank and season. It adjusts for leave or partial
//! attendance and for staff lent between locations through help records.
//!
//! # Example
//!
//! ```no_run
//! use salon_forecast::calculation::compute_forecast;
//! use salon_forecast::config::ConfigLoader;
//! use salon_forecast::models::ForecastPeriod;
//!
//! let config = ConfigLoader::load("./config/salon").unwrap();
//! let options = config.options_for(ForecastPeriod::new(2026, 1).unwrap());
//! # let input = salon_forecast::calculation::ForecastInput::default();
//! let report = compute_forecast(&input, &options).unwrap();
//! println!("{}", report.grand_total.total);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
