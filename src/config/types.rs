//! Configuration types for the forecast engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    ActivityPolicyKind, DEFAULT_STANDARD_WORKING_DAYS, DeductionOverflowPolicy, ForecastOptions,
};
use crate::models::{BaselineRevenueStandard, ForecastPeriod};

/// Engine settings from settings.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSettings {
    /// A display name for the deployment.
    pub name: String,
    /// ISO 4217 code of the currency amounts are expressed in.
    pub currency: String,
    /// The default activity policy.
    #[serde(default)]
    pub activity_policy: ActivityPolicyKind,
    /// The default treatment of combined deductions above 100%.
    #[serde(default)]
    pub deduction_overflow: DeductionOverflowPolicy,
    /// Working days in a standard month.
    #[serde(default = "default_standard_working_days")]
    pub standard_working_days: Decimal,
}

fn default_standard_working_days() -> Decimal {
    DEFAULT_STANDARD_WORKING_DAYS
}

/// Standards table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardsConfig {
    /// Baseline standards, one per (role, rank, season).
    pub standards: Vec<BaselineRevenueStandard>,
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SalonConfig {
    /// Engine settings.
    settings: ForecastSettings,
    /// Baseline standards.
    standards: Vec<BaselineRevenueStandard>,
}

impl SalonConfig {
    /// Creates a SalonConfig from its component parts.
    pub fn new(settings: ForecastSettings, standards: Vec<BaselineRevenueStandard>) -> Self {
        Self {
            settings,
            standards,
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &ForecastSettings {
        &self.settings
    }

    /// Returns all baseline standards.
    pub fn standards(&self) -> &[BaselineRevenueStandard] {
        &self.standards
    }

    /// Builds forecast options for a period from the configured defaults.
    pub fn options_for(&self, period: ForecastPeriod) -> ForecastOptions {
        ForecastOptions {
            period,
            promo_period: false,
            activity_policy: self.settings.activity_policy,
            deduction_overflow: self.settings.deduction_overflow,
            standard_working_days: self.settings.standard_working_days,
        }
    }
}
