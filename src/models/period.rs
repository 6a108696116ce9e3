//! Forecast period model.
//!
//! This module contains the [`ForecastPeriod`] type identifying the target
//! (year, month) of a forecast and of the records that feed it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::{SeasonCategory, classify};
use crate::error::{EngineError, EngineResult};

/// A calendar month targeted by a forecast.
///
/// # Example
///
/// ```
/// use salon_forecast::models::ForecastPeriod;
///
/// let period = ForecastPeriod::new(2026, 7).unwrap();
/// assert!(period.matches(2026, 7));
/// assert!(!period.matches(2025, 7));
/// assert!(ForecastPeriod::new(2026, 13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl ForecastPeriod {
    /// Creates a period, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let period = Self { year, month };
        period.validate()?;
        Ok(period)
    }

    /// Checks that the month is within 1..=12.
    pub fn validate(&self) -> EngineResult<()> {
        if (1..=12).contains(&self.month) {
            Ok(())
        } else {
            Err(EngineError::InvalidMonth { month: self.month })
        }
    }

    /// Returns true if a record dated (year, month) belongs to this period.
    pub fn matches(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }

    /// Returns the season category of this period's month.
    pub fn season(&self) -> SeasonCategory {
        classify(self.month)
    }

    /// Returns the month following the one containing `date`.
    ///
    /// Forecasts are normally prepared for the upcoming month, so this is the
    /// default target period. December rolls over into January of the next year.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use salon_forecast::models::ForecastPeriod;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 12, 3).unwrap();
    /// let period = ForecastPeriod::following(today);
    /// assert_eq!((period.year, period.month), (2027, 1));
    /// ```
    pub fn following(date: NaiveDate) -> Self {
        if date.month() == 12 {
            Self {
                year: date.year() + 1,
                month: 1,
            }
        } else {
            Self {
                year: date.year(),
                month: date.month() + 1,
            }
        }
    }
}

impl std::fmt::Display for ForecastPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
