//! Error types for the salon revenue forecast engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating forecast inputs, and managing forecast history.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the forecast engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently from the engine up to the HTTP layer.
///
/// # Example
///
/// ```
/// use salon_forecast::error::EngineError;
///
/// let error = EngineError::InvalidMonth { month: 13 };
/// assert_eq!(error.to_string(), "Invalid month 13: expected a value between 1 and 12");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The target month is outside 1..=12.
    #[error("Invalid month {month}: expected a value between 1 and 12")]
    InvalidMonth {
        /// The rejected month value.
        month: u32,
    },

    /// A help record carried a percentage outside 0..=100.
    #[error("Invalid {field} on help record '{help_id}': {value} is outside 0..=100")]
    InvalidPercentage {
        /// The ID of the offending help record.
        help_id: String,
        /// Which percentage was invalid ("deduction_percent" or "addition_percent").
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A leave record carried an activity ratio outside [0, 1] or off the 0.05 step.
    #[error("Invalid activity ratio {value} for employee '{employee_id}'")]
    InvalidActivityRatio {
        /// The employee the leave record belongs to.
        employee_id: String,
        /// The rejected ratio.
        value: Decimal,
    },

    /// An attendance record carried a negative working-day count.
    #[error("Invalid working days {value} for employee '{employee_id}'")]
    InvalidWorkingDays {
        /// The employee the attendance record belongs to.
        employee_id: String,
        /// The rejected working-day count.
        value: Decimal,
    },

    /// An employee's combined help deductions exceed 100% under the reject policy.
    #[error("Help deductions for employee '{employee_id}' total {total_percent}%, above 100%")]
    DeductionExceedsLimit {
        /// The employee whose deductions overflowed.
        employee_id: String,
        /// The combined deduction percentage.
        total_percent: Decimal,
    },

    /// The requested forecast options cannot be used together.
    #[error("Incompatible forecast options: {message}")]
    IncompatibleOptions {
        /// A description of the conflict.
        message: String,
    },

    /// No history snapshot exists with the given ID.
    #[error("Forecast snapshot not found: {id}")]
    SnapshotNotFound {
        /// The ID that was looked up.
        id: String,
    },

    /// The history store could not be accessed.
    #[error("Forecast history unavailable: {message}")]
    HistoryUnavailable {
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_percentage_displays_record_and_field() {
        let error = EngineError::InvalidPercentage {
            help_id: "help_001".to_string(),
            field: "deduction_percent".to_string(),
            value: Decimal::new(1205, 1),
        };
        assert_eq!(
            error.to_string(),
            "Invalid deduction_percent on help record 'help_001': 120.5 is outside 0..=100"
        );
    }

    #[test]
    fn test_deduction_exceeds_limit_displays_total() {
        let error = EngineError::DeductionExceedsLimit {
            employee_id: "emp_001".to_string(),
            total_percent: Decimal::new(110, 0),
        };
        assert_eq!(
            error.to_string(),
            "Help deductions for employee 'emp_001' total 110%, above 100%"
        );
    }

    #[test]
    fn test_snapshot_not_found_displays_id() {
        let error = EngineError::SnapshotNotFound {
            id: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Forecast snapshot not found: abc");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth { month: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
