//! Season classification.
//!
//! This module maps calendar months to the season categories that key the
//! baseline revenue standards.

use serde::{Deserialize, Serialize};

/// A bucket of calendar months with its own baseline revenue standards.
///
/// # Example
///
/// ```
/// use salon_forecast::calculation::SeasonCategory;
///
/// let season = SeasonCategory::Busy;
/// assert_eq!(season.to_string(), "busy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonCategory {
    /// January, March, April, September, October, November.
    Normal,
    /// February, May, June.
    Slow,
    /// July, August.
    Busy,
    /// December.
    SuperBusy,
}

impl SeasonCategory {
    /// All season categories.
    pub const ALL: [SeasonCategory; 4] = [
        SeasonCategory::Normal,
        SeasonCategory::Slow,
        SeasonCategory::Busy,
        SeasonCategory::SuperBusy,
    ];

    /// The months assigned to this season.
    pub fn months(&self) -> &'static [u32] {
        match self {
            SeasonCategory::Normal => &[1, 3, 4, 9, 10, 11],
            SeasonCategory::Slow => &[2, 5, 6],
            SeasonCategory::Busy => &[7, 8],
            SeasonCategory::SuperBusy => &[12],
        }
    }
}

impl std::fmt::Display for SeasonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonCategory::Normal => write!(f, "normal"),
            SeasonCategory::Slow => write!(f, "slow"),
            SeasonCategory::Busy => write!(f, "busy"),
            SeasonCategory::SuperBusy => write!(f, "super_busy"),
        }
    }
}

/// Determines the season category for a calendar month.
///
/// Months not listed by any season fall back to [`SeasonCategory::Normal`].
/// Callers are expected to reject months outside 1-12 before calling this.
///
/// # Example
///
/// ```
/// use salon_forecast::calculation::{classify, SeasonCategory};
///
/// assert_eq!(classify(2), SeasonCategory::Slow);
/// assert_eq!(classify(8), SeasonCategory::Busy);
/// assert_eq!(classify(12), SeasonCategory::SuperBusy);
/// assert_eq!(classify(10), SeasonCategory::Normal);
/// ```
pub fn classify(month: u32) -> SeasonCategory {
    SeasonCategory::ALL
        .into_iter()
        .find(|season| season.months().contains(&month))
        .unwrap_or(SeasonCategory::Normal)
}
