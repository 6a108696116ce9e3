//! Forecast history snapshot models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ForecastPeriod, LocationForecast, SalesBreakdown};
use crate::error::EngineResult;

/// The final sales of one location for one month, as saved to history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    /// Unique identifier, kept across overwrites of the same (year, month, location).
    pub id: Uuid,
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// The location the snapshot belongs to.
    pub location_id: String,
    /// The location's display name when the snapshot was saved.
    pub location_name: String,
    /// Final treatment, retail and total sales.
    pub sales: SalesBreakdown,
    /// When the snapshot was last written.
    pub saved_at: DateTime<Utc>,
}

impl ForecastSnapshot {
    /// Builds a fresh snapshot from a location forecast.
    pub fn from_forecast(
        period: ForecastPeriod,
        forecast: &LocationForecast,
        saved_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            year: period.year,
            month: period.month,
            location_id: forecast.location_id.clone(),
            location_name: forecast.location_name.clone(),
            sales: forecast.final_sales,
            saved_at,
        }
    }
}

/// The snapshots of one month with their combined sales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthHistory {
    /// The calendar month (1-12).
    pub month: u32,
    /// Snapshots for the month, ordered by location ID.
    pub snapshots: Vec<ForecastSnapshot>,
    /// Sales summed across the month's snapshots.
    pub total: SalesBreakdown,
}

/// A year of forecast history grouped by month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryYear {
    /// The calendar year.
    pub year: i32,
    /// Months that have at least one snapshot, in calendar order.
    pub months: Vec<MonthHistory>,
    /// Sales summed across the whole year.
    pub yearly_total: SalesBreakdown,
}

impl HistoryYear {
    /// Groups a year's snapshots by month and totals them.
    pub fn from_snapshots(year: i32, mut snapshots: Vec<ForecastSnapshot>) -> EngineResult<Self> {
        snapshots.retain(|s| s.year == year);
        snapshots.sort_by(|a, b| {
            a.month
                .cmp(&b.month)
                .then_with(|| a.location_id.cmp(&b.location_id))
        });

        let mut months: Vec<MonthHistory> = Vec::new();
        for snapshot in snapshots {
            match months.last_mut() {
                Some(current) if current.month == snapshot.month => {
                    current.total = current.total.checked_add(snapshot.sales)?;
                    current.snapshots.push(snapshot);
                }
                _ => months.push(MonthHistory {
                    month: snapshot.month,
                    total: snapshot.sales,
                    snapshots: vec![snapshot],
                }),
            }
        }

        let yearly_total = SalesBreakdown::checked_sum(months.iter().map(|m| m.total))?;
        Ok(Self {
            year,
            months,
            yearly_total,
        })
    }
}
