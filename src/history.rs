//! Forecast history storage.
//!
//! Saved forecasts are kept as one [`ForecastSnapshot`] per
//! (year, month, location). Saving a forecast again for the same key
//! overwrites the figures but keeps the snapshot's ID.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{ForecastReport, ForecastSnapshot, HistoryYear};

/// Storage for forecast snapshots.
pub trait HistoryStore: Send + Sync {
    /// Inserts the snapshot, or overwrites the one with the same
    /// (year, month, location). Returns the stored snapshot.
    fn upsert(&self, snapshot: ForecastSnapshot) -> EngineResult<ForecastSnapshot>;

    /// Returns every snapshot for a year.
    fn list_year(&self, year: i32) -> EngineResult<Vec<ForecastSnapshot>>;

    /// Deletes a snapshot by ID.
    fn delete(&self, id: Uuid) -> EngineResult<()>;
}

type SnapshotKey = (i32, u32, String);

/// A [`HistoryStore`] held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    snapshots: RwLock<BTreeMap<SnapshotKey, ForecastSnapshot>>,
}

impl InMemoryHistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> EngineError {
    EngineError::HistoryUnavailable {
        message: "history lock poisoned".to_string(),
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn upsert(&self, mut snapshot: ForecastSnapshot) -> EngineResult<ForecastSnapshot> {
        let mut snapshots = self.snapshots.write().map_err(poisoned)?;
        let key = (snapshot.year, snapshot.month, snapshot.location_id.clone());
        if let Some(existing) = snapshots.get(&key) {
            snapshot.id = existing.id;
        }
        snapshots.insert(key, snapshot.clone());
        Ok(snapshot)
    }

    fn list_year(&self, year: i32) -> EngineResult<Vec<ForecastSnapshot>> {
        let snapshots = self.snapshots.read().map_err(poisoned)?;
        Ok(snapshots
            .values()
            .filter(|s| s.year == year)
            .cloned()
            .collect())
    }

    fn delete(&self, id: Uuid) -> EngineResult<()> {
        let mut snapshots = self.snapshots.write().map_err(poisoned)?;
        let key = snapshots
            .iter()
            .find(|(_, s)| s.id == id)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| EngineError::SnapshotNotFound { id: id.to_string() })?;
        snapshots.remove(&key);
        Ok(())
    }
}

/// Saves the final sales of every location in a report.
pub fn save_report(
    store: &dyn HistoryStore,
    report: &ForecastReport,
    saved_at: DateTime<Utc>,
) -> EngineResult<Vec<ForecastSnapshot>> {
    let saved = report
        .locations
        .iter()
        .map(|forecast| {
            store.upsert(ForecastSnapshot::from_forecast(
                report.period,
                forecast,
                saved_at,
            ))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    info!(
        period = %report.period,
        snapshots = saved.len(),
        "Saved forecast to history"
    );
    Ok(saved)
}

/// Loads a year of history grouped by month.
pub fn load_year(store: &dyn HistoryStore, year: i32) -> EngineResult<HistoryYear> {
    HistoryYear::from_snapshots(year, store.list_year(year)?)
}
