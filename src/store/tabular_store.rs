use crate::store::directory::StationDirectory;
use crate::store::error::{DataLoadError, StoreError};
use crate::store::extractor::extract_readings;
use crate::store::filtering::ReadingFrameFilterExt;
use crate::store::loader::ReadingLoader;
use crate::types::reading::Reading;
use crate::types::station::Station;
use bon::bon;
use log::{debug, info};
use polars::prelude::{DataFrame, IntoLazy};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Everything produced by one load, published to readers as a unit.
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    /// Long-format readings sorted by `(station_id, year, month)`.
    pub frame: DataFrame,
    pub directory: StationDirectory,
    /// Smallest and largest year present, `None` for an empty file.
    pub year_span: Option<(i32, i32)>,
}

impl StoreSnapshot {
    /// Filters this snapshot; see [`TabularStore::query`].
    pub fn query(
        &self,
        station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<Vec<Reading>, StoreError> {
        let filtered = self
            .frame
            .clone()
            .lazy()
            .filter_stations(station_ids)
            .filter_years(year_from, year_to)
            .collect()?;
        debug!(
            "Query stations={:?} years={:?}..={:?} matched {} rows",
            station_ids,
            year_from,
            year_to,
            filtered.height()
        );
        extract_readings(&filtered)
    }
}

/// In-memory, read-mostly table of monthly readings.
///
/// The source file is loaded once (lazily on first access, or explicitly via
/// [`TabularStore::load`]). Readers get a cheap `Arc` to the current snapshot; a reload
/// builds a complete new snapshot and swaps it in, so a query never observes a
/// half-loaded table.
pub struct TabularStore {
    source: PathBuf,
    loader: ReadingLoader,
    snapshot: RwLock<Option<Arc<StoreSnapshot>>>,
    load_gate: Mutex<()>,
}

#[bon]
impl TabularStore {
    /// Creates an unloaded store for `source`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use climate_stats::TabularStore;
    ///
    /// let store = TabularStore::builder()
    ///     .source("data/climate_data.csv")
    ///     .build();
    /// assert!(!store.is_loaded_blocking());
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] source: PathBuf,
        #[builder(default)] station_names: HashMap<String, String>,
    ) -> Self {
        Self {
            source,
            loader: ReadingLoader::new(station_names),
            snapshot: RwLock::new(None),
            load_gate: Mutex::new(()),
        }
    }
}

impl TabularStore {
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Loads the configured source file, replacing any previous snapshot.
    ///
    /// Calling it again with an unchanged file yields an identical table.
    ///
    /// # Errors
    ///
    /// [`DataLoadError::NotFound`] when the file is missing,
    /// [`DataLoadError::SchemaMismatch`] when required columns are absent, and a
    /// parse-failure variant for anything else that prevents reading the file. The
    /// previous snapshot stays in place on error.
    pub async fn load(&self) -> Result<Arc<StoreSnapshot>, DataLoadError> {
        let _gate = self.load_gate.lock().await;
        self.load_locked(&self.source).await
    }

    /// Same as [`TabularStore::load`].
    pub async fn reload(&self) -> Result<Arc<StoreSnapshot>, DataLoadError> {
        info!("Reloading readings from {:?}", self.source);
        self.load().await
    }

    /// Loads `path` instead of the configured source.
    pub async fn load_from(&self, path: &Path) -> Result<Arc<StoreSnapshot>, DataLoadError> {
        let _gate = self.load_gate.lock().await;
        self.load_locked(path).await
    }

    async fn load_locked(&self, path: &Path) -> Result<Arc<StoreSnapshot>, DataLoadError> {
        let fresh = Arc::new(self.loader.load(path).await?);
        *self.snapshot.write().await = Some(fresh.clone());
        Ok(fresh)
    }

    /// The current snapshot, loading the configured source on first access.
    pub async fn snapshot(&self) -> Result<Arc<StoreSnapshot>, DataLoadError> {
        // Fast path: already loaded.
        if let Some(current) = self.snapshot.read().await.as_ref() {
            return Ok(current.clone());
        }

        let _gate = self.load_gate.lock().await;
        // Another task may have finished loading while we waited for the gate.
        if let Some(current) = self.snapshot.read().await.as_ref() {
            return Ok(current.clone());
        }
        debug!("Lazy load of {:?} on first access", self.source);
        self.load_locked(&self.source).await
    }

    pub async fn is_loaded(&self) -> bool {
        self.snapshot.read().await.is_some()
    }

    /// Non-async variant of [`TabularStore::is_loaded`]; `false` while a load is publishing.
    pub fn is_loaded_blocking(&self) -> bool {
        self.snapshot
            .try_read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Readings matching the filters, in stored order.
    ///
    /// # Arguments
    ///
    /// * `station_ids` - Stations to include; an empty slice means every station.
    /// * `year_from` - Inclusive lower year bound.
    /// * `year_to` - Inclusive upper year bound.
    ///
    /// Unknown station ids simply match nothing.
    pub async fn query(
        &self,
        station_ids: &[String],
        year_from: Option<i32>,
        year_to: Option<i32>,
    ) -> Result<Vec<Reading>, StoreError> {
        self.snapshot()
            .await?
            .query(station_ids, year_from, year_to)
    }

    /// Station directory, sorted by name.
    pub async fn stations(&self) -> Result<Vec<Station>, DataLoadError> {
        Ok(self.snapshot().await?.directory.list().to_vec())
    }

    pub async fn station_exists(&self, station_id: &str) -> Result<bool, DataLoadError> {
        Ok(self.snapshot().await?.directory.exists(station_id))
    }

    /// Year span of the loaded data.
    pub async fn year_span(&self) -> Result<Option<(i32, i32)>, DataLoadError> {
        Ok(self.snapshot().await?.year_span)
    }
}
