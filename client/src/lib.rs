//! Async client for the Clover usage statistics host.
//!
//! [`UsageClient`] fetches and validates the JSON resources, caching each
//! reference dataset after its first successful load. [`SharedData`] and
//! [`load_reference_data`] populate the reference bundle used for display,
//! and [`SelectionController`] drives the format → year → month → day →
//! species selection flow.

mod cache;
mod error;
pub mod selector;
mod state;
mod transport;

#[cfg(test)]
mod testing;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clover_protocol::{
    AbilityCatalog, BattleIconIndexes, FormatCatalog, ItemCatalog, MoveCatalog, Pokedex,
    StatsSnapshot, UsagePath, decode, parse_format_catalog,
};
use tracing::{debug, warn};

pub use clover_protocol as protocol;

pub use cache::DatasetCache;
pub use error::{Dataset, Resource, ResourceError, SelectionError};
pub use selector::{Completion, Level, SelectionController, SnapshotRequest, SnapshotSource, View};
pub use state::{LoadReport, SharedData, load_reference_data};
pub use transport::{HttpTransport, Transport};

pub const DEFAULT_BASE_URL: &str = "https://clover.weedl.es";

/// Connection settings for [`UsageClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Request timeout; `None` leaves the transport default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Fetches resources from the usage host.
///
/// Each reference dataset is requested at most once per client after it
/// has loaded. Usage snapshots are requested every time.
pub struct UsageClient<T = HttpTransport> {
    transport: T,
    base_url: String,
    pokedex: DatasetCache<Pokedex>,
    moves: DatasetCache<MoveCatalog>,
    items: DatasetCache<ItemCatalog>,
    abilities: DatasetCache<AbilityCatalog>,
    battle_icon_indexes: DatasetCache<BattleIconIndexes>,
    formats: DatasetCache<FormatCatalog>,
}

impl UsageClient<HttpTransport> {
    /// Create a client talking HTTP to the configured host
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(transport, config.base_url))
    }
}

impl<T: Transport> UsageClient<T> {
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
            pokedex: DatasetCache::new(),
            moves: DatasetCache::new(),
            items: DatasetCache::new(),
            abilities: DatasetCache::new(),
            battle_icon_indexes: DatasetCache::new(),
            formats: DatasetCache::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a resource path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Species catalog
    pub async fn pokedex(&self) -> Result<Arc<Pokedex>, ResourceError> {
        self.dataset(&self.pokedex, Dataset::Pokedex, decode).await
    }

    /// Move catalog
    pub async fn moves(&self) -> Result<Arc<MoveCatalog>, ResourceError> {
        self.dataset(&self.moves, Dataset::Moves, decode).await
    }

    /// Item catalog
    pub async fn items(&self) -> Result<Arc<ItemCatalog>, ResourceError> {
        self.dataset(&self.items, Dataset::Items, decode).await
    }

    /// Ability catalog
    pub async fn abilities(&self) -> Result<Arc<AbilityCatalog>, ResourceError> {
        self.dataset(&self.abilities, Dataset::Abilities, decode).await
    }

    /// Sprite sheet index overrides
    pub async fn battle_icon_indexes(&self) -> Result<Arc<BattleIconIndexes>, ResourceError> {
        self.dataset(&self.battle_icon_indexes, Dataset::BattleIcons, decode)
            .await
    }

    /// Format catalog keyed by format id, section headers removed
    pub async fn formats(&self) -> Result<Arc<FormatCatalog>, ResourceError> {
        self.dataset(&self.formats, Dataset::Formats, parse_format_catalog)
            .await
    }

    /// Usage snapshot at `path`. Never cached.
    pub async fn stats(&self, path: &UsagePath) -> Result<StatsSnapshot, ResourceError> {
        self.fetch_decoded(&path.to_resource_path(), decode)
            .await
            .map_err(|e| {
                warn!(path = %path, error = ?e, "Usage stats unavailable");
                ResourceError::Unavailable(Resource::Stats(path.clone()))
            })
    }

    async fn dataset<D, F>(
        &self,
        cache: &DatasetCache<D>,
        dataset: Dataset,
        parse: F,
    ) -> Result<Arc<D>, ResourceError>
    where
        F: FnOnce(&[u8]) -> Result<D>,
    {
        cache
            .get_or_try_load(|| self.fetch_decoded(dataset.path(), parse))
            .await
            .map_err(|e| {
                warn!(dataset = %dataset, error = ?e, "Dataset unavailable");
                ResourceError::Unavailable(Resource::Dataset(dataset))
            })
    }

    async fn fetch_decoded<D, F>(&self, path: &str, parse: F) -> Result<D>
    where
        F: FnOnce(&[u8]) -> Result<D>,
    {
        let url = self.url(path);
        debug!(url = %url, "Requesting resource");

        let body = self.transport.get(&url).await?;
        parse(&body)
    }
}
