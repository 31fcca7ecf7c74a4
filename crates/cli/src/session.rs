//! A CLI session: the file-backed store plus the catalog it draws from.

use std::sync::Arc;

use gamecart_core::{CurrencyCode, GameId, GameRecord};
use gamecart_storefront::{
    FileStorage, NotificationSink, StoreHandle, StorefrontConfig, TracingSink,
};

use crate::catalog::Catalog;
use crate::error::CliError;

/// Everything a command needs to run.
#[derive(Debug, Clone)]
pub struct Session {
    pub store: StoreHandle,
    pub catalog: Catalog,
    pub currency: CurrencyCode,
}

impl Session {
    /// Open the store under the configured data directory and load the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the catalog cannot be loaded.
    pub fn open(config: &StorefrontConfig) -> Result<Self, CliError> {
        let catalog = Catalog::load(&config.catalog_path)?;
        Ok(Self::with_sink(config, catalog, Arc::new(TracingSink)))
    }

    /// Open the store with an explicit catalog and notification sink.
    #[must_use]
    pub fn with_sink(
        config: &StorefrontConfig,
        catalog: Catalog,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let storage = Arc::new(FileStorage::new(&config.data_dir));
        Self {
            store: StoreHandle::open(storage, sink, config.options),
            catalog,
            currency: config.currency,
        }
    }

    /// Catalog record for `id`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::UnknownGame` if the catalog has no such game.
    pub fn game(&self, id: &GameId) -> Result<&GameRecord, CliError> {
        self.catalog.game(id)
    }
}
