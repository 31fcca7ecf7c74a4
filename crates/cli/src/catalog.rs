//! Game catalog loaded from a YAML file.
//!
//! # Format
//!
//! ```yaml
//! games:
//!   - id: 1
//!     title: Neon Drift
//!     image: /img/games/neon-drift.webp
//!     genre: Racing
//!     price: 1299
//!     originalPrice: 1999
//!     rating: 4.8
//! ```

use std::path::Path;

use gamecart_core::{GameId, GameRecord};
use serde::Deserialize;
use tracing::info;

use crate::error::CliError;

/// The games available to add.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl Catalog {
    /// Read a catalog from `path`.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml(&content).map_err(|source| CliError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), games = catalog.games.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `serde_yaml::Error` if the text is not a valid catalog.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Look up a game by id.
    ///
    /// # Errors
    ///
    /// Returns `CliError::UnknownGame` if no game has `id`.
    pub fn game(&self, id: &GameId) -> Result<&GameRecord, CliError> {
        self.games
            .iter()
            .find(|game| &game.id == id)
            .ok_or_else(|| CliError::UnknownGame(id.clone()))
    }
}
