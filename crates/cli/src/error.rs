//! CLI error type.

use std::path::PathBuf;

use gamecart_core::GameId;
use gamecart_storefront::config::ConfigError;
use thiserror::Error;

/// Errors surfaced to the terminal user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid YAML.
    #[error("failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// No catalog game has the requested id.
    #[error("no game with id `{0}` in the catalog")]
    UnknownGame(GameId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_game_display() {
        let err = CliError::UnknownGame(GameId::new("g9"));
        assert_eq!(err.to_string(), "no game with id `g9` in the catalog");
    }
}
