//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `GAMECART_DATA_DIR` - Directory holding persisted records (default: `.gamecart`)
//! - `GAMECART_CATALOG` - Path to the catalog YAML file (default: `catalog.yaml`)
//! - `GAMECART_CURRENCY` - ISO 4217 display currency (default: `INR`)
//! - `GAMECART_NOTIFY_CART_REMOVAL` - Emit a notice when a game leaves the cart
//!   (default: `true`)
//! - `GAMECART_MOVE_CONFLICT` - What a move does when the destination already
//!   holds the game: `keep-source` or `remove-source` (default: `keep-source`)

use std::path::PathBuf;
use std::str::FromStr;

use gamecart_core::CurrencyCode;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Behaviour of a move when the destination collection already holds the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveConflict {
    /// Report the duplicate and leave the source collection untouched.
    #[default]
    KeepSource,
    /// Report the duplicate and still remove the game from the source.
    RemoveSource,
}

impl FromStr for MoveConflict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "keep-source" => Ok(Self::KeepSource),
            "remove-source" => Ok(Self::RemoveSource),
            other => Err(format!(
                "expected `keep-source` or `remove-source`, got `{other}`"
            )),
        }
    }
}

/// Notification and move policies of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Emit an info notice when a game is removed from the cart.
    pub notify_cart_removal: bool,
    /// See [`MoveConflict`].
    pub move_conflict: MoveConflict,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            notify_cart_removal: true,
            move_conflict: MoveConflict::KeepSource,
        }
    }
}

impl StoreOptions {
    /// The policies of the original browser storefront: silent cart removal,
    /// and moves that always empty the source.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            notify_cart_removal: false,
            move_conflict: MoveConflict::RemoveSource,
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the persisted cart and wishlist records
    pub data_dir: PathBuf,
    /// Catalog file consumed by front-ends
    pub catalog_path: PathBuf,
    /// Currency used to display amounts
    pub currency: CurrencyCode,
    /// Store policies
    pub options: StoreOptions,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: PathBuf::from(DEFAULT_CATALOG),
            currency: CurrencyCode::default(),
            options: StoreOptions::default(),
        }
    }
}

const DEFAULT_DATA_DIR: &str = ".gamecart";
const DEFAULT_CATALOG: &str = "catalog.yaml";

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("GAMECART_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let catalog_path = lookup("GAMECART_CATALOG")
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG), PathBuf::from);

        let currency = parse_or_default(&lookup, "GAMECART_CURRENCY", CurrencyCode::default())?;
        let notify_cart_removal =
            parse_bool_or_default(&lookup, "GAMECART_NOTIFY_CART_REMOVAL", true)?;
        let move_conflict =
            parse_or_default(&lookup, "GAMECART_MOVE_CONFLICT", MoveConflict::default())?;

        Ok(Self {
            data_dir,
            catalog_path,
            currency,
            options: StoreOptions {
                notify_cart_removal,
                move_conflict,
            },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable with `FromStr`, falling back to `default` when unset.
fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

/// Parse a boolean flag, accepting `true/false`, `1/0`, `yes/no`.
fn parse_bool_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got `{value}`"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert!(config.options.notify_cart_removal);
        assert_eq!(config.options.move_conflict, MoveConflict::KeepSource);
    }

    #[test]
    fn test_all_variables() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("GAMECART_DATA_DIR", "/tmp/cart"),
            ("GAMECART_CATALOG", "games.yaml"),
            ("GAMECART_CURRENCY", "usd"),
            ("GAMECART_NOTIFY_CART_REMOVAL", "no"),
            ("GAMECART_MOVE_CONFLICT", "remove-source"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/cart"));
        assert_eq!(config.catalog_path, PathBuf::from("games.yaml"));
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.options, StoreOptions::legacy());
    }

    #[test]
    fn test_invalid_currency() {
        let err = StorefrontConfig::from_lookup(lookup(&[("GAMECART_CURRENCY", "XYZ")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(ref key, _) if key == "GAMECART_CURRENCY"
        ));
    }

    #[test]
    fn test_invalid_bool() {
        let err = StorefrontConfig::from_lookup(lookup(&[(
            "GAMECART_NOTIFY_CART_REMOVAL",
            "sometimes",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("expected a boolean"));
    }

    #[test]
    fn test_invalid_move_conflict() {
        assert!("drop-both".parse::<MoveConflict>().is_err());
        assert_eq!(
            "keep-source".parse::<MoveConflict>().unwrap(),
            MoveConflict::KeepSource
        );
    }
}
