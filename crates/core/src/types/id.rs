//! Newtype ID for type-safe game references.
//!
//! Catalog feeds hand out either numeric or string identifiers, so
//! [`GameId`] accepts both on input and always serializes as a string.

use serde::{Deserialize, Serialize};

/// Stable identifier of a game in the catalog.
///
/// A `GameId` may be blank: records coming from an external catalog are not
/// validated on construction, and the store treats blank ids as "no target".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawGameId", into = "String")]
pub struct GameId(String);

impl GameId {
    /// Create a new ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the id is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl ::core::fmt::Display for GameId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        id.0
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wire form of a game id before normalization.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawGameId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawGameId> for GameId {
    fn from(raw: RawGameId) -> Self {
        match raw {
            RawGameId::Text(s) => Self(s),
            RawGameId::Signed(n) => Self(n.to_string()),
            RawGameId::Unsigned(n) => Self(n.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(GameId::new("").is_blank());
        assert!(GameId::new("   ").is_blank());
        assert!(!GameId::new("g1").is_blank());
    }

    #[test]
    fn test_deserialize_numeric_id() {
        let id: GameId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");

        let id: GameId = serde_json::from_str("\"valorant\"").unwrap();
        assert_eq!(id, GameId::from("valorant"));
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&GameId::from(7_u64)).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(GameId::new("g1").to_string(), "g1");
    }
}
