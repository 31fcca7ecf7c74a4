//! Catalog game records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::GameId;

/// A game as supplied by the catalog.
///
/// Records are immutable once added to a collection. Field names follow the
/// persisted camelCase layout (`originalPrice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: GameId,
    #[serde(default)]
    pub title: String,
    /// Cover image URI.
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Average rating on a 0-5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Wishlist entries are game records kept exactly as added.
pub type WishlistEntry = GameRecord;

impl GameRecord {
    /// Create a record with the required fields; optional fields start empty.
    #[must_use]
    pub fn new(id: impl Into<GameId>, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: String::new(),
            genre: None,
            price,
            original_price: None,
            rating: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub const fn with_original_price(mut self, original_price: Decimal) -> Self {
        self.original_price = Some(original_price);
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_shape() {
        let json = r#"{
            "id": 3,
            "title": "Neon Drift",
            "image": "/img/neon.webp",
            "genre": "Racing",
            "price": 40,
            "originalPrice": 50,
            "rating": 4.6
        }"#;
        let game: GameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, GameId::new("3"));
        assert_eq!(game.genre.as_deref(), Some("Racing"));
        assert_eq!(game.price, Decimal::new(40, 0));
        assert_eq!(game.original_price, Some(Decimal::new(50, 0)));
        assert_eq!(game.rating, Some(4.6));
    }

    #[test]
    fn test_optional_fields_omitted() {
        let game = GameRecord::new("g1", "Solo", Decimal::new(10, 0));
        let value = serde_json::to_value(&game).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("genre"));
        assert!(!object.contains_key("originalPrice"));
        assert!(!object.contains_key("rating"));
    }
}
