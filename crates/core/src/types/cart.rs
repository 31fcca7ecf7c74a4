//! Cart line items and their derivation from catalog records.
//!
//! A [`CartEntry`] is computed once, when the game is added to the cart. The
//! derived fields (`type`, `discount`, `rewards`, ...) are stored alongside
//! the original record fields and persisted as-is.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};

use super::game::GameRecord;
use super::id::GameId;

/// Label used when a game has no genre.
pub const BASE_GAME_TYPE: &str = "Base Game";

/// Ratings at or above this value earn the boosted rewards offer.
pub const REWARD_RATING_THRESHOLD: f64 = 4.8;

/// Rewards offer attached to highly rated games.
pub const REWARDS_MESSAGE: &str = "Earn a boosted 20% back in Epic Rewards!";

/// A game in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: GameId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Display category: the genre, or [`BASE_GAME_TYPE`].
    #[serde(rename = "type")]
    pub kind: String,
    pub current_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Whole-percent discount off the original price.
    #[serde(default, deserialize_with = "clamped_percent")]
    pub discount: u32,
    pub self_refundable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards: Option<String>,
}

impl CartEntry {
    /// Derive a cart entry from a catalog record.
    #[must_use]
    pub fn from_game(game: &GameRecord) -> Self {
        let kind = game
            .genre
            .as_deref()
            .filter(|genre| !genre.is_empty())
            .unwrap_or(BASE_GAME_TYPE)
            .to_string();

        let rewards = game
            .rating
            .filter(|rating| *rating >= REWARD_RATING_THRESHOLD)
            .map(|_| REWARDS_MESSAGE.to_string());

        Self {
            id: game.id.clone(),
            title: game.title.clone(),
            image: game.image.clone(),
            genre: game.genre.clone(),
            price: game.price,
            rating: game.rating,
            kind,
            current_price: game.price,
            original_price: game.original_price,
            discount: discount_percent(game.price, game.original_price),
            self_refundable: true,
            rewards,
        }
    }

    /// Savings against the original price, if one is known.
    #[must_use]
    pub fn savings(&self) -> Option<Decimal> {
        self.original_price
            .and_then(|original| original.checked_sub(self.current_price))
    }

    /// Rebuild the catalog-shaped record for the wishlist.
    ///
    /// `type` becomes `genre` and `currentPrice` becomes `price`. The
    /// original price and all cart-only fields are not carried over.
    #[must_use]
    pub fn to_game_record(&self) -> GameRecord {
        GameRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            image: self.image.clone(),
            genre: Some(self.kind.clone()),
            price: self.current_price,
            original_price: None,
            rating: self.rating,
        }
    }
}

/// Whole-percent discount, half rounding up, never negative.
///
/// Returns 0 when there is no positive original price, or when the
/// percentage does not fit in a `Decimal`.
#[must_use]
pub fn discount_percent(current: Decimal, original: Option<Decimal>) -> u32 {
    let Some(original) = original.filter(|o| o.is_sign_positive() && !o.is_zero()) else {
        return 0;
    };

    let Some(percent) = original
        .checked_sub(current)
        .and_then(|saved| saved.checked_div(original))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    else {
        return 0;
    };

    let percent = percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if percent.is_sign_negative() {
        0
    } else {
        percent.to_u32().unwrap_or(0)
    }
}

/// Read a stored discount, clamping negative or missing values to 0.
///
/// Older records can hold a negative percentage when the original price was
/// below the current one.
fn clamped_percent<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
    Ok(u32::try_from(raw.max(0)).unwrap_or(u32::MAX))
}
