//! Order summary aggregates computed from the cart.
//!
//! Nothing here is stored: the summary is recomputed from the cart entries
//! whenever it is needed.

use rust_decimal::Decimal;
use serde::Serialize;

use super::cart::CartEntry;
use super::price::{CurrencyCode, Price};

/// Totals shown next to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Sum of current prices.
    pub subtotal: Decimal,
    /// Sum of `originalPrice - currentPrice` over entries with an original price.
    pub discount: Decimal,
    /// Number of entries in the cart.
    pub item_count: usize,
}

impl OrderSummary {
    /// Compute totals for a list of cart entries.
    ///
    /// Sums saturate at the bounds of `Decimal`.
    #[must_use]
    pub fn from_entries(entries: &[CartEntry]) -> Self {
        let subtotal = entries
            .iter()
            .map(|entry| entry.current_price)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let discount = entries
            .iter()
            .filter_map(CartEntry::savings)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Self {
            subtotal,
            discount,
            item_count: entries.len(),
        }
    }

    /// Pre-discount total, shown as "Price".
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.subtotal.saturating_add(self.discount)
    }

    /// Whether the "Sale Discount" line should be shown.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount > Decimal::ZERO
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Summary amounts paired with a display currency.
    #[must_use]
    pub fn priced(&self, currency: CurrencyCode) -> PricedSummary {
        PricedSummary {
            price: Price::new(self.price(), currency),
            discount: Price::new(self.discount, currency),
            subtotal: Price::new(self.subtotal, currency),
        }
    }
}

/// Display-ready summary amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedSummary {
    pub price: Price,
    pub discount: Price,
    pub subtotal: Price,
}
