//! Order summary and checkout commands.

use gamecart_core::OrderSummary;
use tracing::info;

use crate::session::Session;

/// Log the order summary for the current cart.
pub fn summary(session: &Session) -> OrderSummary {
    let summary = session.store.summary();
    let priced = summary.priced(session.currency);

    info!("Games and Apps Summary");
    info!("  Price          {}", priced.price);
    if summary.has_discount() {
        info!("  Sale Discount  -{}", priced.discount);
    }
    info!("  Taxes          Calculated at Checkout");
    info!("  Subtotal       {}", priced.subtotal);
    summary
}

/// Run the checkout stub.
pub fn checkout(session: &Session) -> OrderSummary {
    session.store.checkout()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gamecart_core::{GameId, Notice};
    use rust_decimal::Decimal;

    use super::*;
    use crate::commands::{cart, test_support::session};

    #[test]
    fn test_summary_totals() {
        let t = session();
        cart::add(&t.session, &GameId::new("neon")).unwrap();
        cart::add(&t.session, &GameId::new("valor")).unwrap();

        let totals = summary(&t.session);
        assert_eq!(totals.subtotal, Decimal::new(140, 0));
        assert_eq!(totals.discount, Decimal::new(10, 0));
        assert_eq!(totals.price(), Decimal::new(150, 0));
    }

    #[test]
    fn test_checkout_leaves_cart() {
        let t = session();
        cart::add(&t.session, &GameId::new("valor")).unwrap();
        checkout(&t.session);
        assert_eq!(t.session.store.counts(), (1, 0));
        assert_eq!(t.sink.last(), Some(Notice::info("Proceeding to checkout...")));
    }

    #[test]
    fn test_state_survives_new_session() {
        let t = session();
        cart::add(&t.session, &GameId::new("valor")).unwrap();

        let reopened = crate::session::Session::with_sink(
            &t.config,
            t.session.catalog.clone(),
            t.sink.clone(),
        );
        assert!(reopened.store.is_in_cart(&GameId::new("valor")));
    }
}
