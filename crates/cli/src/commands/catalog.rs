//! List the catalog.

use gamecart_core::Price;
use tracing::info;

use crate::session::Session;

/// Log every catalog game with its price and collection membership.
pub fn list(session: &Session) {
    info!("Catalog ({} games)", session.catalog.games.len());
    for game in &session.catalog.games {
        let price = Price::new(game.price, session.currency);
        let in_cart = session.store.is_in_cart(&game.id);
        let in_wishlist = session.store.is_in_wishlist(&game.id);
        info!(
            id = %game.id,
            genre = game.genre.as_deref().unwrap_or("-"),
            in_cart,
            in_wishlist,
            "  {} - {price}",
            game.title
        );
    }
}
