//! Cart commands.

use gamecart_core::{GameId, Price};
use gamecart_storefront::Outcome;
use tracing::info;

use crate::error::CliError;
use crate::session::Session;

/// Add a catalog game to the cart.
///
/// # Errors
///
/// Returns `CliError::UnknownGame` if the id is not in the catalog.
pub fn add(session: &Session, id: &GameId) -> Result<Outcome, CliError> {
    let game = session.game(id)?;
    Ok(session.store.add_to_cart(game))
}

/// Remove a game from the cart. Unknown ids are ignored.
pub fn remove(session: &Session, id: &GameId) -> Outcome {
    session.store.remove_from_cart(id)
}

/// Move a game from the cart to the wishlist.
pub fn move_to_wishlist(session: &Session, id: &GameId) -> Outcome {
    session.store.move_to_wishlist_from_cart(id)
}

/// Log the cart contents.
pub fn list(session: &Session) {
    session.store.read(|store| {
        info!("Cart ({} items)", store.cart_count());
        for entry in store.cart() {
            let price = Price::new(entry.current_price, session.currency);
            info!(
                id = %entry.id,
                kind = %entry.kind,
                discount = entry.discount,
                rewards = entry.rewards.as_deref().unwrap_or("-"),
                "  {} - {price}",
                entry.title
            );
        }
    });
}
