//! Wishlist commands.

use gamecart_core::{GameId, Price};
use gamecart_storefront::Outcome;
use tracing::info;

use crate::error::CliError;
use crate::session::Session;

/// Add a catalog game to the wishlist.
///
/// # Errors
///
/// Returns `CliError::UnknownGame` if the id is not in the catalog.
pub fn add(session: &Session, id: &GameId) -> Result<Outcome, CliError> {
    let game = session.game(id)?;
    Ok(session.store.add_to_wishlist(game))
}

/// Remove a game from the wishlist. Unknown ids are ignored.
pub fn remove(session: &Session, id: &GameId) -> Outcome {
    session.store.remove_from_wishlist(id)
}

/// Move a game from the wishlist to the cart.
pub fn move_to_cart(session: &Session, id: &GameId) -> Outcome {
    session.store.move_to_cart_from_wishlist(id)
}

/// Log the wishlist contents.
pub fn list(session: &Session) {
    session.store.read(|store| {
        info!("Wishlist ({} items)", store.wishlist_count());
        for game in store.wishlist() {
            let price = Price::new(game.price, session.currency);
            let rating = game.rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
            info!(id = %game.id, rating = %rating, "  {} - {price}", game.title);
        }
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gamecart_core::Notice;

    use super::*;
    use crate::commands::test_support::session;

    #[test]
    fn test_add_twice_reports_duplicate() {
        let t = session();
        assert_eq!(add(&t.session, &GameId::new("valor")).unwrap(), Outcome::Added);
        assert_eq!(
            add(&t.session, &GameId::new("valor")).unwrap(),
            Outcome::Duplicate
        );
        assert_eq!(
            t.sink.last(),
            Some(Notice::error("Valor is already in your wishlist!"))
        );
        list(&t.session);
    }

    #[test]
    fn test_move_to_cart() {
        let t = session();
        add(&t.session, &GameId::new("neon")).unwrap();
        assert_eq!(move_to_cart(&t.session, &GameId::new("neon")), Outcome::Moved);
        assert!(t.session.store.is_in_cart(&GameId::new("neon")));
        assert_eq!(remove(&t.session, &GameId::new("neon")), Outcome::NotFound);
    }
}
