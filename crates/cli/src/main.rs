//! GameCart CLI - Drive the cart and wishlist from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! gc-cli catalog
//!
//! # Add a game to the cart, then look at the cart
//! gc-cli cart add neon-drift
//! gc-cli cart list
//!
//! # Move a game from the wishlist to the cart
//! gc-cli wishlist move-to-cart valor
//!
//! # Show totals and run the checkout stub
//! gc-cli summary
//! gc-cli checkout
//! ```
//!
//! # Commands
//!
//! - `catalog` - List catalog games
//! - `cart` - List, add, remove, move to wishlist
//! - `wishlist` - List, add, remove, move to cart
//! - `summary` - Order summary for the cart
//! - `checkout` - Checkout stub
//!
//! Configuration is read from the environment (and `.env`); see
//! [`gamecart_storefront::config`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use gamecart_core::GameId;
use gamecart_storefront::StorefrontConfig;
use tracing_subscriber::EnvFilter;

mod catalog;
mod commands;
mod error;
mod session;

use error::CliError;
use session::Session;

#[derive(Parser)]
#[command(name = "gc-cli")]
#[command(author, version, about = "GameCart cart and wishlist tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog games
    Catalog,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show the order summary
    Summary,
    /// Proceed to checkout
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// List cart entries
    List,
    /// Add a catalog game to the cart
    Add {
        /// Catalog game id
        id: String,
    },
    /// Remove a game from the cart
    Remove {
        /// Game id
        id: String,
    },
    /// Move a game from the cart to the wishlist
    MoveToWishlist {
        /// Game id
        id: String,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// List wishlist entries
    List,
    /// Add a catalog game to the wishlist
    Add {
        /// Catalog game id
        id: String,
    },
    /// Remove a game from the wishlist
    Remove {
        /// Game id
        id: String,
    },
    /// Move a game from the wishlist to the cart
    MoveToCart {
        /// Game id
        id: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = StorefrontConfig::from_env()?;
    let session = Session::open(&config)?;

    match cli.command {
        Commands::Catalog => commands::catalog::list(&session),
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list(&session),
            CartAction::Add { id } => {
                commands::cart::add(&session, &GameId::new(id))?;
            }
            CartAction::Remove { id } => {
                commands::cart::remove(&session, &GameId::new(id));
            }
            CartAction::MoveToWishlist { id } => {
                commands::cart::move_to_wishlist(&session, &GameId::new(id));
            }
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::wishlist::list(&session),
            WishlistAction::Add { id } => {
                commands::wishlist::add(&session, &GameId::new(id))?;
            }
            WishlistAction::Remove { id } => {
                commands::wishlist::remove(&session, &GameId::new(id));
            }
            WishlistAction::MoveToCart { id } => {
                commands::wishlist::move_to_cart(&session, &GameId::new(id));
            }
        },
        Commands::Summary => {
            commands::checkout::summary(&session);
        }
        Commands::Checkout => {
            commands::checkout::checkout(&session);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_cart_add() {
        let cli = Cli::try_parse_from(["gc-cli", "cart", "add", "neon"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Cart {
                action: CartAction::Add { ref id }
            }) if id == "neon"
        ));
    }

    #[test]
    fn test_parse_move_to_cart() {
        let cli = Cli::try_parse_from(["gc-cli", "wishlist", "move-to-cart", "valor"]);
        assert!(cli.is_ok());
    }
}
