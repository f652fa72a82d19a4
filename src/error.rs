//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur during a strict deal.
///
/// Only [`Deck::try_deal_hand`](crate::Deck::try_deal_hand) produces this;
/// [`Deck::deal_hand`](crate::Deck::deal_hand) clamps instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck: requested {requested}, {available} available")]
    NotEnoughCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
}
