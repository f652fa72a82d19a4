//! A playing-card deck primitive with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that is built full and ordered, can be
//! shuffled in place, and deals [`Hand`]s by removing cards from its front.
//! Asking for more cards than remain deals what is left rather than failing;
//! use [`Deck::try_deal_hand`] when a short deal should be an error.
//!
//! # Example
//!
//! ```
//! use decksim::Deck;
//!
//! let mut deck = Deck::new();
//! deck.shuffle();
//!
//! let first = deck.deal_hand(50);
//! let second = deck.deal_hand(10);
//! assert_eq!(first.len(), 50);
//! assert_eq!(second.len(), 2);
//! assert!(deck.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod rng;

// Re-export main types
pub use card::{Card, DECK_SIZE, NUM_RANKS, NUM_SUITS, Rank, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use hand::Hand;
