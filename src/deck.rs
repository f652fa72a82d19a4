//! The deck: construction, shuffling and dealing.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;
use crate::rng;

/// An ordered pile of the cards still available to deal.
///
/// A fresh deck holds every rank and suit combination exactly once. Cards
/// only ever leave the deck, from the front, through [`Deck::deal_hand`] or
/// [`Deck::try_deal_hand`]; shuffling reorders without changing membership.
///
/// ```
/// use decksim::Deck;
///
/// let mut deck = Deck::new();
/// deck.shuffle();
///
/// let hand = deck.deal_hand(5);
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.len(), 47);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards remaining, front first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, ordered deck.
    ///
    /// Cards are laid out rank-major: all four suits of the Ace, then all
    /// four suits of the Two, and so on up to the King.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Shuffles the deck in place using the process-wide random source.
    ///
    /// See [`crate::rng`] for how that source is seeded.
    pub fn shuffle(&mut self) {
        rng::with_source(|rng| self.shuffle_with(rng));
    }

    /// Shuffles the deck in place using the given random source.
    ///
    /// Runs a Fisher-Yates pass: every position from the last down to the
    /// second is swapped with a uniformly chosen position at or before it,
    /// so each ordering is equally likely.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a hand of `size` cards from the front of the deck.
    ///
    /// If fewer than `size` cards remain, every remaining card is dealt and a
    /// warning is logged; this is not an error. Dealing from an exhausted deck
    /// returns an empty hand.
    ///
    /// ```
    /// use decksim::Deck;
    ///
    /// let mut deck = Deck::new();
    /// assert_eq!(deck.deal_hand(50).len(), 50);
    /// assert_eq!(deck.deal_hand(10).len(), 2);
    /// assert!(deck.is_empty());
    /// ```
    pub fn deal_hand(&mut self, size: usize) -> Hand {
        let available = self.cards.len();
        if size > available {
            tracing::warn!(
                requested = size,
                available,
                "not enough cards in the deck, dealing {available} cards instead"
            );
        }

        self.take_front(size.min(available))
    }

    /// Deals a hand of exactly `size` cards from the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `size` cards
    /// remain. The deck is left untouched in that case.
    pub fn try_deal_hand(&mut self, size: usize) -> Result<Hand, DealError> {
        let available = self.cards.len();
        if size > available {
            return Err(DealError::NotEnoughCards {
                requested: size,
                available,
            });
        }

        Ok(self.take_front(size))
    }

    fn take_front(&mut self, size: usize) -> Hand {
        let cards: Vec<Card> = self.cards.drain(..size).collect();
        tracing::debug!(dealt = size, remaining = self.cards.len(), "dealt hand");
        Hand::from(cards)
    }

    /// Writes a report of the deck: its size, then every remaining card on
    /// its own line, front first.
    ///
    /// # Errors
    ///
    /// Returns an error only if `out` fails to accept the text.
    pub fn report<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "There are {} cards in the deck.", self.cards.len())?;
        for card in &self.cards {
            writeln!(out, "{card}")?;
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Same text as [`Deck::report`].
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report(f)
    }
}
