//! Card types and name tables.

use core::fmt;

use rand::Rng;

use crate::rng;

/// Number of ranks per suit.
pub const NUM_RANKS: usize = 13;

/// Number of suits per deck.
pub const NUM_SUITS: usize = 4;

/// Number of cards per deck.
pub const DECK_SIZE: usize = NUM_RANKS * NUM_SUITS;

const RANK_NAMES: [&str; NUM_RANKS] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

const SUIT_NAMES: [&str; NUM_SUITS] = ["Spades", "Hearts", "Diamonds", "Clubs"];

/// Card rank, in canonical order from Ace to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical order.
    pub const ALL: [Self; NUM_RANKS] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the position of this rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank at `index` in canonical order, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_RANKS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the display name, e.g. `"Queen"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        RANK_NAMES[self.index()]
    }
}

/// Card suit, in canonical order Spades, Hearts, Diamonds, Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; NUM_SUITS] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the position of this suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the suit at `index` in canonical order, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SUITS {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the display name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self.index()]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards are plain values: once built, their rank and suit never change.
/// The [`Display`](fmt::Display) form reads `"<rank> of <suit>"`.
///
/// ```
/// use decksim::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Hearts);
/// assert_eq!(card.to_string(), "Queen of Hearts");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Draws a card using the process-wide random source.
    ///
    /// Rank and suit are drawn independently, so two calls may return the
    /// same card. This never touches any [`Deck`](crate::Deck).
    #[must_use]
    pub fn random() -> Self {
        rng::with_source(Self::random_with)
    }

    /// Draws a card using the given random source.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rank = rng.random_range(0..NUM_RANKS);
        let suit = rng.random_range(0..NUM_SUITS);
        Self::new(Rank::ALL[rank], Suit::ALL[suit])
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
