//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

/// Every suit, in deck-building order.
pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

const SUIT_NAMES: [&str; 4] = ["clubs", "diamonds", "hearts", "spades"];

const RANK_NAMES: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K",
];

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Lowest valid rank (ace).
pub const ACE: u8 = 1;

/// Highest valid rank (king).
pub const KING: u8 = 13;

/// Returns the 52 cards of one deck, suit by suit, ace to king.
pub fn deck() -> impl Iterator<Item = Card> {
    SUITS
        .into_iter()
        .flat_map(|suit| (ACE..=KING).map(move |rank| Card { suit, rank }))
}

impl Suit {
    /// Returns the lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }

    /// Returns the single-letter abbreviation used when displaying cards.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(initial: char) -> Result<Self, Self::Error> {
        SUITS
            .into_iter()
            .find(|suit| suit.initial() == initial)
            .ok_or(CardError::InvalidSuit(initial))
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Parses a full suit name (`"hearts"`) or its initial (`"h"`).
    ///
    /// An unknown name is reported by its first character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(suit) = SUITS.into_iter().find(|suit| suit.name() == s) {
            return Ok(suit);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(initial), None) => Self::try_from(initial),
            (Some(first), Some(_)) => Err(CardError::InvalidSuit(first)),
            (None, _) => Err(CardError::EmptySuit),
        }
    }
}

/// A playing card.
///
/// Ranks run from 1 (ace) to 13 (king). Face cards and aces need no special
/// types: [`Card::hard_value`] and [`Card::soft_value`] already encode how a
/// rank counts toward a blackjack total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Card, Suit};
    ///
    /// let card = Card::new(1, Suit::Spades).unwrap();
    /// assert_eq!(card.soft_value(), 11);
    /// assert!(Card::new(14, Suit::Spades).is_err());
    /// ```
    pub const fn new(rank: u8, suit: Suit) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Value with aces counted as 1.
    #[must_use]
    pub const fn hard_value(&self) -> u8 {
        match self.rank {
            11..=13 => 10,
            rank => rank,
        }
    }

    /// Value with aces counted as 11.
    #[must_use]
    pub const fn soft_value(&self) -> u8 {
        match self.rank {
            ACE => 11,
            _ => self.hard_value(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            RANK_NAMES[(self.rank - 1) as usize],
            self.suit.initial()
        )
    }
}
