//! Blackjack hands.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// A hand of cards with its wager and lifecycle flags.
///
/// The hand never changes its own flags: `done` and `resolved` are set by
/// whoever acts on the hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Wager, `None` until a bet is placed.
    bet: Option<usize>,
    /// No further player actions are permitted.
    done: bool,
    /// The wager has been paid out (or lost) and must not be touched again.
    resolved: bool,
    /// Whether this hand was created by splitting a pair.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand with no bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            bet: None,
            done: false,
            resolved: false,
            from_split: false,
        }
    }

    /// Creates a hand split off another one, holding `card` and the same bet.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            bet: Some(bet),
            done: false,
            resolved: false,
            from_split: true,
        }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of hard values: every ace counts 1.
    #[must_use]
    pub fn hard_total(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.hard_value())).sum()
    }

    /// Sum with the first ace counted as 11 and any further aces as 1.
    #[must_use]
    pub fn soft_total(&self) -> u32 {
        let mut ace_found = false;
        self.cards
            .iter()
            .map(|card| {
                if card.is_ace() && !ace_found {
                    ace_found = true;
                    u32::from(card.soft_value())
                } else {
                    u32::from(card.hard_value())
                }
            })
            .sum()
    }

    /// The best total: the soft total unless it busts, then the hard total.
    ///
    /// ```
    /// use bjtable::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add(Card::new(1, Suit::Hearts).unwrap());
    /// hand.add(Card::new(7, Suit::Clubs).unwrap());
    /// assert_eq!(hand.score(), 18);
    ///
    /// hand.add(Card::new(9, Suit::Spades).unwrap());
    /// assert_eq!(hand.score(), 17);
    /// ```
    #[must_use]
    pub fn score(&self) -> u32 {
        let soft = self.soft_total();
        if soft <= u32::from(BLACKJACK) {
            soft
        } else {
            self.hard_total()
        }
    }

    /// Two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == u32::from(BLACKJACK)
    }

    /// Over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > u32::from(BLACKJACK)
    }

    /// Two cards of equal rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank() == self.cards[1].rank()
    }

    /// Returns the bet, if one has been placed.
    #[must_use]
    pub const fn bet(&self) -> Option<usize> {
        self.bet
    }

    /// Returns the bet, or zero if none has been placed.
    #[must_use]
    pub fn wager(&self) -> usize {
        self.bet.unwrap_or(0)
    }

    /// Records the bet. Returns `false` if the hand is already resolved.
    pub const fn place_bet(&mut self, amount: usize) -> bool {
        if self.resolved {
            return false;
        }
        self.bet = Some(amount);
        true
    }

    /// Doubles the bet. Returns `false` if the hand is already resolved.
    pub const fn double_bet(&mut self) -> bool {
        if self.resolved {
            return false;
        }
        if let Some(bet) = self.bet {
            self.bet = Some(bet * 2);
        }
        true
    }

    /// Returns whether the hand accepts no further actions.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Closes the hand to further actions.
    pub const fn mark_done(&mut self) {
        self.done = true;
    }

    /// Returns whether the wager has been settled.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Settles the hand, closing it and handing back the wager.
    ///
    /// Only the first call returns `Some`; a resolved hand yields `None`
    /// so that no wager can be paid twice.
    pub fn resolve(&mut self) -> Option<usize> {
        if self.resolved {
            return None;
        }
        self.resolved = true;
        self.done = true;
        Some(self.wager())
    }

    /// Returns whether this hand was created by a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }
}

/// Formats the cards space-separated, without the score.
pub(crate) struct CardList<'a>(pub(crate) &'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", CardList(&self.cards), self.score())
    }
}
